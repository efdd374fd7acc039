use std::sync::Arc;

use apipilot_proto::envelope::Envelope;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::{AppError, Result};
use crate::http::HttpClient;
use crate::notify::{LogNotifier, Notifier};

/// Base API client. Each resource module adds its endpoints in its own `impl` block.
#[derive(Clone)]
pub struct ApiClient {
    http: HttpClient,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Self {
        Self::with_notifier(config, Arc::new(LogNotifier))
    }

    pub fn with_notifier(config: ClientConfig, notifier: Arc<dyn Notifier>) -> Self {
        Self::from_http(HttpClient::with_notifier(config, notifier))
    }

    pub fn from_http(http: HttpClient) -> Self {
        Self { http }
    }

    pub fn http(&self) -> &HttpClient {
        &self.http
    }
}

/// Unwrapping rules for `data` shared by the resource modules.
trait EnvelopeExt<T> {
    /// Single-object endpoints: a success without data is an error.
    fn required(self) -> Result<T>;
    /// Collection endpoints: a success without data is an empty collection.
    fn or_default(self) -> T
    where
        T: Default;
}

impl<T> EnvelopeExt<T> for Envelope<T> {
    fn required(self) -> Result<T> {
        self.data.ok_or(AppError::EmptyData)
    }

    fn or_default(self) -> T
    where
        T: Default,
    {
        self.data.unwrap_or_default()
    }
}

/// Endpoints whose answer carries no useful data (deletes, removals).
fn discard(_envelope: Envelope<Value>) {}

mod case;
mod execution;
mod project;
mod schedule;
mod stats;
mod suite;

pub use stats::{DEFAULT_SUITE_HISTORY_LIMIT, DEFAULT_TREND_DAYS};
