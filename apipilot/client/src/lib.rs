pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod interceptor;
pub mod notify;
pub mod routes;
pub mod store;
pub mod transport;

pub use api::ApiClient;
pub use config::ClientConfig;
pub use error::{AppError, Result};
pub use store::{ProjectState, ProjectStore};

pub mod prelude {
    pub use crate::api::ApiClient;
    pub use crate::config::ClientConfig;
    pub use crate::error::{AppError, Result, TransportError};
    pub use crate::http::HttpClient;
    pub use crate::interceptor::{EnvelopeInterceptor, Interceptor};
    pub use crate::notify::{LogNotifier, Notifier};
    pub use crate::routes::{RouteMeta, View};
    pub use crate::store::{ProjectState, ProjectStore};
    pub use crate::transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport};

    pub use apipilot_proto::prelude::*;
}
