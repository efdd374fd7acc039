pub mod commands;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use apipilot_client::notify::SilentNotifier;
use apipilot_client::{ApiClient, ClientConfig};
use clap::Parser;
use serde::Serialize;
use tabled::Tabled;

use crate::table;
use commands::Commands;

/// Slack added on top of the request timeout before the whole command is abandoned.
const COMMAND_TIMEOUT_SLACK: Duration = Duration::from_secs(5);

#[derive(Parser, Debug)]
#[command(name = "apipilot", version, about = "Command line client for the ApiPilot API testing platform")]
pub struct Cli {
    /// Backend origin [env: APIPILOT_BASE_URL], the `/api/v1` prefix is appended automatically
    ///
    /// ```bash
    /// apipilot --base-url http://10.0.0.5:8000 project list
    /// ```
    #[arg(long)]
    base_url: Option<String>,

    /// Request timeout in milliseconds [env: APIPILOT_TIMEOUT_MS, default: 30000]
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    timeout_ms: Option<u64>,

    /// Bearer token sent as `Authorization` header [env: APIPILOT_TOKEN]
    #[arg(long)]
    token: Option<String>,

    /// Print raw JSON instead of tables
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn should_timeout(&self) -> bool {
        self.command.should_timeout()
    }

    pub fn command_timeout(config: &ClientConfig) -> Duration {
        config.timeout + COMMAND_TIMEOUT_SLACK
    }

    /// `APIPILOT_*` environment first, then command line flags on top.
    pub fn config(&self) -> Result<ClientConfig> {
        let config = ClientConfig::from_env()?;
        Ok(self.apply_flags(config))
    }

    fn apply_flags(&self, mut config: ClientConfig) -> ClientConfig {
        if let Some(url) = &self.base_url {
            config.base_url = url.clone();
        }
        if let Some(ms) = self.timeout_ms {
            config = config.with_timeout(Duration::from_millis(ms));
        }
        if let Some(token) = &self.token {
            config = config.with_token(token.as_str());
        }
        config
    }

    pub async fn run(&self, config: ClientConfig) -> Result<()> {
        log::debug!("running {:?}", self.command);
        // 提示文案由 main 通过 error_message 统一打印，避免重复
        let api = ApiClient::with_notifier(config, Arc::new(SilentNotifier));
        self.run_with(&api).await
    }

    pub async fn run_with(&self, api: &ApiClient) -> Result<()> {
        let out = Output { json: self.json };
        self.command.run(api, &out).await
    }
}

/// Renders command results either as tables or as pretty JSON.
pub struct Output {
    json: bool,
}

impl Output {
    /// `value` is printed as JSON, `rows` as a table.
    pub fn list<T, R>(&self, value: &T, rows: impl IntoIterator<Item = R>) -> Result<()>
    where
        T: Serialize + ?Sized,
        R: Tabled,
    {
        if self.json {
            self.json(value)
        } else {
            println!("{}", table::render(rows));
            Ok(())
        }
    }

    pub fn json<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }

    pub fn done(&self, message: &str) {
        if !self.json {
            println!("{message}");
        }
    }
}
