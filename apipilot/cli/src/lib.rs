pub mod cli;
pub mod table;

use anyhow::Result;
use apipilot_client::interceptor::transport_message;
use apipilot_client::AppError;
use clap::Parser;
use env_logger::Env;
use tokio::time::timeout;

const ENV_APIPILOT_LOGLEVEL: &str = "APIPILOT_LOGLEVEL";

/// Main entry point for the CLI
pub async fn cli_main(args: Vec<String>) -> Result<()> {
    let _ = env_logger::try_init_from_env(Env::new().filter(ENV_APIPILOT_LOGLEVEL));

    let cli = cli::Cli::parse_from(args);
    let config = cli.config()?;

    if cli.should_timeout() {
        match timeout(cli::Cli::command_timeout(&config), cli.run(config)).await {
            Ok(result) => result,
            Err(_) => Err(anyhow::anyhow!("Cli Command Timeout reached")),
        }
    } else {
        cli.run(config).await
    }
}

/// Text shown to the terminal user for a failed command.
///
/// Transport failures go through the same message table the browser toasts use,
/// business failures show the server's message.
pub fn error_message(err: &anyhow::Error) -> String {
    log::debug!("command failed: {err:?}");
    match err.downcast_ref::<AppError>() {
        Some(AppError::Transport(transport)) => transport_message(transport),
        Some(app) => app.to_string(),
        None => format!("{err:#}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use apipilot_client::error::TransportError;
    use serde_json::json;

    fn message_of(err: impl Into<anyhow::Error>) -> String {
        error_message(&err.into())
    }

    #[test]
    fn test_transport_errors_use_message_table() {
        let not_found = TransportError::http(404, Some(json!({"message": "项目不存在"})));
        assert_eq!(message_of(AppError::Transport(not_found)), "项目不存在");

        let forbidden = TransportError::http(403, None);
        assert_eq!(message_of(AppError::Transport(forbidden)), "拒绝访问");

        let timeout = TransportError::network("timeout: operation timed out");
        assert_eq!(message_of(AppError::Transport(timeout)), "请求超时");

        let refused = TransportError::network("connection refused");
        assert_eq!(message_of(AppError::Transport(refused)), "网络错误");
    }

    #[test]
    fn test_business_error_shows_server_message() {
        let err = AppError::Business {
            code: 40002,
            message: "资源已存在".to_string(),
        };
        assert_eq!(message_of(err), "资源已存在");
    }

    #[test]
    fn test_other_errors_keep_their_text() {
        let err = anyhow::anyhow!("Cli Command Timeout reached");
        assert_eq!(error_message(&err), "Cli Command Timeout reached");
    }
}
