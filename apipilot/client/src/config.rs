use std::env;
use std::time::Duration;

use thiserror::Error;

pub const ENV_APIPILOT_BASE_URL: &str = "APIPILOT_BASE_URL";
pub const ENV_APIPILOT_TIMEOUT_MS: &str = "APIPILOT_TIMEOUT_MS";
pub const ENV_APIPILOT_TOKEN: &str = "APIPILOT_TOKEN";

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_BASE_PATH: &str = "/api/v1";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(30_000);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

/// Where and how the client talks to the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Scheme and authority, e.g. `http://127.0.0.1:8000`. In the browser this is the page origin.
    pub base_url: String,
    /// Prefix every endpoint path is mounted under.
    pub base_path: String,
    /// Client-wide timeout applied to every request.
    pub timeout: Duration,
    /// Bearer token attached by the request stage when present.
    pub token: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            base_path: DEFAULT_BASE_PATH.to_string(),
            timeout: DEFAULT_TIMEOUT,
            token: None,
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        ClientConfig {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into()).filter(|t: &String| !t.is_empty());
        self
    }

    /// Build a config from `APIPILOT_*` environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ClientConfig::default();

        if let Some(url) = lookup(ENV_APIPILOT_BASE_URL).filter(|v| !v.is_empty()) {
            config.base_url = url;
        }

        if let Some(raw) = lookup(ENV_APIPILOT_TIMEOUT_MS) {
            let ms = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|ms| *ms > 0)
                .ok_or(ConfigError::InvalidValue {
                    key: ENV_APIPILOT_TIMEOUT_MS,
                    value: raw.clone(),
                })?;
            config.timeout = Duration::from_millis(ms);
        }

        if let Some(token) = lookup(ENV_APIPILOT_TOKEN) {
            config = config.with_token(token);
        }

        log::debug!(
            "client config: base_url={} base_path={} timeout={:?} token={}",
            config.base_url,
            config.base_path,
            config.timeout,
            config.token.is_some()
        );
        Ok(config)
    }

    /// Absolute URL of `path` under the API prefix.
    pub fn endpoint(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let prefix = self.base_path.trim_matches('/');
        let path = path.trim_start_matches('/');
        match (prefix.is_empty(), path.is_empty()) {
            (true, true) => base.to_string(),
            (true, false) => format!("{base}/{path}"),
            (false, true) => format!("{base}/{prefix}"),
            (false, false) => format!("{base}/{prefix}/{path}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.base_path, "/api/v1");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.token, None);
    }

    #[test]
    fn test_from_env_values() {
        let config = ClientConfig::from_lookup(lookup(&[
            (ENV_APIPILOT_BASE_URL, "https://pilot.example.com"),
            (ENV_APIPILOT_TIMEOUT_MS, "5000"),
            (ENV_APIPILOT_TOKEN, "abc"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "https://pilot.example.com");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.token.as_deref(), Some("abc"));
    }

    #[test]
    fn test_invalid_timeout() {
        let err = ClientConfig::from_lookup(lookup(&[(ENV_APIPILOT_TIMEOUT_MS, "soon")]))
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                key: ENV_APIPILOT_TIMEOUT_MS,
                value: "soon".to_string()
            }
        );
        assert!(ClientConfig::from_lookup(lookup(&[(ENV_APIPILOT_TIMEOUT_MS, "0")])).is_err());
    }

    #[test]
    fn test_empty_token_ignored() {
        let config = ClientConfig::default().with_token("");
        assert_eq!(config.token, None);
    }

    #[test]
    fn test_endpoint_joining() {
        let config = ClientConfig::new("http://localhost:8000/");
        assert_eq!(config.endpoint("/projects"), "http://localhost:8000/api/v1/projects");
        assert_eq!(config.endpoint("projects/1"), "http://localhost:8000/api/v1/projects/1");

        let bare = ClientConfig {
            base_path: String::new(),
            ..ClientConfig::new("http://h")
        };
        assert_eq!(bare.endpoint("/x"), "http://h/x");
    }
}
