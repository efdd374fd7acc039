use serde_json::Value;
use thiserror::Error;

/// Failure of the HTTP exchange itself.
///
/// `status` and `body` are only set when the server answered; a request that
/// never got a response (connection refused, DNS, timeout) has neither.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct TransportError {
    pub status: Option<u16>,
    pub message: String,
    pub body: Option<Value>,
}

impl TransportError {
    pub fn network(message: impl Into<String>) -> Self {
        TransportError {
            status: None,
            message: message.into(),
            body: None,
        }
    }

    pub fn http(status: u16, body: Option<Value>) -> Self {
        TransportError {
            status: Some(status),
            message: format!("Request failed with status code {status}"),
            body,
        }
    }

    #[inline]
    pub fn has_response(&self) -> bool {
        self.status.is_some()
    }

    /// `message` field of a JSON error body, if the server sent a non-empty one.
    pub fn body_message(&self) -> Option<&str> {
        self.body
            .as_ref()
            .and_then(|b| b.get("message"))
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty())
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        let message = if err.is_timeout() {
            format!("timeout: {err}")
        } else {
            err.to_string()
        };
        TransportError {
            status: err.status().map(|s| s.as_u16()),
            message,
            body: None,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    /// HTTP 200 whose envelope carried a non-zero code.
    #[error("{message}")]
    Business { code: i64, message: String },

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("Request error: {0}")]
    Request(String),

    #[error("JSON parsing error: {0}")]
    Json(String),

    #[error("Response carried no data")]
    EmptyData,
}

impl AppError {
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Transport(e) => e.status,
            _ => None,
        }
    }

    pub fn is_business(&self) -> bool {
        matches!(self, AppError::Business { .. })
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Json(err.to_string())
    }
}

impl From<serde_urlencoded::ser::Error> for AppError {
    fn from(err: serde_urlencoded::ser::Error) -> Self {
        AppError::Request(format!("query encoding: {err}"))
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
