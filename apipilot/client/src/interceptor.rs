//! Request decoration and response normalisation shared by every resource call.
//!
//! The pipeline has three stages:
//!
//! - request: decorate the outgoing [`HttpRequest`] (auth header)
//! - response-success: unwrap the `{code, message, data}` envelope of a 2xx answer
//! - response-error: turn transport failures into a user-facing message
//!
//! Both failure stages notify exactly once and hand the error back to the caller.

use std::sync::Arc;

use apipilot_proto::envelope::Envelope;
use serde_json::Value;

use crate::error::{AppError, Result, TransportError};
use crate::notify::{LogNotifier, Notifier};
use crate::transport::HttpRequest;

pub const MSG_REQUEST_FAILED: &str = "请求失败";
pub const MSG_NETWORK_ERROR: &str = "网络错误";
pub const MSG_TIMEOUT: &str = "请求超时";
pub const MSG_BAD_REQUEST: &str = "请求参数错误";
pub const MSG_UNAUTHORIZED: &str = "未授权，请重新登录";
pub const MSG_FORBIDDEN: &str = "拒绝访问";
pub const MSG_NOT_FOUND: &str = "资源不存在";
pub const MSG_SERVER_ERROR: &str = "服务器内部错误";

pub trait Interceptor: Send + Sync {
    /// Request stage. Errors are returned to the caller as-is.
    fn on_request(&self, request: HttpRequest) -> Result<HttpRequest>;

    /// Response-success stage, given the parsed body of a 2xx answer.
    fn on_response(&self, body: Value) -> Result<Envelope<Value>>;

    /// Response-error stage. Must hand back the original transport error.
    fn on_error(&self, error: TransportError) -> AppError;
}

/// User-facing text for a transport failure.
///
/// Statuses 400, 404 and anything outside the table prefer the `message` of the
/// error body when the server sent one.
pub fn transport_message(error: &TransportError) -> String {
    match error.status {
        Some(400) => error.body_message().unwrap_or(MSG_BAD_REQUEST).to_string(),
        Some(401) => MSG_UNAUTHORIZED.to_string(),
        Some(403) => MSG_FORBIDDEN.to_string(),
        Some(404) => error.body_message().unwrap_or(MSG_NOT_FOUND).to_string(),
        Some(500) => MSG_SERVER_ERROR.to_string(),
        Some(status) => error
            .body_message()
            .map(str::to_string)
            .unwrap_or_else(|| format!("错误: {status}")),
        None if error.message.contains("timeout") => MSG_TIMEOUT.to_string(),
        None => MSG_NETWORK_ERROR.to_string(),
    }
}

/// Default pipeline: optional bearer auth, envelope unwrapping and notification.
#[derive(Clone)]
pub struct EnvelopeInterceptor {
    notifier: Arc<dyn Notifier>,
    token: Option<String>,
}

impl Default for EnvelopeInterceptor {
    fn default() -> Self {
        Self::new(Arc::new(LogNotifier))
    }
}

impl EnvelopeInterceptor {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        EnvelopeInterceptor {
            notifier,
            token: None,
        }
    }

    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }
}

impl Interceptor for EnvelopeInterceptor {
    fn on_request(&self, mut request: HttpRequest) -> Result<HttpRequest> {
        if let Some(token) = &self.token {
            request.set_header("Authorization", format!("Bearer {token}"));
        }
        Ok(request)
    }

    fn on_response(&self, body: Value) -> Result<Envelope<Value>> {
        let envelope = serde_json::from_value::<Envelope<Value>>(body)
            .unwrap_or_else(|_| Envelope::failure(apipilot_proto::envelope::MISSING_CODE, ""));

        if !envelope.is_success() {
            let message = envelope.message().unwrap_or(MSG_REQUEST_FAILED).to_string();
            log::warn!("business error {}: {}", envelope.code, message);
            self.notifier.error(&message);
            return Err(AppError::Business {
                code: envelope.code,
                message,
            });
        }
        Ok(envelope)
    }

    fn on_error(&self, error: TransportError) -> AppError {
        let message = transport_message(&error);
        log::warn!(
            "transport error (status {:?}): {} -> {}",
            error.status,
            error.message,
            message
        );
        self.notifier.error(&message);
        AppError::Transport(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_transport_message_table() {
        let cases = [
            (400, MSG_BAD_REQUEST),
            (401, MSG_UNAUTHORIZED),
            (403, MSG_FORBIDDEN),
            (404, MSG_NOT_FOUND),
            (500, MSG_SERVER_ERROR),
        ];
        for (status, expected) in cases {
            let err = TransportError::http(status, None);
            assert_eq!(transport_message(&err), expected, "status {status}");
        }
        assert_eq!(transport_message(&TransportError::http(502, None)), "错误: 502");
    }

    #[test]
    fn test_transport_message_prefers_body() {
        let body = Some(json!({"message": "项目名称已存在"}));
        assert_eq!(
            transport_message(&TransportError::http(400, body.clone())),
            "项目名称已存在"
        );
        assert_eq!(
            transport_message(&TransportError::http(422, body.clone())),
            "项目名称已存在"
        );
        // 401/403/500 always use the canned text
        assert_eq!(
            transport_message(&TransportError::http(403, body)),
            MSG_FORBIDDEN
        );
    }

    #[test]
    fn test_transport_message_without_response() {
        let timeout = TransportError::network("timeout of 30000ms exceeded");
        assert_eq!(transport_message(&timeout), MSG_TIMEOUT);

        let refused = TransportError::network("connection refused");
        assert_eq!(transport_message(&refused), MSG_NETWORK_ERROR);
    }

    #[test]
    fn test_timeout_text_ignored_with_response() {
        let mut err = TransportError::http(504, None);
        err.message = "gateway timeout".to_string();
        assert_eq!(transport_message(&err), "错误: 504");
    }
}
