// 拦截器管线测试
// 通过脚本化 Transport 驱动完整的 请求 -> 响应/错误 流程

use apipilot_client::config::ClientConfig;
use apipilot_client::error::AppError;
use apipilot_client::interceptor::{
    MSG_BAD_REQUEST, MSG_FORBIDDEN, MSG_NETWORK_ERROR, MSG_NOT_FOUND, MSG_REQUEST_FAILED,
    MSG_SERVER_ERROR, MSG_TIMEOUT, MSG_UNAUTHORIZED,
};
use apipilot_client::transport::HttpRequest;
use reqwest::Method;
use serde_json::{json, Value};

mod test_helpers;
use test_helpers::Harness;

// ========== 成功响应 ==========

#[tokio::test]
async fn test_success_returns_data_without_notification() {
    let h = Harness::new();
    let data = json!({"id": 1, "nested": {"list": [1, 2, 3]}});
    h.transport.push_ok(data.clone());

    let envelope = h.api.http().get::<Value>("/anything").await.unwrap();
    assert_eq!(envelope.code, 0);
    assert_eq!(envelope.data, Some(data));
    assert!(h.notifier.messages().is_empty());
}

#[tokio::test]
async fn test_success_with_null_data() {
    let h = Harness::new();
    h.transport
        .push_json(json!({"code": 0, "message": "删除成功", "data": null}));

    let envelope = h.api.http().delete::<Value>("/projects/1").await.unwrap();
    assert_eq!(envelope.data, None);
    assert_eq!(envelope.message, "删除成功");
    assert!(h.notifier.messages().is_empty());
}

#[tokio::test]
async fn test_success_with_null_message() {
    let h = Harness::new();
    h.transport
        .push_json(json!({"code": 0, "message": null, "data": {"id": 3}}));

    let envelope = h.api.http().get::<Value>("/projects/3").await.unwrap();
    assert!(envelope.is_success());
    assert_eq!(envelope.data, Some(json!({"id": 3})));
    assert!(h.notifier.messages().is_empty());
}

#[tokio::test]
async fn test_business_error_with_null_message() {
    let h = Harness::new();
    h.transport
        .push_json(json!({"code": 50001, "message": null, "data": null}));

    let err = h.api.http().get::<Value>("/projects").await.unwrap_err();
    assert_eq!(
        err,
        AppError::Business {
            code: 50001,
            message: MSG_REQUEST_FAILED.to_string()
        }
    );
    assert_eq!(h.notifier.messages(), vec![MSG_REQUEST_FAILED]);
}

// ========== 业务错误 ==========

#[tokio::test]
async fn test_business_error_uses_envelope_message() {
    let h = Harness::new();
    h.transport
        .push_json(json!({"code": 40002, "message": "资源已存在", "data": null}));

    let err = h.api.http().get::<Value>("/projects").await.unwrap_err();
    assert_eq!(
        err,
        AppError::Business {
            code: 40002,
            message: "资源已存在".to_string()
        }
    );
    assert_eq!(err.to_string(), "资源已存在");
    assert_eq!(h.notifier.messages(), vec!["资源已存在"]);
}

#[tokio::test]
async fn test_business_error_default_message() {
    let h = Harness::new();
    h.transport.push_json(json!({"code": 50001, "message": ""}));

    let err = h.api.http().get::<Value>("/projects").await.unwrap_err();
    assert_eq!(err.to_string(), MSG_REQUEST_FAILED);
    assert_eq!(h.notifier.messages(), vec![MSG_REQUEST_FAILED]);
}

#[tokio::test]
async fn test_body_without_envelope_is_business_failure() {
    let h = Harness::new();
    h.transport.push_raw(200, "<html>proxy page</html>");

    let err = h.api.http().get::<Value>("/projects").await.unwrap_err();
    assert!(err.is_business());
    assert_eq!(h.notifier.messages(), vec![MSG_REQUEST_FAILED]);
}

// ========== HTTP 错误 ==========

#[tokio::test]
async fn test_http_status_messages() {
    let cases = [
        (400, MSG_BAD_REQUEST.to_string()),
        (401, MSG_UNAUTHORIZED.to_string()),
        (403, MSG_FORBIDDEN.to_string()),
        (404, MSG_NOT_FOUND.to_string()),
        (500, MSG_SERVER_ERROR.to_string()),
        (502, "错误: 502".to_string()),
        (418, "错误: 418".to_string()),
    ];

    for (status, expected) in cases {
        let h = Harness::new();
        h.transport.push_raw(status, "");

        let err = h.api.http().get::<Value>("/projects").await.unwrap_err();
        assert_eq!(err.status(), Some(status));
        assert_eq!(h.notifier.messages(), vec![expected], "status {status}");
    }
}

#[tokio::test]
async fn test_http_error_keeps_original_error() {
    let h = Harness::new();
    let body = json!({"code": 40400, "message": "项目不存在"});
    h.transport.push_status(404, body.clone());

    match h.api.http().get::<Value>("/projects/9").await {
        Err(AppError::Transport(err)) => {
            assert_eq!(err.status, Some(404));
            assert_eq!(err.body, Some(body));
            assert_eq!(err.message, "Request failed with status code 404");
        }
        other => panic!("expected transport error, got {other:?}"),
    }
    assert_eq!(h.notifier.messages(), vec!["项目不存在"]);
}

// ========== 网络错误 ==========

#[tokio::test]
async fn test_timeout_without_response() {
    let h = Harness::new();
    h.transport.push_network_error("timeout of 30000ms exceeded");

    let err = h.api.http().get::<Value>("/projects").await.unwrap_err();
    assert_eq!(err.status(), None);
    assert_eq!(err.to_string(), "timeout of 30000ms exceeded");
    assert_eq!(h.notifier.messages(), vec![MSG_TIMEOUT]);
}

#[tokio::test]
async fn test_network_failure_without_response() {
    let h = Harness::new();
    h.transport.push_network_error("connection refused");

    h.api.http().get::<Value>("/projects").await.unwrap_err();
    assert_eq!(h.notifier.messages(), vec![MSG_NETWORK_ERROR]);
}

// ========== 请求阶段 ==========

#[tokio::test]
async fn test_request_without_token_passes_through() {
    let h = Harness::new();
    h.transport.push_ok(json!(null));

    h.api
        .http()
        .post::<_, Value>("/projects", &json!({"name": "demo"}))
        .await
        .unwrap();

    let req: HttpRequest = h.transport.last_request();
    assert_eq!(req.method, Method::POST);
    assert_eq!(req.url, Harness::url("/projects"));
    assert_eq!(req.header("Authorization"), None);
    assert_eq!(req.header("Content-Type"), Some("application/json"));
    assert_eq!(req.body, Some(json!({"name": "demo"})));
    assert_eq!(req.timeout, std::time::Duration::from_secs(30));
}

#[tokio::test]
async fn test_request_with_token_adds_bearer() {
    let h = Harness::with_config(ClientConfig::new(test_helpers::BASE_URL).with_token("t0k"));
    h.transport.push_ok(json!([]));

    h.api.http().get::<Value>("/projects").await.unwrap();
    assert_eq!(
        h.transport.last_request().header("Authorization"),
        Some("Bearer t0k")
    );
}

#[tokio::test]
async fn test_query_string_skips_unset_fields() {
    let h = Harness::new();
    h.transport.push_ok(json!({"items": []}));

    let params = apipilot_proto::envelope::PageParams {
        page: Some(2),
        page_size: None,
    };
    h.api
        .http()
        .get_query::<_, Value>("/projects", &params)
        .await
        .unwrap();
    assert_eq!(h.transport.last_request().url, Harness::url("/projects?page=2"));

    h.transport.push_ok(json!({"items": []}));
    h.api
        .http()
        .get_query::<_, Value>("/projects", &apipilot_proto::envelope::PageParams::default())
        .await
        .unwrap();
    assert_eq!(h.transport.last_request().url, Harness::url("/projects"));
}

#[tokio::test]
async fn test_typed_decode_failure_does_not_notify() {
    let h = Harness::new();
    h.transport.push_ok(json!({"unexpected": true}));

    let err = h.api.get_project(1).await.unwrap_err();
    assert!(matches!(err, AppError::Json(_)));
    assert!(h.notifier.messages().is_empty());
}
