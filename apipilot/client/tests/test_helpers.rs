// 测试辅助工具模块
// 提供脚本化的 Transport 和记录通知的 Notifier，供各集成测试共用

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use apipilot_client::config::ClientConfig;
use apipilot_client::error::TransportError;
use apipilot_client::http::HttpClient;
use apipilot_client::interceptor::EnvelopeInterceptor;
use apipilot_client::notify::Notifier;
use apipilot_client::transport::{HttpRequest, HttpResponse, Transport};
use apipilot_client::ApiClient;
use async_trait::async_trait;
use serde_json::{json, Value};

pub const BASE_URL: &str = "http://pilot.test";

/// 按顺序返回预设响应，并记录收到的请求
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<Result<HttpResponse, TransportError>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push(&self, response: Result<HttpResponse, TransportError>) {
        self.responses.lock().unwrap().push_back(response);
    }

    /// 200 + 任意 JSON 响应体
    pub fn push_json(&self, body: Value) {
        self.push_status(200, body);
    }

    pub fn push_status(&self, status: u16, body: Value) {
        self.push(Ok(HttpResponse {
            status,
            body: body.to_string(),
        }));
    }

    pub fn push_raw(&self, status: u16, body: &str) {
        self.push(Ok(HttpResponse {
            status,
            body: body.to_string(),
        }));
    }

    /// code = 0 的成功信封
    pub fn push_ok(&self, data: Value) {
        self.push_json(json!({"code": 0, "message": "success", "data": data}));
    }

    pub fn push_network_error(&self, message: &str) {
        self.push(Err(TransportError::network(message)));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::network("no scripted response")))
    }
}

/// 记录所有通知消息
#[derive(Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn error(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

pub struct Harness {
    pub transport: Arc<MockTransport>,
    pub notifier: Arc<RecordingNotifier>,
    pub api: ApiClient,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_config(ClientConfig::new(BASE_URL))
    }

    pub fn with_config(config: ClientConfig) -> Self {
        let transport = MockTransport::new();
        let notifier = Arc::new(RecordingNotifier::default());
        let interceptor =
            EnvelopeInterceptor::new(notifier.clone()).with_token(config.token.clone());
        let http = HttpClient::new(config, transport.clone(), Arc::new(interceptor));
        Harness {
            transport,
            notifier,
            api: ApiClient::from_http(http),
        }
    }

    pub fn url(path: &str) -> String {
        format!("{BASE_URL}/api/v1{path}")
    }
}

pub fn project_json(id: i64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "description": null,
        "created_at": "2024-05-01T08:00:00",
        "updated_at": "2024-05-01T08:00:00"
    })
}

pub fn project_summary_json(id: i64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "description": null,
        "created_at": "2024-05-01T08:00:00"
    })
}

pub fn environment_json(id: i64, project_id: i64, name: &str, is_default: bool) -> Value {
    json!({
        "id": id,
        "project_id": project_id,
        "name": name,
        "base_url": format!("http://{name}.internal"),
        "description": null,
        "is_default": is_default,
        "created_at": "2024-05-01T08:00:00",
        "updated_at": "2024-05-01T08:00:00"
    })
}

pub fn module_json(id: i64, name: &str, children: Value) -> Value {
    json!({
        "id": id,
        "name": name,
        "description": null,
        "parent_id": null,
        "sort_order": 0,
        "children": children
    })
}

pub fn page_json(items: Vec<Value>) -> Value {
    let total = items.len();
    json!({"items": items, "total": total, "page": 1, "page_size": 20})
}
