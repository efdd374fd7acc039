use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

fn default_body_type() -> String {
    "none".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TestCase {
    pub id: i64,
    pub module_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub method: String,
    pub path: String,
    #[serde(default)]
    pub headers: Map<String, Value>,
    #[serde(default)]
    pub params: Map<String, Value>,
    #[serde(default = "default_body_type")]
    pub body_type: String,
    pub body_content: Option<String>,
    pub pre_script: Option<String>,
    pub post_script: Option<String>,
    #[serde(default = "default_timeout")]
    pub timeout: u32,
    #[serde(default)]
    pub retry_count: u32,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub sort_order: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Row of a module's case list.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TestCaseSummary {
    pub id: i64,
    pub module_id: i64,
    pub name: String,
    pub method: String,
    pub path: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub sort_order: i32,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TestCaseDetail {
    #[serde(flatten)]
    pub case: TestCase,
    #[serde(default)]
    pub assertions: Vec<Assertion>,
    #[serde(default)]
    pub extractors: Vec<Extractor>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TestCaseCreate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub method: String,
    pub path: String,
    pub headers: Map<String, Value>,
    pub params: Map<String, Value>,
    pub body_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_script: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_script: Option<String>,
    pub timeout: u32,
    pub retry_count: u32,
    pub is_active: bool,
    pub sort_order: i32,
}

impl TestCaseCreate {
    /// A bare request definition with the server's defaults filled in.
    pub fn new(name: impl Into<String>, method: impl Into<String>, path: impl Into<String>) -> Self {
        TestCaseCreate {
            name: name.into(),
            description: None,
            method: method.into(),
            path: path.into(),
            headers: Map::new(),
            params: Map::new(),
            body_type: default_body_type(),
            body_content: None,
            pre_script: None,
            post_script: None,
            timeout: default_timeout(),
            retry_count: 0,
            is_active: true,
            sort_order: 0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct TestCaseUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_script: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_script: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,
}

/// Check applied to a response: `type` is one of
/// status_code/json_path/header/response_time/contains.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Assertion {
    pub id: i64,
    pub test_case_id: i64,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
    pub expression: String,
    pub operator: String,
    pub expected_value: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct AssertionCreate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
    pub expression: String,
    pub operator: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_value: Option<String>,
    pub sort_order: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct AssertionUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,
}

/// Pulls a value out of a response (`source` is body/header/cookie) into a variable.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Extractor {
    pub id: i64,
    pub test_case_id: i64,
    pub name: String,
    pub source: String,
    pub expression: String,
    pub variable_name: String,
    pub default_value: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ExtractorCreate {
    pub name: String,
    pub source: String,
    pub expression: String,
    pub variable_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    pub sort_order: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ExtractorUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variable_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_case_detail_flattened() {
        let detail: TestCaseDetail = serde_json::from_value(json!({
            "id": 7,
            "module_id": 2,
            "name": "login",
            "description": null,
            "method": "POST",
            "path": "/login",
            "headers": {"X-Trace": "1"},
            "params": {},
            "body_type": "json",
            "body_content": "{\"user\":\"a\"}",
            "pre_script": null,
            "post_script": null,
            "timeout": 10,
            "retry_count": 1,
            "is_active": true,
            "sort_order": 0,
            "created_at": "2024-05-01T08:00:00",
            "updated_at": "2024-05-01T08:30:00.123456",
            "assertions": [{
                "id": 1, "test_case_id": 7, "name": null, "type": "status_code",
                "expression": "", "operator": "eq", "expected_value": "200",
                "sort_order": 0, "created_at": "2024-05-01T08:00:00"
            }]
        }))
        .unwrap();

        assert_eq!(detail.case.id, 7);
        assert_eq!(detail.case.headers.get("X-Trace"), Some(&json!("1")));
        assert_eq!(detail.assertions.len(), 1);
        assert_eq!(detail.assertions[0].kind, "status_code");
        assert!(detail.extractors.is_empty());
    }

    #[test]
    fn test_case_create_defaults() {
        let create = TestCaseCreate::new("ping", "GET", "/ping");
        let value = serde_json::to_value(&create).unwrap();
        assert_eq!(value["body_type"], json!("none"));
        assert_eq!(value["timeout"], json!(30));
        assert!(value.get("description").is_none());
    }
}
