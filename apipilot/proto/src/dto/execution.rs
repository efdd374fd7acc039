use std::fmt::{Display, Formatter};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Outcome of an execution or of a single step.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum RunStatus {
    Pending,
    Running,
    Passed,
    Failed,
    Error,
    Skipped,
    Other(String),
}

impl RunStatus {
    pub fn as_str(&self) -> &str {
        match self {
            RunStatus::Pending => "pending",
            RunStatus::Running => "running",
            RunStatus::Passed => "passed",
            RunStatus::Failed => "failed",
            RunStatus::Error => "error",
            RunStatus::Skipped => "skipped",
            RunStatus::Other(s) => s,
        }
    }

    pub fn is_finished(&self) -> bool {
        !matches!(self, RunStatus::Pending | RunStatus::Running)
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, RunStatus::Failed | RunStatus::Error)
    }
}

impl From<String> for RunStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "pending" => RunStatus::Pending,
            "running" => RunStatus::Running,
            "passed" => RunStatus::Passed,
            "failed" => RunStatus::Failed,
            "error" => RunStatus::Error,
            "skipped" => RunStatus::Skipped,
            _ => RunStatus::Other(value),
        }
    }
}

impl From<RunStatus> for String {
    fn from(value: RunStatus) -> Self {
        match value {
            RunStatus::Other(s) => s,
            other => other.as_str().to_string(),
        }
    }
}

impl Display for RunStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Run record as returned by the execution endpoints.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Execution {
    pub id: i64,
    pub suite_id: Option<i64>,
    pub test_case_id: Option<i64>,
    pub environment_id: i64,
    /// manual/schedule/api
    pub trigger_type: String,
    pub status: RunStatus,
    #[serde(default)]
    pub total_count: u32,
    #[serde(default)]
    pub passed_count: u32,
    #[serde(default)]
    pub failed_count: u32,
    #[serde(default)]
    pub skipped_count: u32,
    pub duration_ms: Option<u64>,
    pub started_at: Option<NaiveDateTime>,
    pub finished_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
}

impl Execution {
    /// Percentage of passed cases, one decimal place, zero when nothing ran.
    pub fn pass_rate(&self) -> f64 {
        pass_rate(self.passed_count, self.total_count)
    }
}

pub(crate) fn pass_rate(passed: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (passed as f64 / total as f64 * 1000.0).round() / 10.0
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ExecutionSummary {
    pub id: i64,
    pub suite_id: Option<i64>,
    pub suite_name: Option<String>,
    pub test_case_id: Option<i64>,
    pub test_case_name: Option<String>,
    pub environment_id: i64,
    pub environment_name: Option<String>,
    pub trigger_type: String,
    pub status: RunStatus,
    #[serde(default)]
    pub total_count: u32,
    #[serde(default)]
    pub passed_count: u32,
    #[serde(default)]
    pub failed_count: u32,
    pub duration_ms: Option<u64>,
    pub started_at: Option<NaiveDateTime>,
    pub finished_at: Option<NaiveDateTime>,
}

impl ExecutionSummary {
    /// Suite or case name, whichever the run was started for.
    pub fn target_name(&self) -> &str {
        self.suite_name
            .as_deref()
            .or(self.test_case_name.as_deref())
            .unwrap_or("-")
    }
}

/// Execution record together with its per-case steps.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ExecutionDetail {
    #[serde(flatten)]
    pub execution: Execution,
    pub suite_name: Option<String>,
    pub test_case_name: Option<String>,
    pub environment_name: Option<String>,
    #[serde(default)]
    pub details: Vec<ExecutionStep>,
}

/// One executed case inside a run.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ExecutionStep {
    pub id: i64,
    pub execution_id: i64,
    pub test_case_id: i64,
    pub test_case_name: Option<String>,
    pub status: RunStatus,
    pub request_url: Option<String>,
    pub request_method: Option<String>,
    pub request_headers: Option<Map<String, Value>>,
    pub request_body: Option<String>,
    pub response_status_code: Option<u16>,
    pub response_headers: Option<Map<String, Value>>,
    pub response_body: Option<String>,
    pub duration_ms: Option<u64>,
    pub assertion_results: Option<Vec<Value>>,
    pub extractor_results: Option<Map<String, Value>>,
    pub error_message: Option<String>,
    pub executed_at: Option<NaiveDateTime>,
}

/// Result of `POST /execute/case`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CaseRunResult {
    pub execution_id: i64,
    pub test_case_id: i64,
    pub status: RunStatus,
    pub request_url: Option<String>,
    pub request_method: Option<String>,
    pub request_headers: Option<Map<String, Value>>,
    pub request_body: Option<String>,
    pub response_status_code: Option<u16>,
    pub response_headers: Option<Map<String, Value>>,
    pub response_body: Option<String>,
    pub duration_ms: Option<u64>,
    #[serde(default)]
    pub assertion_results: Vec<Value>,
    #[serde(default)]
    pub extractor_results: Map<String, Value>,
    #[serde(default)]
    pub error_message: String,
    pub executed_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct ExecuteCaseRequest {
    pub test_case_id: i64,
    pub environment_id: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct ExecuteSuiteRequest {
    pub suite_id: i64,
    pub environment_id: i64,
}

/// Ad-hoc request sent from the case editor; nothing is recorded.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DebugRequest {
    pub environment_id: i64,
    pub method: String,
    pub path: String,
    #[serde(default)]
    pub headers: Map<String, Value>,
    #[serde(default)]
    pub params: Map<String, Value>,
    pub body_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_content: Option<String>,
    #[serde(default)]
    pub assertions: Vec<Value>,
    #[serde(default)]
    pub extractors: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DebugResult {
    pub status: Option<RunStatus>,
    pub request_url: String,
    pub request_method: String,
    #[serde(default)]
    pub request_headers: Map<String, Value>,
    pub request_body: Option<String>,
    pub response_status_code: Option<u16>,
    #[serde(default)]
    pub response_headers: Map<String, Value>,
    #[serde(default)]
    pub response_body: Option<String>,
    pub duration_ms: Option<u64>,
    #[serde(default)]
    pub assertion_results: Option<Vec<Value>>,
    #[serde(default)]
    pub extractor_results: Option<Map<String, Value>>,
    pub error_message: Option<String>,
}

/// Filters for `GET /execute/executions`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ExecutionQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suite_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_case_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}
