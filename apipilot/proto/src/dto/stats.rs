use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::execution::RunStatus;

/// Counters shown on the landing page.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DashboardStats {
    pub project_count: u64,
    pub case_count: u64,
    pub suite_count: u64,
    pub today_execution_count: u64,
    pub today_passed: u64,
    pub today_failed: u64,
    pub overall_pass_rate: f64,
    pub total_executions: u64,
    pub recent_executions: u64,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ProjectTrend {
    pub project_id: i64,
    pub days: u32,
    #[serde(default)]
    pub trend: Vec<TrendPoint>,
}

/// Executions of one day; `date` is `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TrendPoint {
    pub date: String,
    pub total: u64,
    pub passed: u64,
    pub failed: u64,
    pub pass_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TopFailures {
    pub days: u32,
    pub limit: u32,
    #[serde(default)]
    pub items: Vec<FailureCase>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FailureCase {
    pub test_case_id: i64,
    pub test_case_name: Option<String>,
    pub method: Option<String>,
    pub path: Option<String>,
    pub total_count: u64,
    pub failure_count: u64,
    pub failure_rate: f64,
}

/// Query for `GET /stats/cases/top-failures`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct TopFailuresQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SuiteHistory {
    pub suite_id: i64,
    pub total_executions: u32,
    pub avg_pass_rate: f64,
    #[serde(default)]
    pub history: Vec<SuiteRun>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SuiteRun {
    pub id: i64,
    pub status: RunStatus,
    pub total_count: u32,
    pub passed_count: u32,
    pub failed_count: u32,
    pub pass_rate: f64,
    pub duration_ms: Option<u64>,
    pub trigger_type: String,
    pub started_at: Option<NaiveDateTime>,
    pub finished_at: Option<NaiveDateTime>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_dashboard_partial_body() {
        let stats: DashboardStats =
            serde_json::from_value(json!({"project_count": 3, "overall_pass_rate": 87.5}))
                .unwrap();
        assert_eq!(stats.project_count, 3);
        assert_eq!(stats.case_count, 0);
        assert_eq!(stats.overall_pass_rate, 87.5);
    }
}
