//! Table rows for the CLI output. Every column is pre-rendered to a string.

use apipilot_client::routes::RouteEntry;
use apipilot_proto::prelude::*;
use chrono::NaiveDateTime;
use tabled::settings::Style;
use tabled::{Table, Tabled};

pub fn render<R: Tabled>(rows: impl IntoIterator<Item = R>) -> String {
    Table::new(rows).with(Style::rounded()).to_string()
}

fn opt<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

fn time(value: Option<NaiveDateTime>) -> String {
    opt(value.map(|t| t.format("%Y-%m-%d %H:%M:%S")))
}

fn flag(value: bool) -> String {
    if value { "yes" } else { "no" }.to_string()
}

fn duration(ms: Option<u64>) -> String {
    opt(ms.map(|ms| format!("{ms}ms")))
}

#[derive(Tabled)]
pub struct KeyValueRow {
    #[tabled(rename = "Key")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl KeyValueRow {
    pub fn new(key: &str, value: impl ToString) -> Self {
        KeyValueRow {
            key: key.to_string(),
            value: value.to_string(),
        }
    }
}

#[derive(Tabled)]
pub struct ProjectRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Created")]
    created_at: String,
}

impl From<&ProjectSummary> for ProjectRow {
    fn from(p: &ProjectSummary) -> Self {
        ProjectRow {
            id: p.id,
            name: p.name.clone(),
            description: opt(p.description.as_deref()),
            created_at: time(Some(p.created_at)),
        }
    }
}

#[derive(Tabled)]
pub struct ModuleRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Module")]
    name: String,
    #[tabled(rename = "Order")]
    sort_order: i32,
}

impl ModuleRow {
    /// Flattens the tree, indenting names by depth.
    pub fn tree(nodes: &[ModuleNode]) -> Vec<ModuleRow> {
        nodes
            .iter()
            .flat_map(|root| root.walk())
            .map(|(depth, node)| ModuleRow {
                id: node.id,
                name: format!("{}{}", "  ".repeat(depth), node.name),
                sort_order: node.sort_order,
            })
            .collect()
    }
}

#[derive(Tabled)]
pub struct EnvironmentRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Base URL")]
    base_url: String,
    #[tabled(rename = "Default")]
    is_default: String,
}

impl From<&Environment> for EnvironmentRow {
    fn from(e: &Environment) -> Self {
        EnvironmentRow {
            id: e.id,
            name: e.name.clone(),
            base_url: e.base_url.clone(),
            is_default: flag(e.is_default),
        }
    }
}

#[derive(Tabled)]
pub struct CaseRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Method")]
    method: String,
    #[tabled(rename = "Path")]
    path: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Active")]
    is_active: String,
}

impl From<&TestCaseSummary> for CaseRow {
    fn from(c: &TestCaseSummary) -> Self {
        CaseRow {
            id: c.id,
            method: c.method.clone(),
            path: c.path.clone(),
            name: c.name.clone(),
            is_active: flag(c.is_active),
        }
    }
}

#[derive(Tabled)]
pub struct AssertionRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Expression")]
    expression: String,
    #[tabled(rename = "Operator")]
    operator: String,
    #[tabled(rename = "Expected")]
    expected: String,
}

impl From<&Assertion> for AssertionRow {
    fn from(a: &Assertion) -> Self {
        AssertionRow {
            id: a.id,
            kind: a.kind.clone(),
            expression: a.expression.clone(),
            operator: a.operator.clone(),
            expected: opt(a.expected_value.as_deref()),
        }
    }
}

#[derive(Tabled)]
pub struct SuiteRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Mode")]
    mode: String,
    #[tabled(rename = "Cases")]
    cases: u32,
}

impl From<&TestSuiteSummary> for SuiteRow {
    fn from(s: &TestSuiteSummary) -> Self {
        SuiteRow {
            id: s.id,
            name: s.name.clone(),
            mode: s.execution_mode.clone(),
            cases: s.case_count,
        }
    }
}

#[derive(Tabled)]
pub struct SuiteCaseRow {
    #[tabled(rename = "#")]
    sort_order: i32,
    #[tabled(rename = "Case")]
    case_id: i64,
    #[tabled(rename = "Method")]
    method: String,
    #[tabled(rename = "Path")]
    path: String,
    #[tabled(rename = "Name")]
    name: String,
}

impl From<&SuiteCaseDetail> for SuiteCaseRow {
    fn from(c: &SuiteCaseDetail) -> Self {
        SuiteCaseRow {
            sort_order: c.sort_order,
            case_id: c.test_case_id,
            method: c.test_case.method.clone(),
            path: c.test_case.path.clone(),
            name: c.test_case.name.clone(),
        }
    }
}

#[derive(Tabled)]
pub struct ScheduleRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Suite")]
    suite: String,
    #[tabled(rename = "Environment")]
    environment: String,
    #[tabled(rename = "Cron")]
    cron: String,
    #[tabled(rename = "Active")]
    is_active: String,
    #[tabled(rename = "Next run")]
    next_run_at: String,
}

impl From<&ScheduleSummary> for ScheduleRow {
    fn from(s: &ScheduleSummary) -> Self {
        ScheduleRow {
            id: s.id,
            name: s.name.clone(),
            suite: s.suite_name.clone().unwrap_or_else(|| s.suite_id.to_string()),
            environment: s
                .environment_name
                .clone()
                .unwrap_or_else(|| s.environment_id.to_string()),
            cron: s.cron_expression.clone(),
            is_active: flag(s.is_active),
            next_run_at: time(s.next_run_at),
        }
    }
}

#[derive(Tabled)]
pub struct ExecutionRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Target")]
    target: String,
    #[tabled(rename = "Environment")]
    environment: String,
    #[tabled(rename = "Trigger")]
    trigger: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Passed")]
    passed: String,
    #[tabled(rename = "Duration")]
    duration: String,
    #[tabled(rename = "Started")]
    started_at: String,
}

impl From<&ExecutionSummary> for ExecutionRow {
    fn from(e: &ExecutionSummary) -> Self {
        ExecutionRow {
            id: e.id,
            target: e.target_name().to_string(),
            environment: opt(e.environment_name.as_deref()),
            trigger: e.trigger_type.clone(),
            status: e.status.to_string(),
            passed: format!("{}/{}", e.passed_count, e.total_count),
            duration: duration(e.duration_ms),
            started_at: time(e.started_at),
        }
    }
}

#[derive(Tabled)]
pub struct StepRow {
    #[tabled(rename = "Case")]
    case: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Request")]
    request: String,
    #[tabled(rename = "HTTP")]
    http_status: String,
    #[tabled(rename = "Duration")]
    duration: String,
    #[tabled(rename = "Error")]
    error: String,
}

impl From<&ExecutionStep> for StepRow {
    fn from(s: &ExecutionStep) -> Self {
        StepRow {
            case: s
                .test_case_name
                .clone()
                .unwrap_or_else(|| s.test_case_id.to_string()),
            status: s.status.to_string(),
            request: format!(
                "{} {}",
                s.request_method.as_deref().unwrap_or("-"),
                s.request_url.as_deref().unwrap_or("-")
            ),
            http_status: opt(s.response_status_code),
            duration: duration(s.duration_ms),
            error: opt(s.error_message.as_deref()),
        }
    }
}

#[derive(Tabled)]
pub struct TrendRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Total")]
    total: u64,
    #[tabled(rename = "Passed")]
    passed: u64,
    #[tabled(rename = "Failed")]
    failed: u64,
    #[tabled(rename = "Pass rate")]
    pass_rate: String,
}

impl From<&TrendPoint> for TrendRow {
    fn from(p: &TrendPoint) -> Self {
        TrendRow {
            date: p.date.clone(),
            total: p.total,
            passed: p.passed,
            failed: p.failed,
            pass_rate: format!("{:.1}%", p.pass_rate),
        }
    }
}

#[derive(Tabled)]
pub struct FailureRow {
    #[tabled(rename = "Case")]
    case_id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Request")]
    request: String,
    #[tabled(rename = "Failures")]
    failures: String,
    #[tabled(rename = "Failure rate")]
    failure_rate: String,
}

impl From<&FailureCase> for FailureRow {
    fn from(f: &FailureCase) -> Self {
        FailureRow {
            case_id: f.test_case_id,
            name: opt(f.test_case_name.as_deref()),
            request: format!(
                "{} {}",
                f.method.as_deref().unwrap_or("-"),
                f.path.as_deref().unwrap_or("-")
            ),
            failures: format!("{}/{}", f.failure_count, f.total_count),
            failure_rate: format!("{:.1}%", f.failure_rate),
        }
    }
}

#[derive(Tabled)]
pub struct SuiteRunRow {
    #[tabled(rename = "Execution")]
    id: i64,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Passed")]
    passed: String,
    #[tabled(rename = "Pass rate")]
    pass_rate: String,
    #[tabled(rename = "Duration")]
    duration: String,
    #[tabled(rename = "Trigger")]
    trigger: String,
    #[tabled(rename = "Started")]
    started_at: String,
}

impl From<&SuiteRun> for SuiteRunRow {
    fn from(r: &SuiteRun) -> Self {
        SuiteRunRow {
            id: r.id,
            status: r.status.to_string(),
            passed: format!("{}/{}", r.passed_count, r.total_count),
            pass_rate: format!("{:.1}%", r.pass_rate),
            duration: duration(r.duration_ms),
            trigger: r.trigger_type.clone(),
            started_at: time(r.started_at),
        }
    }
}

#[derive(Tabled)]
pub struct RouteRow {
    #[tabled(rename = "Path")]
    path: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Icon")]
    icon: String,
    #[tabled(rename = "Menu")]
    menu: String,
}

impl From<&RouteEntry> for RouteRow {
    fn from(r: &RouteEntry) -> Self {
        RouteRow {
            path: r.full_path(),
            name: r.name.to_string(),
            title: opt(r.meta.title),
            icon: opt(r.meta.icon),
            menu: flag(!r.meta.hidden),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_module_rows_are_indented() {
        let tree: Vec<ModuleNode> = serde_json::from_value(json!([{
            "id": 1, "name": "auth", "description": null, "parent_id": null,
            "children": [{"id": 2, "name": "login", "description": null, "parent_id": 1}]
        }]))
        .unwrap();
        let rendered = render(ModuleRow::tree(&tree));
        assert!(rendered.contains("auth"));
        assert!(rendered.contains("  login"));
    }

    #[test]
    fn test_missing_values_render_as_dash() {
        assert_eq!(opt(None::<&str>), "-");
        assert_eq!(duration(Some(42)), "42ms");
        assert_eq!(flag(true), "yes");
    }
}
