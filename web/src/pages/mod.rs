pub mod case_edit;
pub mod dashboard;
pub mod execution_detail;
pub mod executions;
pub mod not_found;
pub mod project_detail;
pub mod projects;
pub mod schedules;
pub mod suite_detail;
pub mod suites;

/// 表格中的时间显示格式
pub(crate) fn fmt_time(t: Option<chrono::NaiveDateTime>) -> String {
    t.map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "-".to_string())
}
