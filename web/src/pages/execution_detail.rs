use apipilot_proto::prelude::*;
use dioxus::prelude::*;

use crate::components::card::Card;
use crate::components::collapsible_card::CollapsibleCard;
use crate::components::common::{EmptyState, ErrorState, LoadingState};
use crate::components::data::KeyValueList;
use crate::components::page::{PageContainer, PageHeader};
use crate::components::status::StatusBadge;
use crate::hooks::{use_api, use_api_client};
use crate::pages::fmt_time;

#[component]
pub fn ExecutionDetail(id: i64) -> Element {
    let api = use_api_client();
    let detail = use_api(move || {
        let api = api.clone();
        async move { api.get_execution_details(id).await }
    });

    let data = detail.data.read().clone();
    rsx! {
        PageContainer {
            match data {
                Some(Ok(d)) => rsx! {
                    PageHeader {
                        title: format!("执行 #{}", d.execution.id),
                        subtitle: d.suite_name.clone().or(d.test_case_name.clone())
                    }
                    Card {
                        title: "概要",
                        header_right: rsx! { StatusBadge { status: d.execution.status.clone() } },
                        KeyValueList {
                            items: vec![
                                ("环境", d.environment_name.clone().unwrap_or_else(|| d.execution.environment_id.to_string())),
                                ("触发方式", d.execution.trigger_type.clone()),
                                ("通过/总数", format!("{}/{}", d.execution.passed_count, d.execution.total_count)),
                                ("失败", d.execution.failed_count.to_string()),
                                ("跳过", d.execution.skipped_count.to_string()),
                                ("通过率", format!("{:.1}%", d.execution.pass_rate())),
                                ("耗时", d.execution.duration_ms.map(|ms| format!("{ms}ms")).unwrap_or_else(|| "-".to_string())),
                                ("开始时间", fmt_time(d.execution.started_at)),
                                ("结束时间", fmt_time(d.execution.finished_at)),
                            ]
                        }
                    }
                    Card {
                        title: "用例明细",
                        if d.details.is_empty() {
                            EmptyState { message: "没有执行明细".to_string() }
                        }
                        for step in d.details.iter().cloned() {
                            StepView { key: "{step.id}", step }
                        }
                    }
                },
                Some(Err(err)) => rsx! { ErrorState { error: err.to_string(), title: Some("执行记录加载失败".to_string()) } },
                None => rsx! { LoadingState { message: None } },
            }
        }
    }
}

fn pretty_json(value: &serde_json::Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

#[component]
fn StepView(step: ExecutionStep) -> Element {
    let title = format!(
        "[{}] {} {}",
        step.status,
        step.test_case_name.clone().unwrap_or_else(|| step.test_case_id.to_string()),
        step.response_status_code.map(|c| format!("· HTTP {c}")).unwrap_or_default()
    );
    let request = format!(
        "{} {}",
        step.request_method.as_deref().unwrap_or("-"),
        step.request_url.as_deref().unwrap_or("-")
    );
    let assertions: Vec<String> = step
        .assertion_results
        .iter()
        .flatten()
        .map(pretty_json)
        .collect();
    let extracted = step
        .extractor_results
        .as_ref()
        .filter(|m| !m.is_empty())
        .map(|m| pretty_json(&serde_json::Value::Object(m.clone())));

    rsx! {
        CollapsibleCard {
            title,
            div {
                class: "space-y-3 text-sm",
                div { class: "font-mono break-all", "{request}" }
                if let Some(err) = step.error_message.as_ref() {
                    div { class: "text-red-600", "{err}" }
                }
                if let Some(body) = step.request_body.as_ref() {
                    div { class: "text-gray-500", "请求体" }
                    pre { class: "bg-gray-100 text-xs p-2 rounded overflow-x-auto", "{body}" }
                }
                if let Some(body) = step.response_body.as_ref() {
                    div { class: "text-gray-500", "响应体" }
                    pre { class: "bg-gray-900 text-gray-100 text-xs p-2 rounded overflow-x-auto max-h-80", "{body}" }
                }
                if !assertions.is_empty() {
                    div { class: "text-gray-500", "断言结果" }
                    for a in assertions {
                        pre { class: "bg-gray-50 text-xs p-2 rounded", "{a}" }
                    }
                }
                if let Some(vars) = extracted {
                    div { class: "text-gray-500", "提取变量" }
                    pre { class: "bg-gray-50 text-xs p-2 rounded", "{vars}" }
                }
            }
        }
    }
}
