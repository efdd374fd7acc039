use dioxus::prelude::*;

use crate::components::card::Card;
use crate::components::common::{EmptyState, ErrorState, LoadingState};
use crate::components::page::{PageContainer, PageHeader};
use crate::components::table_view::TableView;
use crate::hooks::{use_api, use_api_client};
use apipilot_proto::prelude::TopFailuresQuery;

#[component]
fn StatTile(label: &'static str, value: String) -> Element {
    rsx! {
        div {
            class: "bg-white rounded-lg shadow-sm border border-gray-200 p-5",
            div { class: "text-sm text-gray-500", "{label}" }
            div { class: "mt-2 text-2xl font-semibold text-gray-900", "{value}" }
        }
    }
}

#[component]
pub fn Dashboard() -> Element {
    let api = use_api_client();
    let stats = use_api({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move { api.get_dashboard_stats().await }
        }
    });
    let failures = use_api(move || {
        let api = api.clone();
        async move {
            api.get_top_failures(&TopFailuresQuery {
                limit: Some(10),
                ..Default::default()
            })
            .await
        }
    });

    rsx! {
        PageContainer {
            PageHeader { title: "首页".to_string(), subtitle: Some("测试平台概览".to_string()) }

            if stats.is_loading() {
                LoadingState { message: None }
            } else if let Some(Ok(s)) = stats.data.read().as_ref() {
                div {
                    class: "grid grid-cols-2 md:grid-cols-4 gap-4",
                    StatTile { label: "项目", value: s.project_count.to_string() }
                    StatTile { label: "用例", value: s.case_count.to_string() }
                    StatTile { label: "测试集", value: s.suite_count.to_string() }
                    StatTile { label: "总体通过率", value: format!("{:.1}%", s.overall_pass_rate) }
                    StatTile { label: "今日执行", value: s.today_execution_count.to_string() }
                    StatTile { label: "今日通过", value: s.today_passed.to_string() }
                    StatTile { label: "今日失败", value: s.today_failed.to_string() }
                    StatTile { label: "累计执行", value: s.total_executions.to_string() }
                }
            } else if let Some(Err(err)) = stats.data.read().as_ref() {
                ErrorState { error: err.to_string(), title: None }
            }

            Card {
                title: "失败最多的用例",
                if let Some(Ok(top)) = failures.data.read().as_ref() {
                    if top.items.is_empty() {
                        EmptyState { message: format!("最近 {} 天没有失败记录", top.days) }
                    } else {
                        TableView {
                            headers: ["用例", "请求", "失败次数", "失败率"].map(String::from).to_vec(),
                            data: top.items.iter().map(|f| vec![
                                f.test_case_name.clone().unwrap_or_else(|| f.test_case_id.to_string()),
                                format!("{} {}", f.method.as_deref().unwrap_or("-"), f.path.as_deref().unwrap_or("-")),
                                format!("{}/{}", f.failure_count, f.total_count),
                                format!("{:.1}%", f.failure_rate),
                            ]).collect::<Vec<_>>(),
                        }
                    }
                } else if failures.is_loading() {
                    LoadingState { message: None }
                }
            }
        }
    }
}
