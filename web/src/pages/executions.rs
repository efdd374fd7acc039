use apipilot_proto::prelude::*;
use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::app::Route;
use crate::components::card::Card;
use crate::components::common::{EmptyState, ErrorState, LoadingState};
use crate::components::page::{PageContainer, PageHeader};
use crate::components::table_view::TableView;
use crate::hooks::{use_api, use_api_client};
use crate::pages::fmt_time;

const STATUSES: [(&str, &str); 5] = [
    ("", "全部状态"),
    ("passed", "通过"),
    ("failed", "失败"),
    ("error", "错误"),
    ("running", "执行中"),
];
const PAGE_SIZE: u32 = 20;

#[component]
pub fn ExecutionList() -> Element {
    let api = use_api_client();
    let navigator = use_navigator();
    let mut status = use_signal(String::new);
    let mut page_no = use_signal(|| 1u32);

    let executions = use_api(move || {
        let api = api.clone();
        let selected = status.read().clone();
        let query = ExecutionQuery {
            status: (!selected.is_empty()).then_some(selected),
            page: Some(*page_no.read()),
            page_size: Some(PAGE_SIZE),
            ..Default::default()
        };
        async move { api.get_executions(&query).await }
    });

    let page = executions.data.read().clone();
    let page_count = match &page {
        Some(Ok(p)) => p.page_count().max(1) as u32,
        _ => 1,
    };
    let current = *page_no.read();

    rsx! {
        PageContainer {
            PageHeader { title: "执行历史".to_string(), subtitle: None }
            Card {
                title: "执行记录",
                header_right: rsx! {
                    select {
                        class: "border border-gray-300 rounded px-2 py-1 text-sm",
                        onchange: move |e| {
                            status.set(e.value());
                            page_no.set(1);
                        },
                        for (value, label) in STATUSES {
                            option { value, "{label}" }
                        }
                    }
                },
                footer: rsx! {
                    div {
                        class: "flex items-center justify-end gap-3 text-sm",
                        button {
                            class: "px-2 py-1 rounded border border-gray-300",
                            disabled: current <= 1,
                            onclick: move |_| page_no.set(current.saturating_sub(1).max(1)),
                            "上一页"
                        }
                        span { "{current} / {page_count}" }
                        button {
                            class: "px-2 py-1 rounded border border-gray-300",
                            disabled: current >= page_count,
                            onclick: move |_| page_no.set(current + 1),
                            "下一页"
                        }
                    }
                },
                match page {
                    Some(Ok(p)) if p.is_empty() => rsx! { EmptyState { message: "暂无执行记录".to_string() } },
                    Some(Ok(p)) => {
                        let ids: Vec<i64> = p.items.iter().map(|e| e.id).collect();
                        rsx! {
                            TableView {
                                headers: ["ID", "对象", "环境", "触发", "状态", "通过", "耗时", "开始时间"].map(String::from).to_vec(),
                                data: p.items.iter().map(|e| vec![
                                    e.id.to_string(),
                                    e.target_name().to_string(),
                                    e.environment_name.clone().unwrap_or_else(|| e.environment_id.to_string()),
                                    e.trigger_type.clone(),
                                    e.status.to_string(),
                                    format!("{}/{}", e.passed_count, e.total_count),
                                    e.duration_ms.map(|d| format!("{d}ms")).unwrap_or_else(|| "-".to_string()),
                                    fmt_time(e.started_at),
                                ]).collect::<Vec<_>>(),
                                on_row_click: move |idx: usize| {
                                    if let Some(&id) = ids.get(idx) {
                                        navigator.push(Route::ExecutionDetailPage { id });
                                    }
                                },
                            }
                        }
                    }
                    Some(Err(err)) => rsx! { ErrorState { error: err.to_string(), title: None } },
                    None => rsx! { LoadingState { message: None } },
                }
            }
        }
    }
}
