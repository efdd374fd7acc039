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

#[component]
pub fn SuiteList() -> Element {
    let api = use_api_client();
    let navigator = use_navigator();
    let suites = use_api(move || {
        let api = api.clone();
        async move { api.get_suites(&PageParams::default()).await }
    });

    rsx! {
        PageContainer {
            PageHeader { title: "测试集".to_string(), subtitle: None }
            Card {
                title: "测试集列表",
                if suites.is_loading() {
                    LoadingState { message: None }
                } else if let Some(Ok(page)) = suites.data.read().as_ref() {
                    if page.is_empty() {
                        EmptyState { message: "暂无测试集，可在项目详情中创建".to_string() }
                    } else {
                        TableView {
                            headers: ["ID", "名称", "执行方式", "用例数", "创建时间"].map(String::from).to_vec(),
                            data: page.items.iter().map(|s| vec![
                                s.id.to_string(),
                                s.name.clone(),
                                s.execution_mode.clone(),
                                s.case_count.to_string(),
                                fmt_time(Some(s.created_at)),
                            ]).collect::<Vec<_>>(),
                            on_row_click: {
                                let ids: Vec<i64> = page.items.iter().map(|s| s.id).collect();
                                move |idx: usize| {
                                    if let Some(&id) = ids.get(idx) {
                                        navigator.push(Route::SuiteDetailPage { id });
                                    }
                                }
                            },
                        }
                    }
                } else if let Some(Err(err)) = suites.data.read().as_ref() {
                    ErrorState { error: err.to_string(), title: None }
                }
            }
        }
    }
}
