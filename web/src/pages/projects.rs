use apipilot_proto::prelude::*;
use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::app::Route;
use crate::components::card::Card;
use crate::components::common::{EmptyState, LoadingState};
use crate::components::page::{PageContainer, PageHeader};
use crate::components::table_view::TableView;
use crate::hooks::{use_project_state, use_store};
use crate::pages::fmt_time;

#[component]
pub fn ProjectList() -> Element {
    let store = use_store();
    let state = use_project_state();
    let navigator = use_navigator();
    let mut name = use_signal(String::new);
    let mut description = use_signal(String::new);

    let load = {
        let store = store.clone();
        move || {
            let store = store.clone();
            spawn(async move {
                // 失败时拦截器已提示，这里只记录
                if let Err(err) = store.fetch_projects(&PageParams::default()).await {
                    log::warn!("load projects: {err}");
                }
            });
        }
    };
    use_hook({
        let load = load.clone();
        move || load()
    });

    let create = {
        let store = store.clone();
        let load = load.clone();
        move |_: MouseEvent| {
            let title = name.read().trim().to_string();
            if title.is_empty() {
                return;
            }
            let desc = description.read().trim().to_string();
            let api = store.api().clone();
            let load = load.clone();
            spawn(async move {
                let data = ProjectCreate {
                    name: title,
                    description: (!desc.is_empty()).then_some(desc),
                };
                if api.create_project(&data).await.is_ok() {
                    name.set(String::new());
                    description.set(String::new());
                    load();
                }
            });
        }
    };

    let current = state.read();
    let projects = current.projects.clone();
    let loading = current.loading;
    drop(current);
    let ids: Vec<i64> = projects.iter().map(|p| p.id).collect();

    rsx! {
        PageContainer {
            PageHeader {
                title: "项目管理".to_string(),
                subtitle: Some(format!("共 {} 个项目", projects.len()))
            }

            Card {
                title: "新建项目",
                div {
                    class: "flex flex-wrap gap-3",
                    input {
                        class: "border border-gray-300 rounded px-3 py-2 text-sm",
                        placeholder: "项目名称",
                        value: "{name}",
                        oninput: move |e| name.set(e.value()),
                    }
                    input {
                        class: "flex-1 border border-gray-300 rounded px-3 py-2 text-sm",
                        placeholder: "描述",
                        value: "{description}",
                        oninput: move |e| description.set(e.value()),
                    }
                    button {
                        class: "px-4 py-2 rounded bg-blue-600 text-white text-sm hover:bg-blue-700",
                        onclick: create,
                        "创建"
                    }
                }
            }

            Card {
                title: "项目列表",
                if loading && projects.is_empty() {
                    LoadingState { message: None }
                } else if projects.is_empty() {
                    EmptyState { message: "暂无项目".to_string() }
                } else {
                    TableView {
                        headers: ["ID", "名称", "描述", "创建时间"].map(String::from).to_vec(),
                        data: projects.iter().map(|p| vec![
                            p.id.to_string(),
                            p.name.clone(),
                            p.description.clone().unwrap_or_default(),
                            fmt_time(Some(p.created_at)),
                        ]).collect::<Vec<_>>(),
                        on_row_click: move |idx: usize| {
                            if let Some(&id) = ids.get(idx) {
                                navigator.push(Route::ProjectDetailPage { id });
                            }
                        },
                    }
                }
            }
        }
    }
}
