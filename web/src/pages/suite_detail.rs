use apipilot_proto::prelude::*;
use dioxus::prelude::*;
use dioxus_router::{use_navigator, Link};

use crate::app::Route;
use crate::components::card::Card;
use crate::components::common::{EmptyState, ErrorState, LoadingState};
use crate::components::page::{PageContainer, PageHeader};
use crate::components::status::StatusBadge;
use crate::hooks::{use_api, use_api_client, use_reload};
use crate::pages::fmt_time;

const BUTTON: &str = "px-3 py-1 rounded bg-blue-600 text-white text-sm hover:bg-blue-700";
const SMALL: &str = "px-2 py-0.5 rounded border border-gray-300 text-xs hover:bg-gray-100";

#[component]
pub fn SuiteDetail(id: i64) -> Element {
    let api = use_api_client();
    let navigator = use_navigator();
    let mut reload = use_reload();
    let mut env_input = use_signal(String::new);
    let mut case_input = use_signal(String::new);
    let mut running = use_signal(|| false);

    let suite = use_api({
        let api = api.clone();
        move || {
            reload.track();
            let api = api.clone();
            async move { api.get_suite(id).await }
        }
    });

    let data = suite.data.read().clone();
    let detail = match data {
        Some(Ok(detail)) => detail,
        Some(Err(err)) => {
            return rsx! { ErrorState { error: err.to_string(), title: Some("测试集加载失败".to_string()) } }
        }
        None => return rsx! { LoadingState { message: None } },
    };

    let mut cases = detail.cases.clone();
    cases.sort_by_key(|c| c.sort_order);
    let order = detail.ordered_case_ids();

    // 将用例从 from 位置移动到 to 位置后整体提交顺序
    let reorder = {
        let api = api.clone();
        let order = order.clone();
        move |from: usize, to: usize| {
            let mut ids = order.clone();
            if to >= ids.len() {
                return;
            }
            ids.swap(from, to);
            let api = api.clone();
            spawn(async move {
                if api
                    .update_suite_cases_order(id, &SuiteCaseOrderUpdate::from_ids(&ids))
                    .await
                    .is_ok()
                {
                    reload.bump();
                }
            });
        }
    };

    let add_case = {
        let api = api.clone();
        let next = order.len() as i32;
        move |_: MouseEvent| {
            let Ok(test_case_id) = case_input.read().trim().parse::<i64>() else {
                return;
            };
            let api = api.clone();
            spawn(async move {
                let data = SuiteCaseCreate {
                    test_case_id,
                    sort_order: next,
                };
                if api.add_case_to_suite(id, &data).await.is_ok() {
                    case_input.set(String::new());
                    reload.bump();
                }
            });
        }
    };

    let run = {
        let api = api.clone();
        move |_: MouseEvent| {
            let Ok(environment_id) = env_input.read().trim().parse::<i64>() else {
                return;
            };
            let api = api.clone();
            spawn(async move {
                running.set(true);
                let result = api.execute_suite_by_id(id, environment_id).await;
                running.set(false);
                if let Ok(execution) = result {
                    navigator.push(Route::ExecutionDetailPage { id: execution.id });
                }
            });
        }
    };

    let count = cases.len();

    rsx! {
        PageContainer {
            PageHeader {
                title: detail.suite.name.clone(),
                subtitle: Some(format!("{} · {} 个用例", detail.suite.execution_mode, count))
            }

            Card {
                title: "执行",
                div {
                    class: "flex items-center gap-2",
                    input {
                        class: "w-32 border border-gray-300 rounded px-2 py-1 text-sm",
                        placeholder: "环境 ID",
                        value: "{env_input}",
                        oninput: move |e| env_input.set(e.value()),
                    }
                    button {
                        class: BUTTON,
                        disabled: *running.read(),
                        onclick: run,
                        if *running.read() { "执行中..." } else { "执行测试集" }
                    }
                }
            }

            Card {
                title: "用例顺序",
                if cases.is_empty() {
                    EmptyState { message: "测试集中还没有用例".to_string() }
                }
                for (pos, c) in cases.into_iter().enumerate() {
                    div {
                        key: "{c.test_case_id}",
                        class: "flex items-center gap-3 py-2 border-b border-gray-100 text-sm",
                        span { class: "w-6 text-gray-400", "{pos + 1}" }
                        span { class: "w-16 font-mono text-xs text-gray-500", "{c.test_case.method}" }
                        Link {
                            class: "flex-1 hover:text-blue-600",
                            to: Route::CaseEditPage { id: c.test_case_id },
                            "{c.test_case.name}"
                        }
                        button {
                            class: SMALL,
                            disabled: pos == 0,
                            onclick: {
                                let reorder = reorder.clone();
                                move |_: MouseEvent| reorder(pos, pos.saturating_sub(1))
                            },
                            "上移"
                        }
                        button {
                            class: SMALL,
                            disabled: pos + 1 == count,
                            onclick: {
                                let reorder = reorder.clone();
                                move |_: MouseEvent| reorder(pos, pos + 1)
                            },
                            "下移"
                        }
                        button {
                            class: "px-2 py-0.5 rounded text-xs text-red-600 hover:bg-red-50",
                            onclick: {
                                let api = api.clone();
                                let case_id = c.test_case_id;
                                move |_: MouseEvent| {
                                    let api = api.clone();
                                    spawn(async move {
                                        if api.remove_case_from_suite(id, case_id).await.is_ok() {
                                            reload.bump();
                                        }
                                    });
                                }
                            },
                            "移除"
                        }
                    }
                }
                div {
                    class: "flex gap-2 pt-3",
                    input {
                        class: "w-32 border border-gray-300 rounded px-2 py-1 text-sm",
                        placeholder: "用例 ID",
                        value: "{case_input}",
                        oninput: move |e| case_input.set(e.value()),
                    }
                    button { class: BUTTON, onclick: add_case, "添加用例" }
                }
            }

            SuiteHistoryCard { suite_id: id }
        }
    }
}

#[component]
fn SuiteHistoryCard(suite_id: i64) -> Element {
    let api = use_api_client();
    let navigator = use_navigator();
    let history = use_api(move || {
        let api = api.clone();
        async move { api.get_suite_history(suite_id, None).await }
    });

    rsx! {
        Card {
            title: "执行历史",
            if let Some(Ok(h)) = history.data.read().as_ref() {
                div {
                    class: "text-sm text-gray-500 mb-3",
                    {format!("共 {} 次执行，平均通过率 {:.1}%", h.total_executions, h.avg_pass_rate)}
                }
                if h.history.is_empty() {
                    EmptyState { message: "暂无执行记录".to_string() }
                }
                for run in h.history.iter().cloned() {
                    div {
                        key: "{run.id}",
                        class: "flex items-center gap-3 py-1 border-b border-gray-100 text-sm cursor-pointer hover:bg-gray-50",
                        onclick: move |_| { navigator.push(Route::ExecutionDetailPage { id: run.id }); },
                        span { class: "w-12 text-gray-400", "#{run.id}" }
                        StatusBadge { status: run.status.clone() }
                        span { "{run.passed_count}/{run.total_count}" }
                        span { class: "text-gray-500", {format!("{:.1}%", run.pass_rate)} }
                        span { class: "flex-1 text-right text-gray-400", {fmt_time(run.started_at)} }
                    }
                }
            } else if history.is_loading() {
                LoadingState { message: None }
            }
        }
    }
}
