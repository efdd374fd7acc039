use apipilot_proto::prelude::*;
use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::app::Route;
use crate::components::card::Card;
use crate::components::common::{EmptyState, ErrorState, LoadingState};
use crate::components::data::KeyValueList;
use crate::components::page::{PageContainer, PageHeader};
use crate::components::status::ActiveBadge;
use crate::components::table_view::TableView;
use crate::hooks::{use_api, use_project_state, use_reload, use_store};
use crate::pages::fmt_time;

const METHODS: [&str; 5] = ["GET", "POST", "PUT", "PATCH", "DELETE"];

#[component]
pub fn ProjectDetail(id: i64) -> Element {
    let store = use_store();
    let state = use_project_state();

    // 进入页面加载项目、模块和环境，离开时清理
    use_hook({
        let store = store.clone();
        move || {
            spawn(async move {
                let project = store.fetch_project(id).await;
                let modules = store.fetch_modules(id).await;
                let envs = store.fetch_environments(id).await;
                for err in [project.err(), modules.err(), envs.err()].into_iter().flatten() {
                    log::warn!("load project {id}: {err}");
                }
            });
        }
    });
    use_drop({
        let store = store.clone();
        move || store.reset()
    });

    let current = state.read();
    let project = current.current_project.clone();
    let loading = current.loading;
    drop(current);

    rsx! {
        PageContainer {
            match project {
                Some(p) => rsx! {
                    PageHeader { title: p.name.clone(), subtitle: p.description.clone() }
                    div {
                        class: "grid grid-cols-1 lg:grid-cols-3 gap-6",
                        div {
                            class: "space-y-6",
                            ModuleTree { project_id: id }
                            Environments {}
                        }
                        div {
                            class: "lg:col-span-2 space-y-6",
                            Card {
                                title: "项目信息",
                                KeyValueList {
                                    items: vec![
                                        ("ID", p.id.to_string()),
                                        ("创建时间", fmt_time(Some(p.created_at))),
                                        ("更新时间", fmt_time(Some(p.updated_at))),
                                    ]
                                }
                            }
                            ProjectSuites { project_id: id }
                            ProjectTrendCard { project_id: id }
                        }
                    }
                },
                None if loading => rsx! { LoadingState { message: Some("加载项目...".to_string()) } },
                None => rsx! { ErrorState { error: format!("项目 {id} 加载失败"), title: None } },
            }
        }
    }
}

#[component]
fn ModuleTree(project_id: i64) -> Element {
    let store = use_store();
    let state = use_project_state();
    let navigator = use_navigator();
    let mut selected = use_signal(|| None::<i64>);
    let mut new_module = use_signal(String::new);
    let mut new_case = use_signal(String::new);
    let mut new_method = use_signal(|| "GET".to_string());
    let mut new_path = use_signal(|| "/".to_string());

    let cases = use_api({
        let api = store.api().clone();
        move || {
            let api = api.clone();
            let module = *selected.read();
            async move {
                match module {
                    Some(module_id) => api.get_module_cases(module_id, &PageParams::default()).await,
                    None => Ok(Page::default()),
                }
            }
        }
    });

    let add_module = {
        let store = store.clone();
        move |_: MouseEvent| {
            let name = new_module.read().trim().to_string();
            if name.is_empty() {
                return;
            }
            let store = store.clone();
            let data = ModuleCreate {
                name,
                parent_id: *selected.read(),
                ..Default::default()
            };
            spawn(async move {
                if store.api().create_module(project_id, &data).await.is_ok() {
                    new_module.set(String::new());
                    let _ = store.fetch_modules(project_id).await;
                }
            });
        }
    };

    let add_case = {
        let api = store.api().clone();
        move |_: MouseEvent| {
            let Some(module_id) = *selected.read() else {
                return;
            };
            let name = new_case.read().trim().to_string();
            if name.is_empty() {
                return;
            }
            let data = TestCaseCreate::new(name, new_method.read().clone(), new_path.read().clone());
            let api = api.clone();
            spawn(async move {
                if let Ok(case) = api.create_case(module_id, &data).await {
                    navigator.push(Route::CaseEditPage { id: case.id });
                }
            });
        }
    };

    let modules = state.read().modules.clone();
    let rows: Vec<(usize, i64, String)> = modules
        .iter()
        .flat_map(|root| root.walk())
        .map(|(depth, node)| (depth, node.id, node.name.clone()))
        .collect();
    let current_module = *selected.read();
    let selected_name = current_module
        .and_then(|id| modules.iter().find_map(|m| m.find(id)))
        .map(|m| m.name.clone());

    rsx! {
        Card {
            title: "模块",
            div {
                class: "space-y-1",
                if rows.is_empty() {
                    EmptyState { message: "暂无模块".to_string() }
                }
                for (depth, module_id, name) in rows {
                    div {
                        key: "{module_id}",
                        class: if current_module == Some(module_id) { "px-2 py-1 rounded cursor-pointer bg-blue-100 text-blue-700" } else { "px-2 py-1 rounded cursor-pointer hover:bg-gray-100" },
                        style: "padding-left: {depth * 16 + 8}px",
                        onclick: move |_| selected.set(Some(module_id)),
                        "{name}"
                    }
                }
            }
            div {
                class: "flex gap-2 mt-4",
                input {
                    class: "flex-1 border border-gray-300 rounded px-2 py-1 text-sm",
                    placeholder: "新模块名称",
                    value: "{new_module}",
                    oninput: move |e| new_module.set(e.value()),
                }
                button {
                    class: "px-3 py-1 rounded bg-blue-600 text-white text-sm",
                    onclick: add_module,
                    "添加"
                }
            }
        }

        if let Some(module_name) = selected_name {
            Card {
                title: "用例",
                div {
                    class: "text-sm text-gray-500 mb-3", "模块: {module_name}"
                }
                if let Some(Ok(page)) = cases.data.read().as_ref() {
                    for case in page.items.iter().cloned() {
                        div {
                            key: "{case.id}",
                            class: "flex items-center justify-between py-1 border-b border-gray-100 cursor-pointer hover:bg-gray-50",
                            onclick: move |_| { navigator.push(Route::CaseEditPage { id: case.id }); },
                            span { class: "font-mono text-xs text-gray-500 w-14", "{case.method}" }
                            span { class: "flex-1 truncate", "{case.name}" }
                            ActiveBadge { active: case.is_active }
                        }
                    }
                } else if cases.is_loading() {
                    LoadingState { message: None }
                }
                div {
                    class: "flex flex-wrap gap-2 mt-4",
                    select {
                        class: "border border-gray-300 rounded px-2 py-1 text-sm",
                        value: "{new_method}",
                        onchange: move |e| new_method.set(e.value()),
                        for m in METHODS {
                            option { value: m, "{m}" }
                        }
                    }
                    input {
                        class: "w-28 border border-gray-300 rounded px-2 py-1 text-sm",
                        value: "{new_path}",
                        oninput: move |e| new_path.set(e.value()),
                    }
                    input {
                        class: "flex-1 border border-gray-300 rounded px-2 py-1 text-sm",
                        placeholder: "用例名称",
                        value: "{new_case}",
                        oninput: move |e| new_case.set(e.value()),
                    }
                    button {
                        class: "px-3 py-1 rounded bg-blue-600 text-white text-sm",
                        onclick: add_case,
                        "新建用例"
                    }
                }
            }
        }
    }
}

#[component]
fn Environments() -> Element {
    let state = use_project_state();
    let envs = state.read().environments.clone();
    let default_id = state.read().default_environment().map(|e| e.id);

    rsx! {
        Card {
            title: "环境",
            if envs.is_empty() {
                EmptyState { message: "暂无环境".to_string() }
            }
            for env in envs {
                div {
                    key: "{env.id}",
                    class: "py-2 border-b border-gray-100 last:border-b-0",
                    div {
                        class: "flex items-center gap-2",
                        span { class: "font-medium", "{env.name}" }
                        if Some(env.id) == default_id {
                            span { class: "px-2 py-0.5 rounded text-xs bg-blue-100 text-blue-700", "默认" }
                        }
                    }
                    div { class: "font-mono text-xs text-gray-500 break-all", "{env.base_url}" }
                }
            }
        }
    }
}

#[component]
fn ProjectSuites(project_id: i64) -> Element {
    let store = use_store();
    let navigator = use_navigator();
    let mut reload = use_reload();
    let mut name = use_signal(String::new);

    let suites = use_api({
        let api = store.api().clone();
        move || {
            reload.track();
            let api = api.clone();
            async move { api.get_project_suites(project_id, &PageParams::default()).await }
        }
    });

    let create = {
        let api = store.api().clone();
        move |_: MouseEvent| {
            let title = name.read().trim().to_string();
            if title.is_empty() {
                return;
            }
            let api = api.clone();
            spawn(async move {
                if api
                    .create_project_suite(project_id, &TestSuiteCreate::new(title))
                    .await
                    .is_ok()
                {
                    name.set(String::new());
                    reload.bump();
                }
            });
        }
    };

    let page = suites.data.read().as_ref().and_then(|r| r.as_ref().ok()).cloned();
    let ids: Vec<i64> = page.iter().flat_map(|p| p.items.iter().map(|s| s.id)).collect();

    rsx! {
        Card {
            title: "测试集",
            if let Some(page) = page {
                if page.is_empty() {
                    EmptyState { message: "暂无测试集".to_string() }
                } else {
                    TableView {
                        headers: ["ID", "名称", "执行方式", "用例数"].map(String::from).to_vec(),
                        data: page.items.iter().map(|s| vec![
                            s.id.to_string(),
                            s.name.clone(),
                            s.execution_mode.clone(),
                            s.case_count.to_string(),
                        ]).collect::<Vec<_>>(),
                        on_row_click: move |idx: usize| {
                            if let Some(&id) = ids.get(idx) {
                                navigator.push(Route::SuiteDetailPage { id });
                            }
                        },
                    }
                }
            }
            div {
                class: "flex gap-2 mt-4",
                input {
                    class: "flex-1 border border-gray-300 rounded px-2 py-1 text-sm",
                    placeholder: "测试集名称",
                    value: "{name}",
                    oninput: move |e| name.set(e.value()),
                }
                button {
                    class: "px-3 py-1 rounded bg-blue-600 text-white text-sm",
                    onclick: create,
                    "新建测试集"
                }
            }
        }
    }
}

#[component]
fn ProjectTrendCard(project_id: i64) -> Element {
    let api = use_store().api().clone();
    let trend = use_api(move || {
        let api = api.clone();
        async move { api.get_project_trend(project_id, None).await }
    });

    rsx! {
        Card {
            title: "执行趋势",
            if let Some(Ok(t)) = trend.data.read().as_ref() {
                if t.trend.is_empty() {
                    EmptyState { message: format!("最近 {} 天没有执行记录", t.days) }
                } else {
                    TableView {
                        headers: ["日期", "总数", "通过", "失败", "通过率"].map(String::from).to_vec(),
                        data: t.trend.iter().map(|p| vec![
                            p.date.clone(),
                            p.total.to_string(),
                            p.passed.to_string(),
                            p.failed.to_string(),
                            format!("{:.1}%", p.pass_rate),
                        ]).collect::<Vec<_>>(),
                    }
                }
            } else if trend.is_loading() {
                LoadingState { message: None }
            }
        }
    }
}
