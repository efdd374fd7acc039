use apipilot_proto::prelude::*;
use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::app::Route;
use crate::components::card::Card;
use crate::components::common::{EmptyState, ErrorState, LoadingState};
use crate::components::page::{PageContainer, PageHeader};
use crate::components::status::ActiveBadge;
use crate::hooks::{use_api, use_api_client, use_reload, Reload};
use crate::pages::fmt_time;

const INPUT: &str = "border border-gray-300 rounded px-2 py-1 text-sm";

#[component]
pub fn ScheduleList() -> Element {
    let api = use_api_client();
    let reload = use_reload();
    // None 表示全部
    let mut active_filter = use_signal(|| None::<bool>);

    let schedules = use_api(move || {
        reload.track();
        let api = api.clone();
        let query = ScheduleQuery {
            is_active: *active_filter.read(),
            ..Default::default()
        };
        async move { api.get_schedules(&query).await }
    });

    rsx! {
        PageContainer {
            PageHeader { title: "定时任务".to_string(), subtitle: None }
            ScheduleForm { reload }
            Card {
                title: "任务列表",
                header_right: rsx! {
                    select {
                        class: INPUT,
                        onchange: move |e| active_filter.set(match e.value().as_str() {
                            "on" => Some(true),
                            "off" => Some(false),
                            _ => None,
                        }),
                        option { value: "all", "全部" }
                        option { value: "on", "启用" }
                        option { value: "off", "停用" }
                    }
                },
                if schedules.is_loading() {
                    LoadingState { message: None }
                } else if let Some(Ok(page)) = schedules.data.read().as_ref() {
                    if page.is_empty() {
                        EmptyState { message: "暂无定时任务".to_string() }
                    }
                    for s in page.items.iter().cloned() {
                        ScheduleItem { key: "{s.id}", schedule: s, reload }
                    }
                } else if let Some(Err(err)) = schedules.data.read().as_ref() {
                    ErrorState { error: err.to_string(), title: None }
                }
            }
        }
    }
}

#[component]
fn ScheduleItem(schedule: ScheduleSummary, reload: Reload) -> Element {
    let api = use_api_client();
    let navigator = use_navigator();
    let id = schedule.id;
    let active = schedule.is_active;

    let toggle = {
        let api = api.clone();
        move |_: MouseEvent| {
            let api = api.clone();
            let mut reload = reload;
            spawn(async move {
                if api.toggle_schedule(id, !active).await.is_ok() {
                    reload.bump();
                }
            });
        }
    };
    let run_now = {
        let api = api.clone();
        move |_: MouseEvent| {
            let api = api.clone();
            spawn(async move {
                if let Ok(execution) = api.run_schedule_now(id).await {
                    navigator.push(Route::ExecutionDetailPage { id: execution.id });
                }
            });
        }
    };
    let remove = move |_: MouseEvent| {
        let api = api.clone();
        let mut reload = reload;
        spawn(async move {
            if api.delete_schedule(id).await.is_ok() {
                reload.bump();
            }
        });
    };

    let suite = schedule
        .suite_name
        .clone()
        .unwrap_or_else(|| format!("#{}", schedule.suite_id));
    let env = schedule
        .environment_name
        .clone()
        .unwrap_or_else(|| format!("#{}", schedule.environment_id));

    rsx! {
        div {
            class: "flex items-center gap-4 py-2 border-b border-gray-100 text-sm",
            div {
                class: "flex-1",
                div { class: "font-medium", "{schedule.name}" }
                div { class: "text-xs text-gray-500", "{suite} · {env}" }
            }
            span { class: "font-mono text-xs", "{schedule.cron_expression}" }
            ActiveBadge { active }
            div {
                class: "w-40 text-xs text-gray-500",
                div { "上次: " {fmt_time(schedule.last_run_at)} }
                div { "下次: " {fmt_time(schedule.next_run_at)} }
            }
            button {
                class: "px-2 py-0.5 rounded border border-gray-300 text-xs",
                onclick: toggle,
                if active { "停用" } else { "启用" }
            }
            button {
                class: "px-2 py-0.5 rounded border border-gray-300 text-xs",
                onclick: run_now,
                "立即执行"
            }
            button {
                class: "px-2 py-0.5 rounded text-xs text-red-600 hover:bg-red-50",
                onclick: remove,
                "删除"
            }
        }
    }
}

#[component]
fn ScheduleForm(reload: Reload) -> Element {
    let api = use_api_client();
    let mut name = use_signal(String::new);
    let mut suite_id = use_signal(String::new);
    let mut env_id = use_signal(String::new);
    let mut cron = use_signal(|| "0 2 * * *".to_string());
    let mut emails = use_signal(String::new);

    let create = move |_: MouseEvent| {
        let (Ok(suite), Ok(env)) = (
            suite_id.read().trim().parse::<i64>(),
            env_id.read().trim().parse::<i64>(),
        ) else {
            return;
        };
        let notify = emails.read().trim().to_string();
        let data = ScheduleCreate {
            name: name.read().trim().to_string(),
            suite_id: suite,
            environment_id: env,
            cron_expression: cron.read().trim().to_string(),
            is_active: true,
            notify_on_failure: !notify.is_empty(),
            notify_emails: (!notify.is_empty()).then_some(notify),
        };
        let api = api.clone();
        let mut reload = reload;
        spawn(async move {
            if api.create_schedule(&data).await.is_ok() {
                name.set(String::new());
                emails.set(String::new());
                reload.bump();
            }
        });
    };

    rsx! {
        Card {
            title: "新建定时任务",
            div {
                class: "flex flex-wrap gap-2",
                input { class: INPUT, placeholder: "任务名称", value: "{name}", oninput: move |e| name.set(e.value()) }
                input { class: "w-24 {INPUT}", placeholder: "测试集 ID", value: "{suite_id}", oninput: move |e| suite_id.set(e.value()) }
                input { class: "w-24 {INPUT}", placeholder: "环境 ID", value: "{env_id}", oninput: move |e| env_id.set(e.value()) }
                input { class: "w-32 {INPUT} font-mono", placeholder: "cron", value: "{cron}", oninput: move |e| cron.set(e.value()) }
                input { class: "flex-1 {INPUT}", placeholder: "失败通知邮箱，逗号分隔", value: "{emails}", oninput: move |e| emails.set(e.value()) }
                button {
                    class: "px-3 py-1 rounded bg-blue-600 text-white text-sm hover:bg-blue-700",
                    onclick: create,
                    "创建"
                }
            }
        }
    }
}
