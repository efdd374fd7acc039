use apipilot_proto::prelude::*;
use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::app::Route;
use crate::components::card::Card;
use crate::components::common::{EmptyState, ErrorState, LoadingState};
use crate::components::data::KeyValueList;
use crate::components::page::{PageContainer, PageHeader};
use crate::components::status::StatusBadge;
use crate::components::table_view::TableView;
use crate::hooks::{use_api, use_api_client, use_project_state, use_reload, Reload};

const METHODS: [&str; 7] = ["GET", "POST", "PUT", "PATCH", "DELETE", "HEAD", "OPTIONS"];
const BODY_TYPES: [&str; 4] = ["none", "json", "form", "raw"];
const ASSERTION_TYPES: [&str; 5] = ["status_code", "json_path", "header", "response_time", "contains"];
const OPERATORS: [(&str, &str); 11] = [
    ("eq", "等于"),
    ("ne", "不等于"),
    ("gt", "大于"),
    ("lt", "小于"),
    ("gte", "大于等于"),
    ("lte", "小于等于"),
    ("contains", "包含"),
    ("not_contains", "不包含"),
    ("regex", "匹配正则"),
    ("is_null", "为空"),
    ("is_not_null", "不为空"),
];
const INPUT: &str = "border border-gray-300 rounded px-2 py-1 text-sm";
const BUTTON: &str = "px-3 py-1 rounded bg-blue-600 text-white text-sm hover:bg-blue-700";

#[component]
pub fn CaseEdit(id: i64) -> Element {
    let api = use_api_client();
    let reload = use_reload();
    let detail = use_api(move || {
        reload.track();
        let api = api.clone();
        async move { api.get_case(id).await }
    });

    let data = detail.data.read().clone();
    rsx! {
        PageContainer {
            match data {
                Some(Ok(detail)) => rsx! {
                    PageHeader {
                        title: "用例编辑".to_string(),
                        subtitle: Some(format!("{} {}", detail.case.method, detail.case.path))
                    }
                    CaseForm { key: "{detail.case.updated_at}", case: detail.case.clone(), reload }
                    AssertionList { case_id: id, assertions: detail.assertions.clone(), reload }
                    ExtractorList { case_id: id, extractors: detail.extractors.clone(), reload }
                    DebugRun { case_id: id }
                },
                Some(Err(err)) => rsx! { ErrorState { error: err.to_string(), title: Some("用例加载失败".to_string()) } },
                None => rsx! { LoadingState { message: None } },
            }
        }
    }
}

#[component]
fn CaseForm(case: TestCase, reload: Reload) -> Element {
    let api = use_api_client();
    let navigator = use_navigator();
    let id = case.id;
    let mut name = use_signal(|| case.name.clone());
    let mut method = use_signal(|| case.method.clone());
    let mut path = use_signal(|| case.path.clone());
    let mut body_type = use_signal(|| case.body_type.clone());
    let mut body = use_signal(|| case.body_content.clone().unwrap_or_default());
    let mut timeout = use_signal(|| case.timeout.to_string());
    let mut active = use_signal(|| case.is_active);

    let save = {
        let api = api.clone();
        move |_: MouseEvent| {
            let body_text = body.read().clone();
            let data = TestCaseUpdate {
                name: Some(name.read().clone()),
                method: Some(method.read().clone()),
                path: Some(path.read().clone()),
                body_type: Some(body_type.read().clone()),
                body_content: (!body_text.is_empty()).then_some(body_text),
                timeout: timeout.read().trim().parse().ok(),
                is_active: Some(*active.read()),
                ..Default::default()
            };
            let api = api.clone();
            let mut reload = reload;
            spawn(async move {
                if api.update_case(id, &data).await.is_ok() {
                    reload.bump();
                }
            });
        }
    };

    let copy = {
        let api = api.clone();
        move |_: MouseEvent| {
            let api = api.clone();
            spawn(async move {
                if let Ok(copy) = api.copy_case(id).await {
                    navigator.push(Route::CaseEditPage { id: copy.id });
                }
            });
        }
    };

    let remove = move |_: MouseEvent| {
        let api = api.clone();
        spawn(async move {
            if api.delete_case(id).await.is_ok() {
                navigator.go_back();
            }
        });
    };

    rsx! {
        Card {
            title: "请求定义",
            header_right: rsx! {
                button { class: BUTTON, onclick: save, "保存" }
                button { class: "px-3 py-1 rounded border border-gray-300 text-sm", onclick: copy, "复制" }
                button { class: "px-3 py-1 rounded bg-red-600 text-white text-sm", onclick: remove, "删除" }
            },
            div {
                class: "space-y-3",
                div {
                    class: "flex gap-2",
                    select {
                        class: INPUT,
                        value: "{method}",
                        onchange: move |e| method.set(e.value()),
                        for m in METHODS {
                            option { value: m, selected: *method.read() == m, "{m}" }
                        }
                    }
                    input {
                        class: "flex-1 {INPUT} font-mono",
                        value: "{path}",
                        oninput: move |e| path.set(e.value()),
                    }
                }
                input {
                    class: "w-full {INPUT}",
                    placeholder: "用例名称",
                    value: "{name}",
                    oninput: move |e| name.set(e.value()),
                }
                div {
                    class: "flex items-center gap-4 text-sm",
                    label { "请求体类型" }
                    select {
                        class: INPUT,
                        value: "{body_type}",
                        onchange: move |e| body_type.set(e.value()),
                        for t in BODY_TYPES {
                            option { value: t, selected: *body_type.read() == t, "{t}" }
                        }
                    }
                    label { "超时(秒)" }
                    input {
                        class: "w-20 {INPUT}",
                        value: "{timeout}",
                        oninput: move |e| timeout.set(e.value()),
                    }
                    label {
                        class: "flex items-center gap-1",
                        input {
                            r#type: "checkbox",
                            checked: *active.read(),
                            onchange: move |e| active.set(e.checked()),
                        }
                        "启用"
                    }
                }
                if body_type.read().as_str() != "none" {
                    textarea {
                        class: "w-full h-40 {INPUT} font-mono",
                        value: "{body}",
                        oninput: move |e| body.set(e.value()),
                    }
                }
            }
        }
    }
}

#[component]
fn AssertionList(case_id: i64, assertions: Vec<Assertion>, reload: Reload) -> Element {
    let api = use_api_client();
    let mut kind = use_signal(|| "status_code".to_string());
    let mut expression = use_signal(String::new);
    let mut operator = use_signal(|| "eq".to_string());
    let mut expected = use_signal(String::new);

    let add = {
        let api = api.clone();
        move |_: MouseEvent| {
            let expected_text = expected.read().clone();
            let data = AssertionCreate {
                name: None,
                kind: kind.read().clone(),
                expression: expression.read().clone(),
                operator: operator.read().clone(),
                expected_value: (!expected_text.is_empty()).then_some(expected_text),
                sort_order: 0,
            };
            let api = api.clone();
            let mut reload = reload;
            spawn(async move {
                if api.add_assertion(case_id, &data).await.is_ok() {
                    expression.set(String::new());
                    expected.set(String::new());
                    reload.bump();
                }
            });
        }
    };

    rsx! {
        Card {
            title: "断言",
            div {
                class: "space-y-2",
                if assertions.is_empty() {
                    EmptyState { message: "暂无断言".to_string() }
                }
                for a in assertions {
                    AssertionItem { key: "{a.id}", assertion: a.clone(), reload }
                }
                div {
                    class: "flex flex-wrap gap-2 pt-2",
                    select {
                        class: INPUT,
                        onchange: move |e| kind.set(e.value()),
                        for t in ASSERTION_TYPES {
                            option { value: t, selected: *kind.read() == t, "{t}" }
                        }
                    }
                    input {
                        class: "flex-1 {INPUT} font-mono",
                        placeholder: "表达式，如 $.data.id",
                        value: "{expression}",
                        oninput: move |e| expression.set(e.value()),
                    }
                    select {
                        class: INPUT,
                        onchange: move |e| operator.set(e.value()),
                        for (op, label) in OPERATORS {
                            option { value: op, selected: *operator.read() == op, "{label}" }
                        }
                    }
                    input {
                        class: INPUT,
                        placeholder: "期望值",
                        value: "{expected}",
                        oninput: move |e| expected.set(e.value()),
                    }
                    button { class: BUTTON, onclick: add, "添加断言" }
                }
            }
        }
    }
}

#[component]
fn AssertionItem(assertion: Assertion, reload: Reload) -> Element {
    let api = use_api_client();
    let id = assertion.id;
    let operator = OPERATORS
        .iter()
        .find(|(op, _)| *op == assertion.operator)
        .map(|(_, label)| *label)
        .unwrap_or(assertion.operator.as_str())
        .to_string();

    rsx! {
        div {
            class: "flex items-center gap-3 py-1 border-b border-gray-100 text-sm",
            span { class: "w-28 text-gray-500", "{assertion.kind}" }
            span { class: "flex-1 font-mono", "{assertion.expression}" }
            span { "{operator}" }
            span { class: "font-mono", {assertion.expected_value.clone().unwrap_or_default()} }
            button {
                class: "text-red-500 hover:text-red-700",
                onclick: move |_| {
                    let api = api.clone();
                    let mut reload = reload;
                    spawn(async move {
                        if api.delete_assertion(id).await.is_ok() {
                            reload.bump();
                        }
                    });
                },
                "删除"
            }
        }
    }
}

#[component]
fn ExtractorList(case_id: i64, extractors: Vec<Extractor>, reload: Reload) -> Element {
    let api = use_api_client();
    let mut variable = use_signal(String::new);
    let mut source = use_signal(|| "body".to_string());
    let mut expression = use_signal(String::new);

    let add = {
        let api = api.clone();
        move |_: MouseEvent| {
            let var = variable.read().trim().to_string();
            if var.is_empty() {
                return;
            }
            let data = ExtractorCreate {
                name: var.clone(),
                source: source.read().clone(),
                expression: expression.read().clone(),
                variable_name: var,
                default_value: None,
                sort_order: 0,
            };
            let api = api.clone();
            let mut reload = reload;
            spawn(async move {
                if api.add_extractor(case_id, &data).await.is_ok() {
                    variable.set(String::new());
                    expression.set(String::new());
                    reload.bump();
                }
            });
        }
    };

    let ids: Vec<i64> = extractors.iter().map(|e| e.id).collect();

    rsx! {
        Card {
            title: "变量提取",
            if extractors.is_empty() {
                EmptyState { message: "暂无提取规则".to_string() }
            } else {
                TableView {
                    headers: ["变量", "来源", "表达式", "默认值"].map(String::from).to_vec(),
                    data: extractors.iter().map(|e| vec![
                        e.variable_name.clone(),
                        e.source.clone(),
                        e.expression.clone(),
                        e.default_value.clone().unwrap_or_default(),
                    ]).collect::<Vec<_>>(),
                    // 点击行删除
                    on_row_click: move |idx: usize| {
                        let Some(&id) = ids.get(idx) else { return };
                        let api = api.clone();
                        let mut reload = reload;
                        spawn(async move {
                            if api.delete_extractor(id).await.is_ok() {
                                reload.bump();
                            }
                        });
                    },
                }
            }
            div {
                class: "flex flex-wrap gap-2 pt-3",
                input {
                    class: INPUT,
                    placeholder: "变量名",
                    value: "{variable}",
                    oninput: move |e| variable.set(e.value()),
                }
                select {
                    class: INPUT,
                    onchange: move |e| source.set(e.value()),
                    for s in ["body", "header", "cookie"] {
                        option { value: s, selected: *source.read() == s, "{s}" }
                    }
                }
                input {
                    class: "flex-1 {INPUT} font-mono",
                    placeholder: "表达式",
                    value: "{expression}",
                    oninput: move |e| expression.set(e.value()),
                }
                button { class: BUTTON, onclick: add, "添加" }
            }
        }
    }
}

#[component]
fn DebugRun(case_id: i64) -> Element {
    let api = use_api_client();
    let state = use_project_state();
    let mut env_id = use_signal(|| state.read().default_environment().map(|e| e.id));
    let mut running = use_signal(|| false);
    let mut result = use_signal(|| None::<CaseRunResult>);

    let envs = state.read().environments.clone();
    let run = move |_: MouseEvent| {
        let Some(environment_id) = *env_id.read() else {
            return;
        };
        let api = api.clone();
        spawn(async move {
            running.set(true);
            let request = ExecuteCaseRequest {
                test_case_id: case_id,
                environment_id,
            };
            if let Ok(r) = api.execute_case(&request).await {
                result.set(Some(r));
            }
            running.set(false);
        });
    };

    rsx! {
        Card {
            title: "调试运行",
            div {
                class: "flex items-center gap-2 mb-4",
                if envs.is_empty() {
                    input {
                        class: "w-32 {INPUT}",
                        placeholder: "环境 ID",
                        oninput: move |e| env_id.set(e.value().trim().parse().ok()),
                    }
                } else {
                    select {
                        class: INPUT,
                        onchange: move |e| env_id.set(e.value().parse().ok()),
                        for env in envs {
                            option { value: "{env.id}", selected: *env_id.read() == Some(env.id), "{env.name}" }
                        }
                    }
                }
                button {
                    class: BUTTON,
                    disabled: *running.read() || env_id.read().is_none(),
                    onclick: run,
                    if *running.read() { "运行中..." } else { "运行" }
                }
            }
            if let Some(r) = result.read().as_ref() {
                div {
                    class: "space-y-3",
                    StatusBadge { status: r.status.clone() }
                    KeyValueList {
                        items: vec![
                            ("请求", format!("{} {}", r.request_method.as_deref().unwrap_or("-"), r.request_url.as_deref().unwrap_or("-"))),
                            ("状态码", r.response_status_code.map(|c| c.to_string()).unwrap_or_else(|| "-".to_string())),
                            ("耗时", r.duration_ms.map(|d| format!("{d}ms")).unwrap_or_else(|| "-".to_string())),
                            ("错误", r.error_message.clone()),
                        ]
                    }
                    if let Some(body) = r.response_body.as_ref() {
                        pre { class: "bg-gray-900 text-gray-100 text-xs p-3 rounded overflow-x-auto", "{body}" }
                    }
                }
            }
        }
    }
}
