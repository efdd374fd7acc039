use dioxus::prelude::*;

use crate::components::icon::Icon;

#[component]
pub fn LoadingState(message: Option<String>) -> Element {
    rsx! {
        div {
            class: "flex items-center justify-center gap-2 py-8 text-gray-500",
            Icon { icon: &icondata::AiLoadingOutlined, class: "w-5 h-5 animate-spin" }
            span { {message.unwrap_or_else(|| "加载中...".to_string())} }
        }
    }
}

/// 接口失败时的占位；具体原因已由全局提示展示过一次
#[component]
pub fn ErrorState(error: String, title: Option<String>) -> Element {
    rsx! {
        div {
            class: "flex items-start gap-3 p-4 bg-red-50 border border-red-200 rounded text-red-600",
            Icon { icon: &icondata::AiExclamationCircleOutlined, class: "w-5 h-5 mt-0.5" }
            div {
                if let Some(title) = title {
                    h3 { class: "font-semibold mb-1", "{title}" }
                }
                p { class: "text-sm break-all", "{error}" }
            }
        }
    }
}

#[component]
pub fn EmptyState(message: String) -> Element {
    rsx! {
        div {
            class: "flex flex-col items-center gap-2 py-8 text-gray-400",
            Icon { icon: &icondata::AiInboxOutlined, class: "w-8 h-8" }
            span { class: "text-sm", "{message}" }
        }
    }
}
