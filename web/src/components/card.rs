use dioxus::prelude::*;

/// 白底卡片，标题栏右侧可放操作按钮
#[component]
pub fn Card(
    title: &'static str,
    children: Element,
    #[props(optional)] header_right: Option<Element>,
    #[props(optional)] footer: Option<Element>,
) -> Element {
    rsx! {
        section {
            class: "bg-white rounded-lg shadow-sm border border-gray-200",
            div {
                class: "px-6 py-4 border-b border-gray-200 flex items-center justify-between gap-3",
                h3 { class: "text-base font-semibold text-gray-900", "{title}" }
                if let Some(el) = header_right {
                    div { class: "flex items-center gap-2", {el} }
                }
            }
            div { class: "p-6", {children} }
            if let Some(el) = footer {
                div { class: "px-6 py-3 border-t border-gray-100 bg-gray-50 rounded-b-lg", {el} }
            }
        }
    }
}
