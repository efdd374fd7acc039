use dioxus::prelude::*;

use crate::components::icon::Icon;

/// 可折叠卡片，默认收起
#[component]
pub fn CollapsibleCard(title: String, children: Element) -> Element {
    let mut is_open = use_signal(|| false);

    rsx! {
        div {
            class: "border border-gray-200 rounded-lg mb-2",
            div {
                class: "px-4 py-3 bg-gray-50 border-b border-gray-200 cursor-pointer hover:bg-gray-100 transition-colors",
                onclick: move |_| is_open.toggle(),
                div {
                    class: "flex items-center justify-between",
                    span { class: "text-sm font-medium text-gray-900", "{title}" }
                    div {
                        class: if *is_open.read() { "transition-transform duration-200 rotate-180" } else { "transition-transform duration-200" },
                        Icon { icon: &icondata::AiDownOutlined, class: "w-4 h-4 text-gray-500" }
                    }
                }
            }
            if *is_open.read() {
                div { class: "p-4", {children} }
            }
        }
    }
}
