use dioxus::prelude::*;

/// 两列的字段/值描述列表
#[component]
pub fn KeyValueList(items: Vec<(&'static str, String)>) -> Element {
    rsx! {
        dl {
            class: "grid grid-cols-1 sm:grid-cols-2 gap-x-6 gap-y-2 text-sm",
            for (label, value) in items {
                div {
                    class: "flex justify-between gap-4 py-1 border-b border-gray-100",
                    dt { class: "text-gray-500 shrink-0", "{label}" }
                    dd { class: "font-mono text-gray-900 text-right break-all", "{value}" }
                }
            }
        }
    }
}
