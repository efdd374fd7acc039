use dioxus::prelude::*;

/// 页面标题，副标题可选
#[component]
pub fn PageHeader(title: String, subtitle: Option<String>) -> Element {
    rsx! {
        div {
            class: "mb-2",
            h1 { class: "text-2xl font-bold text-gray-900", "{title}" }
            if let Some(subtitle) = subtitle {
                p { class: "mt-1 text-sm text-gray-500", "{subtitle}" }
            }
        }
    }
}

#[component]
pub fn PageContainer(children: Element) -> Element {
    rsx! {
        div { class: "space-y-6", {children} }
    }
}
