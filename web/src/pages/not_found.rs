use dioxus::prelude::*;
use dioxus_router::Link;

use crate::app::Route;
use crate::components::common::EmptyState;
use crate::components::page::{PageContainer, PageHeader};

#[component]
pub fn NotFound(path: String) -> Element {
    rsx! {
        PageContainer {
            PageHeader { title: "页面不存在".to_string(), subtitle: Some(path) }
            EmptyState { message: "没有找到对应的页面".to_string() }
            Link { to: Route::DashboardPage {}, class: "text-blue-600 hover:underline", "返回首页" }
        }
    }
}
