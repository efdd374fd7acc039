use apipilot_client::routes::{self, RouteEntry, APP_NAME};
use dioxus::prelude::*;
use dioxus_router::{use_route, Link};

use crate::app::Route;
use crate::components::icon::{route_icon, Icon};

#[component]
pub fn Header() -> Element {
    rsx! {
        header {
            class: "bg-white shadow-sm border-b border-gray-200",
            div {
                class: "px-6 py-4",
                div {
                    class: "flex items-center justify-between",
                    // Logo and Brand
                    div {
                        class: "flex items-center space-x-4",
                        Link {
                            to: Route::DashboardPage {},
                            class: "text-xl font-bold text-gray-900 hover:text-blue-600",
                            "{APP_NAME}"
                        }
                    }

                    // 导航菜单只列出非隐藏路由
                    nav {
                        class: "hidden md:flex items-center space-x-1",
                        for entry in routes::nav_items() {
                            NavTab { entry: *entry }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn NavTab(entry: RouteEntry) -> Element {
    let current = use_route::<Route>().to_string();
    let base = entry.full_path();
    let is_active = current == base || current.starts_with(&format!("{base}/"));

    let class_str = if is_active {
        "flex items-center space-x-2 px-3 py-2 rounded-lg text-sm font-medium transition-colors bg-blue-100 text-blue-700 hover:bg-blue-200"
    } else {
        "flex items-center space-x-2 px-3 py-2 rounded-lg text-sm font-medium transition-colors text-gray-700 hover:bg-gray-100 hover:text-gray-900"
    };
    let label = entry.meta.title.unwrap_or(entry.name);

    rsx! {
        Link {
            to: base.clone(),
            class: class_str,
            if let Some(name) = entry.meta.icon {
                Icon { icon: route_icon(name), class: "w-4 h-4" }
            }
            span {
                class: "hidden lg:inline",
                "{label}"
            }
        }
    }
}
