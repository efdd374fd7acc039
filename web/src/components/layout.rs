use apipilot_client::routes;
use dioxus::prelude::*;
use dioxus_router::{use_route, Outlet};

use crate::app::Route;
use crate::components::header::Header;
use crate::components::toast::ToastHost;

/// 应用外壳：顶部导航、页面内容与全局提示
#[component]
pub fn AppLayout() -> Element {
    let route = use_route::<Route>();
    // 每次导航前根据路由元信息计算页面标题
    let title = routes::before_each(&route.to_string());

    rsx! {
        document::Title { "{title}" }
        div {
            class: "min-h-screen bg-gray-50",
            Header {}
            main {
                class: "max-w-7xl mx-auto px-6 py-8",
                Outlet::<Route> {}
            }
            ToastHost {}
        }
    }
}
