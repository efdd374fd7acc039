use std::sync::Arc;

use apipilot_client::config::DEFAULT_BASE_URL;
use apipilot_client::routes::View;
use apipilot_client::{ApiClient, ClientConfig, ProjectStore};
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};

use crate::components::layout::AppLayout;
use crate::components::toast::ToastNotifier;
use crate::pages::{
    case_edit::CaseEdit, dashboard::Dashboard, execution_detail::ExecutionDetail,
    executions::ExecutionList, not_found::NotFound, project_detail::ProjectDetail,
    projects::ProjectList, schedules::ScheduleList, suite_detail::SuiteDetail, suites::SuiteList,
};

#[derive(Routable, Clone, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]
        #[redirect("/", || Route::DashboardPage {})]
        #[route("/dashboard")]
        DashboardPage {},
        #[route("/projects")]
        ProjectListPage {},
        #[route("/projects/:id")]
        ProjectDetailPage { id: i64 },
        #[route("/cases/:id/edit")]
        CaseEditPage { id: i64 },
        #[route("/suites")]
        SuiteListPage {},
        #[route("/suites/:id")]
        SuiteDetailPage { id: i64 },
        #[route("/schedules")]
        ScheduleListPage {},
        #[route("/executions")]
        ExecutionListPage {},
        #[route("/executions/:id")]
        ExecutionDetailPage { id: i64 },
        #[route("/:..segments")]
        NotFoundPage { segments: Vec<String> },
}

impl Route {
    pub fn view(&self) -> Option<View> {
        Some(match self {
            Route::DashboardPage {} => View::Dashboard,
            Route::ProjectListPage {} => View::ProjectList,
            Route::ProjectDetailPage { .. } => View::ProjectDetail,
            Route::CaseEditPage { .. } => View::CaseEdit,
            Route::SuiteListPage {} => View::SuiteList,
            Route::SuiteDetailPage { .. } => View::SuiteDetail,
            Route::ScheduleListPage {} => View::ScheduleList,
            Route::ExecutionListPage {} => View::ExecutionList,
            Route::ExecutionDetailPage { .. } => View::ExecutionDetail,
            Route::NotFoundPage { .. } => return None,
        })
    }
}

#[component]
pub fn DashboardPage() -> Element {
    rsx! { Dashboard {} }
}

#[component]
pub fn ProjectListPage() -> Element {
    rsx! { ProjectList {} }
}

#[component]
pub fn ProjectDetailPage(id: i64) -> Element {
    rsx! { ProjectDetail { key: "{id}", id } }
}

#[component]
pub fn CaseEditPage(id: i64) -> Element {
    rsx! { CaseEdit { key: "{id}", id } }
}

#[component]
pub fn SuiteListPage() -> Element {
    rsx! { SuiteList {} }
}

#[component]
pub fn SuiteDetailPage(id: i64) -> Element {
    rsx! { SuiteDetail { key: "{id}", id } }
}

#[component]
pub fn ScheduleListPage() -> Element {
    rsx! { ScheduleList {} }
}

#[component]
pub fn ExecutionListPage() -> Element {
    rsx! { ExecutionList {} }
}

#[component]
pub fn ExecutionDetailPage(id: i64) -> Element {
    rsx! { ExecutionDetail { key: "{id}", id } }
}

#[component]
pub fn NotFoundPage(segments: Vec<String>) -> Element {
    rsx! { NotFound { path: format!("/{}", segments.join("/")) } }
}

/// 获取当前页面的origin，后端与前端同源部署
fn client_config() -> ClientConfig {
    let origin = web_sys::window().and_then(|w| w.location().origin().ok());
    match origin {
        Some(origin) => ClientConfig::new(origin),
        None => {
            log::warn!("no window origin, falling back to {DEFAULT_BASE_URL}");
            ClientConfig::new(DEFAULT_BASE_URL)
        }
    }
}

#[component]
pub fn App() -> Element {
    use_context_provider(|| {
        let api = ApiClient::with_notifier(client_config(), Arc::new(ToastNotifier));
        ProjectStore::new(api)
    });

    rsx! {
        Router::<Route> {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use apipilot_client::routes::ROUTES;

    #[test]
    fn test_router_mirrors_route_table() {
        for entry in ROUTES {
            let path = entry.full_path().replace(":id", "7");
            let route = path.parse::<Route>().unwrap_or_else(|_| panic!("{path} not routable"));
            assert_eq!(route.view(), Some(entry.view), "{path}");
            assert_eq!(route.to_string(), path);
        }
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        let route = "/nope/here".parse::<Route>().unwrap();
        assert_eq!(route.view(), None);
    }
}
