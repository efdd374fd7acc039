//! Client-side route table: URL path → view plus display metadata.

use std::collections::BTreeMap;

pub const APP_NAME: &str = "ApiPilot";

/// Views the router can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Dashboard,
    ProjectList,
    ProjectDetail,
    CaseEdit,
    SuiteList,
    SuiteDetail,
    ScheduleList,
    ExecutionList,
    ExecutionDetail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteMeta {
    pub title: Option<&'static str>,
    pub icon: Option<&'static str>,
    /// Hidden routes are reachable but not listed in navigation menus.
    pub hidden: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    /// Relative to the layout root; `:name` segments capture a parameter.
    pub path: &'static str,
    pub name: &'static str,
    pub view: View,
    pub meta: RouteMeta,
}

impl RouteEntry {
    pub fn full_path(&self) -> String {
        format!("/{}", self.path)
    }
}

/// Where `/` lands.
pub const ROOT_REDIRECT: &str = "/dashboard";

const fn shown(title: &'static str, icon: &'static str) -> RouteMeta {
    RouteMeta {
        title: Some(title),
        icon: Some(icon),
        hidden: false,
    }
}

const fn hidden(title: &'static str) -> RouteMeta {
    RouteMeta {
        title: Some(title),
        icon: None,
        hidden: true,
    }
}

pub static ROUTES: &[RouteEntry] = &[
    RouteEntry {
        path: "dashboard",
        name: "Dashboard",
        view: View::Dashboard,
        meta: shown("首页", "HomeFilled"),
    },
    RouteEntry {
        path: "projects",
        name: "ProjectList",
        view: View::ProjectList,
        meta: shown("项目管理", "Folder"),
    },
    RouteEntry {
        path: "projects/:id",
        name: "ProjectDetail",
        view: View::ProjectDetail,
        meta: hidden("项目详情"),
    },
    RouteEntry {
        path: "cases/:id/edit",
        name: "CaseEdit",
        view: View::CaseEdit,
        meta: hidden("用例编辑"),
    },
    RouteEntry {
        path: "suites",
        name: "SuiteList",
        view: View::SuiteList,
        meta: shown("测试集", "Collection"),
    },
    RouteEntry {
        path: "suites/:id",
        name: "SuiteDetail",
        view: View::SuiteDetail,
        meta: hidden("测试集详情"),
    },
    RouteEntry {
        path: "schedules",
        name: "ScheduleList",
        view: View::ScheduleList,
        meta: shown("定时任务", "Clock"),
    },
    RouteEntry {
        path: "executions",
        name: "ExecutionList",
        view: View::ExecutionList,
        meta: shown("执行历史", "Document"),
    },
    RouteEntry {
        path: "executions/:id",
        name: "ExecutionDetail",
        view: View::ExecutionDetail,
        meta: hidden("执行详情"),
    },
];

/// A path resolved against [`ROUTES`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub route: &'static RouteEntry,
    pub params: BTreeMap<String, String>,
}

impl RouteMatch {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// Numeric `:id` parameter.
    pub fn id(&self) -> Option<i64> {
        self.param("id").and_then(|v| v.parse().ok())
    }
}

pub fn entry(view: View) -> &'static RouteEntry {
    ROUTES
        .iter()
        .find(|r| r.view == view)
        .unwrap_or(&ROUTES[0])
}

pub fn meta(view: View) -> RouteMeta {
    entry(view).meta
}

/// Resolve a URL path (query and fragment ignored). `/` follows the root redirect.
pub fn resolve(path: &str) -> Option<RouteMatch> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        return resolve(ROOT_REDIRECT);
    }
    let segments: Vec<&str> = trimmed.split('/').collect();

    ROUTES.iter().find_map(|route| {
        let pattern: Vec<&str> = route.path.split('/').collect();
        if pattern.len() != segments.len() {
            return None;
        }
        let mut params = BTreeMap::new();
        for (pat, seg) in pattern.iter().zip(&segments) {
            match pat.strip_prefix(':') {
                Some(name) if !seg.is_empty() => {
                    params.insert(name.to_string(), seg.to_string());
                }
                Some(_) => return None,
                None if pat == seg => {}
                None => return None,
            }
        }
        Some(RouteMatch { route, params })
    })
}

/// Entries shown in navigation menus, in table order.
pub fn nav_items() -> impl Iterator<Item = &'static RouteEntry> {
    ROUTES.iter().filter(|r| !r.meta.hidden)
}

/// Document title for a route: `"{title} - ApiPilot"`, or just the product name.
pub fn document_title(meta: Option<&RouteMeta>) -> String {
    match meta.and_then(|m| m.title) {
        Some(title) => format!("{title} - {APP_NAME}"),
        None => APP_NAME.to_string(),
    }
}

/// Navigation guard run before every transition; returns the title to apply.
pub fn before_each(to: &str) -> String {
    let matched = resolve(to);
    if matched.is_none() {
        log::debug!("no route for {to}");
    }
    document_title(matched.as_ref().map(|m| &m.route.meta))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_redirects_to_dashboard() {
        let m = resolve("/").unwrap();
        assert_eq!(m.route.view, View::Dashboard);
        assert_eq!(resolve("").unwrap().route.name, "Dashboard");
    }

    #[test]
    fn test_resolve_params() {
        let m = resolve("/cases/42/edit").unwrap();
        assert_eq!(m.route.view, View::CaseEdit);
        assert_eq!(m.id(), Some(42));

        let m = resolve("/executions/7?tab=steps").unwrap();
        assert_eq!(m.route.view, View::ExecutionDetail);
        assert_eq!(m.param("id"), Some("7"));

        assert_eq!(resolve("/projects/").unwrap().route.view, View::ProjectList);
    }

    #[test]
    fn test_resolve_unknown() {
        assert!(resolve("/nope").is_none());
        assert!(resolve("/cases/1").is_none());
        assert!(resolve("/projects/1/extra").is_none());
    }

    #[test]
    fn test_nav_items_hide_detail_pages() {
        let names: Vec<&str> = nav_items().map(|r| r.name).collect();
        assert_eq!(
            names,
            vec!["Dashboard", "ProjectList", "SuiteList", "ScheduleList", "ExecutionList"]
        );
        assert!(nav_items().all(|r| r.meta.icon.is_some()));
    }

    #[test]
    fn test_document_title() {
        assert_eq!(before_each("/projects"), "项目管理 - ApiPilot");
        assert_eq!(before_each("/suites/3"), "测试集详情 - ApiPilot");
        assert_eq!(before_each("/missing"), "ApiPilot");

        let untitled = RouteMeta {
            title: None,
            icon: None,
            hidden: false,
        };
        assert_eq!(document_title(Some(&untitled)), "ApiPilot");
    }

    #[test]
    fn test_every_view_has_entry() {
        for route in ROUTES {
            assert_eq!(entry(route.view).path, route.path);
            assert_eq!(resolve(&route.full_path().replace(":id", "1")).unwrap().route, route);
        }
    }
}
