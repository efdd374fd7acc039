// 项目状态仓库测试

use apipilot_client::error::AppError;
use apipilot_client::ProjectStore;
use apipilot_proto::prelude::*;
use serde_json::json;

mod test_helpers;
use test_helpers::{environment_json, module_json, page_json, project_json, project_summary_json, Harness};

fn store() -> (Harness, ProjectStore) {
    let h = Harness::new();
    let store = ProjectStore::new(h.api.clone());
    (h, store)
}

#[tokio::test]
async fn test_fetch_projects_populates_list() {
    let (h, store) = store();
    h.transport.push_ok(page_json(vec![
        project_summary_json(1, "alpha"),
        project_summary_json(2, "beta"),
    ]));

    let page = store.fetch_projects(&PageParams::default()).await.unwrap();
    assert_eq!(page.total, 2);

    let state = store.snapshot();
    assert_eq!(state.project_count(), 2);
    assert_eq!(store.project_count(), 2);
    assert_eq!(state.projects[1].name, "beta");
    assert!(!state.loading);
}

#[tokio::test]
async fn test_loading_cleared_after_failure() {
    let (h, store) = store();
    h.transport.push_status(500, json!({}));

    assert!(store.fetch_projects(&PageParams::default()).await.is_err());
    assert!(!store.is_loading());
    assert!(store.snapshot().projects.is_empty());
}

#[tokio::test]
async fn test_failed_fetch_modules_leaves_empty_and_rethrows() {
    let (h, store) = store();
    h.transport
        .push_ok(json!([module_json(1, "auth", json!([]))]));
    store.fetch_modules(1).await.unwrap();
    assert_eq!(store.snapshot().modules.len(), 1);

    h.transport
        .push_json(json!({"code": 500, "message": "模块加载失败"}));
    let err = store.fetch_modules(1).await.unwrap_err();
    assert_eq!(
        err,
        AppError::Business {
            code: 500,
            message: "模块加载失败".to_string()
        }
    );
    assert!(store.snapshot().modules.is_empty());
    assert_eq!(h.notifier.messages(), vec!["模块加载失败"]);
}

#[tokio::test]
async fn test_failed_fetch_project_clears_current() {
    let (h, store) = store();
    h.transport.push_ok(project_json(3, "gamma"));
    store.fetch_project(3).await.unwrap();
    assert_eq!(store.snapshot().current_project.map(|p| p.id), Some(3));

    h.transport.push_status(404, json!({}));
    store.fetch_project(4).await.unwrap_err();
    assert!(store.snapshot().current_project.is_none());
}

#[tokio::test]
async fn test_default_environment() {
    let (h, store) = store();
    h.transport.push_ok(json!([
        environment_json(1, 3, "dev", false),
        environment_json(2, 3, "staging", true),
    ]));
    store.fetch_environments(3).await.unwrap();

    let state = store.snapshot();
    assert_eq!(state.default_environment().map(|e| e.id), Some(2));
}

#[tokio::test]
async fn test_reset_keeps_projects() {
    let (h, store) = store();
    h.transport
        .push_ok(page_json(vec![project_summary_json(1, "alpha")]));
    h.transport.push_ok(project_json(1, "alpha"));
    h.transport
        .push_ok(json!([module_json(1, "auth", json!([]))]));
    h.transport
        .push_ok(json!([environment_json(1, 1, "dev", true)]));

    store.fetch_projects(&PageParams::default()).await.unwrap();
    store.fetch_project(1).await.unwrap();
    store.fetch_modules(1).await.unwrap();
    store.fetch_environments(1).await.unwrap();

    store.reset();
    let state = store.snapshot();
    assert!(state.current_project.is_none());
    assert!(state.modules.is_empty());
    assert!(state.environments.is_empty());
    assert_eq!(state.project_count(), 1);
    assert!(!state.loading);
}

#[tokio::test]
async fn test_subscribers_see_changes() {
    let (h, store) = store();
    let mut rx = store.subscribe();
    assert!(!rx.has_changed().unwrap());

    h.transport
        .push_ok(page_json(vec![project_summary_json(1, "alpha")]));
    store.fetch_projects(&PageParams::default()).await.unwrap();

    assert!(rx.has_changed().unwrap());
    let state = rx.borrow_and_update().clone();
    assert_eq!(state.projects.len(), 1);

    // 克隆共享同一份状态
    let other = store.clone();
    other.reset();
    assert!(rx.has_changed().unwrap());
}
