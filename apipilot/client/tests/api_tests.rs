// 资源 API 模块测试
// 校验每个函数映射到正确的方法、路径、查询参数与请求体

use apipilot_client::error::AppError;
use apipilot_proto::prelude::*;
use reqwest::Method;
use serde_json::json;

mod test_helpers;
use test_helpers::{environment_json, module_json, page_json, project_json, project_summary_json, Harness};

fn suite_json(id: i64) -> serde_json::Value {
    json!({
        "id": id, "project_id": 1, "name": "smoke", "description": null,
        "execution_mode": "sequential",
        "created_at": "2024-05-01T08:00:00", "updated_at": "2024-05-01T08:00:00"
    })
}

fn schedule_json(id: i64, active: bool) -> serde_json::Value {
    json!({
        "id": id, "name": "nightly", "suite_id": 2, "environment_id": 3,
        "cron_expression": "0 2 * * *", "is_active": active, "notify_on_failure": false,
        "notify_emails": null, "last_run_at": null, "next_run_at": null,
        "created_at": "2024-05-01T08:00:00", "updated_at": "2024-05-01T08:00:00"
    })
}

fn execution_json(id: i64) -> serde_json::Value {
    json!({
        "id": id, "suite_id": 2, "test_case_id": null, "environment_id": 3,
        "trigger_type": "manual", "status": "pending",
        "total_count": 0, "passed_count": 0, "failed_count": 0, "skipped_count": 0,
        "duration_ms": null, "started_at": null, "finished_at": null,
        "created_at": "2024-05-01T08:00:00"
    })
}

// ========== 项目 ==========

#[tokio::test]
async fn test_project_crud_paths() {
    let h = Harness::new();

    h.transport
        .push_ok(page_json(vec![project_summary_json(1, "alpha")]));
    let page = h.api.get_projects(&PageParams::new(1, 10)).await.unwrap();
    assert_eq!(page.items[0].name, "alpha");
    let req = h.transport.last_request();
    assert_eq!(req.method, Method::GET);
    assert_eq!(req.url, Harness::url("/projects?page=1&page_size=10"));

    h.transport.push_ok(project_json(1, "alpha"));
    let project = h
        .api
        .create_project(&ProjectCreate {
            name: "alpha".to_string(),
            description: None,
        })
        .await
        .unwrap();
    assert_eq!(project.id, 1);
    let req = h.transport.last_request();
    assert_eq!(req.method, Method::POST);
    assert_eq!(req.body, Some(json!({"name": "alpha"})));

    h.transport.push_ok(project_json(1, "beta"));
    h.api
        .update_project(
            1,
            &ProjectUpdate {
                name: Some("beta".to_string()),
                description: None,
            },
        )
        .await
        .unwrap();
    let req = h.transport.last_request();
    assert_eq!(req.method, Method::PUT);
    assert_eq!(req.url, Harness::url("/projects/1"));

    h.transport.push_ok(json!(null));
    h.api.delete_project(1).await.unwrap();
    let req = h.transport.last_request();
    assert_eq!(req.method, Method::DELETE);
    assert_eq!(req.url, Harness::url("/projects/1"));
}

#[tokio::test]
async fn test_project_without_data_is_error() {
    let h = Harness::new();
    h.transport.push_ok(json!(null));
    assert_eq!(h.api.get_project(5).await.unwrap_err(), AppError::EmptyData);
}

#[tokio::test]
async fn test_collections_default_to_empty() {
    let h = Harness::new();
    h.transport.push_ok(json!(null));
    assert!(h.api.get_project_modules(1).await.unwrap().is_empty());

    h.transport.push_ok(json!(null));
    let page = h.api.get_projects(&PageParams::default()).await.unwrap();
    assert!(page.is_empty());
}

#[tokio::test]
async fn test_modules_and_environments() {
    let h = Harness::new();

    h.transport.push_ok(json!([module_json(
        1,
        "root",
        json!([module_json(2, "child", json!([]))])
    )]));
    let tree = h.api.get_project_modules(4).await.unwrap();
    assert_eq!(tree[0].children[0].name, "child");
    assert_eq!(h.transport.last_request().url, Harness::url("/projects/4/modules"));

    h.transport
        .push_ok(json!([environment_json(1, 4, "dev", true)]));
    let envs = h.api.get_project_environments(4).await.unwrap();
    assert!(envs[0].is_default);
    assert_eq!(
        h.transport.last_request().url,
        Harness::url("/projects/4/environments")
    );

    h.transport.push_ok(json!({
        "id": 9, "environment_id": 1, "key": "token", "value": "x",
        "description": null, "created_at": "2024-05-01T08:00:00"
    }));
    h.api
        .update_env_variable(
            1,
            9,
            &EnvVariableUpdate {
                value: Some("x".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    let req = h.transport.last_request();
    assert_eq!(req.method, Method::PUT);
    assert_eq!(req.url, Harness::url("/environments/1/variables/9"));
    assert_eq!(req.body, Some(json!({"value": "x"})));
}

// ========== 用例 ==========

#[tokio::test]
async fn test_case_copy_and_delete() {
    let h = Harness::new();

    h.transport.push_ok(json!({
        "id": 8, "module_id": 2, "name": "login (copy)", "description": null,
        "method": "POST", "path": "/login", "headers": {}, "params": {},
        "body_type": "json", "body_content": null, "pre_script": null, "post_script": null,
        "timeout": 30, "retry_count": 0, "is_active": true, "sort_order": 1,
        "created_at": "2024-05-01T08:00:00", "updated_at": "2024-05-01T08:00:00"
    }));
    let copy = h.api.copy_case(7).await.unwrap();
    assert_eq!(copy.id, 8);
    let req = h.transport.last_request();
    assert_eq!(req.method, Method::POST);
    assert_eq!(req.url, Harness::url("/cases/7/copy"));
    assert_eq!(req.body, None);

    h.transport.push_ok(json!(null));
    h.api.delete_case(7).await.unwrap();
    assert_eq!(h.transport.last_request().url, Harness::url("/cases/7"));

    h.transport.push_ok(page_json(vec![]));
    h.api
        .get_module_cases(2, &PageParams::default())
        .await
        .unwrap();
    assert_eq!(h.transport.last_request().url, Harness::url("/modules/2/cases"));
}

// ========== 测试集 ==========

#[tokio::test]
async fn test_suite_case_management() {
    let h = Harness::new();

    h.transport.push_ok(json!(null));
    h.api
        .update_suite_cases_order(3, &SuiteCaseOrderUpdate::from_ids(&[5, 4]))
        .await
        .unwrap();
    let req = h.transport.last_request();
    assert_eq!(req.method, Method::PUT);
    assert_eq!(req.url, Harness::url("/suites/3/cases/order"));
    assert_eq!(
        req.body,
        Some(json!({"case_orders": [
            {"test_case_id": 5, "sort_order": 0},
            {"test_case_id": 4, "sort_order": 1}
        ]}))
    );

    h.transport.push_ok(json!(null));
    h.api.remove_case_from_suite(3, 5).await.unwrap();
    let req = h.transport.last_request();
    assert_eq!(req.method, Method::DELETE);
    assert_eq!(req.url, Harness::url("/suites/3/cases/5"));

    h.transport.push_ok(suite_json(3));
    h.api.create_suite(&TestSuiteCreate::new("smoke")).await.unwrap();
    assert_eq!(
        h.transport.last_request().body,
        Some(json!({"name": "smoke", "execution_mode": "sequential"}))
    );

    h.transport.push_ok(execution_json(11));
    let run = h.api.execute_suite_by_id(3, 1).await.unwrap();
    assert_eq!(run.status, RunStatus::Pending);
    assert_eq!(h.transport.last_request().url, Harness::url("/suites/3/execute"));
}

// ========== 定时任务 ==========

#[tokio::test]
async fn test_schedule_toggle_uses_patch() {
    let h = Harness::new();
    h.transport.push_ok(schedule_json(6, false));

    let schedule = h.api.toggle_schedule(6, false).await.unwrap();
    assert!(!schedule.is_active);
    let req = h.transport.last_request();
    assert_eq!(req.method, Method::PATCH);
    assert_eq!(req.url, Harness::url("/schedules/6/toggle"));
    assert_eq!(req.body, Some(json!({"is_active": false})));
}

#[tokio::test]
async fn test_schedule_list_filters_and_run() {
    let h = Harness::new();
    h.transport.push_ok(page_json(vec![]));
    h.api
        .get_schedules(&ScheduleQuery {
            suite_id: Some(2),
            is_active: Some(true),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(
        h.transport.last_request().url,
        Harness::url("/schedules?suite_id=2&is_active=true")
    );

    h.transport.push_ok(execution_json(12));
    h.api.run_schedule_now(6).await.unwrap();
    let req = h.transport.last_request();
    assert_eq!(req.method, Method::POST);
    assert_eq!(req.url, Harness::url("/schedules/6/run"));

    h.transport.push_ok(page_json(vec![]));
    h.api
        .get_schedule_history(6, &PageParams::new(2, 5))
        .await
        .unwrap();
    assert_eq!(
        h.transport.last_request().url,
        Harness::url("/schedules/6/history?page=2&page_size=5")
    );
}

// ========== 执行 ==========

#[tokio::test]
async fn test_execution_endpoints() {
    let h = Harness::new();

    h.transport.push_ok(execution_json(12));
    h.api
        .execute_suite(&ExecuteSuiteRequest {
            suite_id: 2,
            environment_id: 3,
        })
        .await
        .unwrap();
    let req = h.transport.last_request();
    assert_eq!(req.url, Harness::url("/execute/suite"));
    assert_eq!(req.body, Some(json!({"suite_id": 2, "environment_id": 3})));

    h.transport.push_ok(page_json(vec![]));
    h.api
        .get_executions(&ExecutionQuery {
            status: Some("failed".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(
        h.transport.last_request().url,
        Harness::url("/execute/executions?status=failed")
    );

    h.transport.push_ok(execution_json(12));
    h.api.get_execution(12).await.unwrap();
    assert_eq!(
        h.transport.last_request().url,
        Harness::url("/execute/executions/12")
    );
}

// ========== 统计 ==========

#[tokio::test]
async fn test_stats_default_params() {
    let h = Harness::new();

    h.transport
        .push_ok(json!({"project_id": 1, "days": 7, "trend": []}));
    let trend = h.api.get_project_trend(1, None).await.unwrap();
    assert_eq!(trend.days, 7);
    assert_eq!(
        h.transport.last_request().url,
        Harness::url("/stats/projects/1/trend?days=7")
    );

    h.transport.push_ok(json!({
        "suite_id": 4, "total_executions": 0, "avg_pass_rate": 0, "history": []
    }));
    h.api.get_suite_history(4, None).await.unwrap();
    assert_eq!(
        h.transport.last_request().url,
        Harness::url("/stats/suites/4/history?limit=20")
    );

    h.transport
        .push_ok(json!({"days": 30, "limit": 5, "items": []}));
    h.api
        .get_top_failures(&TopFailuresQuery {
            limit: Some(5),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(
        h.transport.last_request().url,
        Harness::url("/stats/cases/top-failures?limit=5")
    );

    h.transport.push_ok(json!({"project_count": 2}));
    let stats = h.api.get_dashboard_stats().await.unwrap();
    assert_eq!(stats.project_count, 2);
}
