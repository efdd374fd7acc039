use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Schedule {
    pub id: i64,
    pub name: String,
    pub suite_id: i64,
    pub environment_id: i64,
    pub cron_expression: String,
    pub is_active: bool,
    #[serde(default)]
    pub notify_on_failure: bool,
    /// Comma separated addresses.
    pub notify_emails: Option<String>,
    pub last_run_at: Option<NaiveDateTime>,
    pub next_run_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Schedule {
    pub fn notify_list(&self) -> Vec<&str> {
        self.notify_emails
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ScheduleSummary {
    pub id: i64,
    pub name: String,
    pub suite_id: i64,
    pub suite_name: Option<String>,
    pub environment_id: i64,
    pub environment_name: Option<String>,
    pub cron_expression: String,
    pub is_active: bool,
    pub last_run_at: Option<NaiveDateTime>,
    pub next_run_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ScheduleCreate {
    pub name: String,
    pub suite_id: i64,
    pub environment_id: i64,
    pub cron_expression: String,
    pub is_active: bool,
    pub notify_on_failure: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify_emails: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ScheduleUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suite_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cron_expression: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify_on_failure: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify_emails: Option<String>,
}

/// Body of `PATCH /schedules/{id}/toggle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct ScheduleToggle {
    pub is_active: bool,
}

/// Filters for `GET /schedules`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ScheduleQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suite_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_notify_list() {
        let schedule: Schedule = serde_json::from_value(json!({
            "id": 1, "name": "nightly", "suite_id": 2, "environment_id": 3,
            "cron_expression": "0 2 * * *", "is_active": true,
            "notify_on_failure": true, "notify_emails": "a@x.io, ,b@x.io",
            "last_run_at": null, "next_run_at": "2024-05-02T02:00:00",
            "created_at": "2024-05-01T00:00:00", "updated_at": "2024-05-01T00:00:00"
        }))
        .unwrap();
        assert_eq!(schedule.notify_list(), vec!["a@x.io", "b@x.io"]);
        assert!(schedule.next_run_at.is_some());
    }
}
