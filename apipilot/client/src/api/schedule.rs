use apipilot_proto::prelude::*;
use serde_json::Value;

use super::{discard, ApiClient, EnvelopeExt};
use crate::error::Result;

/// Scheduled runs
impl ApiClient {
    pub async fn get_schedules(&self, query: &ScheduleQuery) -> Result<Page<ScheduleSummary>> {
        Ok(self.http.get_query("/schedules", query).await?.or_default())
    }

    pub async fn get_schedule(&self, id: i64) -> Result<Schedule> {
        self.http.get(&format!("/schedules/{id}")).await?.required()
    }

    pub async fn create_schedule(&self, data: &ScheduleCreate) -> Result<Schedule> {
        self.http.post("/schedules", data).await?.required()
    }

    pub async fn update_schedule(&self, id: i64, data: &ScheduleUpdate) -> Result<Schedule> {
        self.http
            .put(&format!("/schedules/{id}"), data)
            .await?
            .required()
    }

    pub async fn delete_schedule(&self, id: i64) -> Result<()> {
        self.http
            .delete::<Value>(&format!("/schedules/{id}"))
            .await
            .map(discard)
    }

    /// Enable or disable a schedule.
    pub async fn toggle_schedule(&self, id: i64, is_active: bool) -> Result<Schedule> {
        self.http
            .patch(
                &format!("/schedules/{id}/toggle"),
                &ScheduleToggle { is_active },
            )
            .await?
            .required()
    }

    /// Fire the schedule immediately, outside its cron timing.
    pub async fn run_schedule_now(&self, id: i64) -> Result<Execution> {
        self.http
            .post_empty(&format!("/schedules/{id}/run"))
            .await?
            .required()
    }

    pub async fn get_schedule_history(
        &self,
        id: i64,
        params: &PageParams,
    ) -> Result<Page<ExecutionSummary>> {
        Ok(self
            .http
            .get_query(&format!("/schedules/{id}/history"), params)
            .await?
            .or_default())
    }
}
