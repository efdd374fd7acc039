use apipilot_proto::prelude::*;
use serde::Serialize;

use super::{ApiClient, EnvelopeExt};
use crate::error::Result;

pub const DEFAULT_TREND_DAYS: u32 = 7;
pub const DEFAULT_SUITE_HISTORY_LIMIT: u32 = 20;

#[derive(Serialize)]
struct DaysParam {
    days: u32,
}

#[derive(Serialize)]
struct LimitParam {
    limit: u32,
}

/// Dashboard statistics
impl ApiClient {
    pub async fn get_dashboard_stats(&self) -> Result<DashboardStats> {
        self.http.get("/stats/dashboard").await?.required()
    }

    /// Daily totals of a project's suites, `days` defaults to 7.
    pub async fn get_project_trend(
        &self,
        project_id: i64,
        days: Option<u32>,
    ) -> Result<ProjectTrend> {
        let params = DaysParam {
            days: days.unwrap_or(DEFAULT_TREND_DAYS),
        };
        self.http
            .get_query(&format!("/stats/projects/{project_id}/trend"), &params)
            .await?
            .required()
    }

    pub async fn get_top_failures(&self, query: &TopFailuresQuery) -> Result<TopFailures> {
        self.http
            .get_query("/stats/cases/top-failures", query)
            .await?
            .required()
    }

    /// Most recent runs of a suite, `limit` defaults to 20.
    pub async fn get_suite_history(&self, suite_id: i64, limit: Option<u32>) -> Result<SuiteHistory> {
        let params = LimitParam {
            limit: limit.unwrap_or(DEFAULT_SUITE_HISTORY_LIMIT),
        };
        self.http
            .get_query(&format!("/stats/suites/{suite_id}/history"), &params)
            .await?
            .required()
    }
}
