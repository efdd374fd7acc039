use apipilot_proto::prelude::*;
use serde_json::Value;

use super::{discard, ApiClient, EnvelopeExt};
use crate::error::Result;

/// Test suites
impl ApiClient {
    pub async fn get_suites(&self, params: &PageParams) -> Result<Page<TestSuiteSummary>> {
        Ok(self.http.get_query("/suites", params).await?.or_default())
    }

    /// Suite with its cases.
    pub async fn get_suite(&self, id: i64) -> Result<TestSuiteDetail> {
        self.http.get(&format!("/suites/{id}")).await?.required()
    }

    pub async fn create_suite(&self, data: &TestSuiteCreate) -> Result<TestSuite> {
        self.http.post("/suites", data).await?.required()
    }

    pub async fn update_suite(&self, id: i64, data: &TestSuiteUpdate) -> Result<TestSuite> {
        self.http.put(&format!("/suites/{id}"), data).await?.required()
    }

    pub async fn delete_suite(&self, id: i64) -> Result<()> {
        self.http
            .delete::<Value>(&format!("/suites/{id}"))
            .await
            .map(discard)
    }

    pub async fn get_suite_cases(&self, suite_id: i64) -> Result<Vec<SuiteCaseDetail>> {
        Ok(self
            .http
            .get(&format!("/suites/{suite_id}/cases"))
            .await?
            .or_default())
    }

    pub async fn add_case_to_suite(
        &self,
        suite_id: i64,
        data: &SuiteCaseCreate,
    ) -> Result<SuiteCase> {
        self.http
            .post(&format!("/suites/{suite_id}/cases"), data)
            .await?
            .required()
    }

    pub async fn remove_case_from_suite(&self, suite_id: i64, case_id: i64) -> Result<()> {
        self.http
            .delete::<Value>(&format!("/suites/{suite_id}/cases/{case_id}"))
            .await
            .map(discard)
    }

    pub async fn update_suite_cases_order(
        &self,
        suite_id: i64,
        data: &SuiteCaseOrderUpdate,
    ) -> Result<()> {
        self.http
            .put::<_, Value>(&format!("/suites/{suite_id}/cases/order"), data)
            .await
            .map(discard)
    }

    /// Start a run of the whole suite against `environment_id`.
    pub async fn execute_suite_by_id(
        &self,
        suite_id: i64,
        environment_id: i64,
    ) -> Result<Execution> {
        let body = ExecuteSuiteRequest {
            suite_id,
            environment_id,
        };
        self.http
            .post(&format!("/suites/{suite_id}/execute"), &body)
            .await?
            .required()
    }
}
