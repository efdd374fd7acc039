use apipilot_proto::prelude::*;

use super::{ApiClient, EnvelopeExt};
use crate::error::Result;

/// Runs: single cases, debug requests, suites and their records
impl ApiClient {
    pub async fn execute_case(&self, data: &ExecuteCaseRequest) -> Result<CaseRunResult> {
        self.http.post("/execute/case", data).await?.required()
    }

    /// Send an ad-hoc request; the server keeps no record of it.
    pub async fn debug_execute(&self, data: &DebugRequest) -> Result<DebugResult> {
        self.http.post("/execute/debug", data).await?.required()
    }

    pub async fn execute_suite(&self, data: &ExecuteSuiteRequest) -> Result<Execution> {
        self.http.post("/execute/suite", data).await?.required()
    }

    pub async fn get_executions(&self, query: &ExecutionQuery) -> Result<Page<ExecutionSummary>> {
        Ok(self
            .http
            .get_query("/execute/executions", query)
            .await?
            .or_default())
    }

    pub async fn get_execution(&self, id: i64) -> Result<Execution> {
        self.http
            .get(&format!("/execute/executions/{id}"))
            .await?
            .required()
    }

    /// Run record with every executed step.
    pub async fn get_execution_details(&self, id: i64) -> Result<ExecutionDetail> {
        self.http
            .get(&format!("/execute/executions/{id}/details"))
            .await?
            .required()
    }
}
