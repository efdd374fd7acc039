use apipilot_proto::prelude::*;
use serde_json::Value;

use super::{discard, ApiClient, EnvelopeExt};
use crate::error::Result;

/// Test cases and their assertions/extractors
impl ApiClient {
    pub async fn get_module_cases(
        &self,
        module_id: i64,
        params: &PageParams,
    ) -> Result<Page<TestCaseSummary>> {
        Ok(self
            .http
            .get_query(&format!("/modules/{module_id}/cases"), params)
            .await?
            .or_default())
    }

    /// Case with its assertions and extractors.
    pub async fn get_case(&self, id: i64) -> Result<TestCaseDetail> {
        self.http.get(&format!("/cases/{id}")).await?.required()
    }

    pub async fn create_case(&self, module_id: i64, data: &TestCaseCreate) -> Result<TestCase> {
        self.http
            .post(&format!("/modules/{module_id}/cases"), data)
            .await?
            .required()
    }

    pub async fn update_case(&self, id: i64, data: &TestCaseUpdate) -> Result<TestCase> {
        self.http.put(&format!("/cases/{id}"), data).await?.required()
    }

    pub async fn delete_case(&self, id: i64) -> Result<()> {
        self.http
            .delete::<Value>(&format!("/cases/{id}"))
            .await
            .map(discard)
    }

    /// Duplicate a case inside its module; returns the copy.
    pub async fn copy_case(&self, id: i64) -> Result<TestCase> {
        self.http
            .post_empty(&format!("/cases/{id}/copy"))
            .await?
            .required()
    }

    pub async fn add_assertion(&self, case_id: i64, data: &AssertionCreate) -> Result<Assertion> {
        self.http
            .post(&format!("/cases/{case_id}/assertions"), data)
            .await?
            .required()
    }

    pub async fn update_assertion(&self, id: i64, data: &AssertionUpdate) -> Result<Assertion> {
        self.http
            .put(&format!("/assertions/{id}"), data)
            .await?
            .required()
    }

    pub async fn delete_assertion(&self, id: i64) -> Result<()> {
        self.http
            .delete::<Value>(&format!("/assertions/{id}"))
            .await
            .map(discard)
    }

    pub async fn add_extractor(&self, case_id: i64, data: &ExtractorCreate) -> Result<Extractor> {
        self.http
            .post(&format!("/cases/{case_id}/extractors"), data)
            .await?
            .required()
    }

    pub async fn update_extractor(&self, id: i64, data: &ExtractorUpdate) -> Result<Extractor> {
        self.http
            .put(&format!("/extractors/{id}"), data)
            .await?
            .required()
    }

    pub async fn delete_extractor(&self, id: i64) -> Result<()> {
        self.http
            .delete::<Value>(&format!("/extractors/{id}"))
            .await
            .map(discard)
    }
}
