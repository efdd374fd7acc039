use apipilot_proto::prelude::*;
use serde_json::Value;

use super::{discard, ApiClient, EnvelopeExt};
use crate::error::Result;

/// Projects, their module trees, environments and suites
impl ApiClient {
    // ==================== projects ====================

    pub async fn get_projects(&self, params: &PageParams) -> Result<Page<ProjectSummary>> {
        Ok(self.http.get_query("/projects", params).await?.or_default())
    }

    pub async fn get_project(&self, id: i64) -> Result<Project> {
        self.http.get(&format!("/projects/{id}")).await?.required()
    }

    pub async fn create_project(&self, data: &ProjectCreate) -> Result<Project> {
        self.http.post("/projects", data).await?.required()
    }

    pub async fn update_project(&self, id: i64, data: &ProjectUpdate) -> Result<Project> {
        self.http.put(&format!("/projects/{id}"), data).await?.required()
    }

    pub async fn delete_project(&self, id: i64) -> Result<()> {
        self.http
            .delete::<Value>(&format!("/projects/{id}"))
            .await
            .map(discard)
    }

    // ==================== modules ====================

    /// Module tree of a project, roots first.
    pub async fn get_project_modules(&self, project_id: i64) -> Result<Vec<ModuleNode>> {
        Ok(self
            .http
            .get(&format!("/projects/{project_id}/modules"))
            .await?
            .or_default())
    }

    pub async fn create_module(&self, project_id: i64, data: &ModuleCreate) -> Result<Module> {
        self.http
            .post(&format!("/projects/{project_id}/modules"), data)
            .await?
            .required()
    }

    pub async fn update_module(&self, id: i64, data: &ModuleUpdate) -> Result<Module> {
        self.http.put(&format!("/modules/{id}"), data).await?.required()
    }

    pub async fn delete_module(&self, id: i64) -> Result<()> {
        self.http
            .delete::<Value>(&format!("/modules/{id}"))
            .await
            .map(discard)
    }

    // ==================== environments ====================

    pub async fn get_project_environments(&self, project_id: i64) -> Result<Vec<Environment>> {
        Ok(self
            .http
            .get(&format!("/projects/{project_id}/environments"))
            .await?
            .or_default())
    }

    /// Environment with its variables.
    pub async fn get_environment(&self, id: i64) -> Result<EnvironmentDetail> {
        self.http.get(&format!("/environments/{id}")).await?.required()
    }

    pub async fn create_environment(
        &self,
        project_id: i64,
        data: &EnvironmentCreate,
    ) -> Result<Environment> {
        self.http
            .post(&format!("/projects/{project_id}/environments"), data)
            .await?
            .required()
    }

    pub async fn update_environment(
        &self,
        id: i64,
        data: &EnvironmentUpdate,
    ) -> Result<Environment> {
        self.http
            .put(&format!("/environments/{id}"), data)
            .await?
            .required()
    }

    pub async fn delete_environment(&self, id: i64) -> Result<()> {
        self.http
            .delete::<Value>(&format!("/environments/{id}"))
            .await
            .map(discard)
    }

    pub async fn add_env_variable(
        &self,
        env_id: i64,
        data: &EnvVariableCreate,
    ) -> Result<EnvVariable> {
        self.http
            .post(&format!("/environments/{env_id}/variables"), data)
            .await?
            .required()
    }

    pub async fn update_env_variable(
        &self,
        env_id: i64,
        var_id: i64,
        data: &EnvVariableUpdate,
    ) -> Result<EnvVariable> {
        self.http
            .put(&format!("/environments/{env_id}/variables/{var_id}"), data)
            .await?
            .required()
    }

    pub async fn delete_env_variable(&self, env_id: i64, var_id: i64) -> Result<()> {
        self.http
            .delete::<Value>(&format!("/environments/{env_id}/variables/{var_id}"))
            .await
            .map(discard)
    }

    // ==================== suites ====================

    pub async fn get_project_suites(
        &self,
        project_id: i64,
        params: &PageParams,
    ) -> Result<Page<TestSuiteSummary>> {
        Ok(self
            .http
            .get_query(&format!("/projects/{project_id}/suites"), params)
            .await?
            .or_default())
    }

    pub async fn create_project_suite(
        &self,
        project_id: i64,
        data: &TestSuiteCreate,
    ) -> Result<TestSuite> {
        self.http
            .post(&format!("/projects/{project_id}/suites"), data)
            .await?
            .required()
    }
}
