//! Reactive cache of the project-scoped data the UI renders.
//!
//! The state lives in a `watch` channel: mutations go through the store's
//! fetch operations, readers take a [`ProjectStore::snapshot`] or
//! [`ProjectStore::subscribe`] to be woken on every change.
//!
//! Concurrent fetches of the same field are not coordinated; whichever
//! resolves last wins. The state is never borrowed across an await point.

use std::future::Future;
use std::sync::Arc;

use apipilot_proto::prelude::*;
use tokio::sync::watch;

use crate::api::ApiClient;
use crate::error::Result;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectState {
    pub projects: Vec<ProjectSummary>,
    pub current_project: Option<Project>,
    pub modules: Vec<ModuleNode>,
    pub environments: Vec<Environment>,
    pub loading: bool,
}

impl ProjectState {
    pub fn project_count(&self) -> usize {
        self.projects.len()
    }

    /// Environment flagged as default, or the first one.
    pub fn default_environment(&self) -> Option<&Environment> {
        self.environments
            .iter()
            .find(|e| e.is_default)
            .or_else(|| self.environments.first())
    }
}

/// Clears the loading flag when dropped, so a cancelled fetch cannot leave it set.
struct LoadingGuard<'a>(&'a watch::Sender<ProjectState>);

impl<'a> LoadingGuard<'a> {
    fn start(state: &'a watch::Sender<ProjectState>) -> Self {
        state.send_modify(|s| s.loading = true);
        LoadingGuard(state)
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.send_modify(|s| s.loading = false);
    }
}

#[derive(Clone)]
pub struct ProjectStore {
    api: ApiClient,
    state: Arc<watch::Sender<ProjectState>>,
}

impl ProjectStore {
    pub fn new(api: ApiClient) -> Self {
        let (state, _) = watch::channel(ProjectState::default());
        ProjectStore {
            api,
            state: Arc::new(state),
        }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn snapshot(&self) -> ProjectState {
        self.state.borrow().clone()
    }

    /// Receiver marked as changed on every mutation of the state.
    pub fn subscribe(&self) -> watch::Receiver<ProjectState> {
        self.state.subscribe()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().loading
    }

    pub fn project_count(&self) -> usize {
        self.state.borrow().project_count()
    }

    /// Load a page of projects into `projects`.
    pub async fn fetch_projects(&self, params: &PageParams) -> Result<Page<ProjectSummary>> {
        self.track(self.api.get_projects(params), |s, page| {
            s.projects = page.map(|p| p.items.clone()).unwrap_or_default();
        })
        .await
    }

    /// Load one project into `current_project`.
    pub async fn fetch_project(&self, id: i64) -> Result<Project> {
        self.track(self.api.get_project(id), |s, project| {
            s.current_project = project.cloned();
        })
        .await
    }

    pub async fn fetch_modules(&self, project_id: i64) -> Result<Vec<ModuleNode>> {
        self.track(self.api.get_project_modules(project_id), |s, modules| {
            s.modules = modules.cloned().unwrap_or_default();
        })
        .await
    }

    pub async fn fetch_environments(&self, project_id: i64) -> Result<Vec<Environment>> {
        self.track(self.api.get_project_environments(project_id), |s, envs| {
            s.environments = envs.cloned().unwrap_or_default();
        })
        .await
    }

    /// Drop everything derived from the current project. `projects` and `loading` are kept.
    pub fn reset(&self) {
        self.state.send_modify(|s| {
            s.current_project = None;
            s.modules.clear();
            s.environments.clear();
        });
    }

    /// Run `fut` with the loading flag set, then let `apply` write the outcome:
    /// `Some(data)` on success, `None` on failure. Errors are passed through.
    async fn track<T, Fut, F>(&self, fut: Fut, apply: F) -> Result<T>
    where
        Fut: Future<Output = Result<T>>,
        F: FnOnce(&mut ProjectState, Option<&T>),
    {
        let _loading = LoadingGuard::start(&self.state);
        let result = fut.await;
        match &result {
            Ok(data) => self.state.send_modify(|s| apply(s, Some(data))),
            Err(err) => {
                log::debug!("store fetch failed: {err}");
                self.state.send_modify(|s| apply(s, None));
            }
        }
        result
    }
}
