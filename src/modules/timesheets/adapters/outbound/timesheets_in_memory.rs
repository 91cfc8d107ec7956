// In memory timesheet backend and project catalog.
//
// Purpose
// - Exercise loaders and boards without a running backend.
//
// Knobs
// - `toggle_offline` fails every call.
// - `fail_project` fails calls for one project only.
// - `set_delay_ms` delays every answer, to race overlapping loads.

use crate::modules::timesheets::adapters::outbound::timesheets_api::{ProjectCatalog, TimesheetsApi};
use crate::modules::timesheets::core::entry::{Project, ProjectId, TimeEntry};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryTimesheets {
    entries: RwLock<HashMap<ProjectId, Vec<TimeEntry>>>,
    failing_projects: RwLock<HashSet<ProjectId>>,
    delay_ms: AtomicU64,
    is_offline: bool,
}

impl InMemoryTimesheets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub fn set_delay_ms(&self, ms: u64) {
        self.delay_ms.store(ms, Ordering::SeqCst);
    }

    pub async fn fail_project(&self, project_id: ProjectId) {
        self.failing_projects.write().await.insert(project_id);
    }

    pub async fn insert(&self, entry: TimeEntry) {
        self.entries
            .write()
            .await
            .entry(entry.project_id)
            .or_default()
            .push(entry);
    }
}

#[async_trait]
impl TimesheetsApi for InMemoryTimesheets {
    async fn list_by_project(&self, project_id: ProjectId) -> anyhow::Result<Vec<TimeEntry>> {
        let delay = self.delay_ms.load(Ordering::SeqCst);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }
        if self.is_offline {
            return Err(anyhow::anyhow!("Timesheets backend offline"));
        }
        if self.failing_projects.read().await.contains(&project_id) {
            return Err(anyhow::anyhow!("Timesheets for project {project_id} unavailable"));
        }
        Ok(self
            .entries
            .read()
            .await
            .get(&project_id)
            .cloned()
            .unwrap_or_default())
    }
}

#[derive(Default)]
pub struct InMemoryProjectCatalog {
    projects: RwLock<Vec<Project>>,
    is_offline: bool,
}

impl InMemoryProjectCatalog {
    pub fn new(projects: Vec<Project>) -> Self {
        Self {
            projects: RwLock::new(projects),
            is_offline: false,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub async fn replace(&self, projects: Vec<Project>) {
        *self.projects.write().await = projects;
    }
}

#[async_trait]
impl ProjectCatalog for InMemoryProjectCatalog {
    async fn list_projects(&self) -> anyhow::Result<Vec<Project>> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Project catalog offline"));
        }
        Ok(self.projects.read().await.clone())
    }
}
