// Ports to the external backend for the timesheet screen.

use crate::modules::timesheets::core::entry::{Project, ProjectId, TimeEntry};
use async_trait::async_trait;

#[async_trait]
pub trait TimesheetsApi: Send + Sync {
    async fn list_by_project(&self, project_id: ProjectId) -> anyhow::Result<Vec<TimeEntry>>;
}

/// Projects shared across the application.
#[async_trait]
pub trait ProjectCatalog: Send + Sync {
    async fn list_projects(&self) -> anyhow::Result<Vec<Project>>;
}
