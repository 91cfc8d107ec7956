use crate::modules::timesheets::adapters::outbound::timesheets_api::{ProjectCatalog, TimesheetsApi};
use crate::modules::timesheets::core::entry::{Project, ProjectId, TimeEntry};
use crate::shared::infrastructure::backend_client::BackendClient;
use async_trait::async_trait;

pub struct HttpTimesheetsApi {
    client: BackendClient,
}

impl HttpTimesheetsApi {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TimesheetsApi for HttpTimesheetsApi {
    async fn list_by_project(&self, project_id: ProjectId) -> anyhow::Result<Vec<TimeEntry>> {
        let entries = self
            .client
            .get_json(&format!("/timesheets/project/{project_id}"))
            .await?;
        Ok(entries)
    }
}

pub struct HttpProjectCatalog {
    client: BackendClient,
}

impl HttpProjectCatalog {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProjectCatalog for HttpProjectCatalog {
    async fn list_projects(&self) -> anyhow::Result<Vec<Project>> {
        let projects = self.client.get_json("/projects").await?;
        Ok(projects)
    }
}
