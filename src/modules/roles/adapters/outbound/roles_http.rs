use crate::modules::roles::adapters::outbound::roles_api::RolesApi;
use crate::modules::roles::core::list_response::normalize_list;
use crate::modules::roles::core::role::{NewRole, Role, RoleId, RolePatch};
use crate::shared::core::pagination::Paginated;
use crate::shared::infrastructure::backend_client::BackendClient;
use anyhow::Context;
use async_trait::async_trait;

pub struct HttpRolesApi {
    client: BackendClient,
}

impl HttpRolesApi {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RolesApi for HttpRolesApi {
    async fn list(&self, page: u32, limit: u32) -> anyhow::Result<Paginated<Role>> {
        let body: serde_json::Value = self
            .client
            .get_json_with_query("/roles", &[("page", page), ("limit", limit)])
            .await?;
        normalize_list(body).context("unexpected roles listing")
    }

    async fn create(&self, role: NewRole) -> anyhow::Result<Role> {
        Ok(self.client.post_json("/roles", &role).await?)
    }

    async fn update(&self, id: RoleId, patch: RolePatch) -> anyhow::Result<Role> {
        Ok(self.client.patch_json(&format!("/roles/{id}"), &patch).await?)
    }

    async fn delete(&self, id: RoleId) -> anyhow::Result<()> {
        Ok(self.client.delete(&format!("/roles/{id}")).await?)
    }
}
