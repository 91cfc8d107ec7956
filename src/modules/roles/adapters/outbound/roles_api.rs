use crate::modules::roles::core::role::{NewRole, Role, RoleId, RolePatch};
use crate::shared::core::pagination::Paginated;
use async_trait::async_trait;

#[async_trait]
pub trait RolesApi: Send + Sync {
    async fn list(&self, page: u32, limit: u32) -> anyhow::Result<Paginated<Role>>;
    async fn create(&self, role: NewRole) -> anyhow::Result<Role>;
    async fn update(&self, id: RoleId, patch: RolePatch) -> anyhow::Result<Role>;
    async fn delete(&self, id: RoleId) -> anyhow::Result<()>;
}
