// In memory roles backend.
//
// Knobs
// - `toggle_offline` fails every call.
// - `fail_writes` fails create, update and delete while listing keeps working.
// - `bare_listing` answers listings as a bare array of every role, ignoring
//   paging, like older backends do.
// - `list_calls` counts listing requests.

use crate::modules::roles::adapters::outbound::roles_api::RolesApi;
use crate::modules::roles::core::role::{NewRole, Role, RoleId, RolePatch};
use crate::shared::core::pagination::{Paginated, page_window};
use async_trait::async_trait;
use serde_json::Map;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryRoles {
    roles: RwLock<Vec<Role>>,
    failing_writes: AtomicBool,
    listings: AtomicUsize,
    bare_listing: bool,
    is_offline: bool,
}

impl InMemoryRoles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_roles(roles: Vec<Role>) -> Self {
        Self {
            roles: RwLock::new(roles),
            ..Self::default()
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub fn bare_listing(mut self) -> Self {
        self.bare_listing = true;
        self
    }

    pub fn fail_writes(&self, failing: bool) {
        self.failing_writes.store(failing, Ordering::SeqCst);
    }

    pub fn list_calls(&self) -> usize {
        self.listings.load(Ordering::SeqCst)
    }

    pub async fn snapshot(&self) -> Vec<Role> {
        self.roles.read().await.clone()
    }

    fn check_online(&self) -> anyhow::Result<()> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Roles backend offline"));
        }
        Ok(())
    }

    fn check_writable(&self) -> anyhow::Result<()> {
        self.check_online()?;
        if self.failing_writes.load(Ordering::SeqCst) {
            return Err(anyhow::anyhow!("Roles backend rejected the write"));
        }
        Ok(())
    }
}

#[async_trait]
impl RolesApi for InMemoryRoles {
    async fn list(&self, page: u32, limit: u32) -> anyhow::Result<Paginated<Role>> {
        self.listings.fetch_add(1, Ordering::SeqCst);
        self.check_online()?;
        let roles = self.roles.read().await;
        if self.bare_listing {
            return Ok(Paginated {
                items: roles.clone(),
                total: roles.len() as u64,
            });
        }
        Ok(Paginated {
            items: page_window(&roles[..], page, limit).to_vec(),
            total: roles.len() as u64,
        })
    }

    async fn create(&self, role: NewRole) -> anyhow::Result<Role> {
        self.check_writable()?;
        let mut roles = self.roles.write().await;
        let id = roles.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        let created = Role {
            id,
            name: role.name,
            is_enabled: role.is_enabled,
            extra: Map::new(),
        };
        roles.push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: RoleId, patch: RolePatch) -> anyhow::Result<Role> {
        self.check_writable()?;
        let mut roles = self.roles.write().await;
        let role = roles
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| anyhow::anyhow!("Role {id} not found"))?;
        if let Some(name) = patch.name {
            role.name = name;
        }
        if let Some(is_enabled) = patch.is_enabled {
            role.is_enabled = is_enabled;
        }
        Ok(role.clone())
    }

    async fn delete(&self, id: RoleId) -> anyhow::Result<()> {
        self.check_writable()?;
        let mut roles = self.roles.write().await;
        let before = roles.len();
        roles.retain(|r| r.id != id);
        if roles.len() == before {
            return Err(anyhow::anyhow!("Role {id} not found"));
        }
        Ok(())
    }
}
