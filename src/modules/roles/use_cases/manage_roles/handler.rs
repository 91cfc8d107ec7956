use crate::modules::roles::adapters::outbound::roles_api::RolesApi;
use crate::modules::roles::core::role::{NewRole, Role, RoleId, RolePatch};
use crate::shared::core::pagination::{PageMarker, page_after_delete, page_numbers, total_pages};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;

pub const DEFAULT_ROLES_PER_PAGE: u32 = 10;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RolesError {
    #[error("Failed to fetch roles. Please try again.")]
    FetchFailed,

    #[error("Failed to create role. Please try again.")]
    CreateFailed,

    #[error("Failed to update role status. Please try again.")]
    UpdateFailed,

    #[error("Failed to delete role. Please try again.")]
    DeleteFailed,

    #[error("Role name is required!")]
    NameRequired,

    #[error("Are you sure you want to delete this role?")]
    ConfirmationRequired,

    #[error("limit must be at least 1")]
    InvalidLimit,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RolesView {
    pub rows: Vec<Role>,
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u32,
    pub markers: Vec<PageMarker>,
    pub error: Option<String>,
}

struct RoleBoardState {
    rows: Vec<Role>,
    page: u32,
    limit: u32,
    total: u64,
    error: Option<String>,
}

impl RoleBoardState {
    fn view(&self) -> RolesView {
        let pages = total_pages(self.total, self.limit);
        RolesView {
            rows: self.rows.clone(),
            page: self.page,
            limit: self.limit,
            total: self.total,
            total_pages: pages,
            markers: page_numbers(pages, self.page.min(pages)),
            error: self.error.clone(),
        }
    }
}

/// State of the role table: one page of rows plus the last user-visible error.
///
/// Every backend failure is logged, stored as the board error and returned.
pub struct RoleBoard {
    api: Arc<dyn RolesApi>,
    state: RwLock<RoleBoardState>,
}

impl RoleBoard {
    pub fn new(api: Arc<dyn RolesApi>, limit: u32) -> Self {
        Self {
            api,
            state: RwLock::new(RoleBoardState {
                rows: Vec::new(),
                page: 1,
                limit: limit.max(1),
                total: 0,
                error: None,
            }),
        }
    }

    pub async fn view(&self) -> RolesView {
        self.state.read().await.view()
    }

    async fn fail(&self, failure: RolesError) -> RolesError {
        self.state.write().await.error = Some(failure.to_string());
        failure
    }

    pub async fn fetch(&self, page: u32) -> Result<RolesView, RolesError> {
        let page = page.max(1);
        let limit = self.state.read().await.limit;

        match self.api.list(page, limit).await {
            Ok(listing) => {
                tracing::debug!(page, limit, total = listing.total, "roles fetched");
                let mut state = self.state.write().await;
                state.rows = listing.items;
                state.total = listing.total;
                state.page = page;
                state.error = None;
                Ok(state.view())
            }
            Err(error) => {
                tracing::error!(error = %error, page, "failed to fetch roles");
                Err(self.fail(RolesError::FetchFailed).await)
            }
        }
    }

    /// Creates an enabled role and shows the first page again.
    pub async fn create(&self, name: &str) -> Result<Role, RolesError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RolesError::NameRequired);
        }

        let created = match self.api.create(NewRole::enabled(name)).await {
            Ok(role) => role,
            Err(error) => {
                tracing::error!(error = %error, "failed to create role");
                return Err(self.fail(RolesError::CreateFailed).await);
            }
        };
        tracing::info!(role_id = created.id, "role created");

        // A failed refresh is left on the board as its error.
        let _ = self.fetch(1).await;
        Ok(created)
    }

    pub async fn set_enabled(&self, id: RoleId, enabled: bool) -> Result<Role, RolesError> {
        let updated = match self.api.update(id, RolePatch::status(enabled)).await {
            Ok(role) => role,
            Err(error) => {
                tracing::error!(error = %error, role_id = id, "failed to update role status");
                return Err(self.fail(RolesError::UpdateFailed).await);
            }
        };

        let mut state = self.state.write().await;
        if let Some(row) = state.rows.iter_mut().find(|row| row.id == id) {
            *row = updated.clone();
        }
        tracing::info!(role_id = id, enabled, "role status updated");
        Ok(updated)
    }

    /// Deletes a role. Nothing happens until `confirmed` is set.
    pub async fn delete(&self, id: RoleId, confirmed: bool) -> Result<RolesView, RolesError> {
        if !confirmed {
            return Err(RolesError::ConfirmationRequired);
        }

        if let Err(error) = self.api.delete(id).await {
            tracing::error!(error = %error, role_id = id, "failed to delete role");
            return Err(self.fail(RolesError::DeleteFailed).await);
        }
        tracing::info!(role_id = id, "role deleted");

        let next_page = {
            let mut state = self.state.write().await;
            state.rows.retain(|row| row.id != id);
            let next_page = page_after_delete(state.page, state.total, state.limit);
            state.total = state.total.saturating_sub(1);
            state.page = next_page;
            next_page
        };
        self.fetch(next_page).await
    }

    /// Moves to `page` when it exists; other values leave the board as it is.
    pub async fn set_page(&self, page: u32) -> Result<RolesView, RolesError> {
        let (total, limit, current) = {
            let state = self.state.read().await;
            (state.total, state.limit, state.view())
        };
        if page < 1 || page > total_pages(total, limit) {
            tracing::debug!(page, "ignoring page outside the listing");
            return Ok(current);
        }
        self.fetch(page).await
    }

    pub async fn set_limit(&self, limit: u32) -> Result<RolesView, RolesError> {
        self.show(1, Some(limit)).await
    }

    /// Fetches `page`, first switching to `limit` rows per page when one is
    /// given. One backend call either way.
    pub async fn show(&self, page: u32, limit: Option<u32>) -> Result<RolesView, RolesError> {
        if let Some(limit) = limit {
            if limit == 0 {
                return Err(RolesError::InvalidLimit);
            }
            let mut state = self.state.write().await;
            if state.limit != limit {
                state.limit = limit;
                state.page = 1;
            }
        }
        self.fetch(page).await
    }
}
