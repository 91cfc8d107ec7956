// Role based visibility of time entries.
//
// The viewer is always passed in explicitly; nothing here reads session state.

use serde::{Deserialize, Serialize};

use crate::modules::timesheets::core::entry::TimeEntry;

pub type RoleId = i64;

pub const ADMIN_ROLE_ID: RoleId = 1;
pub const SECONDARY_PRIVILEGED_ROLE_ID: RoleId = 4;
pub const ADMIN_ROLE_NAME: &str = "admin";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub role_id: Option<RoleId>,
    #[serde(default)]
    pub role: Option<ViewerRole>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewerRole {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessPolicy {
    pub admin_role_name: String,
    pub privileged_role_ids: Vec<RoleId>,
}

impl Default for AccessPolicy {
    fn default() -> Self {
        Self {
            admin_role_name: ADMIN_ROLE_NAME.to_string(),
            privileged_role_ids: vec![ADMIN_ROLE_ID, SECONDARY_PRIVILEGED_ROLE_ID],
        }
    }
}

impl AccessPolicy {
    pub fn is_admin(&self, user: &CurrentUser) -> bool {
        let admin_by_name = user
            .role
            .as_ref()
            .and_then(|role| role.name.as_deref())
            .is_some_and(|name| name.eq_ignore_ascii_case(&self.admin_role_name));
        let admin_by_id = user
            .role_id
            .is_some_and(|id| self.privileged_role_ids.contains(&id));
        admin_by_name || admin_by_id
    }

    /// Entries `viewer` may see. No viewer means no restriction.
    pub fn filter_by_role(
        &self,
        entries: &[TimeEntry],
        viewer: Option<&CurrentUser>,
    ) -> Vec<TimeEntry> {
        let Some(viewer) = viewer else {
            tracing::debug!("no current user, showing all entries");
            return entries.to_vec();
        };

        if self.is_admin(viewer) {
            tracing::debug!(role_id = ?viewer.role_id, "admin viewer, showing all entries");
            return entries.to_vec();
        }

        let Some(user_name) = viewer.user_name.as_deref() else {
            tracing::debug!("viewer has no user name, hiding all entries");
            return Vec::new();
        };

        let visible: Vec<TimeEntry> = entries
            .iter()
            .filter(|entry| entry.creator_user_name() == Some(user_name))
            .cloned()
            .collect();
        tracing::debug!(
            user_name,
            visible = visible.len(),
            total = entries.len(),
            "filtered entries by creator"
        );
        visible
    }
}

/// Filters with the default policy.
pub fn filter_by_role(entries: &[TimeEntry], viewer: Option<&CurrentUser>) -> Vec<TimeEntry> {
    AccessPolicy::default().filter_by_role(entries, viewer)
}
