use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type ProjectId = i64;
pub type EntryId = i64;
pub type UserId = i64;

/// A single logged work interval as the backend returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntry {
    pub id: EntryId,
    #[serde(default)]
    pub description: String,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    /// Decimal hours.
    #[serde(default)]
    pub duration: Option<f64>,
    #[serde(default)]
    pub status: String,
    #[serde(rename = "projectId")]
    pub project_id: ProjectId,
    #[serde(rename = "userId", default)]
    pub user_id: Option<UserId>,
    #[serde(default)]
    pub created_by: Option<UserId>,
    #[serde(default)]
    pub creator: Option<EntryCreator>,
}

impl TimeEntry {
    pub fn creator_user_name(&self) -> Option<&str> {
        self.creator.as_ref()?.user_name.as_deref()
    }

    pub fn duration_hours(&self) -> f64 {
        self.duration.unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryCreator {
    #[serde(default)]
    pub user_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
}
