use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub type RoleId = i64;

/// A role as the backend returns it. Fields this crate does not know about
/// are kept in `extra` and written back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub id: RoleId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub is_enabled: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewRole {
    pub name: String,
    pub is_enabled: bool,
}

impl NewRole {
    pub fn enabled(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_enabled: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RolePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_enabled: Option<bool>,
}

impl RolePatch {
    pub fn status(is_enabled: bool) -> Self {
        Self {
            is_enabled: Some(is_enabled),
            ..Self::default()
        }
    }
}
