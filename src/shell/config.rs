// Runtime configuration read from the environment.

use std::net::SocketAddr;

use chrono_tz::Tz;
use thiserror::Error;

use crate::modules::roles::use_cases::manage_roles::handler::DEFAULT_ROLES_PER_PAGE;
use crate::modules::timesheets::core::visibility::{
    ADMIN_ROLE_ID, ADMIN_ROLE_NAME, AccessPolicy, CurrentUser, RoleId,
    SECONDARY_PRIVILEGED_ROLE_ID,
};
use crate::modules::timesheets::use_cases::view_timesheet::handler::{
    DEFAULT_PROJECTS_PER_PAGE, TimesheetSettings,
};

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_BACKEND_BASE_URL: &str = "http://localhost:3000/api";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} is not a valid value: {value:?}")]
    Invalid { key: &'static str, value: String },

    #[error("{key} must be at least 1")]
    ZeroPageSize { key: &'static str },

    #[error("CONTEXT_USER is not a valid user: {0}")]
    ContextUser(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub backend_base_url: String,
    pub backend_token: Option<String>,
    pub timezone: Tz,
    pub timesheet_page_size: u32,
    pub roles_page_size: u32,
    pub policy: AccessPolicy,
    pub context_user: Option<CurrentUser>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup. Unset and blank keys
    /// take their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let bind_addr = parse_or(get("BIND_ADDR"), "BIND_ADDR", DEFAULT_BIND_ADDR)?;
        let timezone = parse_or(get("TIMESHEET_TIMEZONE"), "TIMESHEET_TIMEZONE", "UTC")?;
        let timesheet_page_size = page_size(
            get("TIMESHEET_PAGE_SIZE"),
            "TIMESHEET_PAGE_SIZE",
            DEFAULT_PROJECTS_PER_PAGE,
        )?;
        let roles_page_size =
            page_size(get("ROLES_PAGE_SIZE"), "ROLES_PAGE_SIZE", DEFAULT_ROLES_PER_PAGE)?;

        let privileged_role_ids = match get("PRIVILEGED_ROLE_IDS") {
            Some(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .map(|id| {
                    id.parse::<RoleId>().map_err(|_| ConfigError::Invalid {
                        key: "PRIVILEGED_ROLE_IDS",
                        value: raw.clone(),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?,
            None => vec![ADMIN_ROLE_ID, SECONDARY_PRIVILEGED_ROLE_ID],
        };

        let context_user = get("CONTEXT_USER")
            .map(|raw| serde_json::from_str::<CurrentUser>(&raw))
            .transpose()?;

        Ok(Self {
            bind_addr,
            backend_base_url: get("BACKEND_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BACKEND_BASE_URL.to_string()),
            backend_token: get("BACKEND_TOKEN"),
            timezone,
            timesheet_page_size,
            roles_page_size,
            policy: AccessPolicy {
                admin_role_name: get("ADMIN_ROLE_NAME")
                    .unwrap_or_else(|| ADMIN_ROLE_NAME.to_string()),
                privileged_role_ids,
            },
            context_user,
        })
    }

    pub fn timesheet_settings(&self) -> TimesheetSettings {
        TimesheetSettings {
            timezone: self.timezone,
            page_size: self.timesheet_page_size,
            policy: self.policy.clone(),
        }
    }
}

fn parse_or<T: std::str::FromStr>(
    raw: Option<String>,
    key: &'static str,
    default: &str,
) -> Result<T, ConfigError> {
    let value = raw.unwrap_or_else(|| default.to_string());
    value.parse().map_err(|_| ConfigError::Invalid { key, value })
}

fn page_size(raw: Option<String>, key: &'static str, default: u32) -> Result<u32, ConfigError> {
    let size: u32 = match raw {
        Some(value) => value.parse().map_err(|_| ConfigError::Invalid { key, value })?,
        None => default,
    };
    if size == 0 {
        return Err(ConfigError::ZeroPageSize { key });
    }
    Ok(size)
}
