use crate::modules::timesheets::core::visibility::{CurrentUser, RoleId, ViewerRole};

pub fn user_named(user_name: &str) -> CurrentUser {
    CurrentUser {
        user_name: Some(user_name.to_string()),
        role_id: Some(2),
        role: Some(ViewerRole {
            name: Some("Member".to_string()),
        }),
    }
}

pub fn user_with_role_id(user_name: &str, role_id: RoleId) -> CurrentUser {
    CurrentUser {
        user_name: Some(user_name.to_string()),
        role_id: Some(role_id),
        role: None,
    }
}

pub fn admin_by_name(user_name: &str, role_name: &str) -> CurrentUser {
    CurrentUser {
        user_name: Some(user_name.to_string()),
        role_id: None,
        role: Some(ViewerRole {
            name: Some(role_name.to_string()),
        }),
    }
}
