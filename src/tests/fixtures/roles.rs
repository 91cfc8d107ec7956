use crate::modules::roles::core::role::{Role, RoleId};

pub fn role(id: RoleId, name: &str) -> Role {
    Role {
        id,
        name: name.to_string(),
        is_enabled: true,
        extra: Default::default(),
    }
}

pub fn roles(count: i64) -> Vec<Role> {
    (1..=count).map(|id| role(id, &format!("Role {id}"))).collect()
}
