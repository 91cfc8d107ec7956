pub mod entries;
pub mod roles;
pub mod state;
pub mod users;
