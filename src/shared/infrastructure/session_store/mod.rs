// Key-value snapshot store holding the serialized session identity.

pub mod in_memory;

use async_trait::async_trait;

/// Key under which the serialized current user is stored.
pub const SESSION_USER_KEY: &str = "user";

#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>>;
    async fn set(&self, key: &str, value: String) -> anyhow::Result<()>;
    async fn remove(&self, key: &str) -> anyhow::Result<()>;
}
