// src/application/ports/settings.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;

/// Generic named-option storage owned by the host.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Return the stored value, or `None` when the option was never written.
    async fn get_option(&self, name: &str) -> ApplicationResult<Option<String>>;

    /// Insert or replace the value stored under `name`.
    async fn update_option(&self, name: &str, value: &str) -> ApplicationResult<()>;
}
