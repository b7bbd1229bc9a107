use async_trait::async_trait;

use super::SettingsError;

/// Where preference bytes live. Keys are plain names such as `"theme"`.
#[async_trait]
pub trait SettingsBackend: Send + Sync {
    async fn read(&self, key: &str) -> Result<Option<Vec<u8>>, SettingsError>;

    /// Insert or overwrite `key`.
    async fn write(&self, key: &str, value: Vec<u8>) -> Result<(), SettingsError>;

    /// Missing keys are not an error.
    async fn remove(&self, key: &str) -> Result<(), SettingsError>;
}
