//! Typed key-value storage for user preferences.
//!
//! The page persists exactly one preference (the theme), but the storage is
//! generic: a byte-level [`SettingsBackend`] wrapped by a [`SettingsProvider`]
//! that (de)serializes with bincode.

mod backend;
mod memory;
mod sqlite;

pub use backend::SettingsBackend;
pub use memory::MemoryBackend;
pub use sqlite::SqliteBackend;

use std::sync::Arc;

use log::warn;
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("preference storage failed: {0}")]
    Storage(#[from] async_sqlite::Error),
    #[error("could not encode preference '{key}': {source}")]
    Encode {
        key: String,
        #[source]
        source: bincode::Error,
    },
    #[error("could not decode preference '{key}': {source}")]
    Decode {
        key: String,
        #[source]
        source: bincode::Error,
    },
}

/// Preferences keyed by name, stored as bincode.
#[derive(Clone)]
pub struct SettingsProvider {
    backend: Arc<dyn SettingsBackend>,
}

impl SettingsProvider {
    pub fn new(backend: impl SettingsBackend + 'static) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    /// Provider backed by process memory only.
    pub fn in_memory() -> Self {
        Self::new(MemoryBackend::new())
    }

    /// The stored value for `key`, or None if it was never saved.
    pub async fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, SettingsError> {
        let Some(bytes) = self.backend.read(key).await? else {
            return Ok(None);
        };
        bincode::deserialize(&bytes)
            .map(Some)
            .map_err(|source| SettingsError::Decode {
                key: key.to_string(),
                source,
            })
    }

    /// Like [`SettingsProvider::load`], but any miss or failure yields
    /// `default`. Failures are logged.
    pub async fn load_or<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        match self.load(key).await {
            Ok(value) => value.unwrap_or(default),
            Err(e) => {
                warn!("using default for '{}': {}", key, e);
                default
            }
        }
    }

    pub async fn store<T: Serialize + Sync>(&self, key: &str, value: &T) -> Result<(), SettingsError> {
        let bytes = bincode::serialize(value).map_err(|source| SettingsError::Encode {
            key: key.to_string(),
            source,
        })?;
        self.backend.write(key, bytes).await
    }

    pub async fn remove(&self, key: &str) -> Result<(), SettingsError> {
        self.backend.remove(key).await
    }
}
