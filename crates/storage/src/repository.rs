use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Key/value store for small user preferences such as the sound toggle.
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    /// Read a boolean preference. `Ok(None)` when it was never written.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    async fn get_bool(&self, key: &str) -> Result<Option<bool>, StorageError>;

    /// Write a boolean preference, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the value cannot be stored.
    async fn set_bool(&self, key: &str, value: bool) -> Result<(), StorageError>;
}

/// Simple in-memory preference store for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryPreferences {
    values: Arc<Mutex<HashMap<String, bool>>>,
}

impl InMemoryPreferences {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PreferenceStore for InMemoryPreferences {
    async fn get_bool(&self, key: &str) -> Result<Option<bool>, StorageError> {
        let guard = self
            .values
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(key).copied())
    }

    async fn set_bool(&self, key: &str, value: bool) -> Result<(), StorageError> {
        let mut guard = self
            .values
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(key.to_owned(), value);
        Ok(())
    }
}

/// Aggregates repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub preferences: Arc<dyn PreferenceStore>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let preferences: Arc<dyn PreferenceStore> = Arc::new(InMemoryPreferences::new());
        Self { preferences }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_key_reads_as_none() {
        let repo = InMemoryPreferences::new();
        assert_eq!(repo.get_bool("soundEnabled").await.unwrap(), None);
    }

    #[tokio::test]
    async fn last_write_wins() {
        let repo = InMemoryPreferences::new();
        repo.set_bool("soundEnabled", false).await.unwrap();
        assert_eq!(repo.get_bool("soundEnabled").await.unwrap(), Some(false));

        repo.set_bool("soundEnabled", true).await.unwrap();
        assert_eq!(repo.get_bool("soundEnabled").await.unwrap(), Some(true));
    }

    #[tokio::test]
    async fn clones_share_state() {
        let storage = Storage::in_memory();
        let other = storage.clone();
        storage.preferences.set_bool("k", true).await.unwrap();
        assert_eq!(other.preferences.get_bool("k").await.unwrap(), Some(true));
    }
}
