use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("storage quota exceeded")]
    QuotaExceeded,
}

/// String key/value storage, the durable layer behind learner progress.
///
/// Values are opaque to the adapter; callers own the encoding.
#[async_trait]
pub trait KeyValueRepository: Send + Sync {
    /// Fetch the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Insert or replace the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the value cannot be written.
    async fn put(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Pre-populate a key, e.g. to simulate data left by a previous run.
    #[must_use]
    pub fn with_entry(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.into(), value.into());
        self
    }
}

#[async_trait]
impl KeyValueRepository for InMemoryRepository {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(key).cloned())
    }

    async fn put(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.remove(key);
        Ok(())
    }
}

/// Aggregates repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub kv: Arc<dyn KeyValueRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let kv: Arc<dyn KeyValueRepository> = Arc::new(InMemoryRepository::new());
        Self { kv }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn put_get_remove_round_trip() {
        let repo = InMemoryRepository::new();
        assert_eq!(repo.get("k").await.unwrap(), None);

        repo.put("k", "v1").await.unwrap();
        repo.put("k", "v2").await.unwrap();
        assert_eq!(repo.get("k").await.unwrap().as_deref(), Some("v2"));

        repo.remove("k").await.unwrap();
        repo.remove("k").await.unwrap();
        assert_eq!(repo.get("k").await.unwrap(), None);
    }

    #[tokio::test]
    async fn clones_share_entries() {
        let repo = InMemoryRepository::new().with_entry("seeded", "{}");
        let storage = Storage {
            kv: Arc::new(repo.clone()),
        };
        storage.kv.put("other", "1").await.unwrap();
        assert_eq!(repo.get("other").await.unwrap().as_deref(), Some("1"));
        assert_eq!(repo.get("seeded").await.unwrap().as_deref(), Some("{}"));
    }

    #[test]
    fn seeding_survives_a_poisoned_lock() {
        let repo = InMemoryRepository::new();
        let entries = Arc::clone(&repo.entries);
        let _ = std::thread::spawn(move || {
            let _guard = entries.lock().unwrap();
            panic!("poison the lock");
        })
        .join();
        assert!(repo.entries.is_poisoned());

        let repo = repo.with_entry("k", "v");
        let entries = repo.entries.lock().unwrap_or_else(PoisonError::into_inner);
        assert_eq!(entries.get("k").map(String::as_str), Some("v"));
    }
}
