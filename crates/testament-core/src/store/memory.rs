use crate::store::{KeyValueStore, StoreError};
use async_trait::async_trait;
use std::{
    collections::HashMap,
    sync::{
        Mutex,
        atomic::{AtomicBool, Ordering},
    },
};
use tokio::sync::RwLock;

///
/// MemoryStore
///
/// In-process store adapter for tests and local runs. Mirrors the ledger
/// contract surface exactly: absent keys read back as empty bytes, writes
/// replace whole values, and nothing is transactional.
///
/// Failure injection: availability can be toggled off, and writes can be
/// forced to fail with a caller-chosen rejection reason.
///

pub struct MemoryStore {
    data: RwLock<HashMap<String, Vec<u8>>>,
    available: AtomicBool,
    write_failure: Mutex<Option<String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            data: RwLock::new(HashMap::new()),
            available: AtomicBool::new(true),
            write_failure: Mutex::new(None),
        }
    }

    /// Toggle the availability probe.
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    /// Make every subsequent write fail with a rejection carrying `reason`.
    pub fn reject_writes(&self, reason: impl Into<String>) {
        let mut failure = self.write_failure.lock().expect("write failure poisoned");
        *failure = Some(reason.into());
    }

    /// Clear an injected write failure.
    pub fn accept_writes(&self) {
        let mut failure = self.write_failure.lock().expect("write failure poisoned");
        *failure = None;
    }

    /// Number of keys currently held.
    pub async fn len(&self) -> usize {
        self.data.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.data.read().await.is_empty()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn is_available(&self) -> bool {
        self.available.load(Ordering::SeqCst)
    }

    async fn get_data(&self, key: &str) -> Result<Vec<u8>, StoreError> {
        let data = self.data.read().await;

        Ok(data.get(key).cloned().unwrap_or_default())
    }

    async fn set_data(&self, key: &str, value: Vec<u8>) -> Result<(), StoreError> {
        let failure = {
            let guard = self.write_failure.lock().expect("write failure poisoned");
            guard.clone()
        };
        if let Some(reason) = failure {
            return Err(StoreError::rejected(reason));
        }

        let mut data = self.data.write().await;
        data.insert(key.to_string(), value);

        Ok(())
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn absent_key_reads_back_empty() {
        let store = MemoryStore::new();

        let bytes = store.get_data("missing").await.unwrap();
        assert!(bytes.is_empty());
    }

    #[tokio::test]
    async fn set_then_get_round_trips() {
        let store = MemoryStore::new();

        store.set_data("k", b"v".to_vec()).await.unwrap();
        assert_eq!(store.get_data("k").await.unwrap(), b"v");
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn writes_replace_whole_values() {
        let store = MemoryStore::new();

        store.set_data("k", b"old".to_vec()).await.unwrap();
        store.set_data("k", b"new".to_vec()).await.unwrap();

        assert_eq!(store.get_data("k").await.unwrap(), b"new");
    }

    #[tokio::test]
    async fn injected_rejection_fails_writes_until_cleared() {
        let store = MemoryStore::new();
        store.reject_writes("user rejected transaction");

        let err = store.set_data("k", b"v".to_vec()).await.unwrap_err();
        assert!(err.is_rejected());
        assert!(store.is_empty().await);

        store.accept_writes();
        store.set_data("k", b"v".to_vec()).await.unwrap();
    }

    #[tokio::test]
    async fn availability_toggle_is_observable() {
        let store = MemoryStore::new();
        assert!(store.is_available().await);

        store.set_available(false);
        assert!(!store.is_available().await);
    }
}
