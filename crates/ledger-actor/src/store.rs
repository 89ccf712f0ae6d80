//! # Key-Value Store
//!
//! The persistence collaborator behind every `ResourceActor`. A store is a flat
//! mapping from string key to a JSON value with point operations and an ordered
//! prefix scan. No cross-key atomicity is assumed: the actors provide the
//! single-writer guarantee, the store only has to make a completed write
//! visible to the next read.
//!
//! Keys follow `<entity-kind>:<id>` where the id itself may be composite
//! (`<restaurant-id>:<sub-id>`). See [`entity_key`] and [`scope_prefix`].

use async_trait::async_trait;
use serde_json::Value;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

/// Errors raised by a [`KvStore`] backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store backend error: {0}")]
    Backend(String),
    #[error("Value codec error: {0}")]
    Codec(#[from] serde_json::Error),
}

/// Contract the engine expects from its backing store.
#[async_trait]
pub trait KvStore: Send + Sync + 'static {
    async fn get(&self, key: &str) -> Result<Option<Value>, StoreError>;

    async fn set(&self, key: &str, value: Value) -> Result<(), StoreError>;

    /// Deleting a missing key is not an error.
    async fn delete(&self, key: &str) -> Result<(), StoreError>;

    /// Every `(key, value)` whose key starts with `prefix`, in key order.
    async fn scan_prefix(&self, prefix: &str) -> Result<Vec<(String, Value)>, StoreError>;
}

/// Builds the storage key of a single entity.
pub fn entity_key(kind: &str, id: &impl std::fmt::Display) -> String {
    format!("{kind}:{id}")
}

/// Builds the prefix matching every entity of `kind` under `scope`.
pub fn scope_prefix(kind: &str, scope: &str) -> String {
    format!("{kind}:{scope}:")
}

/// In-process store, ordered so prefix scans are a range walk.
#[derive(Default)]
pub struct MemoryStore {
    entries: RwLock<BTreeMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl KvStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), StoreError> {
        self.entries.write().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.entries.write().await.remove(key);
        Ok(())
    }

    async fn scan_prefix(&self, prefix: &str) -> Result<Vec<(String, Value)>, StoreError> {
        let entries = self.entries.read().await;
        Ok(entries
            .range(prefix.to_string()..)
            .take_while(|(key, _)| key.starts_with(prefix))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_prefix_scan_stays_inside_scope() {
        let store = MemoryStore::new();
        store.set("table:r1:1", json!({"n": 1})).await.unwrap();
        store.set("table:r1:2", json!({"n": 2})).await.unwrap();
        store.set("table:r10:1", json!({"n": 3})).await.unwrap();
        store.set("order:r1:a", json!({"n": 4})).await.unwrap();

        let rows = store.scan_prefix(&scope_prefix("table", "r1")).await.unwrap();
        let keys: Vec<_> = rows.into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["table:r1:1", "table:r1:2"]);
    }

    #[tokio::test]
    async fn test_delete_missing_key_is_ok() {
        let store = MemoryStore::new();
        store.delete("order:r1:missing").await.unwrap();
        assert!(store.is_empty().await);
    }
}
