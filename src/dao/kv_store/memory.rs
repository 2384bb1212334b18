//! In-memory [`KvStore`] used for tests and storage-less development runs.
//!
//! State is process-local and lost on restart, matching the original
//! in-memory singleton variants of the leaderboard and current-song records.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use futures::future::BoxFuture;

use crate::dao::{
    kv_store::{KvStore, resolve_range},
    storage::StorageResult,
};

#[derive(Default)]
struct Tables {
    strings: HashMap<String, String>,
    lists: HashMap<String, Vec<String>>,
}

/// Map-backed key-value store with the same range and glob semantics as the
/// managed service.
#[derive(Clone, Default)]
pub struct MemoryKvStore {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryKvStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn with_tables<T>(&self, f: impl FnOnce(&mut Tables) -> T) -> T {
        let mut guard = match self.tables.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        f(&mut guard)
    }
}

impl KvStore for MemoryKvStore {
    fn get(&self, key: &str) -> BoxFuture<'static, StorageResult<Option<String>>> {
        let this = self.clone();
        let key = key.to_owned();
        Box::pin(async move { Ok(this.with_tables(|tables| tables.strings.get(&key).cloned())) })
    }

    fn set(&self, key: &str, value: String) -> BoxFuture<'static, StorageResult<()>> {
        let this = self.clone();
        let key = key.to_owned();
        Box::pin(async move {
            this.with_tables(|tables| {
                tables.strings.insert(key, value);
            });
            Ok(())
        })
    }

    fn del(&self, key: &str) -> BoxFuture<'static, StorageResult<()>> {
        let this = self.clone();
        let key = key.to_owned();
        Box::pin(async move {
            this.with_tables(|tables| {
                tables.strings.remove(&key);
                tables.lists.remove(&key);
            });
            Ok(())
        })
    }

    fn lpush(&self, key: &str, value: String) -> BoxFuture<'static, StorageResult<()>> {
        let this = self.clone();
        let key = key.to_owned();
        Box::pin(async move {
            this.with_tables(|tables| {
                tables.lists.entry(key).or_default().insert(0, value);
            });
            Ok(())
        })
    }

    fn lrange(
        &self,
        key: &str,
        start: i64,
        stop: i64,
    ) -> BoxFuture<'static, StorageResult<Vec<String>>> {
        let this = self.clone();
        let key = key.to_owned();
        Box::pin(async move {
            Ok(this.with_tables(|tables| {
                let Some(list) = tables.lists.get(&key) else {
                    return Vec::new();
                };
                match resolve_range(list.len(), start, stop) {
                    Some((from, to)) => list[from..=to].to_vec(),
                    None => Vec::new(),
                }
            }))
        })
    }

    fn list_keys(&self, pattern: &str) -> BoxFuture<'static, StorageResult<Vec<String>>> {
        let this = self.clone();
        let pattern = pattern.to_owned();
        Box::pin(async move {
            Ok(this.with_tables(|tables| {
                let matches = |key: &str| match pattern.strip_suffix('*') {
                    Some(prefix) => key.starts_with(prefix),
                    None => key == pattern,
                };
                let mut keys: Vec<String> = tables
                    .strings
                    .keys()
                    .chain(tables.lists.keys())
                    .filter(|key| matches(key))
                    .cloned()
                    .collect();
                keys.sort();
                keys.dedup();
                keys
            }))
        })
    }

    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>> {
        Box::pin(async { Ok(()) })
    }

    fn try_reconnect(&self) -> BoxFuture<'static, StorageResult<()>> {
        Box::pin(async { Ok(()) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn set_get_del_round_trip() {
        let store = MemoryKvStore::new();
        store.set("session_status", "true".into()).await.unwrap();
        assert_eq!(
            store.get("session_status").await.unwrap(),
            Some("true".into())
        );

        store.del("session_status").await.unwrap();
        assert_eq!(store.get("session_status").await.unwrap(), None);
    }

    #[tokio::test]
    async fn get_missing_key_is_none() {
        let store = MemoryKvStore::new();
        assert_eq!(store.get("absent").await.unwrap(), None);
    }

    #[tokio::test]
    async fn lpush_prepends_and_lrange_slices() {
        let store = MemoryKvStore::new();
        store.lpush("log", "first".into()).await.unwrap();
        store.lpush("log", "second".into()).await.unwrap();
        store.lpush("log", "third".into()).await.unwrap();

        let all = store.lrange("log", 0, -1).await.unwrap();
        assert_eq!(all, vec!["third", "second", "first"]);

        let head = store.lrange("log", 0, 1).await.unwrap();
        assert_eq!(head, vec!["third", "second"]);
    }

    #[tokio::test]
    async fn list_keys_supports_prefix_glob() {
        let store = MemoryKvStore::new();
        store.set("user_action:a", "{}".into()).await.unwrap();
        store.lpush("user_action:all", "a".into()).await.unwrap();
        store.set("admin_token", "tok".into()).await.unwrap();

        let keys = store.list_keys("user_action:*").await.unwrap();
        assert_eq!(keys, vec!["user_action:a", "user_action:all"]);

        let exact = store.list_keys("admin_token").await.unwrap();
        assert_eq!(exact, vec!["admin_token"]);
    }
}
