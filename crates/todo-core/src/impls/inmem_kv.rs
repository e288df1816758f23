//! InMemoryKeyValueStore - 開発・テスト用の KeyValueStore
//!
//! プロセスが終われば消えます。永続化が必要なら `FileKeyValueStore` を使います。

use std::collections::BTreeMap;
use std::sync::Mutex;

use crate::ports::{KeyValueStore, StoreError};

/// InMemoryKeyValueStore は Mutex で守った BTreeMap
#[derive(Debug, Default)]
pub struct InMemoryKeyValueStore {
    entries: Mutex<BTreeMap<String, Vec<u8>>>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, BTreeMap<String, Vec<u8>>>, StoreError> {
        self.entries.lock().map_err(|_| StoreError::Poisoned)
    }
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: Vec<u8>) -> Result<(), StoreError> {
        self.lock()?.insert(key.to_string(), value);
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.lock()?.remove(key);
        Ok(())
    }

    fn entries(&self) -> Result<Vec<(String, Vec<u8>)>, StoreError> {
        Ok(self
            .lock()?
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_delete() {
        let store = InMemoryKeyValueStore::new();
        store.set("k", b"v".to_vec()).unwrap();
        assert_eq!(store.get("k").unwrap(), Some(b"v".to_vec()));

        store.delete("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
    }

    #[test]
    fn deleting_absent_key_is_noop() {
        let store = InMemoryKeyValueStore::new();
        store.delete("missing").unwrap();
        assert!(store.entries().unwrap().is_empty());
    }

    #[test]
    fn set_overwrites() {
        let store = InMemoryKeyValueStore::new();
        store.set("k", b"1".to_vec()).unwrap();
        store.set("k", b"2".to_vec()).unwrap();
        assert_eq!(store.entries().unwrap(), vec![("k".to_string(), b"2".to_vec())]);
    }
}
