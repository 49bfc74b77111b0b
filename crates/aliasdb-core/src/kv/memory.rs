use crate::{error::StoreError, kv::KvClient};
use derive_more::{Deref, DerefMut};
use std::{
    collections::BTreeMap,
    sync::{Mutex, MutexGuard},
};

///
/// Hash
/// One outer key's field → value map.
///

#[derive(Debug, Default, Deref, DerefMut)]
struct Hash(BTreeMap<String, String>);

///
/// MemoryClient
///
/// Ordered in-memory hash-of-hashes behind a mutex: the reference backend
/// for tests and in-process embedding. Mirrors the remote store's
/// observable behavior, so an outer key whose last field is removed
/// disappears entirely rather than lingering empty.
///

#[derive(Debug, Default)]
pub struct MemoryClient {
    hashes: Mutex<BTreeMap<String, Hash>>,
}

impl MemoryClient {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an outer key currently exists.
    pub fn contains_key(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.lock()?.contains_key(key))
    }

    /// Number of fields stored under an outer key (0 when absent).
    pub fn field_count(&self, key: &str) -> Result<usize, StoreError> {
        Ok(self.lock()?.get(key).map_or(0, |hash| hash.len()))
    }

    fn lock(&self) -> Result<MutexGuard<'_, BTreeMap<String, Hash>>, StoreError> {
        self.hashes
            .lock()
            .map_err(|_| StoreError::unavailable("memory client lock poisoned"))
    }
}

impl KvClient for MemoryClient {
    fn hash_get(&self, key: &str, field: &str) -> Result<Option<String>, StoreError> {
        Ok(self
            .lock()?
            .get(key)
            .and_then(|hash| hash.get(field).cloned()))
    }

    fn hash_set(&self, key: &str, field: &str, value: &str) -> Result<(), StoreError> {
        self.lock()?
            .entry(key.to_string())
            .or_default()
            .insert(field.to_string(), value.to_string());

        Ok(())
    }

    fn hash_delete(&self, key: &str, field: &str) -> Result<(), StoreError> {
        let mut hashes = self.lock()?;

        if let Some(hash) = hashes.get_mut(key) {
            hash.remove(field);
            if hash.is_empty() {
                hashes.remove(key);
            }
        }

        Ok(())
    }

    fn delete_key(&self, key: &str) -> Result<(), StoreError> {
        self.lock()?.remove(key);

        Ok(())
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_get_returns_none_for_missing_key_and_field() {
        let client = MemoryClient::new();

        assert_eq!(client.hash_get("k", "f").expect("get"), None);

        client.hash_set("k", "f", "v").expect("set");
        assert_eq!(client.hash_get("k", "other").expect("get"), None);
    }

    #[test]
    fn hash_set_overwrites_existing_field() {
        let client = MemoryClient::new();

        client.hash_set("k", "f", "v1").expect("set");
        client.hash_set("k", "f", "v2").expect("set");

        assert_eq!(
            client.hash_get("k", "f").expect("get"),
            Some("v2".to_string())
        );
        assert_eq!(client.field_count("k").expect("field count"), 1);
    }

    #[test]
    fn hash_delete_removes_field_and_drops_empty_hash() {
        let client = MemoryClient::new();

        client.hash_set("k", "f1", "v").expect("set");
        client.hash_set("k", "f2", "v").expect("set");

        client.hash_delete("k", "f1").expect("delete");
        assert!(client.contains_key("k").expect("contains"));
        assert_eq!(client.field_count("k").expect("field count"), 1);

        client.hash_delete("k", "f2").expect("delete");
        assert!(!client.contains_key("k").expect("contains"));
    }

    #[test]
    fn hash_delete_of_missing_targets_is_noop() {
        let client = MemoryClient::new();

        client.hash_delete("k", "f").expect("delete on missing key");

        client.hash_set("k", "f", "v").expect("set");
        client
            .hash_delete("k", "other")
            .expect("delete on missing field");
        assert_eq!(
            client.hash_get("k", "f").expect("get"),
            Some("v".to_string())
        );
    }

    #[test]
    fn delete_key_removes_all_fields() {
        let client = MemoryClient::new();

        client.hash_set("k", "f1", "v").expect("set");
        client.hash_set("k", "f2", "v").expect("set");

        client.delete_key("k").expect("delete key");

        assert!(!client.contains_key("k").expect("contains"));
        assert_eq!(client.hash_get("k", "f1").expect("get"), None);
    }
}
