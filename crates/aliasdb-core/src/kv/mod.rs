//! Module: kv
//! Responsibility: the key-value client seam (hash-of-hashes primitives).
//! Does not own: key naming, value encoding, or fallback semantics.
//! Boundary: index -> kv (one-way).

mod memory;

pub use memory::MemoryClient;

use crate::error::StoreError;

///
/// KvClient
///
/// The four remote-store primitives the index consumes. A client is
/// injected at construction; the core holds no global client state and no
/// timeout or retry policy of its own.
///
/// Contract:
/// - `hash_get` has no side effects and returns `None` for a missing field.
/// - `hash_set` creates or overwrites the field's value.
/// - `hash_delete` and `delete_key` are no-ops on missing targets.
///

pub trait KvClient {
    /// Read one hash field.
    fn hash_get(&self, key: &str, field: &str) -> Result<Option<String>, StoreError>;

    /// Create or overwrite one hash field.
    fn hash_set(&self, key: &str, field: &str, value: &str) -> Result<(), StoreError>;

    /// Remove one hash field if present.
    fn hash_delete(&self, key: &str, field: &str) -> Result<(), StoreError>;

    /// Remove an entire outer key and all its fields.
    fn delete_key(&self, key: &str) -> Result<(), StoreError>;
}
