//! ## Crate layout
//! - `core`: the alias index runtime — key derivation, multi-value field
//!   encoding, the public operations, the key-value client seam, and
//!   observability counters.
//!
//! The `prelude` module mirrors the runtime surface embedders use.

pub use aliasdb_core as core;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
///

pub mod prelude {
    pub use crate::core::{
        error::StoreError,
        index::{AliasIndex, IndexConfig, IndexEntry, Language, Purpose, SEPARATOR},
        kv::{KvClient, MemoryClient},
        obs,
    };
}
