//! Core runtime for AliasDB: the language-scoped bidirectional alias index
//! and the key-value client seam it runs against.
//!
//! One hash per `(purpose, language)` pair: the ALIAS-purpose hash maps a
//! source to its aliases, the SOURCE-purpose hash maps an alias back to its
//! sources. Multi-valued fields are separator-joined sets, oldest element
//! first.

pub mod error;
pub mod index;
pub mod kv;
pub mod obs;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// Errors, clients, and observability surfaces are imported explicitly.
///

pub mod prelude {
    pub use crate::{
        index::{AliasIndex, IndexConfig, Language, Purpose},
        kv::KvClient,
    };
}
