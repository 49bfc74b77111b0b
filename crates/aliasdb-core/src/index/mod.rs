//! Module: index
//! Responsibility: the alias/source index — key naming, set updates, and
//! language-fallback lookup over the injected client.
//! Does not own: client transport, retry policy, or cross-side consistency
//! (saving and deleting write both directions; keeping them symmetric under
//! external writers is a caller contract).

mod config;
mod entry;
mod key;

pub use config::IndexConfig;
pub use entry::{IndexEntry, SEPARATOR};
pub use key::{Language, Purpose};

use crate::{error::StoreError, kv::KvClient, obs};

///
/// AliasIndex
///
/// Bidirectional alias/source resolution over a remote hash store. Every
/// association is written twice: the alias into the source's set under the
/// ALIAS-purpose key, and the source into the alias's set under the
/// SOURCE-purpose key.
///
/// Set updates are read-modify-write with no optimistic guard. Concurrent
/// writers to the same `(purpose, language, field)` can race and the last
/// full rewrite wins; the dedup check only suppresses redundant writes, it
/// does not close the window.
///

pub struct AliasIndex<C: KvClient> {
    client: C,
    config: IndexConfig,
    debug: bool,
}

impl<C: KvClient> AliasIndex<C> {
    /// Create an index over an injected client with default configuration.
    #[must_use]
    pub fn new(client: C) -> Self {
        Self::with_config(client, IndexConfig::default())
    }

    #[must_use]
    pub const fn with_config(client: C, config: IndexConfig) -> Self {
        Self {
            client,
            config,
            debug: false,
        }
    }

    /// Enable `[debug]` tracing for subsequent operations.
    #[must_use]
    pub const fn debug(mut self) -> Self {
        self.debug = true;
        self
    }

    /// Borrow the underlying client.
    #[must_use]
    pub const fn client(&self) -> &C {
        &self.client
    }

    fn debug_log(&self, s: impl Into<String>) {
        if self.debug {
            println!("[debug] {}", s.into());
        }
    }

    fn derive_key(&self, purpose: Purpose, language: &Language) -> String {
        key::derive_key(self.config.namespace(), purpose, language)
    }

    // ─────────────────────────────────────────────
    // Public operations
    // ─────────────────────────────────────────────

    /// Associate `alias` with `source` under one language scope.
    ///
    /// Idempotent per direction: re-saving an existing association performs
    /// no write. Inputs must not contain [`SEPARATOR`]; that precondition is
    /// the caller's and is not validated here.
    pub fn save_association(
        &self,
        source: &str,
        alias: &str,
        language: Option<&str>,
    ) -> Result<(), StoreError> {
        let language = Language::from_opt(language);
        obs::record(obs::Event::Save);
        self.debug_log(format!("save {source} <-> {alias} ({language})"));

        self.save_in_hash(&self.derive_key(Purpose::Alias, &language), source, alias)?;
        self.save_in_hash(&self.derive_key(Purpose::Source, &language), alias, source)?;

        Ok(())
    }

    /// Remove one association in both directions.
    ///
    /// A missing field or missing element is a silent no-op. Removing the
    /// last element of a set deletes the hash field rather than leaving an
    /// empty string behind.
    pub fn delete_association(
        &self,
        source: &str,
        alias: &str,
        language: Option<&str>,
    ) -> Result<(), StoreError> {
        let language = Language::from_opt(language);
        obs::record(obs::Event::Delete);
        self.debug_log(format!("delete {source} <-> {alias} ({language})"));

        self.delete_in_hash(&self.derive_key(Purpose::Alias, &language), source, alias)?;
        self.delete_in_hash(&self.derive_key(Purpose::Source, &language), alias, source)?;

        Ok(())
    }

    /// Drop both purpose hashes for a language outright, contents and all.
    ///
    /// The tag is taken verbatim; pass [`Language::NONE_TAG`] to wipe the
    /// no-language namespace.
    pub fn delete_language(&self, language: &str) -> Result<(), StoreError> {
        let language = Language::tag(language);
        obs::record(obs::Event::DeleteLanguage);
        self.debug_log(format!("delete language {language}"));

        self.client
            .delete_key(&self.derive_key(Purpose::Alias, &language))?;
        self.client
            .delete_key(&self.derive_key(Purpose::Source, &language))?;

        Ok(())
    }

    /// Resolve the oldest alias recorded for a source.
    pub fn lookup_alias(
        &self,
        source: &str,
        language: Option<&str>,
    ) -> Result<Option<String>, StoreError> {
        self.lookup_in_hash(Purpose::Alias, source, language)
    }

    /// Resolve the oldest source recorded for an alias.
    pub fn lookup_source(
        &self,
        alias: &str,
        language: Option<&str>,
    ) -> Result<Option<String>, StoreError> {
        self.lookup_in_hash(Purpose::Source, alias, language)
    }

    // ─────────────────────────────────────────────
    // Set updates (shared by both directions)
    // ─────────────────────────────────────────────

    fn save_in_hash(&self, key: &str, field: &str, element: &str) -> Result<(), StoreError> {
        match self.read_field(key, field)? {
            None => {
                // First element: stored bare, without the separator.
                obs::record(obs::Event::HashWrite);
                self.client.hash_set(key, field, element)
            }
            Some(raw) => {
                let mut entry = IndexEntry::decode(&raw);
                if entry.insert(element) {
                    obs::record(obs::Event::HashWrite);
                    self.client.hash_set(key, field, &entry.encode())
                } else {
                    // Already a member: skip the write entirely.
                    obs::record(obs::Event::DedupSkip);
                    Ok(())
                }
            }
        }
    }

    fn delete_in_hash(&self, key: &str, field: &str, element: &str) -> Result<(), StoreError> {
        let Some(raw) = self.read_field(key, field)? else {
            return Ok(());
        };

        let mut entry = IndexEntry::decode(&raw);
        if !entry.remove(element) {
            return Ok(());
        }

        if entry.is_empty() {
            // Last element gone: drop the field, never store an empty set.
            self.client.hash_delete(key, field)
        } else {
            obs::record(obs::Event::HashWrite);
            self.client.hash_set(key, field, &entry.encode())
        }
    }

    fn lookup_in_hash(
        &self,
        purpose: Purpose,
        field: &str,
        language: Option<&str>,
    ) -> Result<Option<String>, StoreError> {
        obs::record(obs::Event::Lookup);

        // An explicit language consults its own hash first and falls back to
        // the no-language hash on a miss; no language consults only the
        // no-language hash.
        let (language, fall_back_to_none) = match language {
            Some(tag) => (Language::tag(tag), true),
            None => (Language::None, false),
        };

        let mut value = self.read_field(&self.derive_key(purpose, &language), field)?;

        if value.is_none() && fall_back_to_none {
            obs::record(obs::Event::FallbackLookup);
            value = self.read_field(&self.derive_key(purpose, &Language::None), field)?;
        }

        let resolved = value.and_then(|raw| IndexEntry::decode(&raw).into_first());
        self.debug_log(format!(
            "lookup {purpose} {field} ({language}) -> {}",
            resolved.as_deref().unwrap_or("<none>")
        ));

        Ok(resolved)
    }

    /// Read one field, treating an empty stored string as absent. This
    /// crate never writes empty values; a foreign writer's empty string
    /// must not shadow the fallback hash or survive a save.
    fn read_field(&self, key: &str, field: &str) -> Result<Option<String>, StoreError> {
        Ok(self
            .client
            .hash_get(key, field)?
            .filter(|value| !value.is_empty()))
    }
}

///
/// TESTS
///
