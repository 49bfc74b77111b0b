//! Observability: ephemeral in-memory counters for index operations.
//!
//! Recording never affects operation semantics or errors. Counters are
//! process-local and reset explicitly (useful in tests and endpoints that
//! sample deltas).

use serde::{Deserialize, Serialize};
use std::cell::RefCell;

///
/// Event
/// One countable index-operation event.
///

#[derive(Clone, Copy, Debug)]
pub enum Event {
    Save,
    Delete,
    DeleteLanguage,
    Lookup,
    FallbackLookup,
    HashWrite,
    DedupSkip,
}

///
/// OpsCounters
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct OpsCounters {
    // Public operations
    pub save_calls: u64,
    pub delete_calls: u64,
    pub language_deletes: u64,
    pub lookup_calls: u64,

    // Lookup detail
    pub fallback_lookups: u64,

    // Set maintenance
    pub hash_writes: u64,
    pub dedup_skips: u64,
}

thread_local! {
    static OPS: RefCell<OpsCounters> = RefCell::new(OpsCounters::default());
}

fn with_state_mut<R>(f: impl FnOnce(&mut OpsCounters) -> R) -> R {
    OPS.with(|m| f(&mut m.borrow_mut()))
}

pub(crate) fn record(event: Event) {
    with_state_mut(|m| {
        let slot = match event {
            Event::Save => &mut m.save_calls,
            Event::Delete => &mut m.delete_calls,
            Event::DeleteLanguage => &mut m.language_deletes,
            Event::Lookup => &mut m.lookup_calls,
            Event::FallbackLookup => &mut m.fallback_lookups,
            Event::HashWrite => &mut m.hash_writes,
            Event::DedupSkip => &mut m.dedup_skips,
        };

        *slot = slot.saturating_add(1);
    });
}

/// Snapshot the current counters.
#[must_use]
pub fn report() -> OpsCounters {
    OPS.with(|m| m.borrow().clone())
}

/// Reset all counters.
pub fn reset() {
    with_state_mut(|m| *m = OpsCounters::default());
}

///
/// TESTS
///
