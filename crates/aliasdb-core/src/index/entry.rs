//! Module: index::entry
//! Responsibility: the separator-joined multi-value field codec.
//! Does not own: which hash or field a value lives under.
//! Boundary: index operations decode, mutate, and re-encode around the
//! client round trip; nothing else touches the wire encoding.

/// Reserved separator joining set elements inside a single hash field.
///
/// Source and alias strings must never contain this character; that is a
/// caller precondition and the codec does not validate it.
pub const SEPARATOR: char = '#';

const SEPARATOR_STR: &str = "#";

///
/// IndexEntry
///
/// Insertion-ordered, duplicate-free set of strings as stored in one hash
/// field. The oldest element sits first; lookups resolve to it alone.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct IndexEntry {
    elements: Vec<String>,
}

impl IndexEntry {
    /// Decode a stored value. A legacy single value (no separator) decodes
    /// to a one-element set. Callers never feed an empty raw value; empty
    /// stored strings are treated as absent before decoding.
    #[must_use]
    pub fn decode(raw: &str) -> Self {
        Self {
            elements: raw.split(SEPARATOR).map(str::to_string).collect(),
        }
    }

    /// Rejoin the set for storage, oldest element first.
    #[must_use]
    pub fn encode(&self) -> String {
        self.elements.join(SEPARATOR_STR)
    }

    /// Append an element unless it is already a member.
    ///
    /// Returns whether the set changed; an unchanged set means the caller
    /// can skip its write entirely.
    pub fn insert(&mut self, element: &str) -> bool {
        if self.contains(element) {
            return false;
        }

        self.elements.push(element.to_string());
        true
    }

    /// Remove an element wherever it sits, keeping the survivors' relative
    /// order. Returns whether the set changed.
    pub fn remove(&mut self, element: &str) -> bool {
        // Position 0 is a valid match; only a missing element is not-found.
        match self.elements.iter().position(|existing| existing == element) {
            Some(index) => {
                self.elements.remove(index);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn contains(&self, element: &str) -> bool {
        self.elements.iter().any(|existing| existing == element)
    }

    /// Oldest element, if any.
    #[must_use]
    pub fn first(&self) -> Option<&str> {
        self.elements.first().map(String::as_str)
    }

    /// Consume the set, yielding the oldest element.
    #[must_use]
    pub fn into_first(self) -> Option<String> {
        self.elements.into_iter().next()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }
}

///
/// TESTS
///
