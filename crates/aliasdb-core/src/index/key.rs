use std::fmt::{self, Display};

///
/// Purpose
///
/// Which direction of the relation a hash represents: `Alias` maps a
/// source to its aliases, `Source` maps an alias back to its sources.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Purpose {
    Alias,
    Source,
}

impl Display for Purpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Alias => "alias",
            Self::Source => "source",
        };
        write!(f, "{label}")
    }
}

///
/// Language
///
/// Language scope partitioning the index into per-language namespaces.
/// `None` is the sentinel fallback namespace, rendered as the `und`
/// (undetermined) tag.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Language {
    None,
    Tag(String),
}

impl Language {
    /// Rendering of the no-language sentinel.
    pub const NONE_TAG: &'static str = "und";

    /// Normalize an optional caller-supplied tag; absent means the sentinel.
    #[must_use]
    pub fn from_opt(tag: Option<&str>) -> Self {
        tag.map_or(Self::None, Self::tag)
    }

    #[must_use]
    pub fn tag(tag: impl Into<String>) -> Self {
        Self::Tag(tag.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::None => Self::NONE_TAG,
            Self::Tag(tag) => tag,
        }
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Derive the outer hash key for one `(purpose, language)` pair.
///
/// Deterministic, and distinct for every distinct pair: the purpose labels
/// never collide and the language renders verbatim (sentinel included).
/// Language tags must not contain `:`; callers guarantee this.
#[must_use]
pub(crate) fn derive_key(namespace: &str, purpose: Purpose, language: &Language) -> String {
    format!("{namespace}:{purpose}:{language}")
}

///
/// TESTS
///
