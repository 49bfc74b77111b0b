use serde::{Deserialize, Serialize};

/// Namespace used when the embedder configures nothing.
const DEFAULT_NAMESPACE: &str = "path";

///
/// IndexConfig
///
/// Embedder-facing configuration. The namespace prefixes every derived
/// outer key, so several deployments can share one store without their
/// hashes colliding.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct IndexConfig {
    namespace: String,
}

impl IndexConfig {
    #[must_use]
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }

    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
        }
    }
}

///
/// TESTS
///
