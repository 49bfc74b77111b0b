use thiserror::Error as ThisError;

///
/// StoreError
///
/// Failure surface of the key-value client primitives. The index layer
/// propagates these unmodified: no retry, no backoff, no fallback store.
/// Not-found is never an error; lookups model it as an empty result and
/// deletes as a silent no-op.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum StoreError {
    #[error("store unavailable: {message}")]
    Unavailable { message: String },

    #[error("store backend error: {message}")]
    Backend { message: String },
}

impl StoreError {
    /// Construct an unavailable-store error (connection-level failure).
    #[must_use]
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Construct a backend failure reported by the client.
    #[must_use]
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }
}
