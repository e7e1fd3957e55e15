//! Error types for draft storage and snapshot handling.
//!
//! ERROR HANDLING
//! ==============
//! Storage failures are typed so callers can tell a full quota from a
//! missing backend, but the draft session treats every one of them as
//! non-fatal: saves are logged and retried on the next tick.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure reported by a [`crate::DraftStorage`] backend.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// No storage is reachable (SSR render, storage disabled by the browser).
    #[error("draft storage is unavailable")]
    Unavailable,
    /// The backend refused the write because it is full.
    #[error("draft storage quota exceeded")]
    Quota,
    /// The key cannot be mapped onto the backend.
    #[error("invalid draft storage key `{0}`")]
    InvalidKey(String),
    /// Filesystem failure in [`crate::FileStorage`].
    #[error("draft storage io failed: {0}")]
    Io(#[from] std::io::Error),
    /// Any other backend-specific failure, carried as text.
    #[error("draft storage failed: {0}")]
    Backend(String),
}

/// Error returned by [`crate::DraftStore`] operations.
#[derive(Debug, thiserror::Error)]
pub enum DraftError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    /// The stored value exists but cannot be parsed as a snapshot.
    #[error("stored draft under `{key}` is corrupt: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    /// The live form could not be serialized.
    #[error("failed to serialize draft: {0}")]
    Serialize(#[source] serde_json::Error),
}
