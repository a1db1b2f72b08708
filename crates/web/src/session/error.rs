//! Session error types.

use thiserror::Error;

use super::storage::StorageError;

/// Errors raised while persisting or restoring a session.
///
/// Rejected credentials are not an error: `login` reports them as `false`.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The storage backend failed.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The principal could not be serialized for storage.
    #[error("failed to serialize principal: {0}")]
    Serialize(#[from] serde_json::Error),
}
