//! Error taxonomy for the store and its storage backends.

use thiserror::Error;

use super::ids::TaskId;

/// Failure inside a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage io failure")]
    Io(#[from] std::io::Error),

    #[error("storage backend failure: {0}")]
    Backend(String),
}

/// Failure of a store operation.
///
/// `NotFound` and `EmptyTitle` are caller errors; the rest wrap the layer
/// below so callers can tell a bad request from a broken backend.
#[derive(Debug, Error)]
pub enum TaskStoreError {
    #[error("task not found: {0}")]
    NotFound(TaskId),

    #[error("task title must not be empty")]
    EmptyTitle,

    #[error("stored payload is not a valid task collection")]
    CorruptPayload(#[source] serde_json::Error),

    #[error("failed to read from storage")]
    StorageRead(#[source] StorageError),

    #[error("failed to write to storage")]
    StorageWrite(#[source] StorageError),
}
