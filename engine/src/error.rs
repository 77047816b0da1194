//! Error types for the docsync engine.

use crate::adapter::AdapterError;
use thiserror::Error;

/// Error returned by user-supplied hooks (`before_index`, `filter_deletes`).
pub type HookError = Box<dyn std::error::Error + Send + Sync>;

/// All possible errors from the docsync engine.
#[derive(Debug, Error)]
pub enum Error {
    // Hook errors
    #[error("before-index hook failed on queued record {position}: {source}")]
    Transform { position: usize, source: HookError },

    #[error("delete filter failed on remote record {position}: {source}")]
    Predicate { position: usize, source: HookError },

    // Data errors
    #[error("remote record {position} selected for deletion has no objectID")]
    MissingObjectId { position: usize },

    #[error("record must be a JSON object, got {0}")]
    NotAnObject(&'static str),

    // Remote errors
    #[error("index {operation} failed: {source}")]
    Adapter {
        operation: &'static str,
        source: AdapterError,
    },
}

impl Error {
    pub(crate) fn adapter(operation: &'static str) -> impl FnOnce(AdapterError) -> Self {
        move |source| Error::Adapter { operation, source }
    }
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, Error>;
