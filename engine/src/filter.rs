//! Delete filters - decide which remote records are stale.

use crate::{HookError, ObjectId, Record};
use std::collections::HashSet;

/// Strategy consulted for every remote record during a clean.
///
/// Returning `true` marks the record for deletion.
pub trait DeleteFilter: Send + Sync {
    fn should_delete(&self, record: &Record) -> Result<bool, HookError>;
}

impl<F> DeleteFilter for F
where
    F: Fn(&Record) -> Result<bool, HookError> + Send + Sync,
{
    fn should_delete(&self, record: &Record) -> Result<bool, HookError> {
        self(record)
    }
}

/// Deletes every remote record whose identifier is not in a known set.
///
/// Typically built from the identifiers of the last flush, so the remote
/// index ends up holding exactly what was just uploaded. Records without an
/// identifier are left alone.
#[derive(Debug, Clone, Default)]
pub struct RetainSet {
    keep: HashSet<ObjectId>,
}

impl RetainSet {
    /// Create a filter keeping the given identifiers.
    pub fn new(keep: impl IntoIterator<Item = ObjectId>) -> Self {
        Self {
            keep: keep.into_iter().collect(),
        }
    }

    /// Number of identifiers kept.
    pub fn len(&self) -> usize {
        self.keep.len()
    }

    /// Check if the set keeps nothing.
    pub fn is_empty(&self) -> bool {
        self.keep.is_empty()
    }
}

impl DeleteFilter for RetainSet {
    fn should_delete(&self, record: &Record) -> Result<bool, HookError> {
        Ok(record
            .object_id()
            .is_some_and(|id| !self.keep.contains(&id)))
    }
}
