//! Reconciliation of the remote index against local content.
//!
//! # Algorithm
//!
//! 1. Take the full remote snapshot (already paginated by the adapter)
//! 2. Ask the delete filter about every record, in snapshot order
//! 3. Collect the identifiers of selected records
//! 4. Only once the whole sweep succeeded, hand the identifiers over for a
//!    single bulk delete
//!
//! A failing predicate or a selected record without an identifier aborts
//! the sweep, so a partial sweep never turns into a partial delete.

use crate::{DeleteFilter, Error, ObjectId, Record, Result};
use serde::Serialize;

/// Outcome of a clean.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CleanReport {
    /// Remote records examined
    pub scanned: usize,
    /// Identifiers selected for deletion, in snapshot order
    pub deleted: Vec<ObjectId>,
    /// Whether the delete was sent to the remote index
    pub submitted: bool,
}

/// Select the identifiers of stale records.
pub fn select_stale(snapshot: &[Record], filter: &dyn DeleteFilter) -> Result<Vec<ObjectId>> {
    let mut stale = Vec::new();

    for (position, record) in snapshot.iter().enumerate() {
        let selected = filter
            .should_delete(record)
            .map_err(|source| Error::Predicate { position, source })?;
        if !selected {
            continue;
        }

        let id = record
            .object_id()
            .ok_or(Error::MissingObjectId { position })?;
        stale.push(id);
    }

    Ok(stale)
}
