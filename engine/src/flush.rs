//! Batch building for flushes.
//!
//! The batch is the concatenation, in queue order, of whatever the
//! transformer produced for each queued record. Outputs of one input are
//! never interleaved with outputs of another.

use crate::{Error, ObjectId, Record, RecordTransformer, Result};
use serde::Serialize;

/// Outcome of a flush.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlushReport {
    /// Raw records taken from the queue
    pub drained: usize,
    /// Identifiers of the flattened batch, in batch order
    pub object_ids: Vec<ObjectId>,
    /// Records in the flattened batch
    pub batch_len: usize,
    /// Whether the batch was sent to the remote index
    pub submitted: bool,
}

/// Run every record through the transformer and flatten the results.
///
/// Stops at the first hook error; records already transformed are
/// discarded along with the rest.
pub fn build_batch(records: Vec<Record>, transformer: &RecordTransformer) -> Result<Vec<Record>> {
    let mut batch = Vec::with_capacity(records.len());

    for (position, record) in records.into_iter().enumerate() {
        let outputs = transformer
            .apply(record)
            .map_err(|source| Error::Transform { position, source })?;
        batch.extend(outputs);
    }

    Ok(batch)
}
