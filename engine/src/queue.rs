//! Upload queue - records waiting for the next flush.

use crate::Record;

/// Ordered, unbounded queue of raw records. Not deduplicated.
#[derive(Debug, Clone, Default)]
pub struct UploadQueue {
    records: Vec<Record>,
}

impl UploadQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record.
    pub fn enqueue(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Take every queued record, leaving the queue empty.
    pub fn drain(&mut self) -> Vec<Record> {
        std::mem::take(&mut self.records)
    }

    /// Number of queued records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(id: u64) -> Record {
        Record::try_from(json!({ "objectID": id })).unwrap()
    }

    #[test]
    fn drain_preserves_order_and_duplicates() {
        let mut queue = UploadQueue::new();
        queue.enqueue(record(2));
        queue.enqueue(record(1));
        queue.enqueue(record(2));
        assert_eq!(queue.len(), 3);

        let drained = queue.drain();
        assert_eq!(drained, vec![record(2), record(1), record(2)]);
        assert!(queue.is_empty());
    }

    #[test]
    fn drain_empty_queue() {
        let mut queue = UploadQueue::new();
        assert!(queue.drain().is_empty());
        assert!(queue.drain().is_empty());
    }

    #[test]
    fn enqueue_after_drain() {
        let mut queue = UploadQueue::new();
        queue.enqueue(record(1));
        queue.drain();
        queue.enqueue(record(5));
        assert_eq!(queue.drain(), vec![record(5)]);
    }
}
