//! Index - the facade the build pipeline talks to.
//!
//! An Index owns one upload queue, one transformer, an optional delete
//! filter and the adapter handle for the remote index. It is driven by a
//! single writer: `enqueue` and `flush` take `&mut self`.

use crate::{
    build_batch, select_stale, CleanReport, DeleteFilter, Error, FlushReport, HookError,
    IndexAdapter, IndexConfig, Record, RecordTransformer, Result, Transformed, Transformer,
    UploadQueue,
};
use tracing::{debug, info};

/// Builder for [`Index`].
pub struct IndexBuilder<A> {
    adapter: A,
    dry_run: bool,
    transformer: RecordTransformer,
    delete_filter: Option<Box<dyn DeleteFilter>>,
}

impl<A: IndexAdapter> IndexBuilder<A> {
    /// Suppress every remote mutation.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Take the run mode from construction parameters.
    ///
    /// Credentials and the index name belong to the adapter and are not
    /// read here.
    pub fn config(self, config: &IndexConfig) -> Self {
        self.dry_run(config.dry_run)
    }

    /// Install a `before_index` hook given as a closure.
    pub fn before_index<F>(self, hook: F) -> Self
    where
        F: Fn(&Record) -> std::result::Result<Transformed, HookError> + Send + Sync + 'static,
    {
        self.before_index_with(hook)
    }

    /// Install a `before_index` hook given as a strategy object.
    pub fn before_index_with(mut self, hook: impl Transformer + 'static) -> Self {
        self.transformer = RecordTransformer::with_hook(hook);
        self
    }

    /// Install a `filter_deletes` predicate given as a closure.
    pub fn filter_deletes<F>(self, filter: F) -> Self
    where
        F: Fn(&Record) -> std::result::Result<bool, HookError> + Send + Sync + 'static,
    {
        self.filter_deletes_with(filter)
    }

    /// Install a `filter_deletes` predicate given as a strategy object.
    pub fn filter_deletes_with(mut self, filter: impl DeleteFilter + 'static) -> Self {
        self.delete_filter = Some(Box::new(filter));
        self
    }

    /// Build the index with an empty queue.
    pub fn build(self) -> Index<A> {
        Index {
            adapter: self.adapter,
            dry_run: self.dry_run,
            queue: UploadQueue::new(),
            transformer: self.transformer,
            delete_filter: self.delete_filter,
        }
    }
}

/// A local view of one remote search index.
pub struct Index<A> {
    adapter: A,
    dry_run: bool,
    queue: UploadQueue,
    transformer: RecordTransformer,
    delete_filter: Option<Box<dyn DeleteFilter>>,
}

impl<A: IndexAdapter> Index<A> {
    /// Start building an index around an adapter handle.
    pub fn builder(adapter: A) -> IndexBuilder<A> {
        IndexBuilder {
            adapter,
            dry_run: false,
            transformer: RecordTransformer::identity(),
            delete_filter: None,
        }
    }

    /// Index with no hooks.
    pub fn new(adapter: A) -> Self {
        Self::builder(adapter).build()
    }

    /// Get the adapter handle.
    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    /// Check if remote mutations are suppressed.
    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Number of records waiting for the next flush.
    pub fn pending_count(&self) -> usize {
        self.queue.len()
    }

    /// Queue a raw record for the next flush.
    pub fn enqueue(&mut self, record: Record) {
        self.queue.enqueue(record);
    }

    /// Transform and upload everything queued so far.
    ///
    /// The queue is drained before anything else happens, so it is empty
    /// afterwards even if the hook or the upload fails. Callers that want
    /// to retry must keep their own copy of the documents.
    pub async fn flush(&mut self) -> Result<FlushReport> {
        let pending = self.queue.drain();
        let drained = pending.len();

        let batch = build_batch(pending, &self.transformer)?;
        let mut report = FlushReport {
            drained,
            object_ids: batch.iter().filter_map(Record::object_id).collect(),
            batch_len: batch.len(),
            submitted: false,
        };
        debug!(drained, batch = report.batch_len, "built upload batch");

        if self.dry_run {
            info!(batch = report.batch_len, "dry run, skipping bulk add");
            return Ok(report);
        }
        if batch.is_empty() {
            debug!("empty batch, skipping bulk add");
            return Ok(report);
        }

        self.adapter
            .add_objects(&batch)
            .await
            .map_err(Error::adapter("bulk add"))?;
        report.submitted = true;
        info!(records = report.batch_len, "uploaded batch");

        Ok(report)
    }

    /// Delete remote records selected by the delete filter.
    ///
    /// The remote index is always browsed first. Without a filter nothing
    /// is selected and no delete is issued.
    pub async fn clean(&self) -> Result<CleanReport> {
        let snapshot = self
            .adapter
            .browse()
            .await
            .map_err(Error::adapter("browse"))?;

        let stale = match self.delete_filter.as_deref() {
            Some(filter) => select_stale(&snapshot, filter)?,
            None => {
                debug!("no delete filter configured, keeping every record");
                Vec::new()
            }
        };
        let mut report = CleanReport {
            scanned: snapshot.len(),
            deleted: stale,
            submitted: false,
        };
        debug!(
            scanned = report.scanned,
            stale = report.deleted.len(),
            "evaluated delete filter"
        );

        if self.dry_run {
            info!(stale = report.deleted.len(), "dry run, skipping bulk delete");
            return Ok(report);
        }
        if report.deleted.is_empty() {
            return Ok(report);
        }

        self.adapter
            .delete_objects(&report.deleted)
            .await
            .map_err(Error::adapter("bulk delete"))?;
        report.submitted = true;
        info!(records = report.deleted.len(), "deleted stale records");

        Ok(report)
    }
}

impl<A> std::fmt::Debug for Index<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Index")
            .field("dry_run", &self.dry_run)
            .field("pending", &self.queue.len())
            .field("transformer", &self.transformer)
            .field("delete_filter", &self.delete_filter.is_some())
            .finish()
    }
}
