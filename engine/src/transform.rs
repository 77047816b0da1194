//! Record transformation before upload.
//!
//! A `before_index` hook sees every queued record and decides what actually
//! gets uploaded in its place: the record itself, a replacement, several
//! records, or nothing at all.

use crate::{HookError, Record};

/// What a hook produced for one input record.
#[derive(Debug, Clone, PartialEq)]
pub enum Transformed {
    /// Upload the input record as-is
    Unchanged,
    /// Upload this record instead of the input
    One(Record),
    /// Upload these records instead of the input (empty drops the input)
    Many(Vec<Record>),
}

impl From<Record> for Transformed {
    fn from(record: Record) -> Self {
        Transformed::One(record)
    }
}

impl From<Vec<Record>> for Transformed {
    fn from(records: Vec<Record>) -> Self {
        Transformed::Many(records)
    }
}

impl From<Option<Record>> for Transformed {
    fn from(record: Option<Record>) -> Self {
        record.map_or(Transformed::Unchanged, Transformed::One)
    }
}

/// Strategy applied to each queued record during a flush.
pub trait Transformer: Send + Sync {
    fn transform(&self, record: &Record) -> Result<Transformed, HookError>;
}

impl<F> Transformer for F
where
    F: Fn(&Record) -> Result<Transformed, HookError> + Send + Sync,
{
    fn transform(&self, record: &Record) -> Result<Transformed, HookError> {
        self(record)
    }
}

/// Applies an optional [`Transformer`] and normalizes its output to a list.
#[derive(Default)]
pub struct RecordTransformer {
    hook: Option<Box<dyn Transformer>>,
}

impl RecordTransformer {
    /// Transformer that passes every record through unchanged.
    pub fn identity() -> Self {
        Self { hook: None }
    }

    /// Transformer backed by a hook.
    pub fn with_hook(hook: impl Transformer + 'static) -> Self {
        Self {
            hook: Some(Box::new(hook)),
        }
    }

    /// Check if a hook is installed.
    pub fn has_hook(&self) -> bool {
        self.hook.is_some()
    }

    /// Run the hook on one record.
    ///
    /// Hook errors are returned untouched; the caller decides how fatal
    /// they are.
    pub fn apply(&self, record: Record) -> Result<Vec<Record>, HookError> {
        let Some(hook) = &self.hook else {
            return Ok(vec![record]);
        };

        Ok(match hook.transform(&record)? {
            Transformed::Unchanged => vec![record],
            Transformed::One(replacement) => vec![replacement],
            Transformed::Many(records) => records,
        })
    }
}

impl std::fmt::Debug for RecordTransformer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordTransformer")
            .field("hook", &self.has_hook())
            .finish()
    }
}
