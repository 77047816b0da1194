//! The remote index as seen by the engine.
//!
//! The engine only ever issues bulk calls: one `add_objects` per flush and
//! at most one `delete_objects` per clean. Pagination of `browse` is the
//! adapter's business.

use crate::{ObjectId, Record};
use async_trait::async_trait;
use std::sync::Arc;

/// Opaque failure from the remote index (network, auth, quota, ...).
pub type AdapterError = Box<dyn std::error::Error + Send + Sync>;

/// Handle to a remote search index.
#[async_trait]
pub trait IndexAdapter: Send + Sync {
    /// Upsert a batch of records in a single call.
    async fn add_objects(&self, records: &[Record]) -> Result<(), AdapterError>;

    /// Return every record currently stored in the index.
    async fn browse(&self) -> Result<Vec<Record>, AdapterError>;

    /// Delete the given identifiers in a single call.
    async fn delete_objects(&self, object_ids: &[ObjectId]) -> Result<(), AdapterError>;
}

#[async_trait]
impl<A: IndexAdapter + ?Sized> IndexAdapter for Arc<A> {
    async fn add_objects(&self, records: &[Record]) -> Result<(), AdapterError> {
        (**self).add_objects(records).await
    }

    async fn browse(&self) -> Result<Vec<Record>, AdapterError> {
        (**self).browse().await
    }

    async fn delete_objects(&self, object_ids: &[ObjectId]) -> Result<(), AdapterError> {
        (**self).delete_objects(object_ids).await
    }
}

#[async_trait]
impl<'a, A: IndexAdapter + ?Sized> IndexAdapter for &'a A {
    async fn add_objects(&self, records: &[Record]) -> Result<(), AdapterError> {
        (**self).add_objects(records).await
    }

    async fn browse(&self) -> Result<Vec<Record>, AdapterError> {
        (**self).browse().await
    }

    async fn delete_objects(&self, object_ids: &[ObjectId]) -> Result<(), AdapterError> {
        (**self).delete_objects(object_ids).await
    }
}
