//! # docsync engine
//!
//! Keeps a remote search index in step with a set of locally generated
//! documents.
//!
//! The engine batches document upserts, lets a hook reshape each document
//! before upload, and removes remote records that no longer correspond to
//! local content. The remote index itself is reached through the
//! [`IndexAdapter`] trait, so everything here is testable without a network.
//!
//! ## Core Concepts
//!
//! ### Records
//!
//! A [`Record`] is a JSON object. Once it reaches the remote index it must
//! carry an `objectID` field, read with [`Record::object_id`].
//!
//! ### Flushing
//!
//! Documents are queued with [`Index::enqueue`] and uploaded with
//! [`Index::flush`]:
//! 1. The [`UploadQueue`] is drained
//! 2. Every record passes through the [`RecordTransformer`], which may keep,
//!    replace, expand or drop it (see [`Transformed`])
//! 3. The flattened batch goes to the adapter in a single bulk add
//!
//! ### Cleaning
//!
//! [`Index::clean`] browses the whole remote index, asks the configured
//! [`DeleteFilter`] about every record, and deletes the selected identifiers
//! in a single bulk delete. Nothing is deleted unless every predicate call
//! succeeded.
//!
//! ### Dry Run
//!
//! With [`IndexBuilder::dry_run`] enabled (usually taken from
//! [`IndexConfig::dry_run`]), the engine never issues `add_objects`
//! or `delete_objects`. Queueing, transforming and the read-only stale sweep
//! still run, and the returned reports describe what would have happened.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use docsync_engine::{Index, IndexAdapter, Record, Transformed};
//! use serde_json::json;
//!
//! # async fn run(adapter: impl IndexAdapter + 'static) -> docsync_engine::Result<()> {
//! let mut index = Index::builder(adapter)
//!     .before_index(|record: &Record| {
//!         let mut record = record.clone();
//!         record.insert("section", json!("api"));
//!         Ok(Transformed::One(record))
//!     })
//!     .filter_deletes(|record: &Record| Ok(record.get("stale") == Some(&json!(true))))
//!     .build();
//!
//! index.enqueue(Record::try_from(json!({"objectID": "intro", "title": "Intro"}))?);
//! let report = index.flush().await?;
//! assert_eq!(report.object_ids, vec!["intro".to_string()]);
//!
//! index.clean().await?;
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod config;
pub mod error;
pub mod filter;
pub mod flush;
pub mod index;
pub mod queue;
pub mod reconcile;
pub mod record;
pub mod transform;

// Re-export main types at crate root
pub use adapter::{AdapterError, IndexAdapter};
pub use config::IndexConfig;
pub use error::{Error, HookError, Result};
pub use filter::{DeleteFilter, RetainSet};
pub use flush::{build_batch, FlushReport};
pub use index::{Index, IndexBuilder};
pub use queue::UploadQueue;
pub use reconcile::{select_stale, CleanReport};
pub use record::{Record, OBJECT_ID_FIELD};
pub use transform::{RecordTransformer, Transformed, Transformer};

/// Identifier of a record in the remote index.
pub type ObjectId = String;
