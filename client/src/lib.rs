//! HTTP side of docsync.
//!
//! Provides [`AlgoliaClient`], an [`docsync_engine::IndexAdapter`] for
//! Algolia-compatible search APIs, plus the configuration and document
//! loading used by the `docsync` binary, and [`sync`], the pipeline the
//! binary runs.

pub mod algolia;
pub mod config;
pub mod documents;
pub mod error;
pub mod sync;

pub use algolia::{AlgoliaClient, BatchAction, BatchRequest, BatchResponse};
pub use config::{Config, ConfigError};
pub use documents::{load_documents, parse_documents};
pub use error::{ClientError, Result};
pub use sync::{sync, PruneOutcome, SkipReason, SyncReport};
