//! The upload-then-prune pipeline run by the `docsync` binary.

use crate::config::Config;
use crate::documents::load_documents;
use crate::error::Result;
use docsync_engine::{CleanReport, FlushReport, Index, IndexAdapter, RetainSet};
use serde::Serialize;
use tracing::{info, warn};

/// Why a requested prune did not run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SkipReason {
    /// The uploaded batch carried no identifiers at all.
    NoIdentifiers,
    /// Some uploaded records had no identifier, so they cannot be told
    /// apart from stale remote records.
    MissingIdentifiers { missing: usize },
}

/// What happened to the prune step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "status")]
pub enum PruneOutcome {
    Disabled,
    Skipped { reason: SkipReason },
    Ran { report: CleanReport },
}

/// Result of one sync run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncReport {
    pub flushed: FlushReport,
    pub prune: PruneOutcome,
}

/// Upload the configured documents and optionally prune the rest.
///
/// Pruning deletes every remote record whose id was not uploaded in this
/// run. It only runs when every record of the uploaded batch carried an
/// `objectID`; otherwise the records the search API just assigned ids to
/// would be selected as stale.
pub async fn sync<A: IndexAdapter>(config: &Config, adapter: A) -> Result<SyncReport> {
    info!(
        index = %config.index.name,
        dry_run = config.index.dry_run,
        "Syncing documents from {}",
        config.input.display()
    );

    let documents = load_documents(&config.input).await?;
    let mut index = Index::builder(&adapter).config(&config.index).build();
    for document in documents {
        index.enqueue(document);
    }

    let flushed = index.flush().await?;
    info!(
        drained = flushed.drained,
        uploaded = flushed.batch_len,
        submitted = flushed.submitted,
        "Flush complete"
    );

    let prune = if !config.prune {
        PruneOutcome::Disabled
    } else if let Some(reason) = prune_blocker(&flushed) {
        warn!(?reason, "refusing to prune");
        PruneOutcome::Skipped { reason }
    } else {
        let pruner = Index::builder(&adapter)
            .config(&config.index)
            .filter_deletes_with(RetainSet::new(flushed.object_ids.iter().cloned()))
            .build();
        let report = pruner.clean().await?;
        info!(
            scanned = report.scanned,
            stale = report.deleted.len(),
            submitted = report.submitted,
            "Clean complete"
        );
        PruneOutcome::Ran { report }
    };

    Ok(SyncReport { flushed, prune })
}

fn prune_blocker(flushed: &FlushReport) -> Option<SkipReason> {
    if flushed.object_ids.is_empty() {
        return Some(SkipReason::NoIdentifiers);
    }
    let missing = flushed.batch_len - flushed.object_ids.len();
    (missing > 0).then_some(SkipReason::MissingIdentifiers { missing })
}
