//! Loading generated documents from disk.
//!
//! Accepts either a JSON array of objects or JSON Lines (one object per
//! line, blank lines ignored).

use crate::error::{ClientError, Result};
use docsync_engine::Record;
use std::path::Path;

/// Read every document in `path`.
pub async fn load_documents(path: impl AsRef<Path>) -> Result<Vec<Record>> {
    let contents = tokio::fs::read_to_string(path).await?;
    parse_documents(&contents)
}

/// Parse documents from a JSON array or JSON Lines.
pub fn parse_documents(contents: &str) -> Result<Vec<Record>> {
    if contents.trim_start().starts_with('[') {
        return Ok(serde_json::from_str(contents)?);
    }

    contents
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(n, line)| {
            serde_json::from_str(line).map_err(|e| ClientError::InvalidDocument {
                line: n + 1,
                reason: e.to_string(),
            })
        })
        .collect()
}
