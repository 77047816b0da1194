//! Index construction parameters.

use serde::{Deserialize, Serialize};

/// Credentials, index name and run mode for one remote index.
///
/// Hooks are code rather than data and are supplied separately through
/// [`crate::IndexBuilder`].
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexConfig {
    /// Application identifier of the search service
    pub application_id: String,
    /// API key with write access to the index
    pub api_key: String,
    /// Remote index name
    pub name: String,
    /// Suppress every remote mutation
    #[serde(default)]
    pub dry_run: bool,
}

impl IndexConfig {
    /// Create a config for the given credentials and index.
    pub fn new(
        application_id: impl Into<String>,
        api_key: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            application_id: application_id.into(),
            api_key: api_key.into(),
            name: name.into(),
            dry_run: false,
        }
    }

    /// Toggle dry-run mode.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

// Keeps the API key out of logs.
impl std::fmt::Debug for IndexConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IndexConfig")
            .field("application_id", &self.application_id)
            .field("api_key", &"<redacted>")
            .field("name", &self.name)
            .field("dry_run", &self.dry_run)
            .finish()
    }
}
