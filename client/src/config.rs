//! Configuration management for the `docsync` binary.

use docsync_engine::IndexConfig;
use std::env;
use std::path::PathBuf;

/// Run configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Credentials, index name and dry-run flag
    pub index: IndexConfig,
    /// Override for the search API host
    pub base_url: Option<String>,
    /// File with the documents to upload
    pub input: PathBuf,
    /// Delete remote records that were not part of this upload
    pub prune: bool,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |key: &'static str| lookup(key).ok_or(ConfigError::Missing(key));
        let flag = |key: &'static str| match lookup(key) {
            Some(value) => parse_bool(key, &value),
            None => Ok(false),
        };

        let index = IndexConfig::new(
            required("ALGOLIA_APPLICATION_ID")?,
            required("ALGOLIA_API_KEY")?,
            required("ALGOLIA_INDEX_NAME")?,
        )
        .with_dry_run(flag("DOCSYNC_DRY_RUN")?);

        Ok(Self {
            index,
            base_url: lookup("ALGOLIA_BASE_URL"),
            input: PathBuf::from(required("DOCSYNC_INPUT")?),
            prune: flag("DOCSYNC_PRUNE")?,
        })
    }
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" | "" => Ok(false),
        _ => Err(ConfigError::InvalidBool(key)),
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} environment variable is required")]
    Missing(&'static str),

    #[error("Invalid boolean value for {0}")]
    InvalidBool(&'static str),
}
