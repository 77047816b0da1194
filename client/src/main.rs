//! docsync - upload generated documents to a search index.
//!
//! Reads documents from `DOCSYNC_INPUT`, uploads them in one batch and,
//! with `DOCSYNC_PRUNE` set, deletes every remote record that was not part
//! of the upload.

use docsync_client::{sync, AlgoliaClient, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "docsync=info,docsync_client=info,docsync_engine=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    let mut client = AlgoliaClient::new(&config.index)?;
    if let Some(base_url) = &config.base_url {
        client = client.with_base_url(base_url);
    }

    let report = sync(&config, client).await?;
    tracing::debug!(prune = ?report.prune, "Sync finished");

    Ok(())
}
