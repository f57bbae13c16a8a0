//! Startup loader. Fetch once, publish once.

use crate::{error::LoadError, http, location::IndexLocation, site};
use tokio::task::JoinHandle;
use vitrine_core::{Record, SearchIndex};

/// Result of a load attempt, for callers that want to report it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded { records: usize },
    Failed { reason: String },
}

/// Fetch the index from `location` and parse it.
pub async fn fetch_records(location: &IndexLocation) -> Result<Vec<Record>, LoadError> {
    let bytes = match location {
        IndexLocation::Http { .. } => {
            // index_url is always Some for Http.
            let url = location.index_url().unwrap_or_default();
            http::get(&url).await?.to_vec()
        }
        IndexLocation::Site { .. } => {
            let path = location.index_path().unwrap_or_default();
            site::read_index(&path).await?
        }
    };
    Ok(serde_json::from_slice(&bytes)?)
}

/// Fetch, parse, and publish into `index`. Failures are logged and leave the
/// index empty.
pub async fn load_into(location: &IndexLocation, index: &SearchIndex) -> LoadOutcome {
    match fetch_records(location).await {
        Ok(records) => {
            let count = records.len();
            match index.publish(records) {
                Ok(()) => {
                    tracing::info!(%location, records = count, "search index loaded");
                    LoadOutcome::Loaded { records: count }
                }
                Err(e) => LoadOutcome::Failed { reason: e.to_string() },
            }
        }
        Err(e) => {
            tracing::error!(%location, error = %e, "failed to load search index");
            LoadOutcome::Failed { reason: e.to_string() }
        }
    }
}

/// Start the one-shot index load on the current tokio runtime.
///
/// The caller may drop the handle; the load still completes and publishes.
pub fn spawn_index_load(location: IndexLocation, index: SearchIndex) -> JoinHandle<LoadOutcome> {
    tracing::debug!(%location, "loader: spawning index load");
    tokio::spawn(async move { load_into(&location, &index).await })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
