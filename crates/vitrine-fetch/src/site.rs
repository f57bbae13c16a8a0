//! Built site directory source.

use crate::error::LoadError;
use std::path::Path;

/// Read the raw index bytes from `path`.
pub async fn read_index(path: &Path) -> Result<Vec<u8>, LoadError> {
    tracing::debug!(path = %path.display(), "site: reading search index");
    tokio::fs::read(path).await.map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}
