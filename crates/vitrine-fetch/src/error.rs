//! Index load failures.

use std::path::PathBuf;

/// Why the search index could not be loaded.
///
/// Every variant is recovered the same way: the failure is logged and the
/// index stays empty, so searches return no results.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid index URL {url:?}: {source}")]
    InvalidUri {
        url: String,
        source: hyper::http::uri::InvalidUri,
    },
    #[error("unsupported URL scheme {scheme:?} (only http and https are supported)")]
    UnsupportedScheme { scheme: String },
    #[error("failed to build request for {uri}: {source}")]
    Build {
        uri: String,
        source: hyper::http::Error,
    },
    #[error("request to {uri} failed: {source}")]
    Request {
        uri: String,
        source: hyper_util::client::legacy::Error,
    },
    #[error("failed to read response body from {uri}: {source}")]
    Body { uri: String, source: hyper::Error },
    #[error("{uri} returned HTTP {status}")]
    Status { uri: String, status: u16 },
    #[error("search index is not a JSON array of records: {0}")]
    Json(#[from] serde_json::Error),
}
