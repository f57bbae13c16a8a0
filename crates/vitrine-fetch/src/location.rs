//! Where the search index is read from.

use std::{fmt, path::PathBuf};
use vitrine_core::SEARCH_INDEX_PATH;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexLocation {
    /// A deployed site; the index is fetched from `{base_url}/static/search-index.json`.
    Http { base_url: String },
    /// A built site directory (the generator's `output/`).
    Site { root: PathBuf },
}

impl IndexLocation {
    /// `http://` and `https://` strings are sites on the network; anything
    /// else is a local directory.
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        if s.starts_with("http://") || s.starts_with("https://") {
            IndexLocation::Http { base_url: s.to_string() }
        } else {
            IndexLocation::Site { root: PathBuf::from(s) }
        }
    }

    /// Full URL of the index for [`IndexLocation::Http`].
    pub fn index_url(&self) -> Option<String> {
        match self {
            IndexLocation::Http { base_url } => Some(format!(
                "{}{}",
                base_url.trim_end_matches('/'),
                SEARCH_INDEX_PATH
            )),
            IndexLocation::Site { .. } => None,
        }
    }

    /// Full file path of the index for [`IndexLocation::Site`].
    pub fn index_path(&self) -> Option<PathBuf> {
        match self {
            IndexLocation::Site { root } => {
                Some(root.join(SEARCH_INDEX_PATH.trim_start_matches('/')))
            }
            IndexLocation::Http { .. } => None,
        }
    }
}

impl fmt::Display for IndexLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexLocation::Http { base_url } => write!(f, "{base_url}"),
            IndexLocation::Site { root } => write!(f, "{}", root.display()),
        }
    }
}
