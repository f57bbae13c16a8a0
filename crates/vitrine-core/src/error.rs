//! Error types for vitrine-core.

/// Errors from the write-once [`SearchIndex`](crate::SearchIndex).
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum IndexError {
    /// The index already holds a snapshot; it is never replaced in-process.
    #[error("search index already published ({existing} records)")]
    AlreadyPublished { existing: usize },
}

/// A failure while turning matches into panel output.
///
/// This is the search-execution failure kind: the session logs it and keeps
/// the panel in its last rendered state.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to format search results: {0}")]
    Format(#[from] std::fmt::Error),
    #[error("failed to encode record {id} as JSON: {source}")]
    Json {
        id: String,
        #[source]
        source: serde_json::Error,
    },
}
