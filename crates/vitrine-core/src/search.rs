//! Case-insensitive substring filter over the index.
//!
//! A record matches when any of its searchable fields contains the query,
//! both sides lowercased. Matches keep index order (no scoring) and are
//! capped at [`MAX_RESULTS`].

use crate::{index::SearchIndex, types::Record};

/// Maximum number of matches returned by a search.
pub const MAX_RESULTS: usize = 10;

/// Minimum trimmed query length (in characters) for a search to run.
pub const MIN_QUERY_LEN: usize = 2;

/// Return `true` if `query` is long enough to be searched.
pub fn is_searchable(query: &str) -> bool {
    query.trim().chars().count() >= MIN_QUERY_LEN
}

/// Filter `records` by `query`, keeping at most `limit` matches in index order.
///
/// The query is lowercased but not trimmed; callers trim before searching.
pub fn filter_with_limit<'a>(records: &'a [Record], query: &str, limit: usize) -> Vec<&'a Record> {
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|record| matches(record, &needle))
        .take(limit)
        .collect()
}

/// [`filter_with_limit`] with the standard [`MAX_RESULTS`] cap.
pub fn filter<'a>(records: &'a [Record], query: &str) -> Vec<&'a Record> {
    filter_with_limit(records, query, MAX_RESULTS)
}

/// `needle` must already be lowercase.
fn matches(record: &Record, needle: &str) -> bool {
    record
        .searchable_fields()
        .any(|field| field.to_lowercase().contains(needle))
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// Runs queries against the current snapshot of a [`SearchIndex`].
#[derive(Debug, Clone)]
pub struct Search {
    index: SearchIndex,
    limit: usize,
}

impl Search {
    pub fn new(index: SearchIndex) -> Self {
        Self { index, limit: MAX_RESULTS }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn index(&self) -> &SearchIndex {
        &self.index
    }

    /// Run `query` and return owned copies of the matches.
    ///
    /// An index that is still loading, or failed to load, yields no matches.
    pub fn run(&self, query: &str) -> Vec<Record> {
        let snapshot = self.index.snapshot();
        let hits: Vec<Record> = filter_with_limit(&snapshot, query, self.limit)
            .into_iter()
            .cloned()
            .collect();
        tracing::debug!(
            query,
            loaded = self.index.is_loaded(),
            indexed = snapshot.len(),
            hits = hits.len(),
            "search: executed"
        );
        hits
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
