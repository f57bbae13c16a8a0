//! The write-once, read-many record snapshot.
//!
//! The loader publishes the parsed records exactly once. Every search reads
//! the same immutable `Arc<[Record]>`; readers before the publish see an
//! empty slice. `OnceLock` gives the happens-before edge between the
//! publishing task and every later reader, so no lock is taken on the read
//! path.

use crate::{error::IndexError, types::Record};
use std::sync::{Arc, OnceLock};

/// Cloneable handle to the shared index cell.
#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    cell: Arc<OnceLock<Arc<[Record]>>>,
}

impl SearchIndex {
    /// Create an empty, unpublished index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index that is already published. Used by headless mode and
    /// tests.
    pub fn with_records(records: Vec<Record>) -> Self {
        let index = Self::new();
        // A fresh cell cannot already be set.
        let _ = index.cell.set(records.into());
        index
    }

    /// Publish the loaded records. Only the first call succeeds.
    pub fn publish(&self, records: Vec<Record>) -> Result<(), IndexError> {
        let count = records.len();
        self.cell.set(records.into()).map_err(|_| {
            let existing = self.len();
            tracing::warn!(existing, rejected = count, "index: second publish rejected");
            IndexError::AlreadyPublished { existing }
        })?;
        tracing::debug!(records = count, "index: published");
        Ok(())
    }

    /// The published records, or an empty slice if nothing has been
    /// published yet (load pending or failed).
    pub fn snapshot(&self) -> Arc<[Record]> {
        self.cell.get().cloned().unwrap_or_else(|| Arc::from(Vec::new()))
    }

    pub fn is_loaded(&self) -> bool {
        self.cell.get().is_some()
    }

    pub fn len(&self) -> usize {
        self.cell.get().map_or(0, |r| r.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
