//! Query debouncer. Collapses bursts of query edits into one search.
//!
//! Every edit aborts the pending search before doing anything else. Queries
//! shorter than [`MIN_QUERY_LEN`](crate::search::MIN_QUERY_LEN) after
//! trimming are reported as [`InputOutcome::Cleared`] and schedule nothing.
//! Longer queries arm a tokio task that sleeps for the quiet period and then
//! delivers the trimmed query on the channel returned by
//! [`QueryDebouncer::new`].
//!
//! Aborting a task that is already running on another worker does not stop
//! its send, so every delivery carries the generation it was armed under.
//! Each edit or cancel starts a new generation; a [`FiredQuery`] whose
//! generation is not [`QueryDebouncer::is_current`] must be dropped.
//!
//! The debouncer is single-owner: it lives on the UI thread and is the only
//! holder of the pending task handle, so at most one search is ever pending.
//!
//! Must be used from within a tokio runtime context.

use crate::search::MIN_QUERY_LEN;
use std::time::Duration;
use tokio::{
    sync::mpsc::{self, UnboundedReceiver, UnboundedSender},
    task::JoinHandle,
};

/// Default quiet period between the last edit and the search.
pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(300);

/// What the debouncer did with an edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputOutcome {
    /// Query too short: the caller clears the results panel. No search is pending.
    Cleared,
    /// A search for this (trimmed) query will fire after the quiet period
    /// unless another edit arrives first.
    Scheduled(String),
}

/// A debounced query delivered after its quiet period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FiredQuery {
    pub generation: u64,
    pub query: String,
}

pub struct QueryDebouncer {
    delay: Duration,
    min_len: usize,
    generation: u64,
    pending: Option<JoinHandle<()>>,
    tx: UnboundedSender<FiredQuery>,
}

impl QueryDebouncer {
    /// Create a debouncer with `delay` as the quiet period. Debounced
    /// queries arrive on the returned receiver.
    pub fn new(delay: Duration) -> (Self, UnboundedReceiver<FiredQuery>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let debouncer = Self {
            delay,
            min_len: MIN_QUERY_LEN,
            generation: 0,
            pending: None,
            tx,
        };
        (debouncer, rx)
    }

    /// Override the minimum trimmed query length (default 2).
    pub fn with_min_len(mut self, min_len: usize) -> Self {
        self.min_len = min_len;
        self
    }

    /// Feed the current contents of the query input.
    pub fn input(&mut self, raw: &str) -> InputOutcome {
        self.cancel();

        let query = raw.trim();
        if query.chars().count() < self.min_len {
            tracing::debug!(query, "debounce: below minimum length, cleared");
            return InputOutcome::Cleared;
        }

        let query = query.to_string();
        let delay = self.delay;
        let tx = self.tx.clone();
        let fired = FiredQuery {
            generation: self.generation,
            query: query.clone(),
        };
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver gone means the session was dropped; nothing to do.
            let _ = tx.send(fired);
        }));
        tracing::debug!(
            query = %query,
            generation = self.generation,
            delay_ms = delay.as_millis() as u64,
            "debounce: armed"
        );
        InputOutcome::Scheduled(query)
    }

    /// Abort the pending search, if any, and start a new generation.
    pub fn cancel(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        if let Some(handle) = self.pending.take() {
            if !handle.is_finished() {
                tracing::trace!("debounce: pending search cancelled");
            }
            handle.abort();
        }
    }

    /// `true` while a scheduled search has not fired yet.
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// `true` if a delivery armed under `generation` is still wanted.
    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Drop for QueryDebouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
