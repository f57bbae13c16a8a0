//! Search session: wires the debouncer, the search and the results panel.
//!
//! The UI forwards every edit of the query input to
//! [`SearchSession::on_input`] and calls [`SearchSession::poll`] once per
//! frame. Debounced queries that have fired are executed there: the search
//! runs against the current index snapshot and the result is pushed through
//! the session's [`PanelRenderer`]. A render failure is logged and swallowed,
//! and the panel keeps what it showed before.
//!
//! A delivery armed before the latest edit is dropped unexecuted, even when
//! its timer task sent it after that edit aborted the task.

use crate::{
    config::SearchConfig,
    debounce::{FiredQuery, InputOutcome, QueryDebouncer},
    index::SearchIndex,
    render::{NullRenderer, PanelContent, PanelRenderer, ResultsPanel},
    search::Search,
    types::Record,
};
use tokio::sync::mpsc::UnboundedReceiver;

pub struct SearchSession<R = NullRenderer> {
    search: Search,
    debouncer: QueryDebouncer,
    debounced: UnboundedReceiver<FiredQuery>,
    min_query_len: usize,
    panel: ResultsPanel,
    renderer: R,
    searches_run: u64,
}

impl SearchSession<NullRenderer> {
    /// Session for a front end that draws from [`SearchSession::panel`].
    pub fn new(index: SearchIndex, config: &SearchConfig) -> Self {
        Self::with_renderer(index, config, NullRenderer)
    }
}

impl<R: PanelRenderer> SearchSession<R> {
    pub fn with_renderer(index: SearchIndex, config: &SearchConfig, renderer: R) -> Self {
        let (debouncer, debounced) = QueryDebouncer::new(config.debounce());
        Self {
            search: Search::new(index).with_limit(config.max_results),
            debouncer: debouncer.with_min_len(config.min_query_len),
            debounced,
            min_query_len: config.min_query_len,
            panel: ResultsPanel::default(),
            renderer,
            searches_run: 0,
        }
    }

    /// Handle an edit of the query input.
    pub fn on_input(&mut self, raw: &str) -> InputOutcome {
        // A search that fired but was not yet executed belongs to an older edit.
        self.discard_fired();
        let outcome = self.debouncer.input(raw);
        if outcome == InputOutcome::Cleared {
            self.clear_panel();
        }
        outcome
    }

    /// Execute every debounced query that has fired. Never blocks.
    ///
    /// Returns the number of searches executed.
    pub fn poll(&mut self) -> usize {
        let mut ran = 0;
        while let Ok(fired) = self.debounced.try_recv() {
            if self.is_stale(&fired) {
                continue;
            }
            self.on_debounced(&fired.query);
            ran += 1;
        }
        ran
    }

    /// Wait for the next debounced query and execute it.
    ///
    /// Returns `None` when the debouncer has been dropped.
    pub async fn next_debounced(&mut self) -> Option<Vec<Record>> {
        loop {
            let fired = self.debounced.recv().await?;
            if !self.is_stale(&fired) {
                return Some(self.on_debounced(&fired.query));
            }
        }
    }

    /// Run the search for a query delivered by the debouncer.
    pub fn on_debounced(&mut self, query: &str) -> Vec<Record> {
        self.execute(query)
    }

    /// Search immediately, bypassing the debounce delay. The minimum length
    /// gate still applies; a short query clears the panel.
    pub fn run_now(&mut self, raw: &str) -> Vec<Record> {
        self.debouncer.cancel();
        self.discard_fired();
        let query = raw.trim();
        if query.chars().count() < self.min_query_len {
            self.clear_panel();
            return Vec::new();
        }
        self.execute(query)
    }

    fn execute(&mut self, query: &str) -> Vec<Record> {
        let hits = self.search.run(query);
        self.searches_run += 1;

        let mut next = self.panel.clone();
        next.show(&hits);
        match self.renderer.render(&next.content) {
            Ok(()) => self.panel = next,
            Err(e) => {
                tracing::error!(error = %e, query, "session: search failed, keeping previous results");
            }
        }
        hits
    }

    fn clear_panel(&mut self) {
        self.panel.clear();
        if let Err(e) = self.renderer.render(&PanelContent::Blank) {
            tracing::error!(error = %e, "session: failed to clear results");
        }
    }

    fn is_stale(&self, fired: &FiredQuery) -> bool {
        let stale = !self.debouncer.is_current(fired.generation);
        if stale {
            tracing::trace!(
                query = %fired.query,
                generation = fired.generation,
                "session: dropped stale debounced query"
            );
        }
        stale
    }

    fn discard_fired(&mut self) {
        while let Ok(fired) = self.debounced.try_recv() {
            tracing::trace!(query = %fired.query, "session: dropped debounced query from an older edit");
        }
    }

    pub fn panel(&self) -> &ResultsPanel {
        &self.panel
    }

    pub fn panel_mut(&mut self) -> &mut ResultsPanel {
        &mut self.panel
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Number of searches executed so far (debounced or immediate).
    pub fn searches_run(&self) -> u64 {
        self.searches_run
    }

    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    pub fn index(&self) -> &SearchIndex {
        self.search.index()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
