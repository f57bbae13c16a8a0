//! vitrine: terminal search client for the esports museum catalog.
//!
//! The workspace crates are re-exported so integration tests and benches can
//! import them through one path.
//!
//! # Architecture
//!
//! ```text
//! vitrine-fetch ──► SearchIndex ──► SearchSession ──► vitrine-tui
//!  (HTTP / site)     (write-once)    (debounce,       └► headless (html/text/jsonl)
//!                                     filter, panel)
//! ```
//!
//! The index is loaded by one background task. The UI drives the main
//! thread; the debounce timers run on the tokio runtime it has entered.

pub mod headless;

pub use vitrine_core as core;
pub use vitrine_fetch as fetch;
pub use vitrine_tui as tui;
