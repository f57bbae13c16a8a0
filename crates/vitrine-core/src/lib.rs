//! Museum catalog search client core.
//!
//! This crate holds everything that does not touch the network or the
//! terminal: the [`Record`] model, the write-once [`SearchIndex`], the
//! substring filter, the query debouncer, and the results panel with its
//! renderers.
//!
//! # Architecture
//!
//! ```text
//! Loader ──► SearchIndex ──► Search ──► ResultsPanel ──► HTML / text / TUI
//!                               ▲
//!              QueryDebouncer ──┘
//! ```
//!
//! The index is published exactly once by the loader task and is read-only
//! afterwards. The debouncer owns the only other piece of mutable state, the
//! pending search handle.

pub mod config;
pub mod debounce;
pub mod error;
pub mod index;
pub mod notify;
pub mod render;
pub mod scroll;
pub mod search;
pub mod session;
pub mod types;

pub use error::{IndexError, RenderError};
pub use index::SearchIndex;
pub use render::{PanelContent, PanelRenderer, ResultEntry, ResultsPanel};
pub use search::{Search, MAX_RESULTS};
pub use session::SearchSession;
pub use types::Record;

/// Fixed path of the search index inside a built site.
pub const SEARCH_INDEX_PATH: &str = "/static/search-index.json";
