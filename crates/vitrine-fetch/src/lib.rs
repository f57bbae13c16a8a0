//! Search index sources for vitrine.
//!
//! The site publishes its search index at a fixed path
//! ([`SEARCH_INDEX_PATH`](vitrine_core::SEARCH_INDEX_PATH)). This crate reads
//! it either over HTTP from the deployed site or from a locally built site
//! directory, parses it into [`Record`](vitrine_core::Record)s, and publishes
//! the result into a [`SearchIndex`](vitrine_core::SearchIndex).
//!
//! Loading is fire-and-forget: [`spawn_index_load`] runs one fetch on the
//! tokio runtime. Failures are logged and leave the index empty; there is no
//! retry and no timeout.

pub mod error;
pub mod http;
pub mod loader;
pub mod location;
pub mod site;

pub use error::LoadError;
pub use loader::{fetch_records, load_into, spawn_index_load, LoadOutcome};
pub use location::IndexLocation;
