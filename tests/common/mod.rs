//! Shared test utilities for vitrine integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file. Timing-sensitive helpers are deterministic under
//! `tokio::time::pause()`.

pub mod assertions;
pub mod builders;
pub mod fake_site;
pub mod fixtures;

pub use builders::*;
pub use fake_site::*;
pub use fixtures::*;
