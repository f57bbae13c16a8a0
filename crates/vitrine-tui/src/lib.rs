//! vitrine TUI: ratatui application shell.

pub mod app;
pub mod clipboard;
pub mod commands;
pub mod event;
pub mod theme;
pub mod widgets;

pub use app::App;

use vitrine_core::{config::Config, SearchIndex};

/// Run the TUI over `index` until the user quits.
///
/// The index may still be empty when this is called; the catalog and search
/// pick up the records as soon as the loader publishes them. Must be called
/// from inside a tokio runtime context.
pub fn run(index: SearchIndex, config: Config) -> anyhow::Result<()> {
    let theme = theme::Theme::by_name(&config.ui.theme);
    App::new(index, config, theme).run()
}
