//! Ratatui widgets for the vitrine TUI.

pub mod catalog;
pub mod command_bar;
pub mod help;
pub mod line_input;
pub mod menu;
pub mod results;
pub mod search_bar;
pub mod status_bar;
pub mod toast;
