//! System clipboard access through the terminal (OSC 52). Inside tmux this
//! needs `set-clipboard on`.

use crossterm::{clipboard::CopyToClipboard, execute};
use std::io;

/// Ask the terminal to place `text` on the system clipboard.
pub fn copy(text: &str) -> io::Result<()> {
    execute!(io::stdout(), CopyToClipboard::to_clipboard_from(text))?;
    tracing::debug!(len = text.len(), "clipboard: osc52 sent");
    Ok(())
}
