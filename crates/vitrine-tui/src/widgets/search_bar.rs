//! Search bar widget: the single-line query input under the status bar.
//!
//! # Editing
//!
//! - `Char(c)` inserts at the cursor.
//! - `Backspace` deletes the character before the cursor.
//! - `Nav(Left)` / `Nav(Right)` move the cursor.
//!
//! [`SearchBarState::handle`] reports whether the text changed so the App
//! shell forwards exactly one `on_input` per edit to the search session.

use super::line_input::LineInput;
use crate::event::AppEvent;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct SearchBarState {
    pub input: LineInput,
}

impl SearchBarState {
    pub fn query(&self) -> &str {
        self.input.as_str()
    }

    /// Apply an editing event. Returns `true` when the query text changed.
    pub fn handle(&mut self, event: &AppEvent) -> bool {
        let changed = self.input.edit(event);
        if changed {
            tracing::debug!(query = %self.input.as_str(), cursor = self.input.cursor(), "search: edited");
        }
        changed
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct SearchBar<'a> {
    state: &'a SearchBarState,
    focused: bool,
    /// A debounced search is armed and has not fired yet.
    pending: bool,
    theme: &'a Theme,
}

impl<'a> SearchBar<'a> {
    pub fn new(state: &'a SearchBarState, focused: bool, pending: bool, theme: &'a Theme) -> Self {
        Self { state, focused, pending, theme }
    }

    /// Absolute terminal position of the text cursor within this widget's
    /// rendered area. Pass to `frame.set_cursor_position()` after rendering.
    pub fn cursor_position(&self, area: Rect) -> (u16, u16) {
        let x = (area.x + 1 + self.state.input.cursor() as u16).min(area.right().saturating_sub(1));
        (x, area.y + 1)
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title("Search")
            .border_style(self.theme.border(self.focused));
        let inner = block.inner(area);
        block.render(area, buf);

        let line = if self.state.input.is_empty() && !self.focused {
            Line::from(Span::styled(
                "press / to search the collection",
                Style::default().add_modifier(Modifier::DIM),
            ))
        } else {
            Line::from(self.state.query())
        };
        Paragraph::new(line).render(inner, buf);

        if self.pending {
            let marker = "… ";
            let x = inner.right().saturating_sub(marker.chars().count() as u16);
            buf.set_string(x, inner.y, marker, Style::default().add_modifier(Modifier::DIM));
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
