//! `:` command line, drawn over the bottom row while it has focus.
//!
//! The App shell parses the text on `Enter` with
//! [`crate::commands::Command::parse`] and shows a parse failure in place
//! until the next key.

use super::line_input::LineInput;
use crate::event::AppEvent;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Widget},
};

#[derive(Debug, Default)]
pub struct CommandBarState {
    pub input: LineInput,
    pub error: Option<String>,
}

impl CommandBarState {
    pub fn clear(&mut self) {
        self.input.clear();
        self.error = None;
    }

    pub fn handle(&mut self, event: &AppEvent) {
        self.error = None;
        self.input.edit(event);
    }

    /// Terminal column for the cursor, one past the `:` prompt.
    pub fn cursor_col(&self, area: Rect) -> u16 {
        let col = area.x + 1 + self.input.cursor() as u16;
        col.min(area.right().saturating_sub(1))
    }
}

pub struct CommandBar<'a> {
    state: &'a CommandBarState,
    theme: &'a Theme,
}

impl<'a> CommandBar<'a> {
    pub fn new(state: &'a CommandBarState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }
}

impl Widget for CommandBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        let line = match &self.state.error {
            Some(err) => Line::styled(
                format!("E  {err}"),
                Style::new().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            None => Line::from(vec![
                Span::styled(":", self.theme.border_command_bar),
                Span::raw(self.state.input.as_str()),
            ]),
        };
        buf.set_line(area.x, area.y, &line, area.width);
    }
}
