//! Status bar: the 1-line strip at the top of the screen.
//!
//! Shows the menu toggle (active while the menu is open), the catalog size
//! once the index has loaded, and right-aligned keybinding hints.

use crate::event::Keymap;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

pub struct StatusBar<'a> {
    menu_open: bool,
    /// `None` while the index is still loading (or failed to).
    records: Option<usize>,
    keymap: &'a Keymap,
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    pub fn new(menu_open: bool, records: Option<usize>, keymap: &'a Keymap, theme: &'a Theme) -> Self {
        Self { menu_open, records, keymap, theme }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let toggle_style = if self.menu_open {
            self.theme.menu_active
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        let mut spans = vec![
            Span::styled(format!(" ☰ {} ", self.keymap.menu), toggle_style),
            Span::styled(" vitrine ", Style::default().add_modifier(Modifier::BOLD)),
        ];
        if let Some(n) = self.records {
            spans.push(Span::styled(
                format!(" {n} records "),
                Style::default().add_modifier(Modifier::DIM),
            ));
        }
        buf.set_line(area.x, area.y, &Line::from(spans), area.width);

        let hint = " /:search  ?:help  q:quit ";
        let hint_x = area.right().saturating_sub(hint.chars().count() as u16);
        buf.set_string(hint_x, area.y, hint, Style::default().add_modifier(Modifier::DIM));
    }
}
