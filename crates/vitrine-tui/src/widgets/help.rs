//! Help popup: centred floating overlay listing all keybindings.
//!
//! Toggle with `?`; close with `?` or `Escape`.

use crate::event::Keymap;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Widget},
};

pub struct HelpPopup<'a> {
    keymap: &'a Keymap,
    theme: &'a Theme,
}

impl<'a> HelpPopup<'a> {
    pub fn new(keymap: &'a Keymap, theme: &'a Theme) -> Self {
        Self { keymap, theme }
    }

    fn bindings(&self) -> Vec<(String, &'static str)> {
        let k = self.keymap;
        vec![
            ("q  /  Ctrl+c".into(), "Quit"),
            ("Tab".into(), "Cycle focus: search → catalog"),
            ("/".into(), "Focus the search bar"),
            ("↓ (in search)".into(), "Move into the results"),
            ("Escape".into(), "Hide results / close overlay"),
            ("↑ k  /  ↓ j".into(), "Move through results or catalog"),
            ("PageUp / PageDown".into(), "Scroll the catalog a page"),
            (format!("{}  /  Home", k.top), "Back to top of the catalog"),
            ("Enter".into(), "Open the selected record"),
            (k.yank.to_string(), "Copy the selected record's link"),
            (k.menu.to_string(), "Toggle the navigation menu"),
            (":".into(), "Command line (q, help, theme, menu, top)"),
            ("?".into(), "Toggle this help popup"),
        ]
    }
}

impl Widget for HelpPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let bindings = self.bindings();
        let popup = centered_rect(70, bindings.len() as u16 + 2, area);
        Clear.render(popup, buf);

        let block = Block::bordered()
            .title(" vitrine: keybindings (? to close) ")
            .border_style(self.theme.border_focused);

        let inner = block.inner(popup);
        block.render(popup, buf);

        let lines: Vec<Line> = bindings
            .into_iter()
            .map(|(key, desc)| {
                Line::from(vec![
                    Span::styled(
                        format!("  {:<22}", key),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(desc),
                ])
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}

pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}
