//! Navigation menu: a small overlay toggled by the menu key.
//!
//! Each entry jumps to a target on the screen. The toggle in the status bar
//! is drawn active while the menu is open.

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Block, Clear, Paragraph, Widget},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Search,
    CatalogTop,
    Help,
    Quit,
}

impl MenuItem {
    pub const ALL: [MenuItem; 4] = [
        MenuItem::Search,
        MenuItem::CatalogTop,
        MenuItem::Help,
        MenuItem::Quit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuItem::Search => "Search",
            MenuItem::CatalogTop => "Back to top",
            MenuItem::Help => "Help",
            MenuItem::Quit => "Quit",
        }
    }
}

#[derive(Debug, Default)]
pub struct MenuState {
    pub open: bool,
    pub cursor: usize,
}

impl MenuState {
    pub fn toggle(&mut self) {
        self.open = !self.open;
        self.cursor = 0;
        tracing::debug!(open = self.open, "menu: toggled");
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Handle a key while the menu is open. Returns the activated item;
    /// activating closes the menu.
    pub fn handle(&mut self, event: &AppEvent) -> Option<MenuItem> {
        match event {
            AppEvent::Nav(Direction::Up) => {
                self.cursor = self.cursor.saturating_sub(1);
                None
            }
            AppEvent::Nav(Direction::Down) => {
                self.cursor = (self.cursor + 1).min(MenuItem::ALL.len() - 1);
                None
            }
            AppEvent::Enter => {
                let item = MenuItem::ALL[self.cursor];
                tracing::debug!(item = ?item, "menu: activated");
                self.close();
                Some(item)
            }
            _ => None,
        }
    }
}

pub struct Menu<'a> {
    state: &'a MenuState,
    theme: &'a Theme,
}

impl<'a> Menu<'a> {
    pub fn new(state: &'a MenuState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    /// Area of the dropdown, anchored to the top-left of `area`.
    pub fn area(area: Rect) -> Rect {
        Rect {
            x: area.x,
            y: area.y,
            width: 20.min(area.width),
            height: (MenuItem::ALL.len() as u16 + 2).min(area.height),
        }
    }
}

impl Widget for Menu<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = Self::area(area);
        Clear.render(popup, buf);

        let block = Block::bordered()
            .title(" Menu ")
            .border_style(self.theme.border_focused);
        let inner = block.inner(popup);
        block.render(popup, buf);

        let lines: Vec<Line> = MenuItem::ALL
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let line = Line::from(format!(" {}", item.label()));
                if i == self.state.cursor {
                    line.patch_style(self.theme.search_highlight)
                } else {
                    line
                }
            })
            .collect();
        Paragraph::new(lines).render(inner, buf);
    }
}
