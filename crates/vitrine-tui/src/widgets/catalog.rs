//! Catalog pane: every record in index order, scrollable.
//!
//! # Navigation (when pane is focused)
//!
//! | Key | Action |
//! |-----|--------|
//! | `↑` / `k` | Move cursor up one record (scrolls view if needed) |
//! | `↓` / `j` | Move cursor down one record |
//! | `PageUp` / `Ctrl+u` | Scroll up one page |
//! | `PageDown` / `Ctrl+d` | Scroll down one page |
//! | `g` / `Home` | Back to top |
//!
//! # Scroll semantics
//!
//! `offset` = index of the first visible record (0 = top). `cursor` =
//! absolute index of the highlighted record. Once `offset` reaches the
//! configured threshold the back-to-top marker is drawn on the bottom border.
//!
//! Image markers: `□` no image, `◌` image not yet scrolled into view,
//! `▣` image revealed.

use std::cell::Cell;

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget, Widget,
    },
};
use vitrine_core::{
    scroll::{BackToTop, LazyImages},
    Record, SearchIndex,
};

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

pub struct CatalogState {
    index: SearchIndex,
    pub offset: usize,
    pub cursor: usize,
    pub back_to_top: BackToTop,
    pub images: LazyImages,
    /// Cached from the last render so `handle()` can page by screenfuls.
    last_height: Cell<usize>,
}

impl CatalogState {
    pub fn new(index: SearchIndex, back_to_top_rows: usize) -> Self {
        Self {
            index,
            offset: 0,
            cursor: 0,
            back_to_top: BackToTop::new(back_to_top_rows),
            images: LazyImages::new(),
            last_height: Cell::new(20),
        }
    }

    fn height(&self) -> usize {
        self.last_height.get().max(1)
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn selected(&self) -> Option<Record> {
        self.index.snapshot().get(self.cursor).cloned()
    }

    pub fn back_to_top_visible(&self) -> bool {
        self.back_to_top.visible(self.offset)
    }

    /// Reveal images for the rows currently on screen. Call after each draw.
    pub fn observe_viewport(&mut self) {
        let records = self.index.snapshot();
        let viewport = self.offset..self.offset + self.height();
        self.images
            .observe(records.iter().map(|r| r.id.as_str()), viewport);
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
        self.cursor = 0;
        tracing::debug!("catalog: back to top");
    }

    pub fn handle(&mut self, event: &AppEvent) {
        let total = self.len();
        if total == 0 {
            return;
        }
        let height = self.height();
        let max_offset = total.saturating_sub(height);

        match event {
            AppEvent::Nav(Direction::Up) => {
                self.cursor = self.cursor.saturating_sub(1);
                if self.cursor < self.offset {
                    self.offset = self.cursor;
                }
            }
            AppEvent::Nav(Direction::Down) => {
                if self.cursor + 1 < total {
                    self.cursor += 1;
                }
                if self.cursor >= self.offset + height {
                    self.offset = self.cursor + 1 - height;
                }
            }
            AppEvent::ScrollUp => {
                self.offset = self.offset.saturating_sub(height);
                self.cursor = self.cursor.min(self.offset + height - 1);
            }
            AppEvent::ScrollDown => {
                self.offset = (self.offset + height).min(max_offset);
                self.cursor = self.cursor.max(self.offset).min(total - 1);
            }
            AppEvent::ScrollToTop => self.scroll_to_top(),
            _ => return,
        }
        tracing::debug!(
            cursor = self.cursor,
            offset = self.offset,
            back_to_top = self.back_to_top_visible(),
            "catalog: moved"
        );
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct Catalog<'a> {
    state: &'a CatalogState,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> Catalog<'a> {
    pub fn new(state: &'a CatalogState, focused: bool, theme: &'a Theme) -> Self {
        Self { state, focused, theme }
    }

    fn row(&self, record: &Record, selected: bool) -> Line<'static> {
        let marker = match &record.primary_image {
            None => "□ ",
            Some(_) if self.state.images.is_revealed(&record.id) => "▣ ",
            Some(_) => "◌ ",
        };
        let line = Line::from(vec![
            Span::styled(marker, self.theme.placeholder),
            Span::styled(format!("{:<10} ", record.id), self.theme.result_meta),
            Span::styled(
                format!("{:<6} ", record.esport.to_uppercase()),
                self.theme.esport_style(&record.esport),
            ),
            Span::styled(record.title.clone(), self.theme.result_title),
        ]);
        if selected {
            line.patch_style(Style::default().add_modifier(Modifier::REVERSED))
        } else {
            line
        }
    }
}

impl Widget for Catalog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let records = self.state.index.snapshot();
        let total = records.len();

        let block = Block::bordered()
            .title(format!("Catalog ({total})"))
            .border_style(self.theme.border(self.focused));
        let inner = block.inner(area);
        block.render(area, buf);

        let height = inner.height as usize;
        self.state.last_height.set(height);

        if total == 0 {
            let msg = if self.state.index.is_loaded() {
                "the catalog is empty"
            } else {
                "loading catalog…"
            };
            Paragraph::new(Line::from(Span::styled(msg, self.theme.placeholder)))
                .render(inner, buf);
            return;
        }

        let start = self.state.offset.min(total);
        let end = (start + height).min(total);
        let lines: Vec<Line<'static>> = records[start..end]
            .iter()
            .enumerate()
            .map(|(row, record)| {
                self.row(record, self.focused && start + row == self.state.cursor)
            })
            .collect();

        let text_area = Rect { width: inner.width.saturating_sub(1), ..inner };
        let sb_area = Rect {
            x: inner.right().saturating_sub(1),
            width: 1,
            ..inner
        };
        Paragraph::new(lines).render(text_area, buf);

        let mut sb_state = ScrollbarState::new(total)
            .position(start)
            .viewport_content_length(height);
        StatefulWidget::render(
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(None)
                .end_symbol(None),
            sb_area,
            buf,
            &mut sb_state,
        );

        if self.state.back_to_top_visible() {
            let marker = " ↑ top ";
            let x = area.right().saturating_sub(marker.chars().count() as u16 + 2);
            buf.set_string(x, area.bottom().saturating_sub(1), marker, self.theme.border_focused);
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
