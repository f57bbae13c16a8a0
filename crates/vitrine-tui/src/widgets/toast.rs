//! Toast widget: a transient message in the bottom-right corner.
//!
//! While the notification is leaving it slides right, off the screen edge.

use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Block, Clear, Paragraph, Widget},
};
use std::time::Instant;
use vitrine_core::notify::{Notification, ToastPhase};

pub struct Toast<'a> {
    notification: &'a Notification,
    now: Instant,
    theme: &'a Theme,
}

impl<'a> Toast<'a> {
    pub fn new(notification: &'a Notification, now: Instant, theme: &'a Theme) -> Self {
        Self { notification, now, theme }
    }

    /// Where the toast sits inside `area` at `now`, or `None` once expired.
    pub fn placement(&self, area: Rect) -> Option<Rect> {
        let width = (self.notification.message.chars().count() as u16 + 4).min(area.width);
        let height = 3.min(area.height);
        let shift: u32 = match self.notification.phase(self.now) {
            ToastPhase::Showing => 0,
            ToastPhase::Leaving { progress_pct } => width as u32 * progress_pct as u32 / 100,
            ToastPhase::Expired => return None,
        };
        let shift = shift as u16;

        let x = area.right().saturating_sub(width + 1) + shift;
        let visible = area.right().saturating_sub(x);
        if visible == 0 {
            return None;
        }
        Some(Rect {
            x,
            y: area.bottom().saturating_sub(height + 1),
            width: width.min(visible),
            height,
        })
    }
}

impl Widget for Toast<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(rect) = self.placement(area) else {
            return;
        };
        Clear.render(rect, buf);
        let block = Block::bordered().style(self.theme.toast);
        let inner = block.inner(rect);
        block.render(rect, buf);
        Paragraph::new(Line::from(format!(" {}", self.notification.message)))
            .style(self.theme.toast)
            .render(inner, buf);
    }
}
