//! Results overlay: the search results panel drawn below the search bar.
//!
//! Draws whatever the session's [`ResultsPanel`] holds. Each entry takes two
//! rows: an image marker with the title, then `ID • ESPORT`. A blank or
//! hidden panel draws nothing.

use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Widget},
};
use vitrine_core::render::{PanelContent, ResultEntry, ResultsPanel, NO_RESULTS};

const ROWS_PER_ENTRY: u16 = 2;

pub struct ResultsOverlay<'a> {
    panel: &'a ResultsPanel,
    /// Highlighted entry while the overlay has focus.
    selected: Option<usize>,
    theme: &'a Theme,
}

impl<'a> ResultsOverlay<'a> {
    pub fn new(panel: &'a ResultsPanel, selected: Option<usize>, theme: &'a Theme) -> Self {
        Self { panel, selected, theme }
    }

    /// Rows needed to draw the panel, borders included. Zero when nothing
    /// should be drawn.
    pub fn height(panel: &ResultsPanel) -> u16 {
        if !panel.visible {
            return 0;
        }
        match &panel.content {
            PanelContent::Blank => 0,
            PanelContent::NoResults => 3,
            PanelContent::Entries(entries) => entries.len() as u16 * ROWS_PER_ENTRY + 2,
        }
    }

    fn entry_lines(&self, idx: usize, entry: &ResultEntry) -> [Line<'static>; 2] {
        let marker = if entry.image.is_some() { "▣ " } else { "□ " };
        let mut title = Line::from(vec![
            Span::styled(marker, self.theme.placeholder),
            Span::styled(entry.title.clone(), self.theme.result_title),
        ]);
        let mut meta = Line::from(vec![
            Span::raw("  "),
            Span::styled(format!("{} • ", entry.id), self.theme.result_meta),
            Span::styled(entry.esport.clone(), self.theme.esport_style(&entry.esport)),
        ]);
        if self.selected == Some(idx) {
            title = title.patch_style(self.theme.search_highlight);
            meta = meta.patch_style(self.theme.search_highlight);
        }
        [title, meta]
    }
}

impl Widget for ResultsOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if Self::height(self.panel) == 0 || area.height == 0 {
            return;
        }
        Clear.render(area, buf);

        let block = Block::bordered()
            .title(" Results ")
            .border_style(self.theme.border(self.selected.is_some()));
        let inner = block.inner(area);
        block.render(area, buf);

        let lines: Vec<Line> = match &self.panel.content {
            PanelContent::Blank => return,
            PanelContent::NoResults => vec![Line::from(Span::styled(
                NO_RESULTS,
                self.theme.placeholder,
            ))],
            PanelContent::Entries(entries) => entries
                .iter()
                .enumerate()
                .flat_map(|(i, e)| self.entry_lines(i, e))
                .collect(),
        };

        Paragraph::new(lines).render(inner, buf);

        if let Some(idx) = self.selected {
            let hint = " Enter:open  y:copy link ";
            let x = area.right().saturating_sub(hint.chars().count() as u16 + 1);
            let y = area.bottom().saturating_sub(1);
            if idx < self.panel.content.entries().len() {
                buf.set_string(x, y, hint, Style::default().add_modifier(Modifier::DIM));
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_core::Record;

    fn record(id: &str, title: &str) -> Record {
        Record {
            id: id.into(),
            title: title.into(),
            description: None,
            steward: None,
            team: None,
            player: None,
            esport: "dota".into(),
            url: format!("/record/{id}/"),
            primary_image: None,
        }
    }

    fn buffer_text(buf: &Buffer) -> String {
        let area = buf.area;
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn hidden_and_blank_panels_take_no_rows() {
        let mut panel = ResultsPanel::default();
        assert_eq!(ResultsOverlay::height(&panel), 0);
        panel.show(&[record("R1", "Jersey")]);
        panel.hide();
        assert_eq!(ResultsOverlay::height(&panel), 0);
    }

    #[test]
    fn height_grows_with_entries() {
        let mut panel = ResultsPanel::default();
        panel.show(&[record("R1", "A"), record("R2", "B")]);
        assert_eq!(ResultsOverlay::height(&panel), 6);
        panel.show(std::iter::empty::<&Record>());
        assert_eq!(ResultsOverlay::height(&panel), 3);
    }

    #[test]
    fn draws_entries_with_uppercase_esport() {
        let mut panel = ResultsPanel::default();
        panel.show(&[record("R1", "Blue Team Jersey")]);
        let theme = Theme::load_default();
        let area = Rect::new(0, 0, 40, ResultsOverlay::height(&panel));
        let mut buf = Buffer::empty(area);
        ResultsOverlay::new(&panel, None, &theme).render(area, &mut buf);
        let text = buffer_text(&buf);
        assert!(text.contains("□ Blue Team Jersey"));
        assert!(text.contains("R1 • DOTA"));
    }

    #[test]
    fn draws_placeholder_for_no_results() {
        let mut panel = ResultsPanel::default();
        panel.show(std::iter::empty::<&Record>());
        let theme = Theme::load_default();
        let area = Rect::new(0, 0, 30, 3);
        let mut buf = Buffer::empty(area);
        ResultsOverlay::new(&panel, None, &theme).render(area, &mut buf);
        assert!(buffer_text(&buf).contains(NO_RESULTS));
    }
}
