//! The results panel model and its output formats.
//!
//! [`ResultsPanel`] is the state the UI draws from: a visibility flag plus
//! the content of the last render. Every [`ResultsPanel::show`] replaces the
//! content wholesale; there is no incremental diffing.
//!
//! Output formats:
//! - [`render_html`]: the site's dropdown markup (`search-result-item` links).
//! - [`render_text`]: one line per entry, for headless use.
//! - [`render_jsonl`]: the matched records, one JSON object per line.
//!
//! The TUI draws the same [`PanelContent`] with its own widget.

use crate::{error::RenderError, types::Record};
use std::fmt::Write as _;

/// Message shown when a search matches nothing (or the index is not loaded).
pub const NO_RESULTS: &str = "No results found";

// ---------------------------------------------------------------------------
// Panel model
// ---------------------------------------------------------------------------

/// One rendered search hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultEntry {
    pub url: String,
    /// Image URL; `None` renders a blank placeholder box.
    pub image: Option<String>,
    pub title: String,
    pub id: String,
    /// The record's esport code, uppercased for display.
    pub esport: String,
}

impl From<&Record> for ResultEntry {
    fn from(record: &Record) -> Self {
        Self {
            url: record.url.clone(),
            image: record.primary_image.clone(),
            title: record.title.clone(),
            id: record.id.clone(),
            esport: record.esport.to_uppercase(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PanelContent {
    /// Nothing rendered (initial state, or cleared by a short query).
    #[default]
    Blank,
    /// A search ran and matched nothing.
    NoResults,
    Entries(Vec<ResultEntry>),
}

impl PanelContent {
    pub fn entries(&self) -> &[ResultEntry] {
        match self {
            PanelContent::Entries(entries) => entries,
            _ => &[],
        }
    }
}

/// State of the search results dropdown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultsPanel {
    pub visible: bool,
    pub content: PanelContent,
}

impl ResultsPanel {
    /// Replace the content with `matches` and make the panel visible.
    pub fn show<'a, I>(&mut self, matches: I)
    where
        I: IntoIterator<Item = &'a Record>,
    {
        let entries: Vec<ResultEntry> = matches.into_iter().map(ResultEntry::from).collect();
        self.content = if entries.is_empty() {
            PanelContent::NoResults
        } else {
            PanelContent::Entries(entries)
        };
        self.visible = true;
        tracing::debug!(entries = self.content.entries().len(), "panel: rendered");
    }

    /// Hide and blank the panel. Used when the query drops below the
    /// minimum length.
    pub fn clear(&mut self) {
        self.visible = false;
        self.content = PanelContent::Blank;
    }

    /// Hide the panel but keep its content (focus moved elsewhere).
    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Reopen a hidden panel that still has content.
    pub fn reveal(&mut self) {
        if self.content != PanelContent::Blank {
            self.visible = true;
        }
    }
}

// ---------------------------------------------------------------------------
// HTML
// ---------------------------------------------------------------------------

const PLACEHOLDER_BOX: &str = r#"<div style="width: 60px; height: 60px; background: var(--color-bg-tertiary); border-radius: 4px;"></div>"#;

/// Render the panel content as the site's dropdown markup.
pub fn render_html(content: &PanelContent) -> Result<String, RenderError> {
    let mut out = String::new();
    match content {
        PanelContent::Blank => {}
        PanelContent::NoResults => {
            write!(
                out,
                r#"<div style="padding: 1rem; text-align: center; color: var(--color-text-tertiary);">{NO_RESULTS}</div>"#
            )?;
        }
        PanelContent::Entries(entries) => {
            for entry in entries {
                write_html_entry(&mut out, entry)?;
            }
        }
    }
    Ok(out)
}

fn write_html_entry(out: &mut String, entry: &ResultEntry) -> std::fmt::Result {
    writeln!(
        out,
        r#"<a href="{}" class="search-result-item">"#,
        escape_html(&entry.url)
    )?;
    match &entry.image {
        Some(src) => writeln!(
            out,
            r#"  <img src="{}" alt="{}">"#,
            escape_html(src),
            escape_html(&entry.title)
        )?,
        None => writeln!(out, "  {PLACEHOLDER_BOX}")?,
    }
    writeln!(out, r#"  <div style="flex: 1;">"#)?;
    writeln!(
        out,
        r#"    <div style="font-weight: 600; margin-bottom: 0.25rem;">{}</div>"#,
        escape_html(&entry.title)
    )?;
    writeln!(
        out,
        r#"    <div style="font-size: 0.75rem; color: var(--color-text-tertiary);">{} • {}</div>"#,
        escape_html(&entry.id),
        escape_html(&entry.esport)
    )?;
    writeln!(out, "  </div>")?;
    writeln!(out, "</a>")
}

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Plain text / JSON lines
// ---------------------------------------------------------------------------

/// Render the panel content as plain text, one line per entry.
pub fn render_text(content: &PanelContent) -> Result<String, RenderError> {
    let mut out = String::new();
    match content {
        PanelContent::Blank => {}
        PanelContent::NoResults => writeln!(out, "{NO_RESULTS}")?,
        PanelContent::Entries(entries) => {
            for e in entries {
                let image = if e.image.is_some() { "▣" } else { "□" };
                writeln!(out, "{image} {} • {}  {}  {}", e.id, e.esport, e.title, e.url)?;
            }
        }
    }
    Ok(out)
}

/// Render matched records as JSON lines.
pub fn render_jsonl(records: &[Record]) -> Result<String, RenderError> {
    let mut out = String::new();
    for record in records {
        let line = serde_json::to_string(record).map_err(|source| RenderError::Json {
            id: record.id.clone(),
            source,
        })?;
        out.push_str(&line);
        out.push('\n');
    }
    Ok(out)
}

// ---------------------------------------------------------------------------
// Renderers
// ---------------------------------------------------------------------------

/// Output stage fed with the panel content after every search.
///
/// An error aborts the render; the caller keeps the previous panel.
pub trait PanelRenderer {
    fn render(&mut self, content: &PanelContent) -> Result<(), RenderError>;
}

/// Renderer for front ends that draw straight from [`ResultsPanel`].
#[derive(Debug, Default)]
pub struct NullRenderer;

impl PanelRenderer for NullRenderer {
    fn render(&mut self, _content: &PanelContent) -> Result<(), RenderError> {
        Ok(())
    }
}

/// Keeps the HTML of the last successful render.
#[derive(Debug, Default)]
pub struct HtmlRenderer {
    pub output: String,
}

impl PanelRenderer for HtmlRenderer {
    fn render(&mut self, content: &PanelContent) -> Result<(), RenderError> {
        self.output = render_html(content)?;
        Ok(())
    }
}

/// Keeps the plain text of the last successful render.
#[derive(Debug, Default)]
pub struct TextRenderer {
    pub output: String,
}

impl PanelRenderer for TextRenderer {
    fn render(&mut self, content: &PanelContent) -> Result<(), RenderError> {
        self.output = render_text(content)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
