//! Headless mode: load the index, run one search, render the panel.

use vitrine_core::{
    config::SearchConfig,
    render::{self, HtmlRenderer, PanelContent, TextRenderer, NO_RESULTS},
    SearchIndex, SearchSession,
};
use vitrine_fetch::{spawn_index_load, IndexLocation, LoadOutcome};

/// Output format of `--headless`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// The results panel markup, as the site's script would insert it.
    Html,
    /// One line per result.
    Text,
    /// One matched record per line, as JSON.
    Jsonl,
}

/// What a headless search prints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlessOutput {
    pub stdout: String,
    /// Human-readable line for stderr. JSON lines output has no in-band
    /// placeholder, so a search with no matches reports it here.
    pub notice: Option<&'static str>,
}

/// Load the index from `location`, search for `query` and return the
/// rendered output.
///
/// A failed load is not an error: the search runs against the empty index
/// and yields the no-results output. A query shorter than the minimum
/// length renders nothing.
pub async fn run(
    location: IndexLocation,
    query: &str,
    format: OutputFormat,
    config: &SearchConfig,
) -> anyhow::Result<HeadlessOutput> {
    let index = SearchIndex::new();
    let outcome = spawn_index_load(location, index.clone()).await?;
    if let LoadOutcome::Failed { reason } = &outcome {
        tracing::warn!(reason = %reason, "headless: searching an empty index");
    }

    let mut notice = None;
    let stdout = match format {
        OutputFormat::Html => {
            let mut session = SearchSession::with_renderer(index, config, HtmlRenderer::default());
            session.run_now(query);
            session.renderer().output.clone()
        }
        OutputFormat::Text => {
            let mut session = SearchSession::with_renderer(index, config, TextRenderer::default());
            session.run_now(query);
            session.renderer().output.clone()
        }
        OutputFormat::Jsonl => {
            let mut session = SearchSession::new(index, config);
            let hits = session.run_now(query);
            if session.panel().content == PanelContent::NoResults {
                notice = Some(NO_RESULTS);
            }
            render::render_jsonl(&hits)?
        }
    };
    tracing::debug!(query, format = ?format, bytes = stdout.len(), "headless: rendered");
    Ok(HeadlessOutput { stdout, notice })
}
