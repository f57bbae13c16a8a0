use clap::Parser;
use tracing_subscriber::EnvFilter;
use vitrine::headless::{self, OutputFormat};
use vitrine_core::{config::Config, SearchIndex};
use vitrine_fetch::{spawn_index_load, IndexLocation};

#[derive(Parser)]
#[command(name = "vitrine", about = "Search the esports museum catalog from the terminal")]
struct Cli {
    /// Built site directory or http:// base URL of the deployed site.
    /// Overrides `[index] location` from the config file.
    #[arg(long)]
    index: Option<String>,

    /// Run one search, print the results and exit.
    #[arg(long, requires = "query")]
    headless: bool,

    /// Query for --headless.
    #[arg(long)]
    query: Option<String>,

    /// Output format for --headless.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Write debug logs to /tmp/vitrine-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/vitrine-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                EnvFilter::try_from_env("RUST_LOG").unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("vitrine debug log started, tail -f /tmp/vitrine-debug.log");
    } else if cli.headless {
        // stdout carries the results; diagnostics go to stderr
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                EnvFilter::try_from_env("RUST_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
            )
            .init();
    }

    let config = Config::load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "config: falling back to defaults");
        Config::defaults()
    });
    let location = IndexLocation::parse(cli.index.as_deref().unwrap_or(&config.index.location));

    let rt = tokio::runtime::Runtime::new()?;

    if cli.headless {
        let query = cli.query.unwrap_or_default();
        let output = rt.block_on(headless::run(location, &query, cli.format, &config.search))?;
        print!("{}", output.stdout);
        if let Some(notice) = output.notice {
            eprintln!("{notice}");
        }
        return Ok(());
    }

    let _guard = rt.enter();
    let index = SearchIndex::new();
    spawn_index_load(location, index.clone());
    vitrine_tui::run(index, config)
}
