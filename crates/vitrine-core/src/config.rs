//! Configuration types for vitrine.
//!
//! [`Config::load`] reads `~/.config/vitrine/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::defaults`] returns
//! the same defaults without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::{path::PathBuf, time::Duration};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[index]
location = "output"

[search]
debounce_ms   = 300
min_query_len = 2
max_results   = 10

[ui]
back_to_top_rows = 25
toast_ms         = 3000
theme            = "default"

[keybindings]
menu = "m"
yank = "y"
top  = "g"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration, loaded from `~/.config/vitrine/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub index: IndexConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub keybindings: KeybindingsConfig,
}

/// `[index]` section: where the site's search index lives.
#[derive(Debug, Clone, Deserialize)]
pub struct IndexConfig {
    /// A built site directory, or an `http://` base URL of the deployed site.
    #[serde(default = "default_location")]
    pub location: String,
}

fn default_location() -> String { "output".to_string() }

impl Default for IndexConfig {
    fn default() -> Self {
        Self { location: default_location() }
    }
}

/// `[search]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    #[serde(default = "default_min_query_len")]
    pub min_query_len: usize,
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

fn default_debounce_ms() -> u64 { 300 }
fn default_min_query_len() -> usize { crate::search::MIN_QUERY_LEN }
fn default_max_results() -> usize { crate::search::MAX_RESULTS }

impl SearchConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            min_query_len: default_min_query_len(),
            max_results: default_max_results(),
        }
    }
}

/// `[ui]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    /// Catalog rows scrolled before the back-to-top marker appears.
    #[serde(default = "default_back_to_top_rows")]
    pub back_to_top_rows: usize,
    #[serde(default = "default_toast_ms")]
    pub toast_ms: u64,
    #[serde(default = "default_theme")]
    pub theme: String,
}

fn default_back_to_top_rows() -> usize { 25 }
fn default_toast_ms() -> u64 { 3000 }
fn default_theme() -> String { "default".to_string() }

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            back_to_top_rows: default_back_to_top_rows(),
            toast_ms: default_toast_ms(),
            theme: default_theme(),
        }
    }
}

/// `[keybindings]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct KeybindingsConfig {
    #[serde(default = "default_menu")]
    pub menu: String,
    #[serde(default = "default_yank")]
    pub yank: String,
    #[serde(default = "default_top")]
    pub top: String,
}

fn default_menu() -> String { "m".to_string() }
fn default_yank() -> String { "y".to_string() }
fn default_top() -> String { "g".to_string() }

impl KeybindingsConfig {
    /// First character of a binding string, if any.
    pub fn key(binding: &str) -> Option<char> {
        binding.chars().next()
    }
}

impl Default for KeybindingsConfig {
    fn default() -> Self {
        Self {
            menu: default_menu(),
            yank: default_yank(),
            top: default_top(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/vitrine/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
            tracing::info!(path = %path.display(), "config: wrote defaults");
        }

        Self::load_from(&path)
    }

    /// Load a specific file layered over the built-in defaults. A missing
    /// file yields the defaults.
    pub fn load_from(path: &std::path::Path) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(false))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("vitrine")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_load() {
        let cfg = Config::defaults();
        assert_eq!(cfg.index.location, "output");
        assert_eq!(cfg.search.debounce(), Duration::from_millis(300));
        assert_eq!(cfg.search.min_query_len, 2);
        assert_eq!(cfg.search.max_results, 10);
        assert_eq!(cfg.ui.back_to_top_rows, 25);
        assert_eq!(cfg.keybindings.menu, "m");
    }

    #[test]
    fn user_file_overrides_defaults() {
        let dir = std::env::temp_dir().join(format!("vitrine-cfg-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(&path, "[index]\nlocation = \"http://museum.local\"\n[search]\ndebounce_ms = 50\n").unwrap();

        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg.index.location, "http://museum.local");
        assert_eq!(cfg.search.debounce_ms, 50);
        assert_eq!(cfg.search.max_results, 10);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_file_yields_defaults() {
        let cfg = Config::load_from(std::path::Path::new("/nonexistent/vitrine.toml")).unwrap();
        assert_eq!(cfg.search.min_query_len, 2);
    }
}
