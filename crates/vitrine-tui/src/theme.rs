//! Colour theme for the vitrine TUI.
//!
//! Themes are defined as TOML files. Both built-in themes are embedded in the
//! binary with [`include_str!`]; no theme file is read at runtime.
//! [`Theme::by_name`] resolves the `ui.theme` config value.
//!
//! # Colour assignment for esports
//!
//! Esport codes are hashed to a stable index into the palette so the same
//! category always gets the same colour, regardless of index order.

use config::{Config, File, FileFormat};
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

const DEFAULT_THEME_SRC: &str = include_str!("themes/default.toml");
const GRUVBOX_DARK_THEME_SRC: &str = include_str!("themes/gruvbox_dark.toml");

// ---------------------------------------------------------------------------
// Raw (serde) types, mirroring the TOML structure
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RawStyle {
    fg: Option<String>,
    bg: Option<String>,
    #[serde(default)]
    bold: bool,
    #[serde(default)]
    dim: bool,
    #[serde(default)]
    italic: bool,
    #[serde(default)]
    underlined: bool,
}

impl RawStyle {
    fn into_style(self) -> Style {
        let modifiers = [
            (self.bold, Modifier::BOLD),
            (self.dim, Modifier::DIM),
            (self.italic, Modifier::ITALIC),
            (self.underlined, Modifier::UNDERLINED),
        ]
        .into_iter()
        .filter(|(on, _)| *on)
        .fold(Modifier::empty(), |acc, (_, m)| acc | m);

        let base = Style::default().add_modifier(modifiers);
        let base = match self.fg.as_deref().and_then(parse_color) {
            Some(fg) => base.fg(fg),
            None => base,
        };
        match self.bg.as_deref().and_then(parse_color) {
            Some(bg) => base.bg(bg),
            None => base,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawBorders {
    focused: RawStyle,
    command_bar: RawStyle,
    unfocused: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawSearch {
    highlight: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawResults {
    title: RawStyle,
    meta: RawStyle,
    placeholder: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawToast {
    style: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawMenu {
    active: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawEsports {
    palette: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawTheme {
    borders: RawBorders,
    search: RawSearch,
    results: RawResults,
    toast: RawToast,
    menu: RawMenu,
    esports: RawEsports,
}

// ---------------------------------------------------------------------------
// Public Theme type
// ---------------------------------------------------------------------------

/// Application colour theme. All styles are pre-resolved ratatui [`Style`]
/// values.
#[derive(Debug, Clone)]
pub struct Theme {
    pub border_focused: Style,
    pub border_command_bar: Style,
    pub border_unfocused: Style,

    /// Selected row in the results panel, catalog and menu cursor.
    pub search_highlight: Style,

    pub result_title: Style,
    /// `ID • ESPORT` line under each result.
    pub result_meta: Style,
    /// Image placeholders and the "No results found" line.
    pub placeholder: Style,

    pub toast: Style,
    /// The menu toggle while the menu is open.
    pub menu_active: Style,

    esport_palette: Vec<Color>,
}

impl Theme {
    /// The built-in theme used when `ui.theme` is unset or unknown.
    pub fn load_default() -> Self {
        Self::from_toml_str(DEFAULT_THEME_SRC).expect("default.toml is embedded and valid")
    }

    pub fn load_gruvbox_dark() -> Self {
        Self::from_toml_str(GRUVBOX_DARK_THEME_SRC).expect("gruvbox_dark.toml is embedded and valid")
    }

    /// Resolve a theme name from config or the `:theme` command. Unknown
    /// names fall back to the default theme.
    pub fn by_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "gruvbox" | "gruvbox_dark" | "gruvbox-dark" => Self::load_gruvbox_dark(),
            "default" => Self::load_default(),
            other => {
                tracing::warn!(theme = other, "unknown theme, using default");
                Self::load_default()
            }
        }
    }

    /// Parse a theme from a TOML string. Unknown keys are ignored.
    pub fn from_toml_str(src: &str) -> anyhow::Result<Self> {
        let raw: RawTheme = Config::builder()
            .add_source(File::from_str(src, FileFormat::Toml))
            .build()?
            .try_deserialize()?;

        Ok(Self {
            border_focused: raw.borders.focused.into_style(),
            border_command_bar: raw.borders.command_bar.into_style(),
            border_unfocused: raw.borders.unfocused.into_style(),
            search_highlight: raw.search.highlight.into_style(),
            result_title: raw.results.title.into_style(),
            result_meta: raw.results.meta.into_style(),
            placeholder: raw.results.placeholder.into_style(),
            toast: raw.toast.style.into_style(),
            menu_active: raw.menu.active.into_style(),
            esport_palette: raw
                .esports
                .palette
                .iter()
                .filter_map(|s| parse_color(s))
                .collect(),
        })
    }

    pub fn border(&self, focused: bool) -> Style {
        if focused {
            self.border_focused
        } else {
            self.border_unfocused
        }
    }

    /// Stable [`Style`] for an esport code. Case does not matter, so the
    /// catalog's `dota` and the results panel's `DOTA` share a colour.
    pub fn esport_style(&self, esport: &str) -> Style {
        if self.esport_palette.is_empty() {
            return Style::default();
        }
        let idx = stable_hash(&esport.to_ascii_lowercase()) % self.esport_palette.len();
        Style::default().fg(self.esport_palette[idx])
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// 64-bit FNV-1a. `DefaultHasher` is not stable across releases.
fn stable_hash(s: &str) -> usize {
    let h = s
        .bytes()
        .fold(0xcbf2_9ce4_8422_2325u64, |h, b| (h ^ u64::from(b)).wrapping_mul(0x0100_0000_01b3));
    h as usize
}

/// Theme colours use ratatui's own colour syntax (`light_blue`, `#83a598`,
/// a bare palette index) plus the `indexed:N` form.
fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim();
    match s.strip_prefix("indexed:") {
        Some(n) => n.parse().ok().map(Color::Indexed),
        None => s.parse().ok(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
