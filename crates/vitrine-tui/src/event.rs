//! Semantic application events: crossterm key events mapped to a
//! widget-agnostic vocabulary so widgets never touch crossterm directly.
//!
//! # Usage
//!
//! In the main event loop, call [`to_app_event`] on every [`crossterm::event::Event`]
//! and match on the returned [`AppEvent`] instead of crossterm types.
//!
//! # Keybindings
//!
//! The menu, yank and top keys come from the `[keybindings]` config section
//! via [`Keymap`]; the rest are fixed.
//!
//! | Key(s)                  | Event                      |
//! |-------------------------|----------------------------|
//! | `q`, `Ctrl+c`           | `Quit`                     |
//! | `Tab`                   | `FocusNext`                |
//! | `/`                     | `SearchFocus`              |
//! | `m` (configurable)      | `ToggleMenu`               |
//! | `y` (configurable)      | `Yank`                     |
//! | `g` (configurable), `Home` | `ScrollToTop`           |
//! | `PageUp`, `Ctrl+u`      | `ScrollUp`                 |
//! | `PageDown`, `Ctrl+d`    | `ScrollDown`               |
//! | `↑` / `k`               | `Nav(Up)`                  |
//! | `↓` / `j`               | `Nav(Down)`                |
//! | `←` / `h`               | `Nav(Left)`                |
//! | `→` / `l`               | `Nav(Right)`               |
//! | printable char          | `Char(c)`                  |
//! | `Backspace`             | `Backspace`                |
//! | `Enter`                 | `Enter`                    |
//! | terminal resize         | `Resize(w, h)`             |
//!
//! ## Insert mode
//!
//! When a text-input widget (search bar, command bar) is focused, the event
//! loop calls [`to_app_event_insert`] instead. In insert mode:
//! - hjkl and the configurable keys produce `Char` events
//! - Arrow keys still produce `Nav` for cursor movement
//! - Only `Ctrl+c`, `Escape`, `Enter`, `Tab`, and `Backspace` keep their
//!   special bindings

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use vitrine_core::config::KeybindingsConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// A semantic application event derived from a raw crossterm [`Event`].
///
/// The App shell routes each event to the widget that owns the current
/// focus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Quit,
    /// Move keyboard focus to the next pane (Tab-cycle).
    FocusNext,
    /// Transfer focus to the search bar.
    SearchFocus,
    /// Open or close the navigation menu.
    ToggleMenu,
    /// Copy the selected record's link to the clipboard.
    Yank,
    /// Scroll the catalog back to its first record.
    ScrollToTop,
    ScrollUp,
    ScrollDown,
    Nav(Direction),
    /// A printable character forwarded to the active text input.
    Char(char),
    Backspace,
    Enter,
    Resize(u16, u16),
    /// Dismiss the active overlay (results panel, menu, help popup).
    Escape,
}

// ---------------------------------------------------------------------------
// Keymap
// ---------------------------------------------------------------------------

/// The user-configurable single-character bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keymap {
    pub menu: char,
    pub yank: char,
    pub top: char,
}

impl Default for Keymap {
    fn default() -> Self {
        Self { menu: 'm', yank: 'y', top: 'g' }
    }
}

impl From<&KeybindingsConfig> for Keymap {
    /// Empty binding strings fall back to the defaults.
    fn from(cfg: &KeybindingsConfig) -> Self {
        let defaults = Keymap::default();
        Self {
            menu: KeybindingsConfig::key(&cfg.menu).unwrap_or(defaults.menu),
            yank: KeybindingsConfig::key(&cfg.yank).unwrap_or(defaults.yank),
            top: KeybindingsConfig::key(&cfg.top).unwrap_or(defaults.top),
        }
    }
}

// ---------------------------------------------------------------------------
// Mapping
// ---------------------------------------------------------------------------

/// Map a raw crossterm [`Event`] to an [`AppEvent`] (normal / navigation mode).
///
/// Returns `None` for events that carry no meaning for the application
/// (mouse events, focus changes, unbound keys).
pub fn to_app_event(event: Event, keymap: &Keymap) -> Option<AppEvent> {
    match event {
        Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
        Event::Key(key) => map_key(key, keymap),
        _ => None,
    }
}

/// Map a raw crossterm [`Event`] to an [`AppEvent`] for text-input ("insert") mode.
///
/// Call this variant whenever a text-input widget (search bar, command bar)
/// has focus.
pub fn to_app_event_insert(event: Event) -> Option<AppEvent> {
    match event {
        Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
        Event::Key(key) => map_key_insert(key),
        _ => None,
    }
}

fn map_key(key: KeyEvent, keymap: &Keymap) -> Option<AppEvent> {
    use KeyCode::*;
    use KeyModifiers as Mod;

    let plain = key.modifiers == Mod::NONE;

    match key.code {
        Char('q') if plain => Some(AppEvent::Quit),
        Char('c') if key.modifiers == Mod::CONTROL => Some(AppEvent::Quit),

        Tab if plain => Some(AppEvent::FocusNext),
        Char('/') if plain => Some(AppEvent::SearchFocus),

        Char(c) if plain && c == keymap.menu => Some(AppEvent::ToggleMenu),
        Char(c) if plain && c == keymap.yank => Some(AppEvent::Yank),
        Char(c) if plain && c == keymap.top => Some(AppEvent::ScrollToTop),
        Home => Some(AppEvent::ScrollToTop),

        PageUp => Some(AppEvent::ScrollUp),
        PageDown => Some(AppEvent::ScrollDown),
        Char('u') if key.modifiers == Mod::CONTROL => Some(AppEvent::ScrollUp),
        Char('d') if key.modifiers == Mod::CONTROL => Some(AppEvent::ScrollDown),

        Up | Char('k') if plain => Some(AppEvent::Nav(Direction::Up)),
        Down | Char('j') if plain => Some(AppEvent::Nav(Direction::Down)),
        Left | Char('h') if plain => Some(AppEvent::Nav(Direction::Left)),
        Right | Char('l') if plain => Some(AppEvent::Nav(Direction::Right)),

        // Shifted characters too (`?`, `:` arrive with SHIFT on some terminals)
        Char(c) if plain || key.modifiers == Mod::SHIFT => Some(AppEvent::Char(c)),

        Backspace if plain => Some(AppEvent::Backspace),
        Enter if plain => Some(AppEvent::Enter),
        Esc => Some(AppEvent::Escape),

        _ => None,
    }
}

fn map_key_insert(key: KeyEvent) -> Option<AppEvent> {
    use KeyCode::*;
    use KeyModifiers as Mod;

    match key.code {
        // Ctrl+c always quits, even while typing
        Char('c') if key.modifiers == Mod::CONTROL => Some(AppEvent::Quit),

        Up => Some(AppEvent::Nav(Direction::Up)),
        Down => Some(AppEvent::Nav(Direction::Down)),
        Left => Some(AppEvent::Nav(Direction::Left)),
        Right => Some(AppEvent::Nav(Direction::Right)),

        Tab if key.modifiers == Mod::NONE => Some(AppEvent::FocusNext),

        Char(c) if key.modifiers == Mod::NONE || key.modifiers == Mod::SHIFT => {
            Some(AppEvent::Char(c))
        }

        Backspace if key.modifiers == Mod::NONE => Some(AppEvent::Backspace),
        Enter if key.modifiers == Mod::NONE => Some(AppEvent::Enter),
        Esc => Some(AppEvent::Escape),

        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
