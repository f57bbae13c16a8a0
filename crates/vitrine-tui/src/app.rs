//! Top-level application state and the main event loop.
//!
//! [`App::run`] sets up the terminal, drives the crossterm event loop, and
//! tears everything down cleanly on exit or panic. It must be called from
//! inside a tokio runtime context: the search session spawns its debounce
//! timers there.

use crate::{
    clipboard,
    commands::{execute_command, Command},
    event::{self, AppEvent, Direction, Keymap},
    theme::Theme,
    widgets::{
        catalog::{Catalog, CatalogState},
        command_bar::{CommandBar, CommandBarState},
        help::HelpPopup,
        menu::{Menu, MenuItem, MenuState},
        results::ResultsOverlay,
        search_bar::{SearchBar, SearchBarState},
        status_bar::StatusBar,
        toast::Toast,
    },
};
use crossterm::{
    event::{self as ct_event, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction as LayoutDir, Layout, Rect},
    Frame, Terminal,
};
use std::{
    io,
    time::{Duration, Instant},
};
use vitrine_core::{
    config::Config,
    notify::{Notification, LINK_COPIED},
    SearchIndex, SearchSession,
};

// ---------------------------------------------------------------------------
// Focus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Search,
    /// Moving through the results overlay.
    Results,
    Catalog,
    Menu,
    /// Vim-style `:` command line is active.
    Command,
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

pub struct AppState {
    pub focus: Focus,
    /// Focus before the menu or command line opened, restored on close.
    pub prev_focus: Focus,
    pub search: SearchBarState,
    pub session: SearchSession,
    /// Highlighted entry while `focus == Focus::Results`.
    pub results_cursor: usize,
    pub catalog: CatalogState,
    pub menu: MenuState,
    pub keymap: Keymap,
    pub theme: Theme,
    pub config: Config,
    pub show_help: bool,
    pub command_bar: CommandBarState,
    pub toast: Option<Notification>,
    pub quit: bool,
    copy_link: fn(&str) -> io::Result<()>,
}

impl AppState {
    pub fn new(index: SearchIndex, config: Config, theme: Theme) -> Self {
        Self {
            focus: Focus::Search,
            prev_focus: Focus::Search,
            search: SearchBarState::default(),
            session: SearchSession::new(index.clone(), &config.search),
            results_cursor: 0,
            catalog: CatalogState::new(index, config.ui.back_to_top_rows),
            menu: MenuState::default(),
            keymap: Keymap::from(&config.keybindings),
            theme,
            config,
            show_help: false,
            command_bar: CommandBarState::default(),
            toast: None,
            quit: false,
            copy_link: clipboard::copy,
        }
    }

    /// Per-frame housekeeping: run fired searches and expire the toast.
    pub fn tick(&mut self, now: Instant) {
        if self.session.poll() > 0 {
            self.results_cursor = 0;
        }
        if self.toast.as_ref().is_some_and(|t| t.is_expired(now)) {
            self.toast = None;
        }
        if self.focus == Focus::Results {
            let entries = self.session.panel().content.entries().len();
            if entries == 0 || !self.session.panel().visible {
                self.focus = Focus::Search;
            } else if self.results_cursor >= entries {
                self.results_cursor = entries - 1;
            }
        }
    }

    pub fn open_menu(&mut self) {
        if self.focus != Focus::Menu {
            self.prev_focus = self.focus;
        }
        if !self.menu.open {
            self.menu.toggle();
        }
        self.focus = Focus::Menu;
    }

    fn close_menu(&mut self) {
        self.menu.close();
        self.focus = self.prev_focus;
    }

    fn focus_search(&mut self) {
        tracing::debug!(from = ?self.focus, "focus -> Search");
        self.focus = Focus::Search;
        self.session.panel_mut().reveal();
    }

    /// Leaving the search area hides the results panel but keeps its content.
    fn focus_catalog(&mut self) {
        tracing::debug!(from = ?self.focus, "focus -> Catalog");
        self.session.panel_mut().hide();
        self.focus = Focus::Catalog;
    }

    fn notify(&mut self, message: impl Into<String>) {
        let visible_for = Duration::from_millis(self.config.ui.toast_ms);
        self.toast = Some(Notification::with_duration(message, Instant::now(), visible_for));
    }

    /// `(id, url)` of the record under the cursor of the focused pane.
    fn selected_record(&self) -> Option<(String, String)> {
        match self.focus {
            Focus::Results => self
                .session
                .panel()
                .content
                .entries()
                .get(self.results_cursor)
                .map(|e| (e.id.clone(), e.url.clone())),
            Focus::Catalog => self.catalog.selected().map(|r| (r.id, r.url)),
            _ => None,
        }
    }

    fn view_selected(&mut self) {
        let Some((id, url)) = self.selected_record() else {
            return;
        };
        tracing::info!(record_id = %id, "record viewed");
        self.notify(url);
    }

    fn yank_selected(&mut self) {
        let Some((id, url)) = self.selected_record() else {
            return;
        };
        match (self.copy_link)(&url) {
            Ok(()) => {
                tracing::info!(record_id = %id, url = %url, "link copied");
                self.notify(LINK_COPIED);
            }
            Err(e) => {
                tracing::warn!(error = %e, url = %url, "clipboard copy failed");
                self.notify(format!("Copy failed: {url}"));
            }
        }
    }

    fn activate_menu_item(&mut self, item: MenuItem) {
        match item {
            MenuItem::Search => self.focus_search(),
            MenuItem::CatalogTop => {
                self.catalog.scroll_to_top();
                self.focus_catalog();
            }
            MenuItem::Help => {
                self.focus = self.prev_focus;
                self.show_help = true;
            }
            MenuItem::Quit => self.quit = true,
        }
    }
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    state: AppState,
}

impl App {
    pub fn new(index: SearchIndex, config: Config, theme: Theme) -> Self {
        App { state: AppState::new(index, config, theme) }
    }

    /// Set up the terminal, run the event loop, and restore the terminal on exit.
    pub fn run(mut self) -> anyhow::Result<()> {
        install_panic_hook();

        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        // Always restore terminal, even if the loop returned an error
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = terminal.show_cursor();

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        loop {
            self.state.tick(Instant::now());
            {
                let s = &self.state;
                terminal.draw(|frame| draw(frame, s))?;
            }
            self.state.catalog.observe_viewport();

            if self.state.quit {
                break;
            }

            if ct_event::poll(Duration::from_millis(16))? {
                match ct_event::read()? {
                    Event::Key(key) if key.kind == ct_event::KeyEventKind::Press => {
                        let raw = Event::Key(key);
                        let app_event = if is_insert_mode(self.state.focus) {
                            event::to_app_event_insert(raw)
                        } else {
                            event::to_app_event(raw, &self.state.keymap)
                        };
                        if let Some(ev) = app_event {
                            tracing::debug!(focus = ?self.state.focus, event = ?ev, "key event");
                            self.handle(ev);
                        }
                    }
                    other => {
                        if let Some(ev) = event::to_app_event(other, &self.state.keymap) {
                            self.handle(ev);
                        }
                    }
                }
            }
        }
        Ok(())
    }

    fn handle(&mut self, event: AppEvent) {
        let s = &mut self.state;

        // Help popup intercepts all events; only close keys pass through.
        if s.show_help {
            if matches!(event, AppEvent::Char('?') | AppEvent::Escape | AppEvent::Quit) {
                tracing::debug!("help popup closed");
                s.show_help = false;
            }
            return;
        }

        match s.focus {
            Focus::Command => return handle_command(s, event),
            Focus::Menu => return handle_menu(s, event),
            _ => {}
        }

        match event {
            AppEvent::Char('?') if s.focus != Focus::Search => {
                tracing::debug!("help popup opened");
                s.show_help = true;
            }

            AppEvent::Char(':') if s.focus != Focus::Search => {
                tracing::debug!(prev_focus = ?s.focus, "entering command mode");
                s.prev_focus = s.focus;
                s.command_bar.clear();
                s.focus = Focus::Command;
            }

            AppEvent::Quit => {
                tracing::debug!("quit");
                s.quit = true;
            }

            AppEvent::ToggleMenu => s.open_menu(),

            AppEvent::SearchFocus => s.focus_search(),

            // Tab-cycle focus: Search/Results → Catalog → Search
            AppEvent::FocusNext => match s.focus {
                Focus::Catalog => s.focus_search(),
                _ => s.focus_catalog(),
            },

            AppEvent::ScrollToTop => s.catalog.scroll_to_top(),

            AppEvent::Resize(_, _) => {}

            other => dispatch_to_focused(s, other),
        }
    }
}

/// Returns true when the current focus is on a text-input widget, meaning
/// alphabetic keys should produce characters rather than trigger shortcuts.
fn is_insert_mode(focus: Focus) -> bool {
    matches!(focus, Focus::Search | Focus::Command)
}

fn handle_command(s: &mut AppState, event: AppEvent) {
    match event {
        AppEvent::Escape => {
            tracing::debug!("command bar cancelled");
            s.command_bar.clear();
            s.focus = s.prev_focus;
        }
        AppEvent::Enter => match Command::parse(s.command_bar.input.as_str()) {
            Ok(cmd) => {
                tracing::debug!(command = ?cmd, "executing command");
                s.command_bar.clear();
                s.focus = s.prev_focus;
                execute_command(s, cmd);
            }
            Err(msg) if msg.is_empty() => {
                s.command_bar.clear();
                s.focus = s.prev_focus;
            }
            // Show the error; bar stays open
            Err(msg) => s.command_bar.error = Some(msg),
        },
        AppEvent::Quit => s.quit = true,
        other => s.command_bar.handle(&other),
    }
}

fn handle_menu(s: &mut AppState, event: AppEvent) {
    match event {
        AppEvent::ToggleMenu | AppEvent::Escape => s.close_menu(),
        AppEvent::Quit => s.quit = true,
        other => {
            if let Some(item) = s.menu.handle(&other) {
                s.focus = s.prev_focus;
                s.activate_menu_item(item);
            }
        }
    }
}

/// Route an event to the widget that owns the current focus.
fn dispatch_to_focused(s: &mut AppState, event: AppEvent) {
    match s.focus {
        Focus::Search => match event {
            AppEvent::Nav(Direction::Down) => {
                let panel = s.session.panel();
                if panel.visible && !panel.content.entries().is_empty() {
                    s.results_cursor = 0;
                    s.focus = Focus::Results;
                }
            }
            AppEvent::Enter => {
                s.session.run_now(s.search.query());
                s.results_cursor = 0;
            }
            AppEvent::Escape => {
                if s.session.panel().visible {
                    s.session.panel_mut().hide();
                } else {
                    s.focus_catalog();
                }
            }
            other => {
                if s.search.handle(&other) {
                    s.session.on_input(s.search.query());
                }
            }
        },
        Focus::Results => match event {
            AppEvent::Nav(Direction::Up) if s.results_cursor == 0 => s.focus = Focus::Search,
            AppEvent::Nav(Direction::Up) => s.results_cursor -= 1,
            AppEvent::Nav(Direction::Down) => {
                let last = s.session.panel().content.entries().len().saturating_sub(1);
                s.results_cursor = (s.results_cursor + 1).min(last);
            }
            AppEvent::Enter => s.view_selected(),
            AppEvent::Yank => s.yank_selected(),
            AppEvent::Escape => {
                s.session.panel_mut().hide();
                s.focus = Focus::Search;
            }
            // Typing from the results goes back to the query
            ev @ (AppEvent::Char(_) | AppEvent::Backspace) => {
                s.focus = Focus::Search;
                if s.search.handle(&ev) {
                    s.session.on_input(s.search.query());
                }
            }
            _ => {}
        },
        Focus::Catalog => match event {
            AppEvent::Enter => s.view_selected(),
            AppEvent::Yank => s.yank_selected(),
            other => s.catalog.handle(&other),
        },
        // handled before dispatch
        Focus::Menu | Focus::Command => {}
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn draw(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Vertical: 1-line status bar | 3-line search bar | catalog
    let vert = Layout::default()
        .direction(LayoutDir::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Fill(1),
        ])
        .split(area);

    let index = state.session.index();
    let records = index.is_loaded().then(|| index.len());
    frame.render_widget(
        StatusBar::new(state.menu.open, records, &state.keymap, &state.theme),
        vert[0],
    );
    frame.render_widget(
        SearchBar::new(
            &state.search,
            state.focus == Focus::Search,
            state.session.is_pending(),
            &state.theme,
        ),
        vert[1],
    );
    frame.render_widget(
        Catalog::new(&state.catalog, state.focus == Focus::Catalog, &state.theme),
        vert[2],
    );

    // Results overlay hangs below the search bar, over the catalog
    let panel = state.session.panel();
    let height = ResultsOverlay::height(panel).min(area.bottom().saturating_sub(vert[1].bottom()));
    if height > 0 {
        let results_area = Rect { y: vert[1].bottom(), height, ..vert[1] };
        let selected = (state.focus == Focus::Results).then_some(state.results_cursor);
        frame.render_widget(ResultsOverlay::new(panel, selected, &state.theme), results_area);
    }

    if state.menu.open {
        let below_status = Rect {
            y: vert[1].y,
            height: area.height.saturating_sub(1),
            ..area
        };
        frame.render_widget(Menu::new(&state.menu, &state.theme), below_status);
    }

    if let Some(toast) = &state.toast {
        frame.render_widget(Toast::new(toast, Instant::now(), &state.theme), area);
    }

    if state.show_help {
        frame.render_widget(HelpPopup::new(&state.keymap, &state.theme), area);
    }

    // Command bar overlays the bottom row of the screen
    if state.focus == Focus::Command {
        let cmd_area = Rect { y: area.bottom().saturating_sub(1), height: 1, ..area };
        frame.render_widget(CommandBar::new(&state.command_bar, &state.theme), cmd_area);
        let col = state.command_bar.cursor_col(cmd_area);
        frame.set_cursor_position((col, cmd_area.y));
        return;
    }

    if state.focus == Focus::Search {
        let bar = SearchBar::new(&state.search, true, false, &state.theme);
        frame.set_cursor_position(bar.cursor_position(vert[1]));
    }
}

// ---------------------------------------------------------------------------
// Terminal helpers
// ---------------------------------------------------------------------------

fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original(info);
    }));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_core::{render::PanelContent, Record};

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

    fn app() -> App {
        let index = SearchIndex::with_records(vec![
            record("R1", "Blue Team Jersey"),
            record("R2", "Blue Mousepad"),
        ]);
        let mut app = App::new(index, Config::defaults(), Theme::load_default());
        app.state.copy_link = |_| Ok(());
        app
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            app.handle(AppEvent::Char(c));
        }
    }

    async fn settle(app: &mut App) {
        tokio::task::yield_now().await;
        tokio::time::advance(Duration::from_millis(300)).await;
        tokio::task::yield_now().await;
        app.state.tick(Instant::now());
    }

    #[tokio::test(start_paused = true)]
    async fn typing_runs_one_debounced_search() {
        let mut app = app();
        type_str(&mut app, "blue");
        assert!(app.state.session.is_pending());
        settle(&mut app).await;
        assert_eq!(app.state.session.searches_run(), 1);
        assert_eq!(app.state.session.panel().content.entries().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn short_query_clears_panel() {
        let mut app = app();
        type_str(&mut app, "bl");
        settle(&mut app).await;
        app.handle(AppEvent::Backspace);
        assert_eq!(app.state.session.panel().content, PanelContent::Blank);
        assert!(!app.state.session.panel().visible);
    }

    #[tokio::test(start_paused = true)]
    async fn leaving_search_hides_and_returning_reveals() {
        let mut app = app();
        type_str(&mut app, "blue");
        settle(&mut app).await;
        app.handle(AppEvent::FocusNext);
        assert_eq!(app.state.focus, Focus::Catalog);
        assert!(!app.state.session.panel().visible);
        app.handle(AppEvent::SearchFocus);
        assert!(app.state.session.panel().visible);
    }

    #[tokio::test(start_paused = true)]
    async fn enter_on_result_shows_url_and_escape_hides() {
        let mut app = app();
        type_str(&mut app, "mousepad");
        settle(&mut app).await;
        app.handle(AppEvent::Nav(Direction::Down));
        assert_eq!(app.state.focus, Focus::Results);
        app.handle(AppEvent::Enter);
        assert_eq!(app.state.toast.as_ref().unwrap().message, "/record/R2/");
        app.handle(AppEvent::Escape);
        assert_eq!(app.state.focus, Focus::Search);
        assert!(!app.state.session.panel().visible);
    }

    #[tokio::test(start_paused = true)]
    async fn yank_copies_link_and_toasts() {
        let mut app = app();
        type_str(&mut app, "blue");
        settle(&mut app).await;
        app.handle(AppEvent::Nav(Direction::Down));
        app.handle(AppEvent::Nav(Direction::Down));
        assert_eq!(app.state.results_cursor, 1);
        app.handle(AppEvent::Yank);
        assert_eq!(app.state.toast.as_ref().unwrap().message, LINK_COPIED);
    }

    #[tokio::test]
    async fn failed_copy_still_shows_the_link() {
        let mut app = app();
        app.state.copy_link = |_| Err(io::Error::other("no tty"));
        app.handle(AppEvent::FocusNext);
        app.handle(AppEvent::Yank);
        assert_eq!(
            app.state.toast.as_ref().unwrap().message,
            "Copy failed: /record/R1/"
        );
    }

    #[tokio::test]
    async fn toast_expires_on_tick() {
        let mut app = app();
        app.handle(AppEvent::FocusNext);
        app.handle(AppEvent::Enter);
        assert!(app.state.toast.is_some());
        app.state.tick(Instant::now() + Duration::from_secs(4));
        assert!(app.state.toast.is_none());
    }

    #[tokio::test]
    async fn menu_opens_jumps_and_restores_focus() {
        let mut app = app();
        app.handle(AppEvent::FocusNext);
        app.state.catalog.cursor = 1;
        app.handle(AppEvent::ToggleMenu);
        assert_eq!(app.state.focus, Focus::Menu);
        assert!(app.state.menu.open);
        app.handle(AppEvent::Escape);
        assert_eq!(app.state.focus, Focus::Catalog);
        assert!(!app.state.menu.open);

        app.handle(AppEvent::ToggleMenu);
        app.handle(AppEvent::Nav(Direction::Down));
        app.handle(AppEvent::Enter);
        assert_eq!(app.state.catalog.cursor, 0);
        assert_eq!(app.state.focus, Focus::Catalog);
    }

    #[tokio::test]
    async fn menu_search_entry_focuses_search_bar() {
        let mut app = app();
        app.handle(AppEvent::FocusNext);
        app.handle(AppEvent::ToggleMenu);
        app.handle(AppEvent::Enter);
        assert_eq!(app.state.focus, Focus::Search);
    }

    #[tokio::test]
    async fn command_bar_runs_and_reports_errors() {
        let mut app = app();
        app.handle(AppEvent::FocusNext);
        app.handle(AppEvent::Char(':'));
        assert_eq!(app.state.focus, Focus::Command);
        for c in "bogus".chars() {
            app.handle(AppEvent::Char(c));
        }
        app.handle(AppEvent::Enter);
        assert_eq!(app.state.focus, Focus::Command);
        assert!(app.state.command_bar.error.is_some());

        app.handle(AppEvent::Escape);
        app.handle(AppEvent::Char(':'));
        for c in "menu".chars() {
            app.handle(AppEvent::Char(c));
        }
        app.handle(AppEvent::Enter);
        assert_eq!(app.state.focus, Focus::Menu);
    }

    #[tokio::test]
    async fn question_mark_is_typed_in_search_but_opens_help_elsewhere() {
        let mut app = app();
        app.handle(AppEvent::Char('?'));
        assert!(!app.state.show_help);
        assert_eq!(app.state.search.query(), "?");

        app.handle(AppEvent::FocusNext);
        app.handle(AppEvent::Char('?'));
        assert!(app.state.show_help);
        // Help swallows everything but its close keys
        app.handle(AppEvent::Nav(Direction::Down));
        assert_eq!(app.state.catalog.cursor, 0);
        app.handle(AppEvent::Escape);
        assert!(!app.state.show_help);
    }

    #[tokio::test]
    async fn enter_in_search_bypasses_debounce() {
        let mut app = app();
        type_str(&mut app, "jersey");
        app.handle(AppEvent::Enter);
        assert_eq!(app.state.session.searches_run(), 1);
        assert_eq!(app.state.session.panel().content.entries()[0].id, "R1");
    }
}
