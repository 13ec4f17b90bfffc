//! TUI rendering and terminal management (impure shell)

pub mod constants;
mod help;
mod layout;
mod pager;
mod search_input;
mod styles;
mod table;

pub use help::render_help_overlay;
pub use layout::render_layout;
pub use pager::{pager_items, render_pager, PagerItem};
pub use search_input::SearchBar;
pub use styles::{ColorConfig, Palette};
pub use table::{render_table, truncate_to_width};

use crate::action::{ComposeError, Composer, DeliverySink, MessageTemplates, OutboxFile};
use crate::config::keybindings::KeyBindings;
use crate::model::{KeyAction, RosterError};
use crate::source::RosterSource;
use crate::state::{
    detect_click, handle_action, handle_click, search_input_handler, AppState, ClickRegion,
    Effect, FocusPane, NoticeLevel, PageSize, SearchInput, ViewState,
};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::Backend, backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, error, info, warn};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// The roster could not be loaded at start-up.
    #[error("Roster error: {0}")]
    Roster(#[from] RosterError),

    /// The message templates could not be compiled.
    #[error("Template error: {0}")]
    Compose(#[from] ComposeError),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    source: RosterSource,
    composer: Composer,
    sink: Box<dyn DeliverySink>,
    key_bindings: KeyBindings,
    palette: Palette,
    /// Clickable areas from the last frame.
    click_regions: Vec<ClickRegion>,
}

impl<B> TuiApp<B>
where
    B: Backend,
{
    /// Assemble an application around an existing terminal.
    ///
    /// The roster is already loaded into `app_state`; `source` is only used
    /// again on reload.
    pub fn with_backend(
        terminal: Terminal<B>,
        app_state: AppState,
        source: RosterSource,
        composer: Composer,
        sink: Box<dyn DeliverySink>,
        palette: Palette,
    ) -> Self {
        Self {
            terminal,
            app_state,
            source,
            composer,
            sink,
            key_bindings: KeyBindings::default(),
            palette,
            click_regions: Vec::new(),
        }
    }

    /// Current application state.
    pub fn app_state(&self) -> &AppState {
        &self.app_state
    }

    /// The terminal, for inspecting a test backend's buffer.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C always quits, even if not in bindings
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        self.app_state.notice = None;

        if key.code == KeyCode::Esc && self.app_state.help_visible {
            self.app_state.help_visible = false;
            return false;
        }

        if self.app_state.focus == FocusPane::Search && !self.app_state.help_visible {
            if let Some(handled) = self.handle_search_key(key) {
                return handled;
            }
        }

        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };
        let effect = handle_action(&mut self.app_state, action);
        self.apply_effect(effect)
    }

    /// Keys consumed by the focused search bar. `None` falls through to the
    /// bindings.
    fn handle_search_key(&mut self, key: KeyEvent) -> Option<bool> {
        let search = std::mem::take(&mut self.app_state.search);
        let edited: SearchInput = match key.code {
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                search_input_handler::handle_char_input(search, ch)
            }
            KeyCode::Backspace => search_input_handler::handle_backspace(search),
            KeyCode::Delete => search_input_handler::handle_delete(search),
            KeyCode::Left => search_input_handler::handle_cursor_left(search),
            KeyCode::Right => search_input_handler::handle_cursor_right(search),
            KeyCode::Home => search_input_handler::handle_home(search),
            KeyCode::End => search_input_handler::handle_end(search),
            KeyCode::Enter => {
                self.app_state.search = search;
                self.app_state.focus = FocusPane::Table;
                return Some(false);
            }
            KeyCode::Esc => {
                self.app_state.search = search;
                let effect = handle_action(&mut self.app_state, KeyAction::CancelSearch);
                return Some(self.apply_effect(effect));
            }
            _ => {
                self.app_state.search = search;
                return None;
            }
        };
        self.app_state.search = edited;
        self.app_state.sync_search();
        Some(false)
    }

    /// Handle a single mouse event
    ///
    /// Left clicks hit the regions drawn in the last frame; the scroll wheel
    /// moves the row cursor.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let effect = match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                match detect_click(mouse.column, mouse.row, &self.click_regions) {
                    Some(target) => {
                        self.app_state.notice = None;
                        handle_click(&mut self.app_state, target)
                    }
                    None => Effect::None,
                }
            }
            MouseEventKind::ScrollDown => handle_action(&mut self.app_state, KeyAction::CursorDown),
            MouseEventKind::ScrollUp => handle_action(&mut self.app_state, KeyAction::CursorUp),
            _ => Effect::None,
        };
        self.apply_effect(effect);
    }

    /// Execute an effect requested by the pure handlers.
    ///
    /// Returns true if the app should quit.
    fn apply_effect(&mut self, effect: Effect) -> bool {
        match effect {
            Effect::None => false,
            Effect::Quit => true,
            Effect::Compose => {
                self.compose_and_deliver();
                false
            }
            Effect::Reload => {
                self.reload();
                false
            }
        }
    }

    fn compose_and_deliver(&mut self) {
        let batch = match self.app_state.view.compose(&self.composer) {
            Ok(batch) => batch,
            Err(ComposeError::EmptySelection) => {
                self.app_state.set_notice(
                    NoticeLevel::Warning,
                    "Select at least one record before composing",
                );
                return;
            }
            Err(err) => {
                error!(error = %err, "Compose failed");
                self.app_state
                    .set_notice(NoticeLevel::Error, format!("Compose failed: {}", err));
                return;
            }
        };

        match self.sink.deliver(&batch) {
            Ok(receipt) => {
                info!(
                    delivered = receipt.delivered,
                    destination = %receipt.destination,
                    "Delivered outbound batch"
                );
                self.app_state.set_notice(
                    NoticeLevel::Info,
                    format!(
                        "Queued {} messages to {}",
                        receipt.delivered, receipt.destination
                    ),
                );
            }
            Err(err) => {
                error!(error = %err, "Delivery failed");
                self.app_state
                    .set_notice(NoticeLevel::Error, format!("Delivery failed: {}", err));
            }
        }
    }

    fn reload(&mut self) {
        match self.source.load() {
            Ok(roster) => {
                let records = roster.len();
                self.app_state.view.replace_roster(roster);
                self.app_state.clamp_cursor();
                info!(source = %self.source, records, "Roster reloaded");
                self.app_state
                    .set_notice(NoticeLevel::Info, format!("Reloaded {} records", records));
            }
            Err(err) => {
                warn!(source = %self.source, error = %err, "Reload failed");
                self.app_state.set_notice(
                    NoticeLevel::Error,
                    format!("Reload failed: {}; keeping previous roster", err),
                );
            }
        }
    }

    /// Render the current frame and remember its click regions.
    pub fn draw(&mut self) -> Result<(), TuiError> {
        let source_label = self.source.to_string();
        let app_state = &self.app_state;
        let palette = &self.palette;
        let mut regions = Vec::new();
        self.terminal.draw(|frame| {
            regions = render_layout(frame, app_state, &source_label, palette);
        })?;
        self.click_regions = regions;
        Ok(())
    }

    /// Run the main event loop
    ///
    /// Returns when the operator quits (q or Ctrl+C). Redraws only after
    /// input or a resize.
    pub fn run(&mut self) -> Result<(), TuiError> {
        const POLL_INTERVAL: Duration = Duration::from_millis(250);

        self.draw()?;

        loop {
            if !event::poll(POLL_INTERVAL)? {
                continue;
            }
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if self.handle_key(key) {
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) => self.handle_mouse(mouse),
                Event::Resize(width, height) => {
                    debug!("Handling resize to {}x{}", width, height);
                }
                _ => continue,
            }
            self.draw()?;
        }
    }
}

/// Settings the shell needs to start.
///
/// Built by `main` from the resolved configuration and CLI flags.
#[derive(Debug, Clone)]
pub struct TuiConfig {
    /// Where the roster comes from.
    pub source: RosterSource,
    /// Rows per page.
    pub page_size: PageSize,
    /// Search text applied before the first frame.
    pub initial_search: Option<String>,
    /// Subject and body templates.
    pub templates: MessageTemplates,
    /// JSONL outbox receiving composed batches.
    pub outbox_path: PathBuf,
    /// Color output setting.
    pub color: ColorConfig,
}

/// Build the initial state: load the roster and apply the initial search.
///
/// # Errors
///
/// Fails if the roster cannot be loaded.
pub fn initial_state(config: &TuiConfig) -> Result<AppState, TuiError> {
    let roster = config.source.load()?;
    info!(source = %config.source, records = roster.len(), "Roster loaded");

    let mut app_state = AppState::new(ViewState::new(roster, config.page_size));
    if let Some(query) = config.initial_search.as_deref() {
        app_state.search = SearchInput::new(query);
        app_state.sync_search();
    }
    Ok(app_state)
}

/// Initialize and run the TUI application
///
/// Loads the roster and compiles the templates before touching the
/// terminal, so start-up errors print normally. The terminal is restored
/// even when the event loop fails.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_with_config(config: TuiConfig) -> Result<(), TuiError> {
    let app_state = initial_state(&config)?;
    let composer = Composer::new(&config.templates)?;
    let sink = Box::new(OutboxFile::new(config.outbox_path.clone()));
    let palette = Palette::new(config.color);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let mut app: TuiApp<CrosstermBackend<Stdout>> =
        TuiApp::with_backend(terminal, app_state, config.source, composer, sink, palette);
    let result = app.run();

    restore_terminal()?;
    result
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture, and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
