//! Styling for the roster view.

use crate::state::NoticeLevel;
use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var_os("NO_COLOR").is_none();
        Self { enabled }
    }

    /// Explicit setting, ignoring the environment.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== Palette =====

/// Styles used by every roster widget.
///
/// Without colors, emphasis falls back to modifiers (bold, reversed, dim)
/// so the cursor row and the active page stay distinguishable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Application title in the header.
    pub title: Style,
    /// Table column headings.
    pub column_header: Style,
    /// Row under the cursor.
    pub cursor_row: Style,
    /// Selected rows.
    pub selected_row: Style,
    /// Secondary text (counts, hints).
    pub muted: Style,
    /// Key names in hints and help.
    pub key: Style,
    /// Border of the focused pane.
    pub focused_border: Style,
    /// Current page in the pager.
    pub active_page: Style,
    /// Pager controls that cannot be used (first/last page).
    pub disabled: Style,
    /// Informational notice.
    pub info: Style,
    /// Warning notice.
    pub warning: Style,
    /// Error notice.
    pub error: Style,
}

impl Palette {
    /// Build the palette for `config`.
    pub fn new(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                title: Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                column_header: Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                cursor_row: Style::new().bg(Color::DarkGray).add_modifier(Modifier::BOLD),
                selected_row: Style::new().fg(Color::Green),
                muted: Style::new().fg(Color::Gray),
                key: Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                focused_border: Style::new().fg(Color::Cyan),
                active_page: Style::new()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
                disabled: Style::new().fg(Color::DarkGray),
                info: Style::new().fg(Color::Green),
                warning: Style::new().fg(Color::Yellow),
                error: Style::new().fg(Color::Red).add_modifier(Modifier::BOLD),
            }
        } else {
            Self {
                title: Style::new().add_modifier(Modifier::BOLD),
                column_header: Style::new().add_modifier(Modifier::BOLD),
                cursor_row: Style::new().add_modifier(Modifier::REVERSED),
                selected_row: Style::new(),
                muted: Style::new(),
                key: Style::new().add_modifier(Modifier::BOLD),
                focused_border: Style::new().add_modifier(Modifier::BOLD),
                active_page: Style::new().add_modifier(Modifier::REVERSED),
                disabled: Style::new().add_modifier(Modifier::DIM),
                info: Style::new(),
                warning: Style::new().add_modifier(Modifier::BOLD),
                error: Style::new().add_modifier(Modifier::BOLD),
            }
        }
    }

    /// Style for a status-bar notice.
    pub fn notice(&self, level: NoticeLevel) -> Style {
        match level {
            NoticeLevel::Info => self.info,
            NoticeLevel::Warning => self.warning,
            NoticeLevel::Error => self.error,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(ColorConfig::new(true))
    }
}
