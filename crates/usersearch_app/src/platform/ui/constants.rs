use std::time::Duration;

use ratatui::style::Color;

/// How long the event loop waits for input before ticking.
pub const TICK_INTERVAL: Duration = Duration::from_millis(75);

pub const HEADER_HEIGHT: u16 = 4;
pub const SEARCH_HEIGHT: u16 = 3;
pub const FOOTER_HEIGHT: u16 = 2;
pub const SEARCH_MAX_WIDTH: u16 = 72;
pub const CARD_HEIGHT: u16 = 6;

/// Minimum content widths for 2, 3 and 4 grid columns.
pub const GRID_BREAKPOINTS: [u16; 3] = [60, 90, 120];

pub const ACCENT: Color = Color::Cyan;
pub const MUTED: Color = Color::DarkGray;
pub const ERROR: Color = Color::Red;
pub const BADGE_FG: Color = Color::Black;

pub const SEARCH_PLACEHOLDER: &str = "Search for a GitHub user...";
pub const KEY_HINTS: &str = "Esc quit | Tab/Up/Down select | Enter open profile | Ctrl+U clear";
