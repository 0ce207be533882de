//! Color theme for the campaign admin console.
//!
//! All color constants are RGB truecolor. Views and widgets import from here
//! instead of using inline `Color::*` literals.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

// ── Palette ─────────────────────────────────────────────────────────────────

/// Indigo: primary accent, focused borders, selects.
pub const PRIMARY: Color = Color::Rgb(0x3F, 0x51, 0xB5);
/// Light indigo: hints and secondary focus.
pub const PRIMARY_LIGHT: Color = Color::Rgb(0x79, 0x86, 0xCB);
/// Pink: floating action button.
pub const ACCENT: Color = Color::Rgb(0xFF, 0x40, 0x81);

/// Charcoal: base background.
pub const BG_BASE: Color = Color::Rgb(0x12, 0x12, 0x12);

pub const TEXT: Color = Color::Rgb(0xE0, 0xE0, 0xE0);
pub const TEXT_MUTED: Color = Color::Rgb(0x80, 0x80, 0x80);
/// Disabled controls and faint hints.
pub const TEXT_DIM: Color = Color::Rgb(0x50, 0x50, 0x50);

pub const ERROR: Color = Color::Rgb(0xEF, 0x53, 0x50);
pub const SUCCESS: Color = Color::Rgb(0x66, 0xBB, 0x6A);
pub const WARNING: Color = Color::Rgb(0xFF, 0xA7, 0x26);
pub const INFO: Color = Color::Rgb(0x42, 0xA5, 0xF5);

// ── Style helpers ───────────────────────────────────────────────────────────

/// Section header style.
pub fn heading() -> Style {
    Style::default().fg(PRIMARY_LIGHT).add_modifier(Modifier::BOLD)
}

/// Highlighted/selected item.
pub fn highlight() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn muted() -> Style {
    Style::default().fg(TEXT_MUTED)
}

pub fn dim() -> Style {
    Style::default().fg(TEXT_DIM)
}

/// Key hint style (e.g., "[q]:quit").
pub fn key_hint() -> Style {
    Style::default().fg(TEXT_DIM)
}

/// Current value inside a select widget.
pub fn select_value() -> Style {
    Style::default().fg(TEXT).bg(PRIMARY).add_modifier(Modifier::BOLD)
}

/// Enabled floating action button.
pub fn fab() -> Style {
    Style::default()
        .fg(BG_BASE)
        .bg(ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// Disabled floating action button.
pub fn fab_disabled() -> Style {
    Style::default().fg(TEXT_MUTED).bg(TEXT_DIM)
}

/// Status bar brand badge.
pub fn brand_badge() -> Style {
    Style::default()
        .fg(BG_BASE)
        .bg(PRIMARY_LIGHT)
        .add_modifier(Modifier::BOLD)
}

// ── Block builders ──────────────────────────────────────────────────────────

/// Raised surface used by the filter panel.
pub fn block_raised(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_type(BorderType::Thick)
        .border_style(Style::default().fg(PRIMARY))
}

/// A bordered block with default styling.
pub fn block_default(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(TEXT_DIM))
}
