//! Layout computation for the campaign list screen and the app shell.

use ratatui::layout::{Constraint, Layout, Rect};

/// Filter panel height with the status, sort and search rows visible.
pub const FILTER_PANEL_HEIGHT: u16 = 5;
/// Filter panel height in bulk mode (overflow menu only).
pub const FILTER_PANEL_COLLAPSED_HEIGHT: u16 = 3;
/// Height of the row holding the floating action button.
pub const ACTION_BAR_HEIGHT: u16 = 1;

/// Root split: main content + status bar.
pub struct AppLayout {
    pub main: Rect,
    pub status: Rect,
}

impl AppLayout {
    pub fn compute(area: Rect) -> Self {
        let rows = Layout::vertical([
            Constraint::Min(1),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

        AppLayout {
            main: rows[0],
            status: rows[1],
        }
    }
}

/// Regions of the campaign list screen.
pub struct ListLayout {
    pub filters: Rect,
    pub body: Rect,
    /// Row holding the action button (None when the operator lacks admin perms).
    pub action_bar: Option<Rect>,
}

impl ListLayout {
    pub fn compute(area: Rect, bulk_mode: bool, show_action_bar: bool) -> Self {
        let filter_height = if bulk_mode {
            FILTER_PANEL_COLLAPSED_HEIGHT
        } else {
            FILTER_PANEL_HEIGHT
        };
        let action_height = if show_action_bar { ACTION_BAR_HEIGHT } else { 0 };

        let rows = Layout::vertical([
            Constraint::Length(filter_height),
            Constraint::Min(1),
            Constraint::Length(action_height),
        ])
        .split(area);

        ListLayout {
            filters: rows[0],
            body: rows[1],
            action_bar: show_action_bar.then_some(rows[2]),
        }
    }
}
