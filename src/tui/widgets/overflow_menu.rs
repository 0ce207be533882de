//! Single-item overflow menu toggling bulk archive mode.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

use crate::tui::theme;

pub const ARCHIVE_MULTIPLE_LABEL: &str = "Archive multiple campaigns";
pub const CANCEL_LABEL: &str = "Cancel";

#[derive(Debug, Default)]
pub struct OverflowMenu {
    open: bool,
}

impl OverflowMenu {
    pub fn new() -> Self {
        Self::default()
    }

    /// Label of the menu's only item.
    pub fn item_label(bulk_mode: bool) -> &'static str {
        if bulk_mode {
            CANCEL_LABEL
        } else {
            ARCHIVE_MULTIPLE_LABEL
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// The menu trigger shown at the left of the filter panel.
    pub fn trigger_spans(&self) -> Vec<Span<'static>> {
        let glyph_style = if self.open {
            theme::highlight()
        } else {
            theme::heading()
        };
        vec![
            Span::styled(" ⋮ ", glyph_style),
            Span::styled("(m) ", theme::key_hint()),
        ]
    }

    /// Draw the open menu just below `anchor`.
    pub fn render_popup(&self, frame: &mut Frame, anchor: Rect, bulk_mode: bool) {
        if !self.open {
            return;
        }
        let label = Self::item_label(bulk_mode);
        let width = (label.len() as u16 + 6).min(anchor.width);
        let area = Rect::new(anchor.x + 1, anchor.y + 1, width, 3)
            .intersection(frame.area());

        let block = theme::block_default("");
        let item = Paragraph::new(Line::from(vec![
            Span::styled("▸ ", theme::highlight()),
            Span::raw(label),
        ]))
        .block(block);

        frame.render_widget(Clear, area);
        frame.render_widget(item, area);
    }
}
