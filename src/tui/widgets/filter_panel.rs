//! Raised filter panel: overflow menu trigger, status and sort selects, search.
//!
//! Pure layout over props. All state lives in the list view.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::core::campaign::CampaignListState;
use crate::tui::theme;

use super::overflow_menu::OverflowMenu;
use super::search_input::SearchInput;
use super::select::Select;

pub struct FilterPanel<'a> {
    pub state: &'a CampaignListState,
    pub admin_perms: bool,
    pub menu: &'a OverflowMenu,
    pub search: &'a SearchInput,
}

impl<'a> FilterPanel<'a> {
    pub fn lines(&self) -> Vec<Line<'static>> {
        let mut top: Vec<Span<'static>> = Vec::new();

        if self.admin_perms {
            top.extend(self.menu.trigger_spans());
        }

        if self.state.bulk_mode {
            return vec![Line::from(top)];
        }

        top.push(Span::raw(" "));
        top.extend(
            Select::new("Status", self.state.filter.status.label(), "s/S").spans(),
        );
        top.push(Span::raw("   "));
        top.extend(Select::new("Sort by", self.state.sort_by.label(), "o/O").spans());

        vec![
            Line::from(top),
            Line::raw(""),
            self.search.line(self.state.filter.search_text()),
        ]
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let block = theme::block_raised("Campaigns");
        frame.render_widget(Paragraph::new(self.lines()).block(block), area);
    }
}
