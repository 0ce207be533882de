//! Context-sensitive floating action button.

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::core::campaign::CampaignListState;
use crate::tui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionButton {
    /// Normal mode: create a campaign.
    NewCampaign,
    /// Bulk mode: archive the ticked campaigns.
    ArchiveSelected { count: usize },
}

impl ActionButton {
    pub fn for_state(state: &CampaignListState) -> Self {
        if state.bulk_mode {
            ActionButton::ArchiveSelected {
                count: state.selection.len(),
            }
        } else {
            ActionButton::NewCampaign
        }
    }

    pub fn disabled(self) -> bool {
        matches!(self, ActionButton::ArchiveSelected { count: 0 })
    }

    pub fn label(self) -> String {
        match self {
            ActionButton::NewCampaign => " + New campaign ".to_string(),
            ActionButton::ArchiveSelected { count } => format!(" ▣ Archive selected ({count}) "),
        }
    }

    pub fn render(self, frame: &mut Frame, area: Rect) {
        let style = if self.disabled() {
            theme::fab_disabled()
        } else {
            theme::fab()
        };
        let line = Line::from(vec![
            Span::styled("(+) ", theme::key_hint()),
            Span::styled(self.label(), style),
            Span::raw(" "),
        ]);
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Right), area);
    }
}
