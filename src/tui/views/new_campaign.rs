//! New-campaign screen. Only the route target for now; Esc goes back.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::events::Action;
use crate::tui::theme;

pub struct NewCampaignView {
    organization_id: String,
}

impl NewCampaignView {
    pub fn new(organization_id: impl Into<String>) -> Self {
        Self {
            organization_id: organization_id.into(),
        }
    }

    pub fn organization_id(&self) -> &str {
        &self.organization_id
    }

    pub fn handle_input(&self, event: &Event) -> Option<Action> {
        let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event
        else {
            return None;
        };
        match code {
            KeyCode::Esc | KeyCode::Backspace => Some(Action::Back),
            _ => None,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(" New Campaign ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::PRIMARY));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let lines = vec![
            Line::raw(""),
            Line::from(Span::styled(
                format!("New campaign for organization {}", self.organization_id),
                Style::default()
                    .fg(theme::ACCENT)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::raw(""),
            Line::from(Span::styled(
                "Campaign creation is handled elsewhere.",
                Style::default().fg(theme::TEXT_MUTED),
            )),
            Line::raw(""),
            Line::from(vec![
                Span::styled("Esc", theme::key_hint()),
                Span::styled(" back to campaigns", Style::default().fg(theme::TEXT_DIM)),
            ]),
        ];

        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
    }
}
