//! Test Fixtures
//!
//! Campaign rows, a `Services` handle built from fakes, and key helpers.

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};
use tokio::sync::mpsc;

use crate::core::campaign::CampaignSummary;
use crate::core::graphql::CampaignApi;
use crate::tui::events::AppEvent;
use crate::tui::router::Router;
use crate::tui::services::Services;
use crate::tui::views::admin_campaign_list::AdminCampaignListView;

// =============================================================================
// Campaign Fixtures
// =============================================================================

pub fn campaign(id: &str, title: &str) -> CampaignSummary {
    CampaignSummary {
        id: id.to_string(),
        title: title.to_string(),
        description: String::new(),
        is_started: true,
        is_archived: false,
        due_by: Some("2026-11-03T00:00:00Z".to_string()),
    }
}

/// Three active campaigns, ids c1..c3.
pub fn sample_campaigns() -> Vec<CampaignSummary> {
    vec![
        campaign("c1", "Spring GOTV"),
        campaign("c2", "Fall Persuasion"),
        campaign("c3", "Volunteer Recruitment"),
    ]
}

// =============================================================================
// Services
// =============================================================================

/// Services over the given fakes, plus the app-side event receiver.
pub fn services_with(
    api: Arc<dyn CampaignApi>,
    router: Arc<dyn Router>,
) -> (Services, mpsc::UnboundedReceiver<AppEvent>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (Services::new(api, router, tx), rx)
}

/// Let spawned tasks run to their next await point.
///
/// Under a paused clock the runtime drains every ready task before it
/// auto-advances time, so a short sleep acts as a barrier.
pub async fn settle() {
    tokio::time::sleep(Duration::from_millis(1)).await;
}

// =============================================================================
// Input / Rendering
// =============================================================================

pub fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

pub fn shift(c: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::SHIFT))
}

/// Render the view into a test buffer and return its text, row by row.
pub fn render_view(view: &AdminCampaignListView, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("test terminal");
    terminal
        .draw(|frame| view.render(frame, frame.area()))
        .expect("draw");
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}
