//! Campaign List Flow Tests
//!
//! Drives `AdminCampaignListView` the way the event loop does: key events,
//! `poll()` on tick, a paused clock for the delayed bulk toggle. Covers:
//! - Navigation to the new-campaign route
//! - Status change dropping the search string
//! - Bulk archive success, empty selection, cancel and failure
//! - Ticks staying visible across a failed archive and a bulk re-entry
//! - Child list unmounted while the archive is in flight

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::KeyCode;

use crate::core::campaign::{CampaignStatus, CheckedPayload, ListViewParams, SortBy};
use crate::tui::events::{AppEvent, NotificationLevel};
use crate::tui::views::admin_campaign_list::{AdminCampaignListView, BULK_TOGGLE_DELAY};
use crate::tui::widgets::action_button::ActionButton;

use crate::tests::common::{key, render_view, sample_campaigns, services_with, settle, shift};
use crate::tests::mocks::{GatedApi, RecordingRouter};

// =============================================================================
// Helpers
// =============================================================================

struct Harness {
    api: Arc<GatedApi>,
    router: Arc<RecordingRouter>,
    services: crate::tui::services::Services,
    app_rx: tokio::sync::mpsc::UnboundedReceiver<AppEvent>,
    view: AdminCampaignListView,
}

impl Harness {
    /// Mounted view over `api`, with the first page of rows loaded.
    async fn mounted(api: GatedApi, admin_perms: bool) -> Self {
        let api = Arc::new(api);
        let router = Arc::new(RecordingRouter::new());
        let (services, app_rx) = services_with(api.clone(), router.clone());
        let mut view = AdminCampaignListView::new(ListViewParams::new("org7", admin_perms));
        view.mount(&services);
        settle().await;
        view.poll(&services);
        Self {
            api,
            router,
            services,
            app_rx,
            view,
        }
    }

    fn press(&mut self, code: KeyCode) {
        self.view.handle_input(&key(code), &self.services);
    }

    /// Open the overflow menu, activate its item and wait out the delay.
    async fn toggle_bulk(&mut self) {
        self.press(KeyCode::Char('m'));
        assert!(self.view.overflow_menu_open());
        self.press(KeyCode::Enter);
        assert!(!self.view.overflow_menu_open());

        tokio::time::sleep(BULK_TOGGLE_DELAY + Duration::from_millis(10)).await;
        self.view.poll(&self.services);
    }

    fn notifications(&mut self) -> Vec<(String, NotificationLevel)> {
        let mut out = Vec::new();
        while let Ok(event) = self.app_rx.try_recv() {
            if let AppEvent::Notification(n) = event {
                out.push((n.message, n.level));
            }
        }
        out
    }
}

// =============================================================================
// Navigation
// =============================================================================

#[tokio::test(start_paused = true)]
async fn test_plus_pushes_new_campaign_route() {
    let mut h = Harness::mounted(GatedApi::new(sample_campaigns()), true).await;
    let before = h.view.state().clone();

    h.press(KeyCode::Char('+'));

    assert_eq!(h.router.pushed(), vec!["/admin/org7/campaigns/new"]);
    assert_eq!(h.view.state(), &before);
}

// =============================================================================
// Filtering
// =============================================================================

#[tokio::test(start_paused = true)]
async fn test_status_change_drops_search_and_reloads() {
    let mut h = Harness::mounted(GatedApi::new(sample_campaigns()), true).await;

    h.press(KeyCode::Char('/'));
    for c in "foo".chars() {
        h.press(KeyCode::Char(c));
    }
    h.press(KeyCode::Enter);
    h.press(KeyCode::Char('o'));
    assert_eq!(h.view.state().filter.search_text(), "foo");
    assert_eq!(h.view.state().sort_by, SortBy::IdDesc);

    h.press(KeyCode::Char('s'));
    settle().await;

    let state = h.view.state();
    assert_eq!(state.filter.status, CampaignStatus::Archived);
    assert_eq!(state.filter.search_string, None);
    assert_eq!(state.sort_by, SortBy::DEFAULT);

    let last = h.api.list_calls().pop().unwrap();
    assert_eq!(last.campaigns_filter, state.filter);
    assert_eq!(last.sort_by, SortBy::DEFAULT);
    assert_eq!(last.organization_id, "org7");
}

#[tokio::test(start_paused = true)]
async fn test_shift_cycles_backwards() {
    let mut h = Harness::mounted(GatedApi::new(vec![]), false).await;

    h.view.handle_input(&shift('S'), &h.services);
    assert_eq!(h.view.state().filter.status, CampaignStatus::All);

    h.view.handle_input(&shift('O'), &h.services);
    assert_eq!(h.view.state().sort_by, SortBy::Timezone);
}

// =============================================================================
// Bulk Archive
// =============================================================================

#[tokio::test(start_paused = true)]
async fn test_bulk_toggle_waits_for_delay() {
    let mut h = Harness::mounted(GatedApi::new(sample_campaigns()), true).await;

    h.press(KeyCode::Char('m'));
    h.press(KeyCode::Enter);
    assert_eq!(h.view.pending_toggles(), 1);

    tokio::time::sleep(Duration::from_millis(200)).await;
    h.view.poll(&h.services);
    assert!(!h.view.state().bulk_mode);

    tokio::time::sleep(Duration::from_millis(60)).await;
    h.view.poll(&h.services);
    assert!(h.view.state().bulk_mode);
    assert!(h.view.child_list().unwrap().props().select_multiple);
}

#[tokio::test(start_paused = true)]
async fn test_bulk_archive_happy_path() {
    let mut h = Harness::mounted(GatedApi::new(sample_campaigns()), true).await;
    h.toggle_bulk().await;
    assert!(h.view.state().bulk_mode);

    // Tick c1 then c2 from the rows.
    h.press(KeyCode::Char(' '));
    h.press(KeyCode::Char('j'));
    h.press(KeyCode::Char(' '));
    assert_eq!(h.view.state().archive_ids(), vec!["c1", "c2"]);
    assert!(render_view(&h.view, 100, 20).contains("Archive selected (2)"));

    h.press(KeyCode::Char('+'));
    assert!(h.view.state().loading);
    assert!(h.view.child_list().is_none());

    settle().await;
    h.view.poll(&h.services);
    assert_eq!(h.api.archive_calls(), vec![vec!["c1".to_string(), "c2".to_string()]]);
    // Still awaiting the server.
    assert!(h.view.state().loading);
    assert!(h.view.child_list().is_none());
    assert!(render_view(&h.view, 100, 20).contains("Archiving campaigns..."));

    // A second tap while in flight does nothing.
    h.press(KeyCode::Char('+'));
    settle().await;
    assert_eq!(h.api.archive_calls().len(), 1);

    h.api.release();
    settle().await;
    h.view.poll(&h.services);
    settle().await;

    let state = h.view.state();
    assert!(!state.loading);
    assert!(!state.bulk_mode);
    assert!(state.selection.is_empty());

    // Child remounted and refetched.
    assert!(h.view.child_list().is_some());
    assert_eq!(h.api.list_calls().len(), 2);

    let notes = h.notifications();
    assert!(notes
        .iter()
        .any(|(m, l)| m == "Archived 2 campaign(s)" && *l == NotificationLevel::Success));
}

#[tokio::test(start_paused = true)]
async fn test_bulk_archive_empty_selection_is_noop() {
    let mut h = Harness::mounted(GatedApi::new(sample_campaigns()), true).await;
    h.toggle_bulk().await;

    let button = h.view.action_button().unwrap();
    assert_eq!(button, ActionButton::ArchiveSelected { count: 0 });
    assert!(button.disabled());

    h.press(KeyCode::Char('+'));
    settle().await;

    assert!(h.api.archive_calls().is_empty());
    assert!(!h.view.state().loading);
    assert!(h.view.child_list().is_some());
}

#[tokio::test(start_paused = true)]
async fn test_cancel_bulk_keeps_selection_out_of_child() {
    let mut h = Harness::mounted(GatedApi::new(sample_campaigns()), true).await;
    h.toggle_bulk().await;
    h.press(KeyCode::Char(' '));
    assert!(h.view.child_list().unwrap().is_checked("c1"));

    // Same menu item, now labelled "Cancel".
    h.press(KeyCode::Char('m'));
    assert!(render_view(&h.view, 100, 20).contains("Cancel"));
    h.press(KeyCode::Enter);
    tokio::time::sleep(BULK_TOGGLE_DELAY + Duration::from_millis(10)).await;
    h.view.poll(&h.services);

    let state = h.view.state();
    assert!(!state.bulk_mode);
    assert_eq!(state.archive_ids(), vec!["c1"]);

    let child = h.view.child_list().unwrap();
    assert!(!child.props().select_multiple);
    assert!(!child.is_checked("c1"));
    assert!(!render_view(&h.view, 100, 20).contains("[x]"));
}

#[tokio::test(start_paused = true)]
async fn test_archive_failure_keeps_bulk_state() {
    let mut h = Harness::mounted(GatedApi::new(sample_campaigns()).failing("boom"), true).await;
    h.toggle_bulk().await;
    h.view.handle_checked(CheckedPayload::new("c1", false));
    h.view.handle_checked(CheckedPayload::new("c3", false));

    h.press(KeyCode::Char('+'));
    assert!(h.view.state().loading);

    h.api.release();
    settle().await;
    h.view.poll(&h.services);

    let state = h.view.state();
    assert!(!state.loading);
    assert!(state.bulk_mode);
    assert_eq!(state.archive_ids(), vec!["c1", "c3"]);
    assert!(h.view.child_list().is_some());

    let notes = h.notifications();
    assert!(notes
        .iter()
        .any(|(m, l)| m == "Archive failed: boom" && *l == NotificationLevel::Error));
}

#[tokio::test(start_paused = true)]
async fn test_archive_failure_keeps_ticks_visible_for_retry() {
    let mut h = Harness::mounted(GatedApi::new(sample_campaigns()).failing("boom"), true).await;
    h.toggle_bulk().await;
    h.press(KeyCode::Char(' '));

    h.press(KeyCode::Char('+'));
    h.api.release();
    settle().await;
    h.view.poll(&h.services);
    // Let the remounted rows load.
    settle().await;
    h.view.poll(&h.services);

    assert_eq!(h.view.state().archive_ids(), vec!["c1"]);
    assert!(h.view.child_list().unwrap().is_checked("c1"));
    let text = render_view(&h.view, 100, 20);
    assert!(text.contains("[x] Spring GOTV"));
    assert!(text.contains("[ ] Fall Persuasion"));
    assert!(text.contains("Archive selected (1)"));

    // Space on the same row now unticks it.
    h.press(KeyCode::Char(' '));
    assert!(h.view.state().selection.is_empty());
    assert!(!h.view.child_list().unwrap().is_checked("c1"));
}

#[tokio::test(start_paused = true)]
async fn test_reentering_bulk_shows_kept_selection() {
    let mut h = Harness::mounted(GatedApi::new(sample_campaigns()), true).await;
    h.toggle_bulk().await;
    h.press(KeyCode::Char(' '));
    h.toggle_bulk().await;
    assert!(!h.view.child_list().unwrap().is_checked("c1"));

    h.toggle_bulk().await;
    assert!(h.view.state().bulk_mode);
    assert!(h.view.child_list().unwrap().is_checked("c1"));
    assert!(render_view(&h.view, 100, 20).contains("[x] Spring GOTV"));

    h.press(KeyCode::Char('+'));
    settle().await;
    assert_eq!(h.api.archive_calls(), vec![vec!["c1".to_string()]]);
}

// =============================================================================
// Permissions
// =============================================================================

#[tokio::test(start_paused = true)]
async fn test_non_admin_has_no_bulk_or_create() {
    let mut h = Harness::mounted(GatedApi::new(sample_campaigns()), false).await;

    h.press(KeyCode::Char('m'));
    h.press(KeyCode::Enter);
    h.press(KeyCode::Char('+'));
    tokio::time::sleep(BULK_TOGGLE_DELAY * 2).await;
    h.view.poll(&h.services);

    assert!(!h.view.state().bulk_mode);
    assert!(h.router.pushed().is_empty());

    let text = render_view(&h.view, 100, 20);
    assert!(!text.contains('⋮'));
    assert!(!text.contains("New campaign"));
    assert!(text.contains("Spring GOTV"));
}
