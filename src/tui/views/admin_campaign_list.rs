//! Admin campaign list: filter panel, campaign rows and the action button.
//!
//! Owns the list's UI state ([`CampaignListState`]) and routes every change
//! through its reducer. Scheduled events (the delayed bulk-mode toggle) and
//! archive results arrive on the view's own channel and are applied on
//! `poll()`. While an archive is in flight the rows view is unmounted and a
//! loading indicator takes its place; it is mounted again, and so refetched,
//! once the mutation settles.

use std::time::Duration;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use tokio::sync::mpsc;

use crate::core::campaign::{
    CampaignListState, CampaignStatus, CheckedPayload, ListEvent, ListViewParams, SortBy,
};
use crate::tui::events::NotificationLevel;
use crate::tui::layout::ListLayout;
use crate::tui::scheduler::ViewScheduler;
use crate::tui::services::{notify, Services};
use crate::tui::theme;
use crate::tui::widgets::action_button::ActionButton;
use crate::tui::widgets::filter_panel::FilterPanel;
use crate::tui::widgets::overflow_menu::OverflowMenu;
use crate::tui::widgets::search_input::{SearchInput, SearchOutcome};

use super::campaign_rows::{CampaignRowsView, RowsResult};

/// Delay between activating the overflow item and the bulk-mode flip.
pub const BULK_TOGGLE_DELAY: Duration = Duration::from_millis(250);

pub struct AdminCampaignListView {
    params: ListViewParams,
    state: CampaignListState,
    /// Child list; `None` while unmounted during an archive.
    rows: Option<CampaignRowsView>,
    menu: OverflowMenu,
    search: SearchInput,
    scheduler: ViewScheduler<ListEvent>,
    events_rx: mpsc::UnboundedReceiver<ListEvent>,
    events_tx: mpsc::UnboundedSender<ListEvent>,
}

impl AdminCampaignListView {
    pub fn new(params: ListViewParams) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let state = CampaignListState::new();
        let rows = CampaignRowsView::new(state.child_props(&params));
        Self {
            params,
            state,
            rows: Some(rows),
            menu: OverflowMenu::new(),
            search: SearchInput::new(),
            scheduler: ViewScheduler::new(events_tx.clone()),
            events_rx,
            events_tx,
        }
    }

    /// Start the child list's first load.
    pub fn mount(&mut self, services: &Services) {
        if let Some(rows) = self.rows.as_mut() {
            rows.load(services);
        }
    }

    /// Cancel anything scheduled but not yet delivered. Called when the
    /// screen is left.
    pub fn unmount(&mut self) {
        if self.scheduler.pending() > 0 {
            log::debug!("Cancelling {} pending list event(s)", self.scheduler.pending());
        }
        self.scheduler.cancel_all();
    }

    pub fn state(&self) -> &CampaignListState {
        &self.state
    }

    pub fn params(&self) -> &ListViewParams {
        &self.params
    }

    /// The mounted child list, if any.
    pub fn child_list(&self) -> Option<&CampaignRowsView> {
        self.rows.as_ref()
    }

    /// The action button, or `None` when the operator lacks admin perms.
    pub fn action_button(&self) -> Option<ActionButton> {
        self.params
            .admin_perms
            .then(|| ActionButton::for_state(&self.state))
    }

    pub fn shows_overflow_menu(&self) -> bool {
        self.params.admin_perms
    }

    pub fn overflow_menu_open(&self) -> bool {
        self.menu.is_open()
    }

    /// Number of scheduled toggles not yet delivered.
    pub fn pending_toggles(&self) -> usize {
        self.scheduler.pending()
    }

    /// True while the search box or overflow menu is taking every key.
    pub fn is_capturing_input(&self) -> bool {
        self.search.is_focused() || self.menu.is_open()
    }

    // ── Operations ───────────────────────────────────────────────────────

    /// Navigate to the new-campaign screen.
    pub fn new_campaign(&self, services: &Services) {
        if !self.params.admin_perms || self.state.bulk_mode {
            log::debug!(
                "New campaign unavailable (admin: {}, bulk: {})",
                self.params.admin_perms,
                self.state.bulk_mode
            );
            return;
        }
        services.router.push(&self.params.new_campaign_path());
    }

    /// Archive every ticked campaign. No-op on an empty selection or while an
    /// archive is already in flight.
    pub fn archive_selected(&mut self, services: &Services) {
        let ids = self.state.archive_ids();
        if ids.is_empty() || self.state.loading {
            return;
        }

        self.dispatch(ListEvent::BeginArchive, services);

        let count = ids.len();
        let api = services.api.clone();
        let tx = self.events_tx.clone();
        let app_tx = services.event_tx.clone();
        log::info!("Archiving {count} campaign(s)");

        tokio::spawn(async move {
            let event = match api.archive_campaigns(ids).await {
                Ok(_) => {
                    notify(
                        &app_tx,
                        format!("Archived {count} campaign(s)"),
                        NotificationLevel::Success,
                    );
                    ListEvent::ArchiveOk
                }
                Err(e) => {
                    log::warn!("Archive mutation failed: {e}");
                    notify(
                        &app_tx,
                        format!("Archive failed: {}", e.summary()),
                        NotificationLevel::Error,
                    );
                    ListEvent::ArchiveErr(e.to_string())
                }
            };
            let _ = tx.send(event);
        });
    }

    /// Press the floating action button in whichever mode it is in.
    pub fn tap_action_button(&mut self, services: &Services) {
        match self.action_button() {
            None => {}
            Some(button) if button.disabled() => {}
            Some(ActionButton::NewCampaign) => self.new_campaign(services),
            Some(ActionButton::ArchiveSelected { .. }) => self.archive_selected(services),
        }
    }

    pub fn change_status(&mut self, status: CampaignStatus, services: &Services) {
        self.dispatch(ListEvent::SetStatus(status), services);
    }

    pub fn change_sort(&mut self, sort_by: SortBy, services: &Services) {
        self.dispatch(ListEvent::SetSort(sort_by), services);
    }

    pub fn submit_search(&mut self, search: String, services: &Services) {
        self.dispatch(ListEvent::SetSearch(search), services);
    }

    pub fn cancel_search(&mut self, services: &Services) {
        self.dispatch(ListEvent::CancelSearch, services);
    }

    /// Selection toggle reported by the child list.
    pub fn handle_checked(&mut self, payload: CheckedPayload) {
        self.state.reduce(ListEvent::ToggleChecked(payload));
    }

    pub fn open_overflow_menu(&mut self) {
        if self.params.admin_perms {
            self.menu.open();
        }
    }

    /// Activate the overflow menu's item: flip bulk mode after the delay.
    pub fn activate_overflow_item(&mut self) {
        if !self.params.admin_perms {
            return;
        }
        self.menu.close();
        self.scheduler.schedule(BULK_TOGGLE_DELAY, ListEvent::ToggleBulk);
    }

    /// Apply scheduled and async events, then poll the child list.
    pub fn poll(&mut self, services: &Services) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.dispatch(event, services);
        }
        if let Some(rows) = self.rows.as_mut() {
            rows.poll();
        }
    }

    fn dispatch(&mut self, event: ListEvent, services: &Services) {
        self.state.reduce(event);
        self.sync_child(services);
    }

    /// Mount, unmount or re-prop the child list to match the state.
    fn sync_child(&mut self, services: &Services) {
        if self.state.loading {
            self.rows = None;
            return;
        }

        let props = self.state.child_props(&self.params);
        match self.rows.as_mut() {
            Some(rows) => {
                rows.set_props(props, services);
                rows.sync_checked(&self.state.selection);
            }
            None => {
                let mut rows = CampaignRowsView::new(props);
                rows.sync_checked(&self.state.selection);
                rows.load(services);
                self.rows = Some(rows);
            }
        }
    }

    // ── Input ────────────────────────────────────────────────────────────

    pub fn handle_input(&mut self, event: &Event, services: &Services) -> bool {
        let Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) = event
        else {
            return false;
        };

        if self.menu.is_open() {
            match code {
                KeyCode::Enter => self.activate_overflow_item(),
                KeyCode::Esc | KeyCode::Char('m') => self.menu.close(),
                _ => {}
            }
            return true;
        }

        if self.search.is_focused() {
            if modifiers.contains(KeyModifiers::CONTROL) {
                return true;
            }
            match self.search.handle_key(*code) {
                SearchOutcome::Submitted(text) => self.submit_search(text, services),
                SearchOutcome::Cancelled => self.cancel_search(services),
                SearchOutcome::Edited | SearchOutcome::Ignored => {}
            }
            return true;
        }

        let filters_visible = !self.state.bulk_mode;

        match (*modifiers, *code) {
            (_, KeyCode::Char('+')) => {
                self.tap_action_button(services);
                true
            }
            (KeyModifiers::NONE, KeyCode::Char('m')) if self.params.admin_perms => {
                self.open_overflow_menu();
                true
            }
            (KeyModifiers::NONE, KeyCode::Char('s')) if filters_visible => {
                self.change_status(self.state.filter.status.next(), services);
                true
            }
            (KeyModifiers::SHIFT, KeyCode::Char('S')) if filters_visible => {
                self.change_status(self.state.filter.status.prev(), services);
                true
            }
            (KeyModifiers::NONE, KeyCode::Char('o')) if filters_visible => {
                self.change_sort(self.state.sort_by.next(), services);
                true
            }
            (KeyModifiers::SHIFT, KeyCode::Char('O')) if filters_visible => {
                self.change_sort(self.state.sort_by.prev(), services);
                true
            }
            (KeyModifiers::NONE, KeyCode::Char('/')) if filters_visible => {
                self.search.focus(self.state.filter.search_text());
                true
            }
            _ => match self.rows.as_mut().and_then(|rows| rows.handle_input(event, services)) {
                Some(RowsResult::Checked(payload)) => {
                    self.handle_checked(payload);
                    true
                }
                Some(RowsResult::Consumed) => true,
                None => false,
            },
        }
    }

    /// Key hints for the status bar.
    pub fn key_hints(&self) -> Vec<(&'static str, &'static str)> {
        let mut hints = Vec::new();
        if self.params.admin_perms {
            hints.push(("+", if self.state.bulk_mode { "archive" } else { "new" }));
            hints.push(("m", "menu"));
        }
        if self.state.bulk_mode {
            hints.push(("Space", "tick"));
        } else {
            hints.push(("s", "status"));
            hints.push(("o", "sort"));
            hints.push(("/", "search"));
        }
        hints.push(("j/k", "move"));
        hints.push(("r", "refresh"));
        hints
    }

    // ── Rendering ────────────────────────────────────────────────────────

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let layout = ListLayout::compute(area, self.state.bulk_mode, self.params.admin_perms);

        FilterPanel {
            state: &self.state,
            admin_perms: self.params.admin_perms,
            menu: &self.menu,
            search: &self.search,
        }
        .render(frame, layout.filters);

        match self.rows {
            Some(ref rows) if !self.state.loading => rows.render(frame, layout.body),
            _ => render_loading(frame, layout.body),
        }

        if let (Some(bar), Some(button)) = (layout.action_bar, self.action_button()) {
            button.render(frame, bar);
        }

        self.menu.render_popup(frame, layout.filters, self.state.bulk_mode);
    }
}

fn render_loading(frame: &mut Frame, area: Rect) {
    let block = theme::block_default("List");
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(
        Paragraph::new(vec![
            Line::raw(""),
            Line::from(vec![
                Span::raw("  "),
                Span::styled("Archiving campaigns...", theme::muted()),
            ]),
        ]),
        inner,
    );
}
