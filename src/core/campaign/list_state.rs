//! UI state of the admin campaign list and its reducer.
//!
//! Every mutation of the list view's state goes through [`CampaignListState::reduce`]
//! with one of the [`ListEvent`] variants. The view layer owns timers, async tasks
//! and rendering; this module stays free of all three so the bulk-mode state
//! machine can be driven directly in tests.

use super::selection::CampaignSelection;
use super::types::{CampaignStatus, CampaignsFilter, CheckedPayload, SortBy};

/// Closed set of events the list state reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEvent {
    /// Status selector changed. Replaces the whole filter and resets sort.
    SetStatus(CampaignStatus),
    /// Sort-by selector changed.
    SetSort(SortBy),
    /// Search submitted.
    SetSearch(String),
    /// Search cancelled.
    CancelSearch,
    /// Child list checkbox clicked.
    ToggleChecked(CheckedPayload),
    /// Delayed bulk-mode flip from the overflow menu.
    ToggleBulk,
    /// Archive mutation dispatched.
    BeginArchive,
    /// Archive mutation acknowledged.
    ArchiveOk,
    /// Archive mutation failed.
    ArchiveErr(String),
}

/// Props the list view passes in from its host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListViewParams {
    pub organization_id: String,
    pub admin_perms: bool,
}

impl ListViewParams {
    pub fn new(organization_id: impl Into<String>, admin_perms: bool) -> Self {
        Self {
            organization_id: organization_id.into(),
            admin_perms,
        }
    }

    /// Route of the new-campaign screen for this organization.
    pub fn new_campaign_path(&self) -> String {
        format!("/admin/{}/campaigns/new", self.organization_id)
    }
}

/// Outbound props for the child campaign list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildListProps {
    pub campaigns_filter: CampaignsFilter,
    pub sort_by: SortBy,
    pub organization_id: String,
    pub admin_perms: bool,
    pub select_multiple: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampaignListState {
    /// True only while an archive mutation is in flight.
    pub loading: bool,
    pub filter: CampaignsFilter,
    pub sort_by: SortBy,
    pub bulk_mode: bool,
    pub selection: CampaignSelection,
}

impl Default for CampaignListState {
    fn default() -> Self {
        Self {
            loading: false,
            filter: CampaignsFilter::default(),
            sort_by: SortBy::DEFAULT,
            bulk_mode: false,
            selection: CampaignSelection::new(),
        }
    }
}

impl CampaignListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reduce(&mut self, event: ListEvent) {
        match event {
            ListEvent::SetStatus(status) => {
                self.filter = CampaignsFilter::with_status(status);
                self.sort_by = SortBy::DEFAULT;
            }
            ListEvent::SetSort(sort_by) => {
                self.sort_by = sort_by;
            }
            ListEvent::SetSearch(search) => {
                self.filter.search_string = Some(search);
            }
            ListEvent::CancelSearch => {
                self.filter.search_string = Some(String::new());
            }
            ListEvent::ToggleChecked(CheckedPayload {
                campaign_id,
                checked,
            }) => {
                // `checked` is the pre-click state: false means "just ticked".
                if checked {
                    self.selection.remove(&campaign_id);
                } else {
                    self.selection.insert(campaign_id);
                }
            }
            ListEvent::ToggleBulk => {
                self.bulk_mode = !self.bulk_mode;
            }
            ListEvent::BeginArchive => {
                if self.loading {
                    log::debug!("Archive already in flight, ignoring BeginArchive");
                    return;
                }
                self.loading = true;
            }
            ListEvent::ArchiveOk => {
                self.loading = false;
                self.bulk_mode = false;
                self.selection.clear();
            }
            ListEvent::ArchiveErr(_) => {
                self.loading = false;
            }
        }
    }

    /// Ids to archive, in tick order.
    pub fn archive_ids(&self) -> Vec<String> {
        self.selection.ids()
    }

    pub fn action_button_disabled(&self) -> bool {
        self.bulk_mode && self.selection.is_empty()
    }

    pub fn child_props(&self, params: &ListViewParams) -> ChildListProps {
        ChildListProps {
            campaigns_filter: self.filter.clone(),
            sort_by: self.sort_by,
            organization_id: params.organization_id.clone(),
            admin_perms: params.admin_perms,
            select_multiple: self.bulk_mode,
        }
    }
}
