//! Campaign domain types shared by the list view, its child list and the
//! GraphQL layer.

use std::fmt;

use serde::{Deserialize, Serialize};

// ── Status ──────────────────────────────────────────────────────────────────

/// Status tag scoping which campaigns the list shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CampaignStatus {
    #[default]
    Active,
    Archived,
    All,
}

impl CampaignStatus {
    pub const ALL: [CampaignStatus; 3] = [
        CampaignStatus::Active,
        CampaignStatus::Archived,
        CampaignStatus::All,
    ];

    /// Wire tag as sent to the server.
    pub fn as_str(self) -> &'static str {
        match self {
            CampaignStatus::Active => "ACTIVE",
            CampaignStatus::Archived => "ARCHIVED",
            CampaignStatus::All => "ALL",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CampaignStatus::Active => "Active",
            CampaignStatus::Archived => "Archived",
            CampaignStatus::All => "All",
        }
    }

    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|&s| s == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|&s| s == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Sort ────────────────────────────────────────────────────────────────────

/// Sort tag consumed by the child list. Opaque to the list view itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortBy {
    IdAsc,
    IdDesc,
    Title,
    Timezone,
}

impl SortBy {
    /// The sort-by widget's declared default.
    pub const DEFAULT: SortBy = SortBy::IdAsc;

    pub const ALL: [SortBy; 4] = [SortBy::IdAsc, SortBy::IdDesc, SortBy::Title, SortBy::Timezone];

    pub fn as_str(self) -> &'static str {
        match self {
            SortBy::IdAsc => "ID_ASC",
            SortBy::IdDesc => "ID_DESC",
            SortBy::Title => "TITLE",
            SortBy::Timezone => "TIMEZONE",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortBy::IdAsc => "Created, oldest",
            SortBy::IdDesc => "Created, newest",
            SortBy::Title => "Title",
            SortBy::Timezone => "Timezone",
        }
    }

    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|&s| s == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|&s| s == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl Default for SortBy {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Filter ──────────────────────────────────────────────────────────────────

/// Status tag plus free-text search scoping the visible campaigns.
///
/// A status change produces a filter without a search string at all, which is
/// why the search string is optional rather than defaulting to empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignsFilter {
    pub status: CampaignStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_string: Option<String>,
}

impl CampaignsFilter {
    /// A filter holding only a status.
    pub fn with_status(status: CampaignStatus) -> Self {
        Self {
            status,
            search_string: None,
        }
    }

    /// Search text, empty when unset.
    pub fn search_text(&self) -> &str {
        self.search_string.as_deref().unwrap_or("")
    }
}

impl Default for CampaignsFilter {
    fn default() -> Self {
        Self {
            status: CampaignStatus::default(),
            search_string: Some(String::new()),
        }
    }
}

// ── Rows & payloads ─────────────────────────────────────────────────────────

/// One campaign row as returned by the list query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignSummary {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_started: bool,
    #[serde(default)]
    pub is_archived: bool,
    #[serde(default)]
    pub due_by: Option<String>,
}

/// Record returned per campaign by the archive mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchivedCampaign {
    pub id: String,
}

/// Selection-toggle payload emitted by the child list.
///
/// `checked` is the checkbox state *before* the click: `false` means the
/// operator just ticked the row, `true` means they just unticked it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckedPayload {
    pub campaign_id: String,
    pub checked: bool,
}

impl CheckedPayload {
    pub fn new(campaign_id: impl Into<String>, checked: bool) -> Self {
        Self {
            campaign_id: campaign_id.into(),
            checked,
        }
    }
}
