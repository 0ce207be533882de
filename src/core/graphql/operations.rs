//! GraphQL operation documents and their variable/response shapes.

use serde::{Deserialize, Serialize};

use crate::core::campaign::{ArchivedCampaign, CampaignSummary, CampaignsFilter, SortBy};

/// Request envelope posted to the endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation<V> {
    pub query: &'static str,
    pub variables: V,
    pub operation_name: &'static str,
}

/// Response envelope.
#[derive(Debug, Deserialize)]
pub struct Response<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<ResponseError>,
}

#[derive(Debug, Deserialize)]
pub struct ResponseError {
    pub message: String,
}

// ── archiveCampaigns ────────────────────────────────────────────────────────

pub const ARCHIVE_CAMPAIGNS: &str = r#"
  mutation archiveCampaigns($ids: [String!]) {
    archiveCampaigns(ids: $ids) {
      id
    }
  }
"#;

#[derive(Debug, Clone, Serialize)]
pub struct ArchiveCampaignsVars {
    pub ids: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveCampaignsData {
    /// Servers may acknowledge with `null` instead of a list.
    pub archive_campaigns: Option<Vec<ArchivedCampaign>>,
}

pub fn archive_campaigns(ids: Vec<String>) -> Operation<ArchiveCampaignsVars> {
    Operation {
        query: ARCHIVE_CAMPAIGNS,
        variables: ArchiveCampaignsVars { ids },
        operation_name: "archiveCampaigns",
    }
}

// ── adminGetCampaigns ───────────────────────────────────────────────────────

pub const ADMIN_GET_CAMPAIGNS: &str = r#"
  query adminGetCampaigns(
    $organizationId: String!
    $campaignsFilter: CampaignsFilter
    $sortBy: SortCampaignsBy
  ) {
    organization(id: $organizationId) {
      campaigns(campaignsFilter: $campaignsFilter, sortBy: $sortBy) {
        campaigns {
          id
          title
          description
          isStarted
          isArchived
          dueBy
        }
      }
    }
  }
"#;

/// Inputs of the child list's campaign query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignQuery {
    pub organization_id: String,
    pub campaigns_filter: CampaignsFilter,
    pub sort_by: SortBy,
}

#[derive(Debug, Deserialize)]
pub struct AdminGetCampaignsData {
    pub organization: Option<OrganizationCampaigns>,
}

#[derive(Debug, Deserialize)]
pub struct OrganizationCampaigns {
    pub campaigns: CampaignsPage,
}

#[derive(Debug, Deserialize)]
pub struct CampaignsPage {
    #[serde(default)]
    pub campaigns: Vec<CampaignSummary>,
}

pub fn admin_get_campaigns(query: CampaignQuery) -> Operation<CampaignQuery> {
    Operation {
        query: ADMIN_GET_CAMPAIGNS,
        variables: query,
        operation_name: "adminGetCampaigns",
    }
}
