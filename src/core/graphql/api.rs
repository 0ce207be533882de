use async_trait::async_trait;

use crate::core::campaign::{ArchivedCampaign, CampaignSummary};

use super::error::ApiResult;
use super::operations::CampaignQuery;

/// Remote operations the campaign screens depend on.
///
/// [`GraphQLClient`](super::GraphQLClient) is the production implementation;
/// views only ever see `Arc<dyn CampaignApi>`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CampaignApi: Send + Sync {
    /// Archive the given campaigns. Resolves once the server acknowledges.
    async fn archive_campaigns(&self, ids: Vec<String>) -> ApiResult<Vec<ArchivedCampaign>>;

    /// Fetch the campaigns matching a filter, in the requested order.
    async fn list_campaigns(&self, query: CampaignQuery) -> ApiResult<Vec<CampaignSummary>>;
}
