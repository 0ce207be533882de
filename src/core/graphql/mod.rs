//! GraphQL access to the campaign backend.

pub mod api;
pub mod client;
pub mod error;
pub mod operations;

pub use api::CampaignApi;
pub use client::GraphQLClient;
pub use error::{ApiError, ApiResult};
pub use operations::CampaignQuery;

#[cfg(test)]
pub use api::MockCampaignApi;
