//! GraphQL HTTP Client
//!
//! Posts operation envelopes to a single GraphQL endpoint and unwraps the
//! `{data, errors}` response envelope.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ApiConfig;
use crate::core::campaign::{ArchivedCampaign, CampaignSummary};

use super::api::CampaignApi;
use super::error::{ApiError, ApiResult};
use super::operations::{self, CampaignQuery, Operation, Response};

pub struct GraphQLClient {
    endpoint: String,
    token: Option<String>,
    http_client: reqwest::Client,
}

impl GraphQLClient {
    pub fn new(endpoint: &str, token: Option<&str>) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            token: token.map(|t| t.to_string()),
            http_client: reqwest::Client::new(),
        }
    }

    /// Build a client honouring the configured request timeout.
    pub fn from_config(config: &ApiConfig) -> ApiResult<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            endpoint: config.endpoint.clone(),
            token: config.token.clone(),
            http_client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Execute an operation and return its `data` payload.
    pub async fn execute<V, T>(&self, operation: &Operation<V>) -> ApiResult<T>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        let mut request = self.http_client.post(&self.endpoint).json(operation);

        if let Some(token) = &self.token {
            request = request.header("Authorization", format!("Bearer {}", token));
        }

        tracing::debug!(operation = operation.operation_name, "Sending GraphQL request");
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: Response<T> = serde_json::from_slice(&response.bytes().await?)?;

        if !envelope.errors.is_empty() {
            let messages = envelope.errors.into_iter().map(|e| e.message).collect();
            return Err(ApiError::GraphQL(messages));
        }

        envelope
            .data
            .ok_or(ApiError::MissingData(operation.operation_name))
    }
}

#[async_trait]
impl CampaignApi for GraphQLClient {
    async fn archive_campaigns(&self, ids: Vec<String>) -> ApiResult<Vec<ArchivedCampaign>> {
        let count = ids.len();
        let data: operations::ArchiveCampaignsData =
            self.execute(&operations::archive_campaigns(ids)).await?;
        let archived = data.archive_campaigns.unwrap_or_default();
        tracing::info!(
            requested = count,
            archived = archived.len(),
            "Archive mutation acknowledged"
        );
        Ok(archived)
    }

    async fn list_campaigns(&self, query: CampaignQuery) -> ApiResult<Vec<CampaignSummary>> {
        let data: operations::AdminGetCampaignsData =
            self.execute(&operations::admin_get_campaigns(query)).await?;
        Ok(data
            .organization
            .map(|org| org.campaigns.campaigns)
            .unwrap_or_default())
    }
}
