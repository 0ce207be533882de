//! Hand-written fakes for the collaborator traits.
//!
//! `mockall`'s generated mocks cover call expectations; these fakes cover the
//! cases mocks make awkward: holding an archive request open until a test
//! releases it, and recording every route pushed.

#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use tokio::sync::Semaphore;

use crate::core::campaign::{ArchivedCampaign, CampaignSummary};
use crate::core::graphql::{ApiError, ApiResult, CampaignApi, CampaignQuery};
use crate::tui::router::Router;

// ============================================================================
// Campaign API Fake
// ============================================================================

/// `CampaignApi` whose archive mutation blocks until [`GatedApi::release`].
pub struct GatedApi {
    rows: Vec<CampaignSummary>,
    /// Error messages returned by the mutation; empty means success.
    archive_errors: Vec<String>,
    gate: Semaphore,
    archive_calls: Mutex<Vec<Vec<String>>>,
    list_calls: Mutex<Vec<CampaignQuery>>,
}

impl GatedApi {
    pub fn new(rows: Vec<CampaignSummary>) -> Self {
        Self {
            rows,
            archive_errors: Vec::new(),
            gate: Semaphore::new(0),
            archive_calls: Mutex::new(Vec::new()),
            list_calls: Mutex::new(Vec::new()),
        }
    }

    /// Make the archive mutation fail with a GraphQL error.
    pub fn failing(mut self, message: &str) -> Self {
        self.archive_errors = vec![message.to_string()];
        self
    }

    /// Let one pending archive request complete.
    pub fn release(&self) {
        self.gate.add_permits(1);
    }

    pub fn archive_calls(&self) -> Vec<Vec<String>> {
        self.archive_calls.lock().unwrap().clone()
    }

    pub fn list_calls(&self) -> Vec<CampaignQuery> {
        self.list_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CampaignApi for GatedApi {
    async fn archive_campaigns(&self, ids: Vec<String>) -> ApiResult<Vec<ArchivedCampaign>> {
        self.archive_calls.lock().unwrap().push(ids.clone());

        let permit = self
            .gate
            .acquire()
            .await
            .map_err(|_| ApiError::MissingData("archiveCampaigns"))?;
        permit.forget();

        if self.archive_errors.is_empty() {
            Ok(ids.into_iter().map(|id| ArchivedCampaign { id }).collect())
        } else {
            Err(ApiError::GraphQL(self.archive_errors.clone()))
        }
    }

    async fn list_campaigns(&self, query: CampaignQuery) -> ApiResult<Vec<CampaignSummary>> {
        self.list_calls.lock().unwrap().push(query);
        Ok(self.rows.clone())
    }
}

// ============================================================================
// Router Fake
// ============================================================================

#[derive(Default)]
pub struct RecordingRouter {
    pushed: Mutex<Vec<String>>,
}

impl RecordingRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pushed(&self) -> Vec<String> {
        self.pushed.lock().unwrap().clone()
    }
}

impl Router for RecordingRouter {
    fn push(&self, path: &str) {
        self.pushed.lock().unwrap().push(path.to_string());
    }
}
