//! Host orchestrator HTTP client.
//!
//! Implements the host-side ports against the orchestrator's REST API:
//! changes are POSTed to `{base_url}/changes`, build details and the
//! responsible-user list are fetched from `{base_url}/builds/{id}` and
//! `{base_url}/builds/{id}/responsible_users`.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{BuildDetails, Change};
use crate::domain::ports::{BuildSource, ChangeSink};

use super::models::BuildRecord;

/// HTTP client for the host orchestrator's REST API.
#[derive(Debug, Clone)]
pub struct HostClient {
    /// The underlying HTTP client.
    http: Client,
    /// Host API base URL, without a trailing slash.
    base_url: String,
}

impl HostClient {
    /// Create a new client for the given host API.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: Client::new(),
            base_url,
        }
    }
}

#[async_trait]
impl ChangeSink for HostClient {
    async fn add_change(&self, change: &Change) -> DomainResult<()> {
        let url = format!("{}/changes", self.base_url);

        let resp = self
            .http
            .post(&url)
            .json(change)
            .send()
            .await
            .map_err(|e| DomainError::ExecutionFailed(format!("host add_change failed: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(DomainError::ExecutionFailed(format!(
                "host add_change returned {status}: {body}"
            )));
        }

        Ok(())
    }
}

#[async_trait]
impl BuildSource for HostClient {
    async fn details(&self, build_id: u64) -> DomainResult<BuildDetails> {
        let url = format!("{}/builds/{}", self.base_url, build_id);

        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| DomainError::ExecutionFailed(format!("host build lookup failed: {e}")))?;

        if resp.status() == StatusCode::NOT_FOUND {
            return Err(DomainError::BuildNotFound(build_id));
        }
        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(DomainError::ExecutionFailed(format!(
                "host build lookup returned {status}: {body}"
            )));
        }

        let record = resp.json::<BuildRecord>().await.map_err(|e| {
            DomainError::ExecutionFailed(format!("host build lookup parse failed: {e}"))
        })?;

        record.into_details()
    }

    async fn responsible_users(&self, build_id: u64) -> DomainResult<Vec<String>> {
        let url = format!("{}/builds/{}/responsible_users", self.base_url, build_id);

        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| {
                DomainError::ExecutionFailed(format!("host responsible_users failed: {e}"))
            })?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(DomainError::ExecutionFailed(format!(
                "host responsible_users returned {status}: {body}"
            )));
        }

        resp.json::<Vec<String>>().await.map_err(|e| {
            DomainError::ExecutionFailed(format!("host responsible_users parse failed: {e}"))
        })
    }
}
