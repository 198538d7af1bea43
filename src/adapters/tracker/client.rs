//! Tracker HTTP client.
//!
//! Wraps the tracker's REST search API, providing the one operation the
//! poller needs: run a JQL query with changelogs expanded and follow
//! `startAt` / `maxResults` / `total` pagination until the full result
//! set is retrieved.

use reqwest::Client;

use crate::domain::errors::{DomainError, DomainResult};

use super::models::{Issue, SearchPage};

/// Path of the search endpoint, relative to the tracker base URL.
const SEARCH_PATH: &str = "/rest/api/2/search";

/// HTTP client for the tracker's search API.
///
/// Authenticates with basic auth (account + API token). All methods
/// return [`DomainResult`] and map HTTP / network errors to
/// [`DomainError::ExecutionFailed`].
#[derive(Debug, Clone)]
pub struct TrackerClient {
    /// The underlying HTTP client.
    http: Client,
    /// Tracker base URL, without a trailing slash.
    base_url: String,
    /// Account used for basic auth.
    user: String,
    /// API token for that account.
    token: String,
}

impl TrackerClient {
    /// Create a new client for the given tracker.
    pub fn new(
        base_url: impl Into<String>,
        user: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: Client::new(),
            base_url,
            user: user.into(),
            token: token.into(),
        }
    }

    /// Fetch a single page of search results.
    async fn search_page(
        &self,
        jql: &str,
        start_at: u32,
        page_size: u32,
    ) -> DomainResult<SearchPage> {
        let url = format!("{}{}", self.base_url, SEARCH_PATH);
        let start_at = start_at.to_string();
        let page_size = page_size.to_string();

        let resp = self
            .http
            .get(&url)
            .basic_auth(&self.user, Some(&self.token))
            .query(&[
                ("jql", jql),
                ("expand", "changelog"),
                ("startAt", start_at.as_str()),
                ("maxResults", page_size.as_str()),
            ])
            .send()
            .await
            .map_err(|e| {
                DomainError::ExecutionFailed(format!("tracker search request failed: {e}"))
            })?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(DomainError::ExecutionFailed(format!(
                "tracker search returned {status}: {body}"
            )));
        }

        resp.json::<SearchPage>().await.map_err(|e| {
            DomainError::ExecutionFailed(format!("tracker search parse failed: {e}"))
        })
    }

    /// Run a JQL query with changelogs expanded, following pagination
    /// until every matching issue has been collected.
    pub async fn search(&self, jql: &str, page_size: u32) -> DomainResult<Vec<Issue>> {
        let mut issues: Vec<Issue> = Vec::new();
        let mut start_at = 0u32;

        loop {
            let page = self.search_page(jql, start_at, page_size).await?;
            let fetched = u32::try_from(page.issues.len()).unwrap_or(u32::MAX);

            tracing::debug!(
                start_at = page.start_at,
                fetched,
                total = page.total,
                "tracker search page"
            );

            issues.extend(page.issues);

            // An empty page ends pagination even if the server-reported
            // total claims otherwise.
            if fetched == 0 || issues.len() as u64 >= u64::from(page.total) {
                break;
            }
            start_at += fetched;
        }

        Ok(issues)
    }
}
