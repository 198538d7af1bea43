//! Tracker search API response models.
//!
//! These structs map to the tracker's REST search payloads (camelCase
//! JSON). They are used internally by the tracker adapter and are not
//! part of the public domain model.

use serde::{Deserialize, Serialize};

/// One page of search results.
///
/// The API pages with `startAt` / `maxResults` / `total`; the client
/// keeps fetching until every matching issue has been retrieved.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPage {
    /// Zero-based index of the first issue on this page.
    pub start_at: u32,
    /// Page size the server applied.
    pub max_results: u32,
    /// Total number of issues matching the query.
    pub total: u32,
    /// Issues on this page.
    #[serde(default)]
    pub issues: Vec<Issue>,
}

/// An issue returned by the search API with its changelog expanded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    /// Issue key, e.g. `PROJ-42`.
    pub key: String,
    /// Selected issue fields.
    pub fields: IssueFields,
    /// Changelog; present when the search expands it.
    #[serde(default)]
    pub changelog: Option<Changelog>,
}

/// The subset of issue fields the poller reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueFields {
    /// Project the issue belongs to.
    pub project: ProjectRef,
}

/// Reference to the issue's project.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRef {
    /// Project display name.
    pub name: String,
}

/// An issue's changelog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Changelog {
    /// History entries, oldest first.
    #[serde(default)]
    pub histories: Vec<HistoryEntry>,
}

/// One changelog history entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// When the entry was created, e.g. `2017-05-03T17:06:18.123+0200`.
    pub created: String,
    /// The account that made the change. Absent for anonymized entries.
    #[serde(default)]
    pub author: Option<HistoryAuthor>,
    /// Extra metadata; carries the acting service account when the
    /// change was made through an integration.
    #[serde(default)]
    pub history_metadata: Option<HistoryMetadata>,
}

impl HistoryEntry {
    /// Resolve the author of this entry.
    ///
    /// The history metadata actor id wins over the author key, matching
    /// how integrations record the acting account.
    pub fn resolved_author(&self) -> Option<&str> {
        self.history_metadata
            .as_ref()
            .and_then(|m| m.actor.as_ref())
            .map(|a| a.id.as_str())
            .or_else(|| self.author.as_ref().and_then(|a| a.key.as_deref()))
    }
}

/// The account recorded on a history entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryAuthor {
    /// Account key. Absent on some tracker deployments.
    #[serde(default)]
    pub key: Option<String>,
}

/// Additional metadata on a history entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryMetadata {
    /// The actor that performed the change, when recorded.
    #[serde(default)]
    pub actor: Option<MetadataActor>,
}

/// Actor recorded in history metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataActor {
    /// Actor id.
    pub id: String,
}
