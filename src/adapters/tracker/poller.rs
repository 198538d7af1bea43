//! Issue poller.
//!
//! Runs a fixed JQL query on every tick, walks each returned issue's
//! changelog history entries, and emits one [`Change`] per entry. The
//! entry author comes from the history metadata actor when present,
//! falling back to the author key; entries with neither are skipped.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::errors::DomainResult;
use crate::domain::models::{Change, PollerConfig};
use crate::domain::ports::ChangeSource;

use super::client::TrackerClient;
use super::models::{HistoryEntry, Issue};
use super::timestamp::parse_created;

/// Adapter that polls the tracker's search API for changelog entries.
#[derive(Debug)]
pub struct IssuePoller {
    /// Registry / log name, derived from the site and query.
    name: String,
    /// Poller configuration.
    config: PollerConfig,
    /// Shared tracker HTTP client.
    client: Arc<TrackerClient>,
}

impl IssuePoller {
    /// Create a new poller from its configuration and client.
    pub fn new(config: PollerConfig, client: Arc<TrackerClient>) -> Self {
        let name = format!("issue-poller:{}/{}", config.site, config.jql);
        Self {
            name,
            config,
            client,
        }
    }

    /// Convert one changelog history entry into a change event.
    ///
    /// Returns `Ok(None)` when the entry has no resolvable author.
    /// Timestamp conversion is a fixed-format parse; a malformed
    /// `created` string fails the whole poll.
    fn change_for_entry(&self, issue: &Issue, entry: &HistoryEntry) -> DomainResult<Option<Change>> {
        let Some(author) = entry.resolved_author() else {
            tracing::warn!(
                issue = %issue.key,
                created = %entry.created,
                "skipping changelog entry with no resolvable author"
            );
            return Ok(None);
        };

        let when = parse_created(&entry.created)?;

        let mut change = Change::new(
            author,
            &entry.created,
            format!("Issue {} changelog", issue.key),
            when.timestamp(),
        )
        .with_branch(&self.config.branch)
        .with_project(&issue.fields.project.name)
        .with_repository(&self.config.site);

        if let Some(ref category) = self.config.category {
            change = change.with_category(category);
        }

        Ok(Some(change))
    }
}

#[async_trait]
impl ChangeSource for IssuePoller {
    fn name(&self) -> &str {
        &self.name
    }

    async fn poll(&self, last_poll: Option<DateTime<Utc>>) -> DomainResult<Vec<Change>> {
        tracing::debug!(jql = %self.config.jql, "running tracker query");

        let issues = self
            .client
            .search(&self.config.jql, self.config.page_size)
            .await?;

        let mut changes = Vec::new();
        for issue in &issues {
            let Some(ref changelog) = issue.changelog else {
                continue;
            };
            for entry in &changelog.histories {
                if let Some(watermark) = last_poll {
                    if parse_created(&entry.created)? <= watermark {
                        continue;
                    }
                }
                if let Some(change) = self.change_for_entry(issue, entry)? {
                    tracing::debug!(issue = %issue.key, author = %change.author, "changelog entry");
                    changes.push(change);
                }
            }
        }

        tracing::info!(
            issues = issues.len(),
            changes = changes.len(),
            "tracker poll complete"
        );

        Ok(changes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::tracker::models::{
        Changelog, HistoryAuthor, HistoryMetadata, IssueFields, MetadataActor, ProjectRef,
    };
    use crate::domain::errors::DomainError;

    fn test_config() -> PollerConfig {
        PollerConfig {
            site: "acme".to_string(),
            user: "ci-bot@example.com".to_string(),
            token: "secret".to_string(),
            jql: "project = CI ORDER BY updated".to_string(),
            category: Some("tracker".to_string()),
            ..Default::default()
        }
    }

    fn test_poller() -> IssuePoller {
        let config = test_config();
        let client = Arc::new(TrackerClient::new(
            config.tracker_base_url(),
            &config.user,
            &config.token,
        ));
        IssuePoller::new(config, client)
    }

    fn make_issue(key: &str, entries: Vec<HistoryEntry>) -> Issue {
        Issue {
            key: key.to_string(),
            fields: IssueFields {
                project: ProjectRef {
                    name: "Continuous Integration".to_string(),
                },
            },
            changelog: Some(Changelog { histories: entries }),
        }
    }

    fn entry(created: &str, author_key: Option<&str>, actor_id: Option<&str>) -> HistoryEntry {
        HistoryEntry {
            created: created.to_string(),
            author: author_key.map(|k| HistoryAuthor {
                key: Some(k.to_string()),
            }),
            history_metadata: actor_id.map(|id| HistoryMetadata {
                actor: Some(MetadataActor { id: id.to_string() }),
            }),
        }
    }

    #[test]
    fn test_change_for_entry_full() {
        let poller = test_poller();
        let issue = make_issue("CI-7", vec![]);
        let entry = entry("2017-05-03T17:06:18.123+0200", Some("alice"), None);

        let change = poller.change_for_entry(&issue, &entry).unwrap().unwrap();
        assert_eq!(change.author, "alice");
        assert_eq!(change.revision, "2017-05-03T17:06:18.123+0200");
        assert_eq!(change.comments, "Issue CI-7 changelog");
        assert_eq!(change.branch, "master");
        assert_eq!(change.category.as_deref(), Some("tracker"));
        assert_eq!(change.project, "Continuous Integration");
        assert_eq!(change.repository, "acme");
        // 2017-05-03 15:06 UTC.
        assert_eq!(change.when_timestamp, 1_493_823_960);
    }

    #[test]
    fn test_change_for_entry_prefers_metadata_actor() {
        let poller = test_poller();
        let issue = make_issue("CI-8", vec![]);
        let entry = entry("2024-01-15T10:30:00.000+0000", Some("alice"), Some("svc-bot"));

        let change = poller.change_for_entry(&issue, &entry).unwrap().unwrap();
        assert_eq!(change.author, "svc-bot");
    }

    #[test]
    fn test_change_for_entry_skips_authorless() {
        let poller = test_poller();
        let issue = make_issue("CI-9", vec![]);
        let entry = entry("2024-01-15T10:30:00.000+0000", None, None);

        assert!(poller.change_for_entry(&issue, &entry).unwrap().is_none());
    }

    #[test]
    fn test_change_for_entry_malformed_timestamp_fails() {
        let poller = test_poller();
        let issue = make_issue("CI-10", vec![]);
        let entry = entry("yesterday-ish", Some("alice"), None);

        let err = poller.change_for_entry(&issue, &entry).unwrap_err();
        assert!(matches!(err, DomainError::MalformedTimestamp(_)));
    }

    #[test]
    fn test_poller_name_includes_site_and_query() {
        let poller = test_poller();
        assert_eq!(poller.name(), "issue-poller:acme/project = CI ORDER BY updated");
    }
}
