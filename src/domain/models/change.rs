//! Change event model.
//!
//! A [`Change`] is the normalized event the poller forwards to the host
//! orchestrator's change-ingestion API, one per changelog history entry
//! found in the tracker.

use serde::{Deserialize, Serialize};

/// A single change event derived from a tracker changelog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Change {
    /// Who made the change (tracker account id or key).
    pub author: String,
    /// Opaque revision marker; the raw changelog timestamp string.
    pub revision: String,
    /// Human-readable summary, e.g. `Issue PROJ-42 changelog`.
    pub comments: String,
    /// When the change happened, as Unix epoch seconds (UTC).
    pub when_timestamp: i64,
    /// Branch the change is attributed to.
    pub branch: String,
    /// Optional change category for host-side filtering.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Project name the issue belongs to.
    pub project: String,
    /// Repository identifier; the tracker site the change came from.
    pub repository: String,
}

impl Change {
    /// Create a change with the required fields and no category.
    pub fn new(
        author: impl Into<String>,
        revision: impl Into<String>,
        comments: impl Into<String>,
        when_timestamp: i64,
    ) -> Self {
        Self {
            author: author.into(),
            revision: revision.into(),
            comments: comments.into(),
            when_timestamp,
            branch: "master".to_string(),
            category: None,
            project: String::new(),
            repository: String::new(),
        }
    }

    /// Set the branch.
    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = branch.into();
        self
    }

    /// Set the category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the project name.
    pub fn with_project(mut self, project: impl Into<String>) -> Self {
        self.project = project.into();
        self
    }

    /// Set the repository identifier.
    pub fn with_repository(mut self, repository: impl Into<String>) -> Self {
        self.repository = repository.into();
        self
    }
}
