//! Host REST API wire models.
//!
//! The host reports a build's outcome as its numeric result code; the
//! client maps that onto [`BuildOutcome`](crate::domain::models::BuildOutcome)
//! when converting to the domain model.

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainResult;
use crate::domain::models::{BuildDetails, BuildOutcome};

/// A build record as returned by `GET {base_url}/builds/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildRecord {
    /// Host-assigned build id.
    pub build_id: u64,
    /// Build number within the builder.
    pub number: u64,
    /// URL of the build results page.
    pub url: String,
    /// Name of the builder.
    #[serde(default)]
    pub builder_name: Option<String>,
    /// Build variant name.
    #[serde(default)]
    pub variant_name: Option<String>,
    /// Worker the build ran on.
    #[serde(default)]
    pub worker: Option<String>,
    /// Numeric result code.
    pub results: i64,
    /// Branch that was built.
    #[serde(default)]
    pub branch: Option<String>,
    /// Requested revision.
    #[serde(default)]
    pub revision: Option<String>,
    /// Revision actually checked out.
    #[serde(default)]
    pub got_revision: Option<String>,
    /// Source repository.
    #[serde(default)]
    pub repository: Option<String>,
    /// Source repository URL.
    #[serde(default)]
    pub repository_url: Option<String>,
    /// Project name.
    #[serde(default)]
    pub project: Option<String>,
}

impl BuildRecord {
    /// Convert the wire record into the domain model.
    pub fn into_details(self) -> DomainResult<BuildDetails> {
        Ok(BuildDetails {
            build_id: self.build_id,
            number: self.number,
            url: self.url,
            builder_name: self.builder_name,
            variant_name: self.variant_name,
            worker: self.worker,
            outcome: BuildOutcome::from_code(self.results)?,
            branch: self.branch,
            revision: self.revision,
            got_revision: self.got_revision,
            repository: self.repository,
            repository_url: self.repository_url,
            project: self.project,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::DomainError;

    #[test]
    fn test_record_maps_result_code() {
        let json = r#"{
            "build_id": 7,
            "number": 101,
            "url": "https://ci.example.com/#/builders/3/builds/101",
            "results": 2,
            "branch": "main"
        }"#;
        let record: BuildRecord = serde_json::from_str(json).unwrap();
        let details = record.into_details().unwrap();
        assert_eq!(details.outcome, BuildOutcome::Failure);
        assert_eq!(details.branch.as_deref(), Some("main"));
    }

    #[test]
    fn test_record_rejects_unknown_code() {
        let json = r#"{
            "build_id": 7,
            "number": 101,
            "url": "https://ci.example.com/x",
            "results": 42
        }"#;
        let record: BuildRecord = serde_json::from_str(json).unwrap();
        let err = record.into_details().unwrap_err();
        assert!(matches!(err, DomainError::UnknownResultCode(42)));
    }
}
