//! Build models.
//!
//! [`BuildDetails`] is the extended build record the notifier fetches
//! from the host when a build finishes. [`BuildOutcome`] mirrors the
//! host's numeric result codes.

use serde::{Deserialize, Serialize};

use crate::domain::errors::{DomainError, DomainResult};

/// Terminal result of a build, matching the host's result codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildOutcome {
    /// Build completed successfully (code 0).
    Success,
    /// Build completed with warnings (code 1).
    Warnings,
    /// Build failed (code 2).
    Failure,
    /// Build was skipped (code 3).
    Skipped,
    /// Build raised an internal exception (code 4).
    Exception,
    /// Build was rescheduled for retry (code 5).
    Retry,
    /// Build was cancelled (code 6).
    Cancelled,
}

impl BuildOutcome {
    /// Returns the lower-case string the host uses for this outcome.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Warnings => "warnings",
            Self::Failure => "failure",
            Self::Skipped => "skipped",
            Self::Exception => "exception",
            Self::Retry => "retry",
            Self::Cancelled => "cancelled",
        }
    }

    /// Map a host result code to an outcome.
    pub fn from_code(code: i64) -> DomainResult<Self> {
        match code {
            0 => Ok(Self::Success),
            1 => Ok(Self::Warnings),
            2 => Ok(Self::Failure),
            3 => Ok(Self::Skipped),
            4 => Ok(Self::Exception),
            5 => Ok(Self::Retry),
            6 => Ok(Self::Cancelled),
            other => Err(DomainError::UnknownResultCode(other)),
        }
    }

    /// The host result code for this outcome.
    pub fn code(&self) -> i64 {
        match self {
            Self::Success => 0,
            Self::Warnings => 1,
            Self::Failure => 2,
            Self::Skipped => 3,
            Self::Exception => 4,
            Self::Retry => 5,
            Self::Cancelled => 6,
        }
    }
}

impl std::fmt::Display for BuildOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Extended details for a finished build, as reported by the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildDetails {
    /// Host-assigned build id.
    pub build_id: u64,
    /// Build number within the builder.
    pub number: u64,
    /// URL of the build results page.
    pub url: String,
    /// Name of the builder that produced the build.
    #[serde(default)]
    pub builder_name: Option<String>,
    /// Build variant, when the builder fans out configurations.
    #[serde(default)]
    pub variant_name: Option<String>,
    /// Worker the build ran on.
    #[serde(default)]
    pub worker: Option<String>,
    /// Terminal outcome.
    pub outcome: BuildOutcome,
    /// Branch that was built.
    #[serde(default)]
    pub branch: Option<String>,
    /// Revision requested for the build.
    #[serde(default)]
    pub revision: Option<String>,
    /// Revision actually checked out, when it differs.
    #[serde(default)]
    pub got_revision: Option<String>,
    /// Repository the build sources came from.
    #[serde(default)]
    pub repository: Option<String>,
    /// URL of that repository, when the host knows it.
    #[serde(default)]
    pub repository_url: Option<String>,
    /// Project the build belongs to.
    #[serde(default)]
    pub project: Option<String>,
}
