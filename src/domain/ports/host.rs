//! Host orchestrator port traits.
//!
//! The adapters never talk to the host directly; they go through these
//! traits. [`ChangeSink`] models the change-ingestion API and
//! [`BuildSource`] the build-detail and responsible-user lookups.

use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::models::{BuildDetails, Change};

/// The host's change-ingestion API.
#[async_trait]
pub trait ChangeSink: Send + Sync {
    /// Record one change event with the host.
    async fn add_change(&self, change: &Change) -> DomainResult<()>;
}

/// The host's build lookup APIs.
#[async_trait]
pub trait BuildSource: Send + Sync {
    /// Fetch extended details for a finished build.
    async fn details(&self, build_id: u64) -> DomainResult<BuildDetails>;

    /// Fetch the users responsible for a build, in blame order.
    async fn responsible_users(&self, build_id: u64) -> DomainResult<Vec<String>>;
}
