//! Adapter port traits.
//!
//! These define the interface that polling and notification adapters
//! must implement. The host harness interacts with adapters exclusively
//! through these traits, keeping the domain layer decoupled from any
//! specific tracker or chat service.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::errors::DomainResult;
use crate::domain::models::Change;

/// Port for adapters that pull change events from an external system.
///
/// Change sources poll an external source (an issue tracker's search
/// API here) and return normalized [`Change`]s that the harness forwards
/// to the host's change-ingestion API. The `last_poll` parameter enables
/// incremental polling — sources should skip entries at or before that
/// instant.
#[async_trait]
pub trait ChangeSource: Send + Sync {
    /// A stable name identifying this source in logs and the registry.
    fn name(&self) -> &str;

    /// Poll the external system for change events.
    ///
    /// If `last_poll` is `Some`, only entries created after that instant
    /// are returned. If `None`, every entry the query yields is returned.
    async fn poll(&self, last_poll: Option<DateTime<Utc>>) -> DomainResult<Vec<Change>>;
}

/// Port for adapters that push build notifications to an external system.
#[async_trait]
pub trait BuildNotifier: Send + Sync {
    /// A stable name identifying this notifier in logs and the registry.
    fn name(&self) -> &str;

    /// Handle a build-finished event for the given host build id.
    async fn build_finished(&self, build_id: u64) -> DomainResult<()>;
}
