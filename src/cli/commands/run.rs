//! `conveyor run` — drive the poll loop against the host.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;

use crate::adapters::host::HostClient;
use crate::adapters::tracker::{IssuePoller, TrackerClient};
use crate::domain::models::Config;
use crate::services::{AdapterRegistry, PollRunner};

/// Run the poll loop until Ctrl-C.
pub async fn execute(config: &Config) -> Result<()> {
    let tracker = Arc::new(TrackerClient::new(
        config.poller.tracker_base_url(),
        &config.poller.user,
        &config.poller.token,
    ));
    let host = Arc::new(HostClient::new(config.host.base_url.clone()));

    let mut registry = AdapterRegistry::new();
    registry.register_source(Arc::new(IssuePoller::new(config.poller.clone(), tracker)));

    tracing::info!(
        sources = ?registry.source_names(),
        interval_secs = config.poller.poll_interval_secs,
        "starting poll loop"
    );

    let mut runner = PollRunner::new(
        registry.sources(),
        host,
        Duration::from_secs(config.poller.poll_interval_secs),
        config.poller.poll_at_launch,
    );

    tokio::select! {
        () = runner.run() => {}
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("interrupt received, shutting down");
        }
    }

    Ok(())
}
