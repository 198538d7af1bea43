//! `conveyor poll` — run a single poll tick and print the changes.

use std::sync::Arc;

use anyhow::Result;

use crate::adapters::tracker::{IssuePoller, TrackerClient};
use crate::domain::models::Config;
use crate::domain::ports::ChangeSource;

/// Poll the tracker once and print every emitted change.
pub async fn execute(config: &Config, json: bool) -> Result<()> {
    let client = Arc::new(TrackerClient::new(
        config.poller.tracker_base_url(),
        &config.poller.user,
        &config.poller.token,
    ));
    let poller = IssuePoller::new(config.poller.clone(), client);

    let changes = poller.poll(None).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&changes)?);
    } else {
        for change in &changes {
            println!(
                "{}  {}  {} ({})",
                change.when_timestamp, change.author, change.comments, change.project
            );
        }
        println!("{} change(s)", changes.len());
    }

    Ok(())
}
