//! `conveyor notify` — post a chat notification for a finished build.

use std::sync::Arc;

use anyhow::Result;

use crate::adapters::chat::ChatNotifier;
use crate::adapters::host::HostClient;
use crate::cli::NotifyArgs;
use crate::domain::models::Config;
use crate::domain::ports::BuildNotifier;

/// Fetch the build from the host and post the webhook notification.
pub async fn execute(args: &NotifyArgs, config: &Config, json: bool) -> Result<()> {
    let host = Arc::new(HostClient::new(config.host.base_url.clone()));
    let notifier = ChatNotifier::new(config.notifier.clone(), host);

    notifier.build_finished(args.build_id).await?;

    if json {
        println!("{}", serde_json::json!({ "notified": args.build_id }));
    } else {
        println!("Notified webhook for build {}", args.build_id);
    }

    Ok(())
}
