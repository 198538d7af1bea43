//! `conveyor check-config` — validate and print the effective config.

use anyhow::Result;

use crate::domain::models::Config;

/// Print the effective configuration with the API token redacted.
pub fn execute(config: &Config, json: bool) -> Result<()> {
    let mut printable = config.clone();
    if !printable.poller.token.is_empty() {
        printable.poller.token = "***".to_string();
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&printable)?);
    } else {
        print!("{}", serde_yaml::to_string(&printable)?);
    }
    Ok(())
}
