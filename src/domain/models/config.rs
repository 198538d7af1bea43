//! Configuration model for the conveyor adapters.

use serde::{Deserialize, Serialize};

/// Main configuration structure for conveyor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Issue poller configuration.
    #[serde(default)]
    pub poller: PollerConfig,

    /// Chat notifier configuration.
    #[serde(default)]
    pub notifier: NotifierConfig,

    /// Host orchestrator API configuration.
    #[serde(default)]
    pub host: HostConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Issue poller configuration.
///
/// `site`, `user`, `token`, and `jql` are required and validated at
/// load time. The tracker base URL is derived from `site`
/// (`https://{site}.atlassian.net`) unless `base_url` overrides it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PollerConfig {
    /// Tracker site name.
    #[serde(default)]
    pub site: String,

    /// Account used for basic auth against the tracker.
    #[serde(default)]
    pub user: String,

    /// API token for that account.
    #[serde(default)]
    pub token: String,

    /// Fixed search query run on every tick.
    #[serde(default)]
    pub jql: String,

    /// Seconds between poll ticks.
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,

    /// Whether to poll immediately at startup.
    #[serde(default = "default_poll_at_launch")]
    pub poll_at_launch: bool,

    /// Branch attributed to emitted changes.
    #[serde(default = "default_branch")]
    pub branch: String,

    /// Optional category attached to emitted changes.
    #[serde(default)]
    pub category: Option<String>,

    /// Search page size (1-100).
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Explicit tracker base URL, overriding the one derived from `site`.
    #[serde(default)]
    pub base_url: Option<String>,
}

const fn default_poll_interval_secs() -> u64 {
    10
}

const fn default_poll_at_launch() -> bool {
    true
}

fn default_branch() -> String {
    "master".to_string()
}

const fn default_page_size() -> u32 {
    50
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            site: String::new(),
            user: String::new(),
            token: String::new(),
            jql: String::new(),
            poll_interval_secs: default_poll_interval_secs(),
            poll_at_launch: default_poll_at_launch(),
            branch: default_branch(),
            category: None,
            page_size: default_page_size(),
            base_url: None,
        }
    }
}

impl PollerConfig {
    /// The tracker base URL: the explicit override when set, otherwise
    /// derived from the site name.
    pub fn tracker_base_url(&self) -> String {
        self.base_url
            .clone()
            .unwrap_or_else(|| format!("https://{}.atlassian.net", self.site))
    }
}

/// Chat notifier configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct NotifierConfig {
    /// Webhook URL the build summaries are posted to.
    #[serde(default)]
    pub webhook_url: String,

    /// Optional display name for the posting user.
    #[serde(default)]
    pub username: Option<String>,

    /// Optional icon: `:emoji:` values become `icon_emoji`, anything
    /// else becomes `icon_url`.
    #[serde(default)]
    pub icon: Option<String>,

    /// Per-field message templates.
    #[serde(default)]
    pub templates: MessageTemplates,
}

/// Templates applied to the repository, branch, and revision fields of
/// the notification message.
///
/// Supported placeholders: `{repository}`, `{branch}`, `{revision}`,
/// `{revision_short}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct MessageTemplates {
    /// Template for the Repository field.
    #[serde(default = "default_repository_template")]
    pub repository: String,

    /// Template for the Branch field.
    #[serde(default = "default_branch_template")]
    pub branch: String,

    /// Template for the Revision and Got Revision fields.
    #[serde(default = "default_revision_template")]
    pub revision: String,
}

fn default_repository_template() -> String {
    "{repository}".to_string()
}

fn default_branch_template() -> String {
    "{branch}".to_string()
}

fn default_revision_template() -> String {
    "{revision}".to_string()
}

impl Default for MessageTemplates {
    fn default() -> Self {
        Self {
            repository: default_repository_template(),
            branch: default_branch_template(),
            revision: default_revision_template(),
        }
    }
}

/// Host orchestrator API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct HostConfig {
    /// Base URL of the host's REST API.
    #[serde(default = "default_host_base_url")]
    pub base_url: String,
}

fn default_host_base_url() -> String {
    "http://localhost:8010/api/v2".to_string()
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            base_url: default_host_base_url(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty.
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Optional directory for daily-rotated log files.
    #[serde(default)]
    pub log_dir: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            log_dir: None,
        }
    }
}
