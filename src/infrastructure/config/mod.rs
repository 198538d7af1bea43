//! Configuration loading.
//!
//! Hierarchical merging via figment: programmatic defaults, then the
//! project config file, then local overrides, then environment
//! variables. Validation failures are fatal at load time.

use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use thiserror::Error;

use crate::domain::models::Config;

/// Configuration error types.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Poller config is missing required '{0}'")]
    MissingPollerField(&'static str),

    #[error("Invalid poll_interval_secs: {0}. Must be at least 1")]
    InvalidPollInterval(u64),

    #[error("Invalid page_size: {0}. Must be between 1 and 100")]
    InvalidPageSize(u32),

    #[error("Notifier config is missing required 'webhook_url'")]
    MissingWebhookUrl,

    #[error("Invalid webhook_url: {0}. Must be an http(s) URL")]
    InvalidWebhookUrl(String),

    #[error("Host base_url cannot be empty")]
    EmptyHostBaseUrl,

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),
}

/// Configuration loader with hierarchical merging.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging.
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults
    /// 2. `conveyor.yaml` (project config)
    /// 3. `conveyor.local.yaml` (local overrides, optional)
    /// 4. Environment variables (`CONVEYOR_` prefix, nested keys split
    ///    on `__`, highest priority)
    pub fn load() -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file("conveyor.yaml"))
            .merge(Yaml::file("conveyor.local.yaml"))
            .merge(Env::prefixed("CONVEYOR_").split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file (plus defaults and the
    /// environment).
    pub fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path.as_ref()))
            .merge(Env::prefixed("CONVEYOR_").split("__"))
            .extract()
            .context(format!(
                "Failed to load config from {}",
                path.as_ref().display()
            ))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading.
    ///
    /// Missing prerequisites at configuration time are fatal: the
    /// caller is expected to abort on error.
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        let poller = &config.poller;
        if poller.site.is_empty() && poller.base_url.is_none() {
            return Err(ConfigError::MissingPollerField("site"));
        }
        if poller.user.is_empty() {
            return Err(ConfigError::MissingPollerField("user"));
        }
        if poller.token.is_empty() {
            return Err(ConfigError::MissingPollerField("token"));
        }
        if poller.jql.is_empty() {
            return Err(ConfigError::MissingPollerField("jql"));
        }
        if poller.poll_interval_secs == 0 {
            return Err(ConfigError::InvalidPollInterval(poller.poll_interval_secs));
        }
        if poller.page_size == 0 || poller.page_size > 100 {
            return Err(ConfigError::InvalidPageSize(poller.page_size));
        }

        let notifier = &config.notifier;
        if notifier.webhook_url.is_empty() {
            return Err(ConfigError::MissingWebhookUrl);
        }
        if !notifier.webhook_url.starts_with("http://")
            && !notifier.webhook_url.starts_with("https://")
        {
            return Err(ConfigError::InvalidWebhookUrl(notifier.webhook_url.clone()));
        }

        if config.host.base_url.is_empty() {
            return Err(ConfigError::EmptyHostBaseUrl);
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&config.logging.format.as_str()) {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        Ok(())
    }
}
