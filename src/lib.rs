//! Conveyor - CI orchestrator integration adapters.
//!
//! Conveyor packages two plugins for a continuous-integration
//! orchestrator: an issue poller that turns tracker changelog entries
//! into change events, and a chat notifier that posts build-completion
//! summaries to a team webhook.
//!
//! # Architecture
//!
//! This crate follows Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): change/build models, port traits, errors
//! - **Adapters** (`adapters`): tracker, chat webhook, and host API clients
//! - **Service Layer** (`services`): adapter registry and the poll runner
//! - **Infrastructure Layer** (`infrastructure`): configuration and logging
//! - **CLI Layer** (`cli`): command-line harness
//!
//! # Example
//!
//! ```ignore
//! use conveyor::infrastructure::config::ConfigLoader;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ConfigLoader::load()?;
//!     // Build adapters from `config` and drive them.
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use adapters::chat::ChatNotifier;
pub use adapters::host::HostClient;
pub use adapters::tracker::{IssuePoller, TrackerClient};
pub use domain::errors::{DomainError, DomainResult};
pub use domain::models::{
    BuildDetails, BuildOutcome, Change, Config, HostConfig, LoggingConfig, MessageTemplates,
    NotifierConfig, PollerConfig,
};
pub use domain::ports::{BuildNotifier, BuildSource, ChangeSink, ChangeSource};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::{AdapterRegistry, PollRunner};
