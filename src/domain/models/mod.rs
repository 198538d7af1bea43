//! Domain models.

pub mod build;
pub mod change;
pub mod config;

pub use build::{BuildDetails, BuildOutcome};
pub use change::Change;
pub use config::{
    Config, HostConfig, LoggingConfig, MessageTemplates, NotifierConfig, PollerConfig,
};
