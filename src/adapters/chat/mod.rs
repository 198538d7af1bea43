//! Chat webhook notification adapter.
//!
//! Posts build-completion summaries to a team chat webhook with a
//! colored attachment and a field table.

pub mod models;
pub mod notifier;

pub use notifier::ChatNotifier;
