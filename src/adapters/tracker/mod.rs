//! Issue tracker polling adapter.
//!
//! Polls the tracker's search API with a fixed JQL query and emits one
//! change event per changelog history entry. Timestamp conversion and
//! pagination live in their own modules.

pub mod client;
pub mod models;
pub mod poller;
pub mod timestamp;

pub use client::TrackerClient;
pub use poller::IssuePoller;
