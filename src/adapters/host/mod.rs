//! Host orchestrator REST adapter.
//!
//! [`HostClient`] implements both host-side ports: the change-ingestion
//! sink and the build lookup source.

pub mod client;
pub mod models;

pub use client::HostClient;
