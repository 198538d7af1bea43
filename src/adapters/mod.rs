//! Integration adapters for external systems.

pub mod chat;
pub mod host;
pub mod tracker;
