//! Domain layer for the conveyor adapters.
//!
//! This module contains the change and build models, the port traits,
//! and the domain error taxonomy.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{DomainError, DomainResult};
