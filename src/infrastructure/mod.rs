//! Infrastructure layer.
//!
//! Configuration loading and logging setup. Implementations here
//! satisfy the ambient needs of the adapters; the network adapters
//! themselves live under [`crate::adapters`].

pub mod config;
pub mod logging;
