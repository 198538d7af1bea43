//! Service layer: adapter registry and the poll runner.

pub mod registry;
pub mod runner;

pub use registry::AdapterRegistry;
pub use runner::PollRunner;
