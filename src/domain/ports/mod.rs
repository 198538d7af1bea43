//! Port trait definitions (Hexagonal Architecture).
//!
//! Two seams exist in this crate:
//! - adapter ports ([`ChangeSource`], [`BuildNotifier`]): implemented by
//!   the tracker poller and the chat notifier;
//! - host ports ([`ChangeSink`], [`BuildSource`]): implemented by the
//!   host orchestrator client.
//!
//! These traits keep the domain independent of any specific tracker,
//! chat service, or host API.

pub mod adapter;
pub mod host;

pub use adapter::{BuildNotifier, ChangeSource};
pub use host::{BuildSource, ChangeSink};
