//! Adapter registry.
//!
//! Holds the change sources and build notifiers the harness drives,
//! indexed by adapter name.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::ports::{BuildNotifier, ChangeSource};

/// Central registry of configured adapters.
#[derive(Default)]
pub struct AdapterRegistry {
    /// Change sources keyed by adapter name.
    sources: HashMap<String, Arc<dyn ChangeSource>>,
    /// Build notifiers keyed by adapter name.
    notifiers: HashMap<String, Arc<dyn BuildNotifier>>,
}

impl std::fmt::Debug for AdapterRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdapterRegistry")
            .field("sources", &self.sources.keys().collect::<Vec<_>>())
            .field("notifiers", &self.notifiers.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl AdapterRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a change source under its own name.
    ///
    /// A later registration with the same name replaces the earlier one.
    pub fn register_source(&mut self, source: Arc<dyn ChangeSource>) {
        let name = source.name().to_string();
        if self.sources.insert(name.clone(), source).is_some() {
            tracing::warn!(adapter = %name, "replacing previously registered change source");
        }
    }

    /// Register a build notifier under its own name.
    pub fn register_notifier(&mut self, notifier: Arc<dyn BuildNotifier>) {
        let name = notifier.name().to_string();
        if self.notifiers.insert(name.clone(), notifier).is_some() {
            tracing::warn!(adapter = %name, "replacing previously registered notifier");
        }
    }

    /// Look up a change source by name.
    pub fn get_source(&self, name: &str) -> Option<Arc<dyn ChangeSource>> {
        self.sources.get(name).cloned()
    }

    /// Look up a build notifier by name.
    pub fn get_notifier(&self, name: &str) -> Option<Arc<dyn BuildNotifier>> {
        self.notifiers.get(name).cloned()
    }

    /// All registered change sources.
    pub fn sources(&self) -> Vec<Arc<dyn ChangeSource>> {
        self.sources.values().cloned().collect()
    }

    /// All registered build notifiers.
    pub fn notifiers(&self) -> Vec<Arc<dyn BuildNotifier>> {
        self.notifiers.values().cloned().collect()
    }

    /// Names of registered change sources.
    pub fn source_names(&self) -> Vec<&str> {
        self.sources.keys().map(String::as_str).collect()
    }

    /// Names of registered build notifiers.
    pub fn notifier_names(&self) -> Vec<&str> {
        self.notifiers.keys().map(String::as_str).collect()
    }

    /// Whether any adapters are registered.
    pub fn has_adapters(&self) -> bool {
        !self.sources.is_empty() || !self.notifiers.is_empty()
    }
}
