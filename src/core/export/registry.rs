//! Registry of group item exporters
//!
//! Children are registered under an [`ExporterKey`]. A group exporter asks
//! the registry for the registrations matching the keys it declares; the
//! registry keeps registration order and does not reject duplicate keys, so
//! a double registration shows up as an extra match during the group's
//! completeness check.

use crate::core::export::traits::GroupItemExporter;
use crate::domain::ExporterKey;
use std::fmt;
use std::sync::Arc;

/// A registered child exporter
#[derive(Clone)]
pub struct Registration {
    /// Key the child was registered under
    pub key: ExporterKey,

    /// The child exporter
    pub exporter: Arc<dyn GroupItemExporter>,
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("key", &self.key)
            .field("group_item_type", &self.exporter.group_item_type())
            .finish()
    }
}

/// Ordered collection of child exporter registrations
#[derive(Debug, Clone, Default)]
pub struct ExporterRegistry {
    registrations: Vec<Registration>,
}

impl ExporterRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an exporter under `key`
    pub fn register(&mut self, key: ExporterKey, exporter: Arc<dyn GroupItemExporter>) -> &mut Self {
        tracing::debug!(
            key = %key,
            group_item_type = %exporter.group_item_type(),
            "Registering group item exporter"
        );
        self.registrations.push(Registration { key, exporter });
        self
    }

    /// Builder-style variant of [`register`](Self::register)
    pub fn with(mut self, key: ExporterKey, exporter: Arc<dyn GroupItemExporter>) -> Self {
        self.register(key, exporter);
        self
    }

    /// Registrations whose key is one of `expected`, in registration order
    pub fn select(&self, expected: &[ExporterKey]) -> Vec<Registration> {
        self.registrations
            .iter()
            .filter(|registration| expected.contains(&registration.key))
            .cloned()
            .collect()
    }

    /// Keys of all registrations, in registration order
    pub fn keys(&self) -> impl Iterator<Item = &ExporterKey> {
        self.registrations.iter().map(|registration| &registration.key)
    }

    /// Number of registrations
    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    /// Whether nothing is registered
    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }
}
