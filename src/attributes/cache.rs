//! Memoized `TypeAttributes`, built once per record type.

use std::any::TypeId;
use std::sync::{Arc, Mutex, PoisonError};

use rustc_hash::FxHashMap;

use crate::attributes::extract::TypeAttributes;
use crate::schema::RecordSchema;

/// Process-lifetime cache of driving-field attributes
///
/// A single lock covers lookup-or-build. Entries are never evicted.
#[derive(Debug)]
pub struct AttributeCache {
    entries: Mutex<FxHashMap<TypeId, Arc<TypeAttributes>>>,
}

impl AttributeCache {
    /// Create an empty cache
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty cache sized for `capacity` record types
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let mut entries = FxHashMap::default();
        entries.reserve(capacity);
        Self {
            entries: Mutex::new(entries),
        }
    }

    /// Get the attributes of a record, building them on first use
    ///
    /// # Panics
    /// Panics with a configuration fault if the record declares an invalid
    /// alias. The cache stays usable for other records afterwards.
    pub fn get(&self, schema: &'static RecordSchema) -> Arc<TypeAttributes> {
        // A panicking build never inserts, so a poisoned map is still consistent
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(attributes) = entries.get(&schema.id()) {
            return Arc::clone(attributes);
        }

        let attributes = Arc::new(TypeAttributes::extract(schema));
        log::debug!(
            "Built glue attributes for {}: {} driving fields",
            schema.name,
            attributes.len()
        );
        entries.insert(schema.id(), Arc::clone(&attributes));
        attributes
    }

    /// Number of record types cached so far
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether no record type has been cached yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for AttributeCache {
    fn default() -> Self {
        Self::new()
    }
}
