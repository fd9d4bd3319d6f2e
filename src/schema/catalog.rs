//! Link-time catalog of every derived record.
//!
//! Each `#[derive(Record)]` submits a [`RecordEntry`]; the type-erased copy
//! entry point uses the catalog to map a `TypeId` back to its schema.

use std::any::TypeId;
use std::sync::LazyLock;

use rustc_hash::FxHashMap;

use crate::schema::record::RecordSchema;

/// Catalog registration emitted by the `Record` derive
pub struct RecordEntry(pub fn() -> &'static RecordSchema);

inventory::collect!(RecordEntry);

static CATALOG: LazyLock<FxHashMap<TypeId, &'static RecordSchema>> = LazyLock::new(|| {
    let mut catalog = FxHashMap::default();
    for entry in inventory::iter::<RecordEntry> {
        let schema = (entry.0)();
        catalog.insert(schema.id(), schema);
    }
    log::debug!("Record catalog holds {} record types", catalog.len());
    catalog
});

/// Find the schema of a derived record type
#[must_use]
pub fn lookup_record(type_id: TypeId) -> Option<&'static RecordSchema> {
    CATALOG.get(&type_id).copied()
}
