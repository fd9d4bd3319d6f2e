//! Record schemas and the `Record` trait.

use std::any::{Any, TypeId};
use std::fmt;

use smallvec::SmallVec;

use crate::schema::field::{FieldSchema, ValueType};

/// Index chain from a record to one of its fields, through embedded records
pub type FieldPath = SmallVec<[usize; 4]>;

/// The descriptor table of one record type
pub struct RecordSchema {
    /// Declared name of the struct
    pub name: &'static str,
    /// The record's own type
    pub value_type: ValueType,
    /// Fields in declaration order
    pub fields: &'static [FieldSchema],
}

impl RecordSchema {
    /// The `TypeId` of the record type
    #[must_use]
    pub fn id(&self) -> TypeId {
        self.value_type.id()
    }

    /// Follow `path` from `record` to a field, returning its schema and value
    ///
    /// Returns `None` if `record` is not of this schema's type or the path
    /// leaves the table.
    pub fn field_ref<'a>(
        &'static self,
        record: &'a dyn Any,
        path: &[usize],
    ) -> Option<(&'static FieldSchema, &'a dyn Any)> {
        let mut schema = self;
        let mut value = record;
        let mut field = None;
        for &index in path {
            let current = schema.fields.get(index)?;
            value = (current.get)(value)?;
            field = Some(current);
            if let Some(embedded) = current.embedded_schema() {
                schema = embedded;
            }
        }
        field.map(|field| (field, value))
    }

    /// Follow `path` from `record` to a field, returning it mutably
    pub fn field_mut<'a>(
        &'static self,
        record: &'a mut dyn Any,
        path: &[usize],
    ) -> Option<(&'static FieldSchema, &'a mut dyn Any)> {
        let mut schema = self;
        let mut value = record;
        let mut field = None;
        for &index in path {
            let current = schema.fields.get(index)?;
            value = (current.get_mut)(value)?;
            field = Some(current);
            if let Some(embedded) = current.embedded_schema() {
                schema = embedded;
            }
        }
        field.map(|field| (field, value))
    }
}

impl fmt::Debug for RecordSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordSchema")
            .field("name", &self.name)
            .field("fields", &self.fields)
            .finish()
    }
}

/// A struct with a generated descriptor table
///
/// Implemented by `#[derive(Record)]`.
pub trait Record: Any {
    /// The schema of this record type
    fn schema() -> &'static RecordSchema
    where
        Self: Sized;

    /// The schema of this value's type, usable through `dyn Record`
    fn record_schema(&self) -> &'static RecordSchema;
}
