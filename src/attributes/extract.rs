//! Building `TypeAttributes` from a record schema.

use smallvec::smallvec;

use crate::error::ConfigurationFault;
use crate::schema::{is_valid_identifier, FieldPath, FieldSchema, RecordSchema, ValueType};

/// Annotation value that excludes a field
pub const IGNORE_MARKER: &str = "-";

/// A field located inside a record, possibly through embedded records
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    /// The field's schema entry
    pub field: &'static FieldSchema,
    /// Index chain from the record to the field
    pub path: FieldPath,
    /// Whether every field along the path is public
    pub settable: bool,
}

impl FieldDescriptor {
    /// The field's declared type
    #[must_use]
    pub fn value_type(&self) -> ValueType {
        self.field.value_type
    }
}

/// A driving field and the alias it is matched under
#[derive(Debug, Clone)]
pub struct FieldAttribute {
    /// Where the field lives
    pub descriptor: FieldDescriptor,
    /// Name of the counterpart to look for; never empty
    pub alias: &'static str,
}

/// The driving fields of one record type
#[derive(Debug)]
pub struct TypeAttributes {
    record: &'static str,
    fields: Vec<FieldAttribute>,
}

impl TypeAttributes {
    /// Extract the attributes of a record
    ///
    /// Restricted fields and fields marked `"-"` are left out. Only top-level
    /// fields are considered; embedded records are searched on the other side
    /// of a copy, never expanded here.
    ///
    /// # Panics
    /// Panics with a [`ConfigurationFault`] if an annotation is neither the
    /// ignore marker nor a valid identifier.
    #[must_use]
    pub fn extract(schema: &'static RecordSchema) -> Self {
        let mut fields = Vec::with_capacity(schema.fields.len());

        for (index, field) in schema.fields.iter().enumerate() {
            if !field.public {
                continue;
            }

            let alias = match field.annotation {
                None => field.name,
                Some(IGNORE_MARKER) => continue,
                Some(alias) if is_valid_identifier(alias) => alias,
                Some(alias) => panic!(
                    "{}",
                    ConfigurationFault::InvalidAlias {
                        record: schema.name,
                        field: field.name,
                        alias,
                    }
                ),
            };

            fields.push(FieldAttribute {
                descriptor: FieldDescriptor {
                    field,
                    path: smallvec![index],
                    settable: field.is_settable(),
                },
                alias,
            });
        }

        Self {
            record: schema.name,
            fields,
        }
    }

    /// Name of the record these attributes describe
    #[must_use]
    pub fn record(&self) -> &'static str {
        self.record
    }

    /// Number of driving fields
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no driving fields
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Driving fields in declaration order
    pub fn iter(&self) -> std::slice::Iter<'_, FieldAttribute> {
        self.fields.iter()
    }

    /// The attribute of the field declared as `name`, if it drives copies
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldAttribute> {
        self.fields
            .iter()
            .find(|attribute| attribute.descriptor.field.name == name)
    }
}

impl<'a> IntoIterator for &'a TypeAttributes {
    type Item = &'a FieldAttribute;
    type IntoIter = std::slice::Iter<'a, FieldAttribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
