//! Field descriptors and the type-erased value operations behind them.

use std::any::{Any, TypeId};
use std::fmt;

use crate::schema::record::RecordSchema;

/// Identity and printable name of a value type
#[derive(Clone, Copy)]
pub struct ValueType {
    id: fn() -> TypeId,
    name: fn() -> &'static str,
}

impl ValueType {
    /// The value type of `T`
    #[must_use]
    pub const fn of<T: Any>() -> Self {
        Self {
            id: TypeId::of::<T>,
            name: std::any::type_name::<T>,
        }
    }

    /// The `TypeId` of the described type
    #[must_use]
    pub fn id(&self) -> TypeId {
        (self.id)()
    }

    /// The compiler's name for the described type
    #[must_use]
    pub fn name(&self) -> &'static str {
        (self.name)()
    }
}

impl PartialEq for ValueType {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for ValueType {}

impl fmt::Debug for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Assignment operations for a public field of type `T`
///
/// Both return `false` without touching the slot when a value does not have
/// the expected type.
#[derive(Clone, Copy)]
pub struct ValueOps {
    /// Clone a same-typed value into the slot
    pub assign: fn(&mut dyn Any, &dyn Any) -> bool,
    /// Move a boxed value (a converter's output) into the slot
    pub put: fn(&mut dyn Any, Box<dyn Any>) -> bool,
}

impl ValueOps {
    /// Operations for fields of type `T`
    #[must_use]
    pub const fn of<T: Any + Clone>() -> Self {
        Self {
            assign: assign_cloned::<T>,
            put: put_boxed::<T>,
        }
    }
}

impl fmt::Debug for ValueOps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueOps").finish_non_exhaustive()
    }
}

fn assign_cloned<T: Any + Clone>(slot: &mut dyn Any, value: &dyn Any) -> bool {
    match (slot.downcast_mut::<T>(), value.downcast_ref::<T>()) {
        (Some(slot), Some(value)) => {
            slot.clone_from(value);
            true
        }
        _ => false,
    }
}

fn put_boxed<T: Any>(slot: &mut dyn Any, value: Box<dyn Any>) -> bool {
    let Some(slot) = slot.downcast_mut::<T>() else {
        return false;
    };
    match value.downcast::<T>() {
        Ok(value) => {
            *slot = *value;
            true
        }
        Err(_) => false,
    }
}

/// One declared field of a record
#[derive(Clone, Copy)]
pub struct FieldSchema {
    /// Declared name
    pub name: &'static str,
    /// Raw `#[glue("...")]` text, if any
    pub annotation: Option<&'static str>,
    /// Whether the field is declared `pub`
    pub public: bool,
    /// Declared type
    pub value_type: ValueType,
    /// Schema of the field's type when it is an embedded record
    pub embedded: Option<fn() -> &'static RecordSchema>,
    /// Reach this field from its owning record
    pub get: fn(&dyn Any) -> Option<&dyn Any>,
    /// Reach this field mutably from its owning record
    pub get_mut: fn(&mut dyn Any) -> Option<&mut dyn Any>,
    /// Assignment operations, present for public fields only
    pub ops: Option<ValueOps>,
}

impl FieldSchema {
    /// Whether a value can be written into this field
    #[must_use]
    pub fn is_settable(&self) -> bool {
        self.public && self.ops.is_some()
    }

    /// Schema of the embedded record, if the field is one
    #[must_use]
    pub fn embedded_schema(&self) -> Option<&'static RecordSchema> {
        self.embedded.map(|schema| schema())
    }
}

impl fmt::Debug for FieldSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldSchema")
            .field("name", &self.name)
            .field("annotation", &self.annotation)
            .field("public", &self.public)
            .field("value_type", &self.value_type)
            .field("embedded", &self.embedded.is_some())
            .finish_non_exhaustive()
    }
}
