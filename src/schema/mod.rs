//! Static descriptor tables for glue records.
//!
//! The `Record` derive emits one [`RecordSchema`] per struct. The engine reads
//! these tables instead of inspecting types at runtime: every field carries its
//! declared name, raw alias annotation, visibility, value type and the
//! accessors needed to reach and assign it through `dyn Any`.

pub mod catalog;
pub mod field;
pub mod identifier;
pub mod record;

// Re-export the main types and functions for easier access
pub use catalog::{lookup_record, RecordEntry};
pub use field::{FieldSchema, ValueOps, ValueType};
pub use identifier::is_valid_identifier;
pub use record::{FieldPath, Record, RecordSchema};
