//! Per-type field attributes: which fields drive a copy and under what alias.

pub mod cache;
pub mod extract;

pub use cache::AttributeCache;
pub use extract::{FieldAttribute, FieldDescriptor, TypeAttributes, IGNORE_MARKER};
