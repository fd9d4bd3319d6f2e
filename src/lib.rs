//! A Rust library for copying matching fields between records by name or
//! alias, with registered type conversions and optional strict matching.
//!
//! ```ignore
//! #[derive(Debug, Default, Clone, glue::Record)]
//! pub struct Dst {
//!     pub alpha: String,
//!     #[glue("Beta")]
//!     pub b: i64,
//! }
//! ```

// Lets the derive's `::glue::` paths resolve inside this crate's own tests
extern crate self as glue;

pub mod attributes;
pub mod config;
pub mod convert;
pub mod engine;
pub mod error;
pub mod schema;

#[doc(hidden)]
pub use inventory;

// Re-export the most common types for easier use
// Core types
pub use config::EngineConfig;
pub use engine::{Engine, GlueOption, GlueOptions};
pub use error::{ConfigurationFault, GlueError, RegistrationError, Result, Side};

// Records
pub use glue_macros::Record;
pub use schema::Record;

// Conversions
pub use convert::{ConversionRegistry, Converter};

use std::any::Any;

/// Copy matching fields from `src` into `dst` with the global engine
pub fn glue<D: Record, S: Record>(dst: &mut D, src: &S) -> Result<()> {
    Engine::global().glue(dst, src)
}

/// Copy matching fields from `src` into `dst` with the global engine
pub fn glue_with<D: Record, S: Record>(dst: &mut D, src: &S, options: &[GlueOption]) -> Result<()> {
    Engine::global().glue_with(dst, src, options)
}

/// Copy between type-erased records with the global engine
pub fn glue_any(dst: &mut dyn Any, src: &dyn Any, options: &[GlueOption]) -> Result<()> {
    Engine::global().glue_any(dst, src, options)
}

/// Register a converter on the global engine
pub fn register_conversion<D: Any, S: Any, C: Any>(
    dst_hint: D,
    src_hint: S,
    converter: C,
) -> std::result::Result<(), RegistrationError> {
    Engine::global().register_conversion(dst_hint, src_hint, converter)
}

/// Register a converter on the global engine, panicking if it is rejected
///
/// # Panics
/// Panics with the [`RegistrationError`] that [`register_conversion`] would
/// have returned.
pub fn must_register_conversion<D: Any, S: Any, C: Any>(
    dst_hint: D,
    src_hint: S,
    converter: C,
) -> bool {
    Engine::global()
        .conversions()
        .must_register(dst_hint, src_hint, converter)
}

/// Remove a converter from the global engine
pub fn deregister_conversion<D: Any, S: Any>(dst_hint: D, src_hint: S) -> bool {
    Engine::global().deregister_conversion(dst_hint, src_hint)
}
