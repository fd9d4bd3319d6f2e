//! Registered conversions between field types.

pub mod converter;
pub mod registry;

pub use converter::Converter;
pub use registry::{ConversionKey, ConversionRegistry};
