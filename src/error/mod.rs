//! Error handling for the glue engine.
//!
//! Two kinds of failure are returned to callers: [`GlueError`] from a copy and
//! [`RegistrationError`] from registering a converter. A malformed alias
//! annotation is a broken static declaration rather than a runtime condition;
//! it is reported by panicking with a [`ConfigurationFault`].

use std::fmt;

/// Which argument of a copy an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The record being written
    Destination,
    /// The record being read
    Source,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Destination => write!(f, "destination"),
            Self::Source => write!(f, "source"),
        }
    }
}

/// Errors returned by a copy
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GlueError {
    /// The argument is not a derived record
    #[error("Invalid argument: {side} is not a glue record")]
    InvalidArgument {
        /// The offending argument
        side: Side,
    },

    /// Strict mode found no counterpart for a driving field
    #[error("Unsatisfied field: no counterpart found for `{alias}`")]
    UnsatisfiedField {
        /// The alias that could not be resolved
        alias: &'static str,
    },
}

/// Errors returned when registering a converter
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistrationError {
    /// The value offered as converter is not a `Converter` (closures included)
    #[error("Not a glue::Converter: got a value of type `{found}`; wrap functions with `Converter::new`")]
    NotCallable {
        /// Type name of the offered value
        found: &'static str,
    },

    /// The converter's input or output does not match the type hints
    #[error("Incompatible converter signature: expected `{expected}`, found `{found}`")]
    IncompatibleSignature {
        /// Signature implied by the type hints
        expected: String,
        /// Signature of the offered converter
        found: String,
    },
}

/// Faults in a record declaration, raised the first time the record is used
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationFault {
    /// A `#[glue("...")]` annotation is neither `"-"` nor a valid identifier
    #[error("{alias:?} is not a valid identifier (field `{field}` of record `{record}`)")]
    InvalidAlias {
        /// Record declaring the field
        record: &'static str,
        /// Field carrying the annotation
        field: &'static str,
        /// The rejected annotation text
        alias: &'static str,
    },
}

/// Result type for glue operations
pub type Result<T> = std::result::Result<T, GlueError>;
