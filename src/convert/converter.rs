//! Type-erased single-argument converters.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::schema::ValueType;

type ConvertFn = dyn Fn(&dyn Any) -> Option<Box<dyn Any>> + Send + Sync;

/// A function from one value type to another
///
/// Carries its own signature so registration can check it against the type
/// hints it is registered under.
#[derive(Clone)]
pub struct Converter {
    input: ValueType,
    output: ValueType,
    call: Arc<ConvertFn>,
}

impl Converter {
    /// Wrap a function taking its input by value
    ///
    /// The source field is cloned before the call.
    pub fn new<S, D, F>(f: F) -> Self
    where
        S: Any + Clone,
        D: Any,
        F: Fn(S) -> D + Send + Sync + 'static,
    {
        Self {
            input: ValueType::of::<S>(),
            output: ValueType::of::<D>(),
            call: Arc::new(move |value: &dyn Any| {
                value
                    .downcast_ref::<S>()
                    .map(|value| Box::new(f(value.clone())) as Box<dyn Any>)
            }),
        }
    }

    /// Wrap a function borrowing its input
    pub fn from_ref<S, D, F>(f: F) -> Self
    where
        S: Any,
        D: Any,
        F: Fn(&S) -> D + Send + Sync + 'static,
    {
        Self {
            input: ValueType::of::<S>(),
            output: ValueType::of::<D>(),
            call: Arc::new(move |value: &dyn Any| {
                value
                    .downcast_ref::<S>()
                    .map(|value| Box::new(f(value)) as Box<dyn Any>)
            }),
        }
    }

    /// The parameter type
    #[must_use]
    pub fn input(&self) -> ValueType {
        self.input
    }

    /// The return type
    #[must_use]
    pub fn output(&self) -> ValueType {
        self.output
    }

    /// Human-readable signature, e.g. `fn(i32) -> f64`
    #[must_use]
    pub fn signature(&self) -> String {
        signature(self.input, self.output)
    }

    /// Apply the converter
    ///
    /// Returns `None` if `value` is not of the input type.
    #[must_use]
    pub fn convert(&self, value: &dyn Any) -> Option<Box<dyn Any>> {
        (self.call)(value)
    }
}

impl fmt::Debug for Converter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Converter").field(&self.signature()).finish()
    }
}

pub(crate) fn signature(input: ValueType, output: ValueType) -> String {
    format!("fn({input}) -> {output}")
}
