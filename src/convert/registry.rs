//! Registry of converters keyed by (destination type, source type).

use std::any::{Any, TypeId};
use std::sync::{PoisonError, RwLock};

use rustc_hash::FxHashMap;

use crate::convert::converter::{signature, Converter};
use crate::error::RegistrationError;
use crate::schema::ValueType;

/// Key of a registered conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConversionKey {
    /// Type of the destination field
    pub dst: TypeId,
    /// Type of the source field
    pub src: TypeId,
}

impl ConversionKey {
    /// Key for converting `S` values into `D` fields
    #[must_use]
    pub fn of<D: Any, S: Any>() -> Self {
        Self {
            dst: TypeId::of::<D>(),
            src: TypeId::of::<S>(),
        }
    }
}

/// Thread-safe store of converters
///
/// Readers clone the `Arc`-backed converter and release the lock before
/// calling it, so a conversion never blocks writers for longer than a lookup.
#[derive(Debug)]
pub struct ConversionRegistry {
    converters: RwLock<FxHashMap<ConversionKey, Converter>>,
}

impl ConversionRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty registry sized for `capacity` conversions
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let mut converters = FxHashMap::default();
        converters.reserve(capacity);
        Self {
            converters: RwLock::new(converters),
        }
    }

    /// Register `converter` for `S` source fields and `D` destination fields
    ///
    /// The hints are only used for their types. `converter` must be a
    /// [`Converter`] taking `S` and returning `D`; a previous registration for
    /// the same pair is replaced. A bare closure is rejected as
    /// [`RegistrationError::NotCallable`]: wrap it with [`Converter::new`] or
    /// use [`register_fn`](Self::register_fn).
    pub fn register<D, S, C>(
        &self,
        dst_hint: D,
        src_hint: S,
        converter: C,
    ) -> Result<(), RegistrationError>
    where
        D: Any,
        S: Any,
        C: Any,
    {
        let _ = (dst_hint, src_hint);

        let Some(converter) = (&converter as &dyn Any).downcast_ref::<Converter>() else {
            return Err(RegistrationError::NotCallable {
                found: std::any::type_name::<C>(),
            });
        };

        let (input, output) = (ValueType::of::<S>(), ValueType::of::<D>());
        if converter.input() != input || converter.output() != output {
            return Err(RegistrationError::IncompatibleSignature {
                expected: signature(input, output),
                found: converter.signature(),
            });
        }

        self.insert(ConversionKey::of::<D, S>(), converter.clone());
        Ok(())
    }

    /// Register a typed conversion function
    pub fn register_fn<D, S, F>(&self, f: F)
    where
        D: Any,
        S: Any + Clone,
        F: Fn(S) -> D + Send + Sync + 'static,
    {
        self.insert(ConversionKey::of::<D, S>(), Converter::new(f));
    }

    /// Register a converter, panicking if it is rejected
    ///
    /// Returns `true` so it can initialize a static at startup.
    ///
    /// # Panics
    /// Panics with the [`RegistrationError`] that [`register`](Self::register)
    /// would have returned.
    pub fn must_register<D, S, C>(&self, dst_hint: D, src_hint: S, converter: C) -> bool
    where
        D: Any,
        S: Any,
        C: Any,
    {
        if let Err(err) = self.register(dst_hint, src_hint, converter) {
            panic!("{err}");
        }
        true
    }

    /// Remove the conversion for `S` into `D`
    ///
    /// Returns whether a conversion was registered.
    pub fn deregister<D: Any, S: Any>(&self, dst_hint: D, src_hint: S) -> bool {
        let _ = (dst_hint, src_hint);
        let key = ConversionKey::of::<D, S>();
        let removed = self
            .converters
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&key)
            .is_some();
        if removed {
            log::debug!(
                "Deregistered conversion {} -> {}",
                std::any::type_name::<S>(),
                std::any::type_name::<D>()
            );
        }
        removed
    }

    /// Find the converter for `src` values into `dst` fields
    #[must_use]
    pub fn lookup(&self, dst: TypeId, src: TypeId) -> Option<Converter> {
        self.converters
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&ConversionKey { dst, src })
            .cloned()
    }

    /// Whether a conversion for `S` into `D` is registered
    #[must_use]
    pub fn contains<D: Any, S: Any>(&self) -> bool {
        self.lookup(TypeId::of::<D>(), TypeId::of::<S>()).is_some()
    }

    /// Number of registered conversions
    #[must_use]
    pub fn len(&self) -> usize {
        self.converters
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether no conversion is registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn insert(&self, key: ConversionKey, converter: Converter) {
        let signature = converter.signature();
        self.converters
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key, converter);
        log::debug!("Registered conversion {signature}");
    }
}

impl Default for ConversionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
