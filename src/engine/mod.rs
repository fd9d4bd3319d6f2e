//! The glue engine: copies matching fields from one record into another.
//!
//! A copy is driven by one side's field list. For every driving field the
//! engine resolves the counterpart on the other record by alias, picks a
//! direct clone or a registered conversion, and assigns the destination.
//! Missing counterparts, type mismatches without a converter and restricted
//! fields are skipped; only strict mode turns a missing counterpart into an
//! error.

pub mod options;
pub mod resolve;

use std::any::Any;
use std::sync::{Arc, LazyLock};

pub use options::{GlueOption, GlueOptions};

use crate::attributes::{AttributeCache, FieldDescriptor, TypeAttributes, IGNORE_MARKER};
use crate::config::EngineConfig;
use crate::convert::{ConversionRegistry, Converter};
use crate::error::{GlueError, RegistrationError, Result, Side};
use crate::schema::{lookup_record, Record, RecordSchema};

static GLOBAL: LazyLock<Engine> = LazyLock::new(Engine::default);

/// Owner of the attribute cache and conversion registry
///
/// Share one engine between every caller that should see the same
/// conversions; all methods take `&self` and are safe to call concurrently.
#[derive(Debug)]
pub struct Engine {
    config: EngineConfig,
    attributes: AttributeCache,
    conversions: ConversionRegistry,
}

impl Engine {
    /// Create an engine with the given configuration
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self {
            attributes: AttributeCache::with_capacity(config.attribute_capacity),
            conversions: ConversionRegistry::with_capacity(config.conversion_capacity),
            config,
        }
    }

    /// The process-wide engine used by the crate-level functions
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// The engine's configuration
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The engine's conversion registry
    #[must_use]
    pub fn conversions(&self) -> &ConversionRegistry {
        &self.conversions
    }

    /// The cached driving-field attributes of `T`
    ///
    /// # Panics
    /// Panics if `T` declares an invalid alias.
    pub fn attributes<T: Record>(&self) -> Arc<TypeAttributes> {
        self.attributes.get(T::schema())
    }

    /// Copy matching fields from `src` into `dst` using the configured defaults
    pub fn glue<D: Record, S: Record>(&self, dst: &mut D, src: &S) -> Result<()> {
        self.glue_with(dst, src, &[])
    }

    /// Copy matching fields from `src` into `dst`
    ///
    /// # Panics
    /// Panics if the driving record declares an invalid alias.
    pub fn glue_with<D: Record, S: Record>(
        &self,
        dst: &mut D,
        src: &S,
        options: &[GlueOption],
    ) -> Result<()> {
        let options = self.config.defaults.with(options);
        self.glue_records(D::schema(), dst, S::schema(), src, options)
    }

    /// Copy between type-erased values
    ///
    /// Both values must be derived records; otherwise
    /// [`GlueError::InvalidArgument`] is returned before anything is written.
    pub fn glue_any(
        &self,
        dst: &mut dyn Any,
        src: &dyn Any,
        options: &[GlueOption],
    ) -> Result<()> {
        let dst_schema = lookup_record((*dst).type_id()).ok_or(GlueError::InvalidArgument {
            side: Side::Destination,
        })?;
        let src_schema = lookup_record((*src).type_id()).ok_or(GlueError::InvalidArgument {
            side: Side::Source,
        })?;

        let options = self.config.defaults.with(options);
        self.glue_records(dst_schema, dst, src_schema, src, options)
    }

    /// Register a converter; see [`ConversionRegistry::register`]
    pub fn register_conversion<D: Any, S: Any, C: Any>(
        &self,
        dst_hint: D,
        src_hint: S,
        converter: C,
    ) -> std::result::Result<(), RegistrationError> {
        self.conversions.register(dst_hint, src_hint, converter)
    }

    /// Remove a converter; see [`ConversionRegistry::deregister`]
    pub fn deregister_conversion<D: Any, S: Any>(&self, dst_hint: D, src_hint: S) -> bool {
        self.conversions.deregister(dst_hint, src_hint)
    }

    fn glue_records(
        &self,
        dst_schema: &'static RecordSchema,
        dst: &mut dyn Any,
        src_schema: &'static RecordSchema,
        src: &dyn Any,
        options: GlueOptions,
    ) -> Result<()> {
        let (driving, other) = if options.favor_source {
            (src_schema, dst_schema)
        } else {
            (dst_schema, src_schema)
        };
        let attributes = self.attributes.get(driving);

        for attribute in attributes.iter() {
            let alias = attribute.alias;

            let Some(counterpart) = resolve::find_field(other, alias) else {
                if options.strict {
                    log::debug!(
                        "Strict glue {} <- {} failed: no counterpart for `{alias}`",
                        dst_schema.name,
                        src_schema.name
                    );
                    return Err(GlueError::UnsatisfiedField { alias });
                }
                log::trace!("Skipping `{alias}`: no counterpart in {}", other.name);
                continue;
            };

            let (dst_field, src_field) = if options.favor_source {
                (&counterpart, &attribute.descriptor)
            } else {
                (&attribute.descriptor, &counterpart)
            };

            let converter = if dst_field.value_type() == src_field.value_type() {
                None
            } else if let Some(converter) = self
                .conversions
                .lookup(dst_field.value_type().id(), src_field.value_type().id())
            {
                Some(converter)
            } else {
                log::trace!(
                    "Skipping `{alias}`: no conversion {} -> {}",
                    src_field.value_type(),
                    dst_field.value_type()
                );
                continue;
            };

            if !dst_field.settable || !src_field.settable {
                log::trace!("Skipping `{alias}`: field is not public");
                continue;
            }

            // Excluded destination fields are only resolved under favor-source
            if dst_field.field.annotation == Some(IGNORE_MARKER) {
                log::trace!("Skipping `{alias}`: destination field is excluded");
                continue;
            }

            if !copy_field(
                (dst_schema, &mut *dst, dst_field),
                (src_schema, src, src_field),
                converter.as_ref(),
            ) {
                log::warn!(
                    "Could not assign `{alias}` of {} from {}",
                    dst_schema.name,
                    src_schema.name
                );
            }
        }

        Ok(())
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

/// Assign one resolved field, converting if needed
fn copy_field(
    (dst_schema, dst, dst_field): (&'static RecordSchema, &mut dyn Any, &FieldDescriptor),
    (src_schema, src, src_field): (&'static RecordSchema, &dyn Any, &FieldDescriptor),
    converter: Option<&Converter>,
) -> bool {
    let Some(ops) = dst_field.field.ops else {
        return false;
    };
    let Some((_, value)) = src_schema.field_ref(src, &src_field.path) else {
        return false;
    };
    let Some((_, slot)) = dst_schema.field_mut(dst, &dst_field.path) else {
        return false;
    };

    match converter {
        None => (ops.assign)(slot, value),
        Some(converter) => converter
            .convert(value)
            .is_some_and(|converted| (ops.put)(slot, converted)),
    }
}
