//! Configuration for the glue `Engine`.

use serde::{Deserialize, Serialize};

use crate::engine::GlueOptions;

/// Configuration for an `Engine`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Options every copy starts from, before its own option tokens
    pub defaults: GlueOptions,
    /// Initial capacity of the attribute cache
    pub attribute_capacity: usize,
    /// Initial capacity of the conversion registry
    pub conversion_capacity: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            defaults: GlueOptions::default(),
            attribute_capacity: 32,
            conversion_capacity: 32,
        }
    }
}
