//! Options controlling how a copy behaves.

use serde::{Deserialize, Serialize};

/// The resolved switches of one copy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlueOptions {
    /// Drive the copy from the source's fields and aliases instead of the
    /// destination's
    pub favor_source: bool,
    /// Fail when a driving field has no counterpart instead of skipping it
    pub strict: bool,
}

impl GlueOptions {
    /// Enable favor-source
    #[must_use]
    pub fn favor_source(mut self) -> Self {
        self.favor_source = true;
        self
    }

    /// Enable strict mode
    #[must_use]
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Apply `options` in order on top of `self`
    #[must_use]
    pub fn with(mut self, options: &[GlueOption]) -> Self {
        for option in options {
            option.apply(&mut self);
        }
        self
    }
}

/// A single option token passed to a copy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlueOption {
    /// Push the source's fields into the destination
    FavorSource,
    /// Return an error when a driving field is unsatisfied
    Strict,
}

impl GlueOption {
    /// Set the switch this option controls
    pub fn apply(self, options: &mut GlueOptions) {
        match self {
            Self::FavorSource => options.favor_source = true,
            Self::Strict => options.strict = true,
        }
    }
}
