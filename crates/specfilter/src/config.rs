//! # Configuration
//!
//! Configuration is managed by [`confique`], which handles layered loading
//! from a TOML file, environment variables, and compiled defaults.
//!
//! ## Resolution Order
//!
//! 1. **Environment variables**: `SPECFILTER_EVALUATION`.
//! 2. **Config file**: `specfilter.toml` in the directory passed to [`SpecConfig::load`].
//!    A missing file is not an error.
//! 3. **Compiled Defaults**: short-circuit evaluation.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `evaluation` | `short_circuit` | How composites built through the config visit children (`short_circuit` or `exhaustive`) |

use std::path::Path;

use confique::Config;
use serde::de::IntoDeserializer;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::spec::{AndSpecification, BoxedSpec, Evaluation, OrSpecification};

pub const CONFIG_FILENAME: &str = "specfilter.toml";

fn parse_evaluation(value: &str) -> std::result::Result<Evaluation, serde::de::value::Error> {
    Evaluation::deserialize(value.trim().into_deserializer())
}

/// Configuration for specfilter, stored in `specfilter.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct SpecConfig {
    /// Evaluation mode for AND / OR composites.
    /// When absent, composites short-circuit.
    #[config(env = "SPECFILTER_EVALUATION", parse_env = parse_evaluation)]
    pub evaluation: Option<Evaluation>,
}

impl SpecConfig {
    /// Load config from the given directory, falling back to defaults.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let path = config_dir.as_ref().join(CONFIG_FILENAME);
        let config = Self::builder().env().file(path).load()?;
        Ok(config)
    }

    /// Get the evaluation mode, using the default if not configured.
    pub fn evaluation(&self) -> Evaluation {
        self.evaluation.unwrap_or_default()
    }

    /// Build an AND composite using the configured evaluation mode.
    pub fn and<T: ?Sized>(
        &self,
        children: impl IntoIterator<Item = BoxedSpec<T>>,
    ) -> Result<AndSpecification<T>> {
        Ok(AndSpecification::new(children)?.with_evaluation(self.evaluation()))
    }

    /// Build an OR composite using the configured evaluation mode.
    pub fn or<T: ?Sized>(
        &self,
        children: impl IntoIterator<Item = BoxedSpec<T>>,
    ) -> Result<OrSpecification<T>> {
        Ok(OrSpecification::new(children)?.with_evaluation(self.evaluation()))
    }
}
