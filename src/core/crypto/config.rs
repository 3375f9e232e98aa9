/*!
Algorithm factory configuration.

This module provides the options used to assemble an
[`AlgorithmFactory`](crate::core::crypto::registry::AlgorithmFactory):
which built-in engines are loaded and which provider is preferred for
particular algorithms.
*/

#[cfg(feature = "serde-support")]
use serde::{Deserialize, Serialize};

use crate::core::crypto::scan_name::ScanName;
use crate::core::error::Result;

/// Configuration of an algorithm factory
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
pub struct FactoryConfig {
    /// Load the built-in software engine
    pub load_software_engine: bool,
    /// Register the software engine's hash functions eagerly
    pub preload_builtin: bool,
    /// `(algorithm spec, provider name)` preferences
    pub preferred_providers: Vec<(String, String)>,
}

impl Default for FactoryConfig {
    fn default() -> Self {
        Self {
            load_software_engine: true,
            preload_builtin: false,
            preferred_providers: Vec::new(),
        }
    }
}

impl FactoryConfig {
    /// Create a new configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration without any engines
    pub fn minimal() -> Self {
        Self {
            load_software_engine: false,
            ..Self::default()
        }
    }

    /// Prefer `provider` whenever `algo_spec` is requested
    pub fn with_preferred_provider(mut self, algo_spec: &str, provider: &str) -> Self {
        self.preferred_providers.push((algo_spec.to_string(), provider.to_string()));
        self
    }

    /// Register the built-in hash functions at startup
    pub fn with_preload(mut self) -> Self {
        self.preload_builtin = true;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        for (algo_spec, _) in &self.preferred_providers {
            ScanName::parse(algo_spec)?;
        }
        Ok(())
    }
}
