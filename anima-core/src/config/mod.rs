//! Configuration loading for Anima.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

pub mod evolution_config;
pub mod vocabulary_config;

pub use evolution_config::EvolutionConfig;
pub use vocabulary_config::VocabularyConfig;

/// Root configuration document, loadable from TOML.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AnimaConfig {
    pub evolution: EvolutionConfig,
    pub vocabulary: VocabularyConfig,
}

impl AnimaConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&raw).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })?;
        ::tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }
}
