use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("iteration limit must be positive")]
    ZeroIterationLimit,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct AStarConfig {
    /// Maximum number of main loop iterations, i.e. of nodes popped from the
    /// frontier.
    #[serde(default = "default_iteration_limit")]
    pub iteration_limit: usize,
    /// Log g, h, f and the open and closed list sizes on every expansion.
    #[serde(default)]
    pub verbose: bool,
    /// Count edges on which the heuristic is inconsistent. Purely diagnostic,
    /// the search behaves the same either way.
    #[serde(default)]
    pub check_consistency: bool,
}

fn default_iteration_limit() -> usize {
    500_000
}

impl Default for AStarConfig {
    fn default() -> Self {
        Self {
            iteration_limit: default_iteration_limit(),
            verbose: false,
            check_consistency: false,
        }
    }
}

impl AStarConfig {
    pub fn with_iteration_limit(iteration_limit: usize) -> Self {
        Self {
            iteration_limit,
            ..Default::default()
        }
    }

    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: AStarConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.iteration_limit == 0 {
            return Err(ConfigError::ZeroIterationLimit);
        }
        Ok(())
    }
}
