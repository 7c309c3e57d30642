//! CLI configuration loaded with Figment
//!
//! Sources in precedence order (later sources override earlier ones):
//! 1. Built-in defaults
//! 2. The configuration file (`--config`, else `./anniconecta-kanban.yaml`)
//! 3. `ANNICONECTA_`-prefixed environment variables
//!
//! Command-line flags are applied on top by the caller.

use crate::cli::OutputFormat;
use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

pub const CONFIG_FILE_NAME: &str = "anniconecta-kanban.yaml";
pub const ENV_PREFIX: &str = "ANNICONECTA_";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Failed to parse configuration: {source}")]
    ParseError {
        #[from]
        source: figment::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Seed board file; the built-in demo board when absent
    #[serde(default)]
    pub seed: Option<PathBuf>,
    /// Actor recorded on logged operations
    #[serde(default)]
    pub actor: Option<String>,
    #[serde(default)]
    pub format: OutputFormat,
}

impl CliConfig {
    /// Load configuration from defaults, file and environment
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match explicit {
            Some(path) if !path.exists() => {
                return Err(ConfigError::FileNotFound {
                    path: path.to_path_buf(),
                })
            }
            Some(path) => path.to_path_buf(),
            None => PathBuf::from(CONFIG_FILE_NAME),
        };
        debug!(file = %file.display(), "loading configuration");

        let config = Self::figment(&file)
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()?;
        Ok(config)
    }

    /// Defaults plus one configuration file; a missing file contributes nothing
    pub fn figment(file: &Path) -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Yaml::file(file))
    }
}
