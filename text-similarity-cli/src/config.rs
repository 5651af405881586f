//! Scoring configuration loading
//!
//! Sources are layered, later ones winning: built-in defaults, the
//! configuration file, then `SIMILARITY_*` environment variables
//! (`SIMILARITY_BLEU__MAX_N`, `SIMILARITY_CHRF__BETA`, ...).

use anyhow::{Context as _, Result};
use config::{Config as ConfigLoader, Environment, File};
use std::path::{Path, PathBuf};
use text_similarity_core::ScoringConfig;

/// Config file looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_NAME: &str = "similarity";

/// Environment variable prefix
pub const ENV_PREFIX: &str = "SIMILARITY";

/// Where the configuration was read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Explicit `--config` path
    Explicit(PathBuf),
    /// Optional `similarity.{toml,yaml,json}` in the working directory
    WorkingDirectory,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Explicit(path) => write!(f, "{}", path.display()),
            Self::WorkingDirectory => write!(f, "./{}.{{toml,yaml,json}} (optional)", DEFAULT_CONFIG_NAME),
        }
    }
}

impl ConfigSource {
    pub fn from_arg(path: Option<&Path>) -> Self {
        match path {
            Some(path) => Self::Explicit(path.to_path_buf()),
            None => Self::WorkingDirectory,
        }
    }
}

/// Load and validate the scoring configuration
pub fn load(source: &ConfigSource) -> Result<ScoringConfig> {
    let file = match source {
        ConfigSource::Explicit(path) => File::from(path.as_path()).required(true),
        ConfigSource::WorkingDirectory => File::with_name(DEFAULT_CONFIG_NAME).required(false),
    };

    let loader = ConfigLoader::builder()
        .add_source(file)
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .with_context(|| format!("Failed to load configuration from {}", source))?;

    let config: ScoringConfig = loader
        .try_deserialize()
        .context("Failed to parse scoring configuration")?;
    config.check()?;

    Ok(config)
}
