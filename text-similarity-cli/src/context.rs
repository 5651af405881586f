//! CLI execution context

use anyhow::Result;
use text_similarity_core::ScoringConfig;

use crate::cli::Cli;
use crate::config::{self, ConfigSource};
use crate::output::OutputWriter;

/// Execution context for CLI commands
pub struct Context {
    /// Effective scoring configuration, before per-command overrides
    pub scoring: ScoringConfig,

    /// Where the configuration came from
    pub config_source: ConfigSource,

    /// Output writer
    pub output: OutputWriter,
}

impl Context {
    /// Create a new context from CLI arguments
    pub fn new(cli: &Cli) -> Result<Self> {
        let config_source = ConfigSource::from_arg(cli.config.as_deref());
        let scoring = config::load(&config_source)?;

        Ok(Self {
            scoring,
            config_source,
            output: OutputWriter::new(cli.output, cli.no_color),
        })
    }
}
