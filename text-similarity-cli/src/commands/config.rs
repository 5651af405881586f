//! Configuration commands

use anyhow::Result;
use clap::{Args, Subcommand};
use comfy_table::Cell;
use text_similarity_core::ScoringConfig;
use text_similarity_metrics::ROUGE_L_BETA;

use crate::config::ENV_PREFIX;
use crate::context::Context;
use crate::output::{print_field, print_section, OutputFormat, TableDisplay};

/// Configuration inspection commands
#[derive(Debug, Args)]
pub struct ConfigCommands {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Show the effective scoring configuration
    Show,

    /// Show where configuration is read from
    Path,
}

/// Execute configuration commands
pub fn execute(ctx: &Context, cmd: ConfigCommands) -> Result<()> {
    match cmd.command {
        ConfigSubcommand::Show => show(ctx),
        ConfigSubcommand::Path => show_paths(ctx),
    }
}

fn show(ctx: &Context) -> Result<()> {
    ctx.output.write(&ctx.scoring)
}

fn show_paths(ctx: &Context) -> Result<()> {
    if ctx.output.format() != OutputFormat::Table {
        ctx.output.info(&ctx.config_source.to_string());
        return Ok(());
    }

    print_section("Configuration sources");
    print_field("file", &ctx.config_source.to_string());
    print_field("environment", &format!("{}_<SECTION>__<KEY>", ENV_PREFIX));
    Ok(())
}

impl TableDisplay for ScoringConfig {
    fn headers(&self) -> Vec<&'static str> {
        vec!["Setting", "Value"]
    }

    fn to_rows(&self) -> Vec<Vec<Cell>> {
        vec![
            vec![Cell::new("bleu.max_n"), Cell::new(self.bleu.max_n)],
            vec![Cell::new("chrf.n_max"), Cell::new(self.chrf.n_max)],
            vec![Cell::new("chrf.beta"), Cell::new(self.chrf.beta)],
            vec![Cell::new("rouge.l_beta (fixed)"), Cell::new(ROUGE_L_BETA)],
        ]
    }

    fn to_compact(&self) -> String {
        format!(
            "bleu.max_n={} chrf.n_max={} chrf.beta={}",
            self.bleu.max_n, self.chrf.n_max, self.chrf.beta
        )
    }
}
