//! Command-line argument definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::config::ConfigCommands;
use crate::commands::score::{BleuArgs, ChrfArgs, RougeArgs, ScoreArgs};
use crate::output::OutputFormat;

/// Classical text similarity scoring: BLEU, ROUGE and ChrF
#[derive(Debug, Parser)]
#[command(name = "similarity", version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a scoring configuration file (TOML, YAML or JSON)
    #[arg(long, global = true, env = "SIMILARITY_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Score a pair with every scorer and print a merged report
    Score(ScoreArgs),

    /// BLEU: n-gram precision with brevity penalty
    Bleu(BleuArgs),

    /// ROUGE-1, ROUGE-2 and LCS-based ROUGE-L
    Rouge(RougeArgs),

    /// Character n-gram F-score
    Chrf(ChrfArgs),

    /// Inspect the effective scoring configuration
    Config(ConfigCommands),
}
