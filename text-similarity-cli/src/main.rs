use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod config;
mod context;
mod input;
mod output;

use cli::{Cli, Commands};
use context::Context;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli) {
        output::print_error(&format!("{err:#}"));
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "similarity=debug,text_similarity_metrics=debug"
    } else {
        "similarity=warn,text_similarity_metrics=warn"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let ctx = Context::new(&cli)?;
    tracing::debug!(config = ?ctx.scoring, "configuration loaded");

    match cli.command {
        Commands::Score(args) => commands::score::score(&ctx, args),
        Commands::Bleu(args) => commands::score::bleu(&ctx, args),
        Commands::Rouge(args) => commands::score::rouge(&ctx, args),
        Commands::Chrf(args) => commands::score::chrf(&ctx, args),
        Commands::Config(cmd) => commands::config::execute(&ctx, cmd),
    }
}
