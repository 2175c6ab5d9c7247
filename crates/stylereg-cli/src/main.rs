//! stylereg - CLI entry point

use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Show {
            exprs,
            text,
            escaped,
        } => {
            let set = commands::register_set(&cli.configs)?;
            commands::show(&mut out, &set, &exprs, text.as_deref(), escaped)?;
        }
        Commands::List { register, escaped } => {
            let set = commands::register_set(&cli.configs)?;
            commands::list(&mut out, &set, &register, escaped)?;
        }
        Commands::Check { file } => commands::check(&mut out, &file)?,
    }

    out.flush()?;
    Ok(())
}
