//! Binscan CLI - builds client binary download manifests from a directory
//! of release archives.

mod cli;
mod commands;
mod error;
mod logger;
mod manifest;
mod output;
mod platform;
mod progress;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    logger::init(cli.verbose, cli.quiet);

    let formatter = output::create_formatter(cli.json, cli.verbose, cli.quiet);

    match &cli.command {
        cli::Commands::Manifest(args) => {
            commands::manifest::execute(args, &*formatter, cli.quiet || cli.json)
        }
        cli::Commands::Inspect(args) => commands::inspect::execute(args, &*formatter),
        cli::Commands::Completion(args) => {
            commands::completion::execute(args.shell);
            Ok(())
        }
    }
}
