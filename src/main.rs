//! Promoter - version-safe package promotion and bundle builds
//!
//! Decides which content packages may be promoted from one environment to
//! another without downgrading the destination, and assembles one or more
//! deployable bundle archives from a build output tree.

use clap::Parser;

mod bundle;
mod cli;
mod commands;
mod config;
mod domain;
mod error;
mod hash;
mod logging;
mod strategy;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Sync(args) => commands::sync::run(cli.workspace, args),
        Commands::Bundle(args) => commands::bundle::run(cli.workspace, args),
        Commands::Compare(args) => commands::compare::run(args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
