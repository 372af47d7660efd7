//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - sync: Sync command arguments
//! - bundle: Bundle command arguments
//! - compare: Compare command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod bundle;
pub mod compare;
pub mod completions;
pub mod sync;

pub use bundle::BundleArgs;
pub use compare::CompareArgs;
pub use completions::CompletionsArgs;
pub use sync::SyncArgs;

/// Promoter - safe package promotion and bundle builds
///
/// Decide which packages may move from one environment to another without
/// downgrading the destination, and turn build output into bundle archives.
#[derive(Parser, Debug)]
#[command(
    name = "promoter",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Version-safe package promotion and multi-bundle archive builds",
    long_about = "Promoter decides which content packages may be promoted from a source \
                  environment to a destination without downgrading it, and assembles one \
                  or more deployable bundle archives from a build output tree.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  promoter sync -s dev.yaml -d prod.yaml            \x1b[90m# Packages safe to promote\x1b[0m\n   \
                  promoter sync -s dev.yaml -d prod.yaml --strategy force-latest-versions\n   \
                  promoter bundle --name my-actions                 \x1b[90m# Build bundle archives\x1b[0m\n   \
                  promoter compare 1.2.0-SNAPSHOT 1.2.0             \x1b[90m# Compare two versions\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Workspace directory holding promoter.yaml (defaults to current directory)
    #[arg(long, short = 'w', global = true, env = "PROMOTER_WORKSPACE")]
    pub workspace: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Select the source packages that may overwrite the destination
    Sync(SyncArgs),

    /// Discover bundles in a build output tree and archive them
    Bundle(BundleArgs),

    /// Compare two package versions
    Compare(CompareArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
