//! Sync command implementation
//!
//! Reads the source and destination manifests, runs the selected strategy
//! and prints or writes the packages cleared for promotion.

use std::path::{Path, PathBuf};

use console::Style;
use tracing::info;

use crate::cli::SyncArgs;
use crate::commands::helpers::resolve_workspace_path;
use crate::config::PromoterConfig;
use crate::config::manifest;
use crate::domain::Package;
use crate::error::{Result, manifest as manifest_error};
use crate::strategy::SyncStrategy;

/// Run sync command
pub fn run(workspace: Option<PathBuf>, args: SyncArgs) -> Result<()> {
    let workspace_path = resolve_workspace_path(workspace)?;
    let config = PromoterConfig::load(&workspace_path)?;
    let strategy = args.strategy.unwrap_or(config.strategy);

    let source = manifest::load_packages(&args.source)?;
    let destination = manifest::load_packages(&args.destination)?;

    info!(
        %strategy,
        source = source.len(),
        destination = destination.len(),
        "Evaluating packages"
    );

    let cleared = strategy.filter(&source, &destination)?;

    match args.output {
        Some(path) => {
            manifest::write_packages(&path, &cleared)?;
            print_summary(strategy, &cleared, source.len(), &path);
        }
        None => {
            let content = manifest::serialize_packages(&cleared, args.format)
                .map_err(|reason| manifest_error::serialize_failed("<stdout>", reason))?;
            print!("{content}");
        }
    }

    Ok(())
}

fn print_summary(strategy: SyncStrategy, cleared: &[Package], total: usize, path: &Path) {
    let green = Style::new().green().bold();
    let dim = Style::new().dim();

    println!(
        "{} {} of {} packages ({})",
        green.apply_to("Cleared"),
        cleared.len(),
        total,
        strategy
    );
    for package in cleared {
        println!("  {package}");
    }
    println!("{}", dim.apply_to(format!("Written to {}", path.display())));
}
