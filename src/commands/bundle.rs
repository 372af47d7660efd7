//! Bundle command implementation
//!
//! Discovers the bundles of a project and assembles one archive per bundle.
//! Command-line flags override `promoter.yaml`, which overrides the defaults.

use std::path::{Path, PathBuf};

use console::Style;
use tracing::info;

use crate::bundle::{self, Artifact, LocalFs};
use crate::cli::BundleArgs;
use crate::commands::helpers::{resolve_in_workspace, resolve_workspace_path};
use crate::config::PromoterConfig;
use crate::domain::Bundle;
use crate::error::{Result, bundle as bundle_error};

/// Run bundle command
pub fn run(workspace: Option<PathBuf>, args: BundleArgs) -> Result<()> {
    let workspace_path = resolve_workspace_path(workspace)?;
    let config = PromoterConfig::load(&workspace_path)?;

    let mut layout = config.bundle.layout();
    if let Some(descriptor) = args.descriptor {
        layout.descriptor = descriptor;
    }
    if let Some(payload) = args.payload {
        layout.payload = payload;
    }
    let extension = args.extension.unwrap_or(config.bundle.extension);
    let root = args.root.unwrap_or_else(|| workspace_path.clone());
    let output_dir = match args.output {
        Some(path) => path,
        None => resolve_in_workspace(&workspace_path, &config.bundle.output),
    };

    let bundles = if args.direct {
        bundle::discover(&LocalFs, &root, &args.name, &layout)?
    } else {
        bundle::discover_project(&LocalFs, &root, &args.name, &layout)?
    };

    if bundles.is_empty() {
        return Err(bundle_error::none_found(root.display().to_string()));
    }

    info!(root = %root.display(), count = bundles.len(), "Discovered bundles");

    if args.dry_run {
        print_bundles(&bundles, &output_dir, &extension);
        return Ok(());
    }

    let output = bundle::build(&bundles, &output_dir, &extension)?;

    let count = output.artifacts().count();
    for (index, artifact) in output.artifacts().enumerate() {
        let label = if index + 1 == count {
            "Primary"
        } else {
            "Companion"
        };
        print_artifact(label, artifact);
    }

    Ok(())
}

fn print_bundles(bundles: &[Bundle], output_dir: &Path, extension: &str) {
    println!("Bundles ({}):", bundles.len());
    for bundle in bundles {
        println!(
            "  {} {}",
            Style::new().bold().yellow().apply_to(&bundle.derived_name),
            Style::new().dim().apply_to(bundle.root_directory.display())
        );
        println!(
            "    -> {}",
            output_dir.join(bundle.archive_file_name(extension)).display()
        );
    }
}

fn print_artifact(label: &str, artifact: &Artifact) {
    println!(
        "{} {}",
        Style::new().green().bold().apply_to(format!("{label:>9}")),
        artifact.path.display()
    );
    println!(
        "          {} files, {}",
        artifact.files,
        Style::new().dim().apply_to(&artifact.digest)
    );
}
