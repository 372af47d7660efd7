//! Bundle discovery
//!
//! A directory is a bundle root when it directly contains the descriptor
//! file and the payload directory. Discovery looks for such roots one level
//! below a directory and falls back to the directory itself.

use std::path::Path;

use tracing::{debug, warn};

use super::listing::DirectoryListing;
use crate::domain::{Bundle, BundleLayout};
use crate::error::{Result, bundle as bundle_error};

/// Check whether `dir` is a bundle root under `layout`
pub fn qualifies<L>(listing: &L, dir: &Path, layout: &BundleLayout) -> bool
where
    L: DirectoryListing + ?Sized,
{
    listing.is_file(&dir.join(&layout.descriptor)) && listing.is_dir(&dir.join(&layout.payload))
}

/// Discover the bundles directly under `root`
///
/// Returns an empty list when `root` is not a directory. Qualifying
/// subdirectories become `<base_name>_<subdir>` bundles sorted by name; when
/// none qualify, `root` itself is returned as a single bundle named
/// `base_name`.
pub fn discover<L>(
    listing: &L,
    root: &Path,
    base_name: &str,
    layout: &BundleLayout,
) -> Result<Vec<Bundle>>
where
    L: DirectoryListing + ?Sized,
{
    if !listing.is_dir(root) {
        debug!(root = %root.display(), "Bundle root is not a directory");
        return Ok(Vec::new());
    }

    let mut bundles = nested_bundles(listing, root, base_name, layout)?;
    if bundles.is_empty() {
        bundles.push(Bundle::new(root, base_name, layout));
    }
    Ok(bundles)
}

/// Discover the bundles of a project in either accepted layout
///
/// Nested: `<project>/<payload>/<action>/{descriptor, payload/}`, one bundle
/// per action. Flat: `<project>/{descriptor, payload/}`, used when no nested
/// action qualifies.
pub fn discover_project<L>(
    listing: &L,
    project_root: &Path,
    base_name: &str,
    layout: &BundleLayout,
) -> Result<Vec<Bundle>>
where
    L: DirectoryListing + ?Sized,
{
    if !listing.is_dir(project_root) {
        debug!(root = %project_root.display(), "Project root is not a directory");
        return Ok(Vec::new());
    }

    let payload_root = project_root.join(&layout.payload);
    let mut bundles = if listing.is_dir(&payload_root) {
        nested_bundles(listing, &payload_root, base_name, layout)?
    } else {
        Vec::new()
    };

    if bundles.is_empty() {
        bundles.push(Bundle::new(project_root, base_name, layout));
    }
    Ok(bundles)
}

fn nested_bundles<L>(
    listing: &L,
    root: &Path,
    base_name: &str,
    layout: &BundleLayout,
) -> Result<Vec<Bundle>>
where
    L: DirectoryListing + ?Sized,
{
    let mut subdirs = listing
        .subdirectories(root)
        .map_err(|e| bundle_error::discovery_failed(root.display().to_string(), e.to_string()))?;
    subdirs.sort();

    let mut bundles = Vec::new();
    for dir in subdirs {
        if !qualifies(listing, &dir, layout) {
            continue;
        }
        let Some(name) = dir.file_name().and_then(|n| n.to_str()) else {
            warn!(dir = %dir.display(), "Skipping bundle directory with a non UTF-8 name");
            continue;
        };
        let derived_name = format!("{base_name}_{name}");
        debug!(bundle = %derived_name, dir = %dir.display(), "Discovered bundle");
        bundles.push(Bundle::new(&dir, derived_name, layout));
    }
    Ok(bundles)
}
