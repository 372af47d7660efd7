//! Build driver for a discovery batch
//!
//! Host build systems accept a single primary output per build unit, so the
//! last archive of a batch is the primary artifact and every earlier one is
//! attached as a companion.

use std::path::Path;

use tracing::info;

use super::assembler::{Artifact, assemble};
use crate::domain::Bundle;
use crate::error::{Result, bundle as bundle_error};

/// Archives produced for one build unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOutput {
    pub primary: Artifact,
    pub companions: Vec<Artifact>,
}

impl BuildOutput {
    /// All artifacts in build order, primary last
    pub fn artifacts(&self) -> impl Iterator<Item = &Artifact> {
        self.companions.iter().chain(std::iter::once(&self.primary))
    }
}

/// Assemble every bundle in order into `output_dir`
///
/// Stops at the first failing bundle. Archives already written for earlier
/// bundles stay on disk.
pub fn build(bundles: &[Bundle], output_dir: &Path, extension: &str) -> Result<BuildOutput> {
    let Some((last, rest)) = bundles.split_last() else {
        return Err(bundle_error::none_found(output_dir.display().to_string()));
    };

    let mut companions = Vec::with_capacity(rest.len());
    for bundle in rest {
        info!(bundle = %bundle.derived_name, "Building companion bundle");
        companions.push(assemble(bundle, output_dir, extension)?);
    }

    info!(bundle = %last.derived_name, "Building primary bundle");
    let primary = assemble(last, output_dir, extension)?;

    Ok(BuildOutput {
        primary,
        companions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BundleLayout;
    use crate::error::PromoterError;
    use tempfile::TempDir;

    fn make_bundle(root: &Path, name: &str) -> Bundle {
        std::fs::create_dir_all(root.join("dist")).unwrap();
        std::fs::write(root.join("package.json"), "{}").unwrap();
        std::fs::write(root.join("dist/index.js"), name).unwrap();
        Bundle::new(root, name, &BundleLayout::default())
    }

    #[test]
    fn test_single_bundle_is_primary() {
        let project = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let bundles = vec![make_bundle(project.path(), "demo")];

        let output = build(&bundles, out.path(), "tgz").unwrap();
        assert_eq!(output.primary.name, "demo");
        assert!(output.companions.is_empty());
    }

    #[test]
    fn test_last_bundle_is_primary() {
        let project = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let bundles = vec![
            make_bundle(&project.path().join("a"), "demo_a"),
            make_bundle(&project.path().join("b"), "demo_b"),
            make_bundle(&project.path().join("c"), "demo_c"),
        ];

        let output = build(&bundles, out.path(), "tgz").unwrap();
        assert_eq!(output.primary.name, "demo_c");
        let companions: Vec<_> = output.companions.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(companions, vec!["demo_a", "demo_b"]);
        assert_eq!(output.artifacts().count(), 3);
        assert!(output.artifacts().all(|a| a.path.is_file()));
    }

    #[test]
    fn test_failure_keeps_earlier_archives() {
        let project = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let broken_root = project.path().join("broken");
        std::fs::create_dir_all(&broken_root).unwrap();
        let bundles = vec![
            make_bundle(&project.path().join("a"), "demo_a"),
            Bundle::new(&broken_root, "demo_broken", &BundleLayout::default()),
        ];

        let err = build(&bundles, out.path(), "tgz").unwrap_err();
        assert!(matches!(err, PromoterError::DescriptorMissing { .. }));
        assert!(out.path().join("demo_a.tgz").is_file());
        assert!(!out.path().join("demo_broken.tgz").exists());
    }

    #[test]
    fn test_empty_batch_is_an_error() {
        let out = TempDir::new().unwrap();
        let err = build(&[], out.path(), "tgz").unwrap_err();
        assert!(matches!(err, PromoterError::NoBundlesFound { .. }));
    }
}
