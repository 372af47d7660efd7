//! Version-based synchronization strategies
//!
//! Decides which source packages may overwrite packages in a destination.
//! Both strategies share one filter and differ only in what happens to a
//! package that is not newer than the destination:
//!
//! - [`SyncStrategy::SkipOldVersions`] drops it and carries on
//! - [`SyncStrategy::ForceLatestVersions`] stops the whole batch
//!
//! A same-numbered snapshot in the destination is still mutable, so a source
//! package with the same version number may replace it.

pub mod audit;
pub mod latest;

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::domain::{Package, Version};

pub use audit::Verdict;
pub use latest::latest_per_name;

/// What to do with a package that would not move the destination forward
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Leave it out of the result
    Skip,
    /// Abort the batch with a [`Regression`]
    Abort,
}

/// Strategy selectable from the CLI and configuration
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum SyncStrategy {
    /// Best effort: skip packages that are not newer
    #[default]
    SkipOldVersions,
    /// All or nothing: refuse any package that is not newer
    ForceLatestVersions,
}

impl SyncStrategy {
    pub fn failure_policy(self) -> FailurePolicy {
        match self {
            SyncStrategy::SkipOldVersions => FailurePolicy::Skip,
            SyncStrategy::ForceLatestVersions => FailurePolicy::Abort,
        }
    }

    /// Run this strategy over a source and destination package list
    pub fn filter(
        self,
        source: &[Package],
        destination: &[Package],
    ) -> Result<Vec<Package>, Regression> {
        filter_higher_versions(source, destination, self.failure_policy())
    }
}

impl fmt::Display for SyncStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncStrategy::SkipOldVersions => f.write_str("skip-old-versions"),
            SyncStrategy::ForceLatestVersions => f.write_str("force-latest-versions"),
        }
    }
}

/// A source package that would downgrade or re-publish a final destination version
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error(
    "package '{name}' version {source_version} is not newer than destination version {destination_version}"
)]
pub struct Regression {
    pub name: String,
    pub source_version: Version,
    pub destination_version: Version,
}

impl Regression {
    pub fn new(source: &Package, destination: &Package) -> Self {
        Self {
            name: source.name().to_string(),
            source_version: source.version().clone(),
            destination_version: destination.version().clone(),
        }
    }
}

/// Whether `source` may overwrite the destination's latest same-named package
pub fn may_overwrite(source: &Package, latest: &Package) -> bool {
    match latest.compare_version(source) {
        Ordering::Equal => latest.is_snapshot(),
        diff => diff == Ordering::Less,
    }
}

/// Keep the source packages that are newer than the destination, in source order
///
/// Packages with no same-named destination package always pass. Every
/// evaluated package produces one audit line. Under [`FailurePolicy::Abort`]
/// the first failing package ends the call and nothing after it is evaluated.
pub fn filter_higher_versions(
    source: &[Package],
    destination: &[Package],
    policy: FailurePolicy,
) -> Result<Vec<Package>, Regression> {
    let latest = latest_per_name(destination);
    let mut cleared = Vec::with_capacity(source.len());

    audit::record_header();
    for package in source {
        let existing = latest.get(package.name()).copied();

        let Some(existing) = existing else {
            audit::record(Verdict::Pass, package, None);
            cleared.push(package.clone());
            continue;
        };

        if may_overwrite(package, existing) {
            audit::record(Verdict::Pass, package, Some(existing));
            cleared.push(package.clone());
            continue;
        }

        match policy {
            FailurePolicy::Skip => audit::record(Verdict::Skip, package, Some(existing)),
            FailurePolicy::Abort => {
                audit::record(Verdict::Fail, package, Some(existing));
                return Err(Regression::new(package, existing));
            }
        }
    }

    debug!(
        evaluated = source.len(),
        cleared = cleared.len(),
        "Strategy finished"
    );
    Ok(cleared)
}
