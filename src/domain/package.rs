//! Content package records
//!
//! A package is identified by its name; the version decides which of two
//! same-named packages is newer.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::version::Version;
#[cfg(test)]
use super::version::VersionError;

/// A named, versioned unit of content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "PackageEntry")]
pub struct Package {
    name: String,
    version: Version,
    snapshot: bool,
}

/// Manifest shape of a package, where `snapshot` may be omitted
#[derive(Deserialize)]
struct PackageEntry {
    name: String,
    version: Version,
    #[serde(default)]
    snapshot: Option<bool>,
}

impl From<PackageEntry> for Package {
    fn from(entry: PackageEntry) -> Self {
        let package = Package::new(entry.name, entry.version);
        match entry.snapshot {
            Some(snapshot) => package.with_snapshot(snapshot),
            None => package,
        }
    }
}

impl Package {
    /// Create a package; the snapshot flag follows the version qualifier
    pub fn new(name: impl Into<String>, version: Version) -> Self {
        let snapshot = version.is_snapshot();
        Self {
            name: name.into(),
            version,
            snapshot,
        }
    }

    /// Create a package from a version string
    #[cfg(test)]
    pub fn parse(name: impl Into<String>, version: &str) -> Result<Self, VersionError> {
        Ok(Self::new(name, Version::parse(version)?))
    }

    /// Override the snapshot flag
    #[must_use]
    pub fn with_snapshot(mut self, snapshot: bool) -> Self {
        self.snapshot = snapshot;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &Version {
        &self.version
    }

    pub fn is_snapshot(&self) -> bool {
        self.snapshot
    }

    /// Compare versions; only meaningful for packages with the same name
    pub fn compare_version(&self, other: &Package) -> Ordering {
        self.version.cmp(&other.version)
    }
}

impl fmt::Display for Package {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.version)
    }
}
