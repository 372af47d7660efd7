//! Bundle domain types
//!
//! A bundle is a directory holding a metadata descriptor and a payload
//! subtree that together become one archive artifact.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Default metadata descriptor file name
pub const DEFAULT_DESCRIPTOR: &str = "package.json";

/// Default payload directory name
pub const DEFAULT_PAYLOAD: &str = "dist";

/// File and directory names that make a directory a bundle root
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleLayout {
    /// Descriptor file name, e.g. `package.json`
    pub descriptor: String,

    /// Payload directory name, e.g. `dist`
    pub payload: String,
}

impl Default for BundleLayout {
    fn default() -> Self {
        Self {
            descriptor: DEFAULT_DESCRIPTOR.to_string(),
            payload: DEFAULT_PAYLOAD.to_string(),
        }
    }
}

/// A discovered bundle, consumed by the assembler
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bundle {
    pub root_directory: PathBuf,
    pub metadata_file: PathBuf,
    pub payload_directory: PathBuf,
    /// `<base>` for a project root, `<base>_<subfolder>` for nested bundles
    pub derived_name: String,
}

impl Bundle {
    pub fn new(root: &Path, derived_name: impl Into<String>, layout: &BundleLayout) -> Self {
        Self {
            root_directory: root.to_path_buf(),
            metadata_file: root.join(&layout.descriptor),
            payload_directory: root.join(&layout.payload),
            derived_name: derived_name.into(),
        }
    }

    /// Archive file name for this bundle
    pub fn archive_file_name(&self, extension: &str) -> String {
        format!("{}.{}", self.derived_name, extension.trim_start_matches('.'))
    }
}
