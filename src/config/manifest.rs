//! Package manifests
//!
//! A manifest lists the packages of one environment as exported by the
//! transport layer. It is either a bare list or an object with a `packages`
//! list; each entry has a `name`, a `version` and an optional `snapshot`.
//! Files ending in `.json` are JSON, everything else is YAML.

use std::path::Path;

use tracing::debug;

use crate::domain::Package;
use crate::error::{Result, fs as fs_error, manifest as manifest_error};

/// Manifest serialization format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ManifestFormat {
    #[default]
    Yaml,
    Json,
}

impl ManifestFormat {
    /// Pick the format from a file extension
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ManifestFormat::Json,
            _ => ManifestFormat::Yaml,
        }
    }
}

/// Read a package list from a manifest file
pub fn load_packages(path: &Path) -> Result<Vec<Package>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| manifest_error::read_failed(path.display().to_string(), e.to_string()))?;

    let packages = parse_packages(&content, ManifestFormat::from_path(path))
        .map_err(|reason| manifest_error::parse_failed(path.display().to_string(), reason))?;

    debug!(path = %path.display(), count = packages.len(), "Loaded package manifest");
    Ok(packages)
}

/// Parse a package list, returning the parser's message on failure
pub fn parse_packages(
    content: &str,
    format: ManifestFormat,
) -> std::result::Result<Vec<Package>, String> {
    match format {
        ManifestFormat::Json => {
            let value: serde_json::Value =
                serde_json::from_str(content).map_err(|e| e.to_string())?;
            let list = value.get("packages").cloned().unwrap_or(value);
            serde_json::from_value(list).map_err(|e| e.to_string())
        }
        ManifestFormat::Yaml => {
            let value: serde_yaml::Value =
                serde_yaml::from_str(content).map_err(|e| e.to_string())?;
            if value.is_null() {
                return Ok(Vec::new());
            }
            let list = value.get("packages").cloned().unwrap_or(value);
            serde_yaml::from_value(list).map_err(|e| e.to_string())
        }
    }
}

/// Serialize a package list as a bare manifest list, returning the
/// serializer's message on failure
pub fn serialize_packages(
    packages: &[Package],
    format: ManifestFormat,
) -> std::result::Result<String, String> {
    match format {
        ManifestFormat::Json => {
            let mut json = serde_json::to_string_pretty(packages).map_err(|e| e.to_string())?;
            json.push('\n');
            Ok(json)
        }
        ManifestFormat::Yaml => serde_yaml::to_string(packages).map_err(|e| e.to_string()),
    }
}

/// Write a package list to a manifest file, format chosen by extension
pub fn write_packages(path: &Path, packages: &[Package]) -> Result<()> {
    let content = serialize_packages(packages, ManifestFormat::from_path(path))
        .map_err(|reason| manifest_error::serialize_failed(path.display().to_string(), reason))?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| fs_error::write_failed(parent.display().to_string(), e.to_string()))?;
    }
    std::fs::write(path, content)
        .map_err(|e| fs_error::write_failed(path.display().to_string(), e.to_string()))?;

    debug!(path = %path.display(), count = packages.len(), "Wrote package manifest");
    Ok(())
}
