//! Configuration file handling for promoter
//!
//! This module contains data structures for:
//! - `promoter.yaml` - Workspace defaults for strategies and bundle builds
//! - package manifests - Package lists read and written by `promoter sync`

pub mod manifest;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::bundle::DEFAULT_EXTENSION;
use crate::domain::BundleLayout;
use crate::domain::bundle::{DEFAULT_DESCRIPTOR, DEFAULT_PAYLOAD};
use crate::error::{Result, config as config_error};
use crate::strategy::SyncStrategy;

/// Configuration file name looked up in the workspace directory
pub const CONFIG_FILE: &str = "promoter.yaml";

/// Workspace configuration (promoter.yaml)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PromoterConfig {
    /// Strategy used by `promoter sync` when none is given
    pub strategy: SyncStrategy,

    /// Bundle build defaults
    pub bundle: BundleSettings,
}

/// Bundle build defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BundleSettings {
    /// Metadata descriptor file name
    pub descriptor: String,

    /// Payload directory name
    pub payload: String,

    /// Archive file extension
    pub extension: String,

    /// Output directory, relative to the workspace
    pub output: PathBuf,
}

impl Default for BundleSettings {
    fn default() -> Self {
        Self {
            descriptor: DEFAULT_DESCRIPTOR.to_string(),
            payload: DEFAULT_PAYLOAD.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
            output: PathBuf::from("target"),
        }
    }
}

impl BundleSettings {
    pub fn layout(&self) -> BundleLayout {
        BundleLayout {
            descriptor: self.descriptor.clone(),
            payload: self.payload.clone(),
        }
    }
}

impl PromoterConfig {
    /// Load `promoter.yaml` from a workspace, falling back to defaults
    pub fn load(workspace: &Path) -> Result<Self> {
        let path = workspace.join(CONFIG_FILE);
        if !path.is_file() {
            debug!(path = %path.display(), "No configuration file, using defaults");
            return Ok(Self::default());
        }

        let yaml = std::fs::read_to_string(&path)
            .map_err(|e| config_error::read_failed(path.display().to_string(), e.to_string()))?;
        let config = Self::from_yaml(&yaml, &path.display().to_string())?;

        debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Parse configuration from a YAML string; `origin` names it in errors
    pub fn from_yaml(yaml: &str, origin: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)
            .map_err(|e| config_error::parse_failed(origin, e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let bundle = &self.bundle;
        for (field, value) in [
            ("bundle.descriptor", &bundle.descriptor),
            ("bundle.payload", &bundle.payload),
        ] {
            if value.is_empty() || value.contains(['/', '\\']) {
                return Err(config_error::invalid(format!(
                    "{field} must be a plain file or directory name, got '{value}'"
                )));
            }
        }
        if bundle.extension.trim_start_matches('.').is_empty() {
            return Err(config_error::invalid("bundle.extension must not be empty"));
        }
        Ok(())
    }
}
