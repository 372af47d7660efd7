//! Error types and handling for promoter
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`bundle`]: Bundle discovery and assembly errors
//! - [`config`]: Configuration errors
//! - [`manifest`]: Package manifest errors
//! - [`fs`]: File system errors

pub mod bundle;
pub mod config;
pub mod fs;
pub mod manifest;

use miette::Diagnostic;
use thiserror::Error;

use crate::domain::VersionError;
use crate::strategy::Regression;

/// Main error type for promoter operations
#[derive(Error, Diagnostic, Debug)]
pub enum PromoterError {
    // Version errors
    #[error("Invalid version: {reason}")]
    #[diagnostic(
        code(promoter::version::invalid),
        help("Versions are dot-separated numbers with an optional qualifier, e.g. 1.2.0 or 1.2.0-SNAPSHOT")
    )]
    InvalidVersion { reason: String },

    // Synchronization errors
    #[error(
        "Package '{name}' ({source_version}) is not newer than the destination ({destination_version})"
    )]
    #[diagnostic(
        code(promoter::sync::regression),
        help(
            "You are trying to import an older version of the package. Bump the source version or use --strategy skip-old-versions"
        )
    )]
    Regression {
        name: String,
        source_version: String,
        destination_version: String,
    },

    // Manifest errors
    #[error("Failed to read package manifest: {path}: {reason}")]
    #[diagnostic(code(promoter::manifest::read_failed))]
    ManifestReadFailed { path: String, reason: String },

    #[error("Failed to parse package manifest: {path}: {reason}")]
    #[diagnostic(
        code(promoter::manifest::parse_failed),
        help("A manifest is a list of {{name, version}} entries, optionally under a 'packages' key")
    )]
    ManifestParseFailed { path: String, reason: String },

    #[error("Failed to serialize package manifest: {path}: {reason}")]
    #[diagnostic(code(promoter::manifest::serialize_failed))]
    ManifestSerializeFailed { path: String, reason: String },

    // Configuration errors
    #[error("Failed to read configuration file: {path}: {reason}")]
    #[diagnostic(code(promoter::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(promoter::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(promoter::config::invalid))]
    ConfigInvalid { message: String },

    // Bundle errors
    #[error("No bundle found under: {path}")]
    #[diagnostic(
        code(promoter::bundle::none_found),
        help("Run the build first so the project root contains the descriptor and payload directory")
    )]
    NoBundlesFound { path: String },

    #[error("Failed to scan for bundles in '{path}': {reason}")]
    #[diagnostic(code(promoter::bundle::discovery_failed))]
    DiscoveryFailed { path: String, reason: String },

    #[error("Bundle '{name}' has no metadata descriptor at: {path}")]
    #[diagnostic(
        code(promoter::bundle::descriptor_missing),
        help("Each bundle root must directly contain its descriptor file (e.g. package.json)")
    )]
    DescriptorMissing { name: String, path: String },

    #[error("Bundle '{name}' has no payload directory at: {path}")]
    #[diagnostic(
        code(promoter::bundle::payload_missing),
        help("Each bundle root must directly contain its payload directory (e.g. dist/)")
    )]
    PayloadMissing { name: String, path: String },

    #[error("Error creating bundle '{name}': {reason}")]
    #[diagnostic(code(promoter::bundle::assembly_failed))]
    AssemblyFailed { name: String, reason: String },

    #[error("Output directory {output} of bundle '{name}' is inside its payload directory {payload}")]
    #[diagnostic(
        code(promoter::bundle::output_inside_payload),
        help("Write archives outside the payload tree, e.g. --output target")
    )]
    OutputInsidePayload {
        name: String,
        output: String,
        payload: String,
    },

    // File system errors
    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(promoter::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(promoter::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(promoter::fs::io_error))]
    IoError { message: String },

    // CLI errors
    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(promoter::cli::unknown_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnknownShell { shell: String },
}

impl From<std::io::Error> for PromoterError {
    fn from(err: std::io::Error) -> Self {
        PromoterError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<VersionError> for PromoterError {
    fn from(err: VersionError) -> Self {
        PromoterError::InvalidVersion {
            reason: err.to_string(),
        }
    }
}

impl From<Regression> for PromoterError {
    fn from(err: Regression) -> Self {
        PromoterError::Regression {
            name: err.name,
            source_version: err.source_version.to_string(),
            destination_version: err.destination_version.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, PromoterError>;
