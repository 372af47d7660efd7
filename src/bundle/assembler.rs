//! Bundle archive assembly
//!
//! Writes one gzip-compressed tar per bundle: the payload tree under its
//! relative paths plus the metadata descriptor at the archive root. Entries
//! are added in sorted order with normalized headers, so the same input
//! always produces the same bytes.
//!
//! Symbolic links inside the payload are followed and archived as the files
//! and directories they point to. Empty directories are kept.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use flate2::Compression;
use flate2::write::GzEncoder;
use tempfile::NamedTempFile;
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::domain::Bundle;
use crate::error::{Result, bundle as bundle_error, fs as fs_error};
use crate::hash;

/// Default archive file extension
pub const DEFAULT_EXTENSION: &str = "tgz";

/// A built archive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Bundle name the archive was built from
    pub name: String,
    pub path: PathBuf,
    /// Payload files in the archive, not counting the descriptor
    pub files: usize,
    /// BLAKE3 digest of the archive file
    pub digest: String,
}

/// Build the archive for `bundle` as `<output_dir>/<derived_name>.<extension>`
///
/// The archive is staged in `output_dir` and only renamed to its final name
/// once fully written; on failure the staging file is removed and nothing
/// appears under the final name. `output_dir` must not lie inside the
/// payload directory, where the archive would end up packing itself.
pub fn assemble(bundle: &Bundle, output_dir: &Path, extension: &str) -> Result<Artifact> {
    let name = bundle.derived_name.as_str();

    if !bundle.metadata_file.is_file() {
        return Err(bundle_error::descriptor_missing(
            name,
            bundle.metadata_file.display().to_string(),
        ));
    }
    if !bundle.payload_directory.is_dir() {
        return Err(bundle_error::payload_missing(
            name,
            bundle.payload_directory.display().to_string(),
        ));
    }

    ensure_outside_payload(bundle, output_dir)?;

    std::fs::create_dir_all(output_dir)
        .map_err(|e| fs_error::write_failed(output_dir.display().to_string(), e.to_string()))?;

    let archive_path = output_dir.join(bundle.archive_file_name(extension));
    info!(bundle = %name, path = %archive_path.display(), "Target package file");

    let mut staging = NamedTempFile::new_in(output_dir)
        .map_err(|e| bundle_error::assembly_failed(name, e.to_string()))?;
    let files = write_archive(bundle, staging.as_file_mut())?;

    staging
        .persist(&archive_path)
        .map_err(|e| bundle_error::assembly_failed(name, e.error.to_string()))?;

    let digest = hash::hash_file(&archive_path)?;
    debug!(bundle = %name, files, digest = %digest, "Bundle archive written");

    Ok(Artifact {
        name: name.to_string(),
        path: archive_path,
        files,
        digest,
    })
}

fn ensure_outside_payload(bundle: &Bundle, output_dir: &Path) -> Result<()> {
    let name = bundle.derived_name.as_str();
    let payload = bundle
        .payload_directory
        .canonicalize()
        .map_err(|e| bundle_error::assembly_failed(name, e.to_string()))?;
    let output = resolve_pending(output_dir).map_err(|e| {
        bundle_error::assembly_failed(
            name,
            format!("could not resolve output directory {}: {e}", output_dir.display()),
        )
    })?;

    if output.starts_with(&payload) {
        return Err(bundle_error::output_inside_payload(
            name,
            output_dir.display().to_string(),
            bundle.payload_directory.display().to_string(),
        ));
    }
    Ok(())
}

/// Canonical form of a path that may not exist yet: the deepest existing
/// ancestor is canonicalized and the missing components are appended
fn resolve_pending(path: &Path) -> std::io::Result<PathBuf> {
    let mut existing = path;
    let mut missing = Vec::new();
    loop {
        match existing.canonicalize() {
            Ok(base) => return Ok(missing.iter().rev().fold(base, |acc, part| acc.join(part))),
            Err(err) => {
                let (Some(parent), Some(part)) = (existing.parent(), existing.file_name()) else {
                    return Err(err);
                };
                missing.push(part);
                existing = if parent.as_os_str().is_empty() {
                    Path::new(".")
                } else {
                    parent
                };
            }
        }
    }
}

fn write_archive(bundle: &Bundle, out: &mut File) -> Result<usize> {
    let name = bundle.derived_name.as_str();
    let fail = |reason: String| bundle_error::assembly_failed(name, reason);

    let gz = GzEncoder::new(out, Compression::default());
    let mut tar = tar::Builder::new(gz);
    tar.mode(tar::HeaderMode::Deterministic);

    let files = append_payload(&mut tar, &bundle.payload_directory, name)?;

    let descriptor_name = bundle
        .metadata_file
        .file_name()
        .ok_or_else(|| fail(format!("invalid descriptor path {}", bundle.metadata_file.display())))?;
    tar.append_path_with_name(&bundle.metadata_file, descriptor_name)
        .map_err(|e| fail(format!("could not add {}: {e}", bundle.metadata_file.display())))?;

    let out = tar
        .into_inner()
        .map_err(|e| fail(format!("could not finalise archive: {e}")))?
        .finish()
        .map_err(|e| fail(format!("could not finalise archive gz: {e}")))?;
    out.flush()
        .map_err(|e| fail(format!("could not flush archive: {e}")))?;

    Ok(files)
}

/// Add everything under `payload` with its path relative to `payload`
///
/// Returns the number of regular files added.
fn append_payload<W: Write>(tar: &mut tar::Builder<W>, payload: &Path, name: &str) -> Result<usize> {
    let mut files = 0;

    let walker = WalkDir::new(payload)
        .min_depth(1)
        .follow_links(true)
        .sort_by_file_name();
    for entry in walker {
        // link loops and dangling links surface here
        let entry = entry.map_err(|e| bundle_error::assembly_failed(name, e.to_string()))?;
        let relative = entry
            .path()
            .strip_prefix(payload)
            .map_err(|e| bundle_error::assembly_failed(name, e.to_string()))?;
        let added = if entry.file_type().is_dir() {
            tar.append_dir(relative, entry.path())
        } else if entry.file_type().is_file() {
            files += 1;
            tar.append_path_with_name(entry.path(), relative)
        } else {
            debug!(bundle = %name, path = %entry.path().display(), "Skipping special file");
            continue;
        };

        added.map_err(|e| {
            bundle_error::assembly_failed(
                name,
                format!("could not add {}: {e}", entry.path().display()),
            )
        })?;
    }

    Ok(files)
}
