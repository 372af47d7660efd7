//! Common test utilities for promoter integration tests

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// A test workspace for integration tests
#[allow(dead_code)]
pub struct TestWorkspace {
    /// Temporary directory
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from workspace
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in workspace
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Write a YAML package manifest from `(name, version)` pairs
    pub fn write_manifest(&self, path: &str, packages: &[(&str, &str)]) {
        let content: String = packages
            .iter()
            .map(|(name, version)| format!("- name: {name}\n  version: \"{version}\"\n"))
            .collect();
        self.write_file(path, &content);
    }

    /// Create a bundle root with a descriptor and one payload file
    pub fn create_bundle_root(&self, dir: &str) {
        let prefix = if dir.is_empty() {
            String::new()
        } else {
            format!("{dir}/")
        };
        self.write_file(
            &format!("{prefix}package.json"),
            r#"{"name": "demo", "version": "1.0.0"}"#,
        );
        self.write_file(&format!("{prefix}dist/index.js"), "module.exports = {};\n");
    }

    /// Command for the promoter binary, run inside this workspace
    pub fn cmd(&self) -> Command {
        let mut cmd = promoter_cmd();
        cmd.current_dir(&self.path);
        cmd
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// Command for the promoter binary with a clean environment
// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn promoter_cmd() -> Command {
    let mut cmd = Command::cargo_bin("promoter").unwrap();
    cmd.env_remove("RUST_LOG").env_remove("PROMOTER_WORKSPACE");
    cmd
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_file_operations() {
        let workspace = TestWorkspace::new();
        workspace.write_file("test/file.txt", "hello");
        assert!(workspace.file_exists("test/file.txt"));
        assert_eq!(workspace.read_file("test/file.txt"), "hello");
    }

    #[test]
    fn test_write_manifest_quotes_versions() {
        let workspace = TestWorkspace::new();
        workspace.write_manifest("m.yaml", &[("foo", "1.10")]);
        assert_eq!(workspace.read_file("m.yaml"), "- name: foo\n  version: \"1.10\"\n");
    }
}
