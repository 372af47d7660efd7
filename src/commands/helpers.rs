//! Command helper utilities

use std::path::{Path, PathBuf};

use crate::error::{Result, fs as fs_error};

/// Resolve workspace path from optional argument
///
/// If a workspace path is provided, use it. Otherwise,
/// resolve to the current directory.
pub fn resolve_workspace_path(workspace: Option<PathBuf>) -> Result<PathBuf> {
    match workspace {
        Some(path) => Ok(path),
        None => std::env::current_dir()
            .map_err(|e| fs_error::io_error(format!("Failed to get current directory: {e}"))),
    }
}

/// Resolve a path relative to the workspace unless it is already absolute
pub fn resolve_in_workspace(workspace: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        workspace.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_workspace_path_explicit() {
        let path = resolve_workspace_path(Some(PathBuf::from("/tmp/ws"))).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/ws"));
    }

    #[test]
    fn test_resolve_workspace_path_defaults_to_cwd() {
        let path = resolve_workspace_path(None).unwrap();
        assert_eq!(path, std::env::current_dir().unwrap());
    }

    #[test]
    fn test_resolve_in_workspace() {
        let workspace = Path::new("/ws");
        assert_eq!(
            resolve_in_workspace(workspace, Path::new("target")),
            PathBuf::from("/ws/target")
        );
        let absolute = std::env::temp_dir();
        assert_eq!(resolve_in_workspace(workspace, &absolute), absolute);
    }
}
