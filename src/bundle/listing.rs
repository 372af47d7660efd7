//! Directory listing abstraction used by bundle discovery

use std::io;
use std::path::{Path, PathBuf};

/// The file system queries bundle discovery needs
pub trait DirectoryListing {
    fn is_dir(&self, path: &Path) -> bool;

    fn is_file(&self, path: &Path) -> bool;

    /// Immediate subdirectories of `path`, in no particular order
    fn subdirectories(&self, path: &Path) -> io::Result<Vec<PathBuf>>;
}

/// The local file system
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl DirectoryListing for LocalFs {
    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn subdirectories(&self, path: &Path) -> io::Result<Vec<PathBuf>> {
        let mut dirs = Vec::new();
        for entry in std::fs::read_dir(path)? {
            let entry_path = entry?.path();
            // follows symlinks, so a linked action folder still counts
            if entry_path.is_dir() {
                dirs.push(entry_path);
            }
        }
        Ok(dirs)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_local_fs_subdirectories() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join("a")).unwrap();
        std::fs::create_dir(temp.path().join("b")).unwrap();
        std::fs::write(temp.path().join("file.txt"), "x").unwrap();

        let mut dirs = LocalFs.subdirectories(temp.path()).unwrap();
        dirs.sort();
        assert_eq!(dirs, vec![temp.path().join("a"), temp.path().join("b")]);
    }

    #[test]
    fn test_local_fs_missing_directory() {
        let temp = TempDir::new().unwrap();
        assert!(LocalFs.subdirectories(&temp.path().join("missing")).is_err());
        assert!(!LocalFs.is_dir(&temp.path().join("missing")));
    }

    #[test]
    fn test_memory_fs_tracks_parents() {
        let fs = memory::MemoryFs::new().file("/p/dist/a/package.json");
        assert!(fs.is_dir(Path::new("/p/dist/a")));
        assert!(fs.is_dir(Path::new("/p")));
        assert!(fs.is_file(Path::new("/p/dist/a/package.json")));
        assert!(!fs.is_dir(Path::new("/p/dist/a/package.json")));
        assert_eq!(
            fs.subdirectories(Path::new("/p/dist")).unwrap(),
            vec![PathBuf::from("/p/dist/a")]
        );
    }
}
