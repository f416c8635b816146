//! File system probing
//!
//! Read-only checks used when classifying local arguments.

use std::path::Path;
use tracing::{debug, instrument};

/// Kind of entry found at a local path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    File,
    Directory,
    Missing,
}

/// Utility struct for file system checks
#[derive(Debug, Clone, Copy)]
pub struct FileSystemUtils;

impl FileSystemUtils {
    /// Create a new file system utilities instance
    pub const fn new() -> Self {
        Self
    }

    /// Check if a path exists and is a directory
    pub fn is_dir<P: AsRef<Path>>(&self, path: P) -> bool {
        path.as_ref().is_dir()
    }

    /// Determine what, if anything, exists at the path
    #[instrument(skip(self))]
    pub fn probe<P: AsRef<Path> + std::fmt::Debug>(&self, path: P) -> PathKind {
        let path = path.as_ref();
        let kind = if self.is_dir(path) {
            PathKind::Directory
        } else if path.exists() {
            PathKind::File
        } else {
            PathKind::Missing
        };

        debug!("Probed {}: {:?}", path.display(), kind);
        kind
    }
}

impl Default for FileSystemUtils {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_is_dir() {
        let temp_dir = TempDir::new().unwrap();
        let fs_utils = FileSystemUtils::new();

        let file_path = temp_dir.path().join("test.txt");
        let dir_path = temp_dir.path().join("testdir");

        fs::write(&file_path, "content").unwrap();
        fs::create_dir(&dir_path).unwrap();

        assert!(!fs_utils.is_dir(&file_path));
        assert!(fs_utils.is_dir(&dir_path));
        assert!(!fs_utils.is_dir("nonexistent"));
    }

    #[test]
    fn test_probe() {
        let temp_dir = TempDir::new().unwrap();
        let fs_utils = FileSystemUtils::new();

        let file_path = temp_dir.path().join("object.bin");
        fs::write(&file_path, [0u8; 4]).unwrap();

        assert_eq!(fs_utils.probe(&file_path), PathKind::File);
        assert_eq!(fs_utils.probe(temp_dir.path()), PathKind::Directory);
        assert_eq!(fs_utils.probe(temp_dir.path().join("missing")), PathKind::Missing);
    }
}
