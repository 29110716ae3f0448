use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, trace};

#[derive(Error, Debug)]
pub enum ScannerError {
    #[error("Path does not exist: {0}")]
    PathNotFound(PathBuf),

    #[error("Path is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    #[error("Failed to read directory: {0}")]
    IoError(#[from] std::io::Error),
}

/// One subdirectory of the chosen base directory, identified by name and path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Folder {
    pub name: String,
    pub path: PathBuf,
}

impl Folder {
    pub fn new(name: String, path: PathBuf) -> Self {
        Self { name, path }
    }
}

/// Enumerate the immediate subdirectories of `base` (non-recursive).
///
/// Hidden directories are ignored. The result is sorted by name; this order is
/// the walk order for the whole session.
pub fn list_folders(base: &Path) -> Result<Vec<Folder>, ScannerError> {
    debug!(path = ?base, "Listing folders");

    if !base.exists() {
        return Err(ScannerError::PathNotFound(base.to_path_buf()));
    }
    if !base.is_dir() {
        return Err(ScannerError::NotADirectory(base.to_path_buf()));
    }

    let read_dir = fs::read_dir(base).map_err(|e| {
        if e.kind() == std::io::ErrorKind::PermissionDenied {
            ScannerError::PermissionDenied(base.to_path_buf())
        } else {
            ScannerError::IoError(e)
        }
    })?;

    let mut folders = Vec::new();

    for entry in read_dir {
        let entry = entry?;
        let path = entry.path();

        if !path.is_dir() {
            trace!(path = ?path, "Skipping non-directory");
            continue;
        }

        let name = match path.file_name() {
            Some(n) => n.to_string_lossy().to_string(),
            None => continue,
        };

        if name.starts_with('.') {
            trace!(name = %name, "Skipping hidden directory");
            continue;
        }

        folders.push(Folder::new(name, path));
    }

    folders.sort_by(|a, b| a.name.cmp(&b.name));

    debug!(count = folders.len(), "Listing complete");

    Ok(folders)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_empty_directory() {
        let dir = tempdir().unwrap();
        let result = list_folders(dir.path()).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_lists_subdirectories_in_name_order() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("Zeta Gundam")).unwrap();
        fs::create_dir(dir.path().join("Akira")).unwrap();
        fs::create_dir(dir.path().join("Monster")).unwrap();

        let result = list_folders(dir.path()).unwrap();

        let names: Vec<&str> = result.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["Akira", "Monster", "Zeta Gundam"]);
    }

    #[test]
    fn test_ignores_plain_files() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("show")).unwrap();
        fs::write(dir.path().join("episode.mkv"), "x").unwrap();

        let result = list_folders(dir.path()).unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "show");
    }

    #[test]
    fn test_ignores_hidden_directories() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join(".cache")).unwrap();
        fs::create_dir(dir.path().join("visible")).unwrap();

        let result = list_folders(dir.path()).unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "visible");
    }

    #[test]
    fn test_folder_paths_are_absolute_within_base() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("show")).unwrap();

        let result = list_folders(dir.path()).unwrap();

        assert_eq!(result[0].path, dir.path().join("show"));
    }

    #[test]
    fn test_path_not_found() {
        let result = list_folders(Path::new("/nonexistent/path"));
        assert!(matches!(result, Err(ScannerError::PathNotFound(_))));
    }

    #[test]
    fn test_not_a_directory() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("file.txt");
        fs::write(&file_path, "content").unwrap();

        let result = list_folders(&file_path);
        assert!(matches!(result, Err(ScannerError::NotADirectory(_))));
    }
}
