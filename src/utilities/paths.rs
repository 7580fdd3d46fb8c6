// Path Utilities
// Helper functions for path manipulation

use anyhow::{bail, Context, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::constants::SYNC_DIR_ENV;

/// Normalize a path by resolving . and .. components
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut components = Vec::new();

    for component in path.components() {
        match component {
            std::path::Component::ParentDir => {
                components.pop();
            }
            std::path::Component::CurDir => {}
            c => components.push(c),
        }
    }

    components.iter().collect()
}

/// Resolve a path relative to a base directory
pub fn resolve_path(base: &Path, relative: &str) -> PathBuf {
    if Path::new(relative).is_absolute() {
        normalize_path(Path::new(relative))
    } else {
        normalize_path(&base.join(relative))
    }
}

/// Name of the photo's parent folder and the photo's file name
pub fn folder_and_file_name(path: &Path) -> (String, String) {
    let folder = path
        .parent()
        .and_then(|p| p.file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let file = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    (folder, file)
}

/// Directory the sync helper operates on.
///
/// `SYNC_HELPER_DIR` wins when set and must name an existing directory; otherwise the
/// directory holding the running executable.
pub fn resolve_working_dir() -> Result<PathBuf> {
    working_dir_from(std::env::var_os(SYNC_DIR_ENV))
}

fn working_dir_from(override_dir: Option<OsString>) -> Result<PathBuf> {
    if let Some(path) = override_dir {
        let path = PathBuf::from(path);
        if !path.is_dir() {
            bail!("{} is not a directory: {}", SYNC_DIR_ENV, path.display());
        }
        debug!(dir = %path.display(), "working directory from {}", SYNC_DIR_ENV);
        return Ok(path);
    }

    let exe = std::env::current_exe().context("Failed to locate the running executable")?;
    let exe = exe
        .canonicalize()
        .with_context(|| format!("Failed to resolve executable path: {}", exe.display()))?;

    let dir = exe
        .parent()
        .with_context(|| format!("Executable has no parent directory: {}", exe.display()))?
        .to_path_buf();

    debug!(dir = %dir.display(), "working directory from executable location");
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path() {
        let path = Path::new("a/b/../c/./d");
        assert_eq!(normalize_path(path), PathBuf::from("a/c/d"));
    }

    #[test]
    fn test_resolve_path() {
        let base = Path::new("/home/pi");
        assert_eq!(resolve_path(base, "Pictures"), PathBuf::from("/home/pi/Pictures"));
        assert_eq!(resolve_path(base, "../shared/./photos"), PathBuf::from("/home/shared/photos"));
        assert_eq!(resolve_path(base, "/media/usb"), PathBuf::from("/media/usb"));
    }

    #[test]
    fn test_folder_and_file_name() {
        let (folder, file) = folder_and_file_name(Path::new("/photos/2024 Trip/IMG_001.jpg"));
        assert_eq!(folder, "2024 Trip");
        assert_eq!(file, "IMG_001.jpg");

        let (folder, file) = folder_and_file_name(Path::new("loose.png"));
        assert_eq!(folder, "");
        assert_eq!(file, "loose.png");
    }

    #[test]
    fn test_working_dir_defaults_to_executable_directory() {
        let dir = working_dir_from(None).unwrap();
        assert!(dir.is_dir());

        let exe = std::env::current_exe().unwrap().canonicalize().unwrap();
        assert_eq!(Some(dir.as_path()), exe.parent());
    }

    #[test]
    fn test_working_dir_override() {
        let repo = tempfile::TempDir::new().unwrap();
        let dir = working_dir_from(Some(repo.path().as_os_str().to_owned())).unwrap();
        assert_eq!(dir, repo.path());
    }

    #[test]
    fn test_unusable_override_is_fatal() {
        let root = tempfile::TempDir::new().unwrap();
        let missing = root.path().join("no-such-repo");
        let err = working_dir_from(Some(missing.clone().into_os_string())).unwrap_err();
        assert!(err.to_string().contains(SYNC_DIR_ENV));
        assert!(err.to_string().contains("no-such-repo"));

        let file = root.path().join("notes.txt");
        std::fs::write(&file, "not a directory").unwrap();
        assert!(working_dir_from(Some(file.into_os_string())).is_err());
    }
}
