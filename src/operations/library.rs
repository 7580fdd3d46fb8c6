// Image Library
// Discovers photos under the configured folders

use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Finds supported image files under a set of folders
#[derive(Debug, Clone)]
pub struct ImageLibrary {
    /// Lowercase extensions with a leading dot
    extensions: Vec<String>,
}

impl Default for ImageLibrary {
    fn default() -> Self {
        Self::new(crate::core::AppConfig::default().supported_extensions)
    }
}

impl ImageLibrary {
    /// Create a library matching the given extensions (case-insensitive, with or without a dot)
    pub fn new(extensions: Vec<String>) -> Self {
        let extensions = extensions
            .into_iter()
            .map(|e| {
                let e = e.to_lowercase();
                if e.starts_with('.') { e } else { format!(".{}", e) }
            })
            .collect();
        Self { extensions }
    }

    /// Whether `path` has one of the supported extensions
    pub fn is_supported(&self, path: &Path) -> bool {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) => {
                let ext = format!(".{}", ext.to_lowercase());
                self.extensions.iter().any(|e| *e == ext)
            }
            None => false,
        }
    }

    /// All images under `folders`, in folder order with each directory's files sorted by name.
    /// Folders that do not exist are skipped.
    pub fn scan_folders<P: AsRef<Path>>(&self, folders: &[P]) -> Vec<PathBuf> {
        let mut images = Vec::new();

        for folder in folders {
            let folder = folder.as_ref();
            if !folder.is_dir() {
                warn!(folder = %folder.display(), "skipping missing folder");
                continue;
            }

            let before = images.len();
            images.extend(self.walk(folder));
            debug!(folder = %folder.display(), count = images.len() - before, "scanned folder");
        }

        images
    }

    /// Number of images under a single folder
    pub fn count_images(&self, folder: &Path) -> usize {
        self.walk(folder).count()
    }

    fn walk<'a>(&'a self, folder: &Path) -> impl Iterator<Item = PathBuf> + 'a {
        WalkDir::new(folder)
            .follow_links(true)
            // Files before subdirectories, each group by name
            .sort_by(|a, b| {
                a.file_type()
                    .is_dir()
                    .cmp(&b.file_type().is_dir())
                    .then_with(|| a.file_name().cmp(b.file_name()))
            })
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    debug!("skipping unreadable entry: {}", e);
                    None
                }
            })
            .filter(|entry| entry.file_type().is_file())
            .filter(move |entry| self.is_supported(entry.path()))
            .map(|entry| entry.into_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(root: &Path, relative: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"").unwrap();
    }

    fn names(paths: &[PathBuf], root: &Path) -> Vec<String> {
        paths
            .iter()
            .map(|p| p.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"))
            .collect()
    }

    #[test]
    fn test_extension_matching() {
        let library = ImageLibrary::default();
        assert!(library.is_supported(Path::new("a/b/photo.JPG")));
        assert!(library.is_supported(Path::new("photo.webp")));
        assert!(!library.is_supported(Path::new("notes.txt")));
        assert!(!library.is_supported(Path::new("jpg")));

        let custom = ImageLibrary::new(vec!["TIFF".to_string()]);
        assert!(custom.is_supported(Path::new("scan.tiff")));
        assert!(!custom.is_supported(Path::new("scan.jpg")));
    }

    #[test]
    fn test_scan_is_recursive_sorted_and_filtered() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        touch(root, "b.png");
        touch(root, "a.jpg");
        touch(root, "readme.md");
        touch(root, "trip/z.jpeg");
        touch(root, "trip/c.GIF");
        touch(root, "zebra.bmp");

        let library = ImageLibrary::default();
        let images = library.scan_folders(&[root]);

        assert_eq!(names(&images, root), vec!["a.jpg", "b.png", "zebra.bmp", "trip/c.GIF", "trip/z.jpeg"]);
        assert_eq!(library.count_images(root), 5);
    }

    #[test]
    fn test_scan_keeps_folder_order_and_skips_missing() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        touch(root, "second/a.jpg");
        touch(root, "first/z.jpg");

        let folders = vec![root.join("first"), root.join("missing"), root.join("second")];
        let images = ImageLibrary::default().scan_folders(&folders);

        assert_eq!(names(&images, root), vec!["first/z.jpg", "second/a.jpg"]);
    }

    #[test]
    fn test_empty_folder_list() {
        let folders: Vec<PathBuf> = Vec::new();
        assert!(ImageLibrary::default().scan_folders(&folders).is_empty());
    }
}
