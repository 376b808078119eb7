// photoshrink/src/processors/scanner.rs
use crate::core::Result;
use crate::utils::eligible_extension;
use image::ImageFormat;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A file that qualified for processing, typed by its extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub format: ImageFormat,
}

impl SourceFile {
    pub fn from_path(path: PathBuf) -> Option<Self> {
        let format = ImageFormat::from_extension(eligible_extension(&path)?)?;
        Some(Self { path, format })
    }
}

/// Lists eligible images directly inside a directory (no recursion).
pub struct Scanner;

impl Scanner {
    pub fn new() -> Self {
        Self
    }

    /// Entries come back sorted by file name, so numbering is reproducible.
    /// Symlinks are followed. An empty list is a valid result.
    pub fn list_eligible(&self, dir: &Path) -> Result<Vec<SourceFile>> {
        let walker = WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name();

        let mut files = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                // Dangling links and unreadable entries inside the folder.
                Err(e) if e.depth() > 0 => {
                    log::warn!("Skipping entry in {}: {}", dir.display(), e);
                    continue;
                }
                Err(e) => {
                    return Err(std::io::Error::other(format!(
                        "Failed to list {}: {}",
                        dir.display(),
                        e
                    ))
                    .into())
                }
            };

            if !entry.file_type().is_file() {
                log::debug!("Skipping non-file {}", entry.path().display());
                continue;
            }

            if eligible_extension(entry.path()).is_none() {
                log::debug!("Skipping {}: not an image extension", entry.path().display());
                continue;
            }

            if let Some(file) = SourceFile::from_path(entry.into_path()) {
                files.push(file);
            }
        }

        log::debug!("Found {} eligible files in {}", files.len(), dir.display());
        Ok(files)
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(dir: &Path, name: &str) {
        std::fs::write(dir.join(name), b"x").unwrap();
    }

    fn names(files: &[SourceFile]) -> Vec<String> {
        files
            .iter()
            .map(|f| f.path.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn filters_by_extension_case_insensitively() {
        let dir = tempfile::tempdir().unwrap();
        for name in [
            "a.jpg", "b.JPEG", "c.Png", "d.bmp", "e.gif", "f.TIFF", "g.txt", "h.webp", "i.tif",
            "noext",
        ] {
            touch(dir.path(), name);
        }

        let files = Scanner::new().list_eligible(dir.path()).unwrap();
        assert_eq!(
            names(&files),
            vec!["a.jpg", "b.JPEG", "c.Png", "d.bmp", "e.gif", "f.TIFF"]
        );
    }

    #[test]
    fn infers_format_from_extension() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "photo.JPG");
        touch(dir.path(), "scan.tiff");

        let files = Scanner::new().list_eligible(dir.path()).unwrap();
        assert_eq!(files[0].format, ImageFormat::Jpeg);
        assert_eq!(files[1].format, ImageFormat::Tiff);
    }

    #[test]
    fn skips_directories_and_nested_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("folder.png")).unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();
        touch(&dir.path().join("nested"), "deep.png");
        touch(dir.path(), "top.png");

        let files = Scanner::new().list_eligible(dir.path()).unwrap();
        assert_eq!(names(&files), vec!["top.png"]);
    }

    #[test]
    fn empty_directory_yields_empty_list() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "notes.md");

        assert!(Scanner::new().list_eligible(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn order_is_stable() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["c.png", "a.png", "b.png"] {
            touch(dir.path(), name);
        }

        let scanner = Scanner::new();
        let first = scanner.list_eligible(dir.path()).unwrap();
        let second = scanner.list_eligible(dir.path()).unwrap();
        assert_eq!(first, second);
        assert_eq!(names(&first), vec!["a.png", "b.png", "c.png"]);
    }

    #[test]
    fn dotfile_images_are_listed() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), ".png");
        touch(dir.path(), ".hidden.JPG");

        let files = Scanner::new().list_eligible(dir.path()).unwrap();
        assert_eq!(names(&files), vec![".hidden.JPG", ".png"]);
        assert_eq!(files[1].format, ImageFormat::Png);
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_images_are_followed() {
        let dir = tempfile::tempdir().unwrap();
        let store = dir.path().join("store");
        let input = dir.path().join("in");
        std::fs::create_dir(&store).unwrap();
        std::fs::create_dir(&input).unwrap();
        touch(&store, "real.png");
        std::os::unix::fs::symlink(store.join("real.png"), input.join("a.png")).unwrap();
        std::os::unix::fs::symlink(store.join("gone.png"), input.join("dangling.png")).unwrap();

        let files = Scanner::new().list_eligible(&input).unwrap();
        assert_eq!(names(&files), vec!["a.png"]);
    }
}
