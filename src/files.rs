//! Building the file list handed to the adapter.

use anyhow::{bail, Result};
use ignore::WalkBuilder;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Directories never descended into.
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &["vendor", "node_modules", ".git"];

/// Expands directories into the files a scan should cover.
///
/// Explicitly named files are kept even when their extension is not in the
/// list; directory contents are filtered by extension and `.gitignore`.
pub struct FileCollector {
    extensions: Vec<String>,
    excluded_dirs: Vec<String>,
}

impl FileCollector {
    pub fn new(extensions: Vec<String>) -> Self {
        Self {
            extensions,
            excluded_dirs: DEFAULT_EXCLUDED_DIRS.iter().map(|d| d.to_string()).collect(),
        }
    }

    pub fn with_excluded_dirs(mut self, dirs: Vec<String>) -> Self {
        self.excluded_dirs = dirs;
        self
    }

    /// Sorted, de-duplicated file list for `paths`.
    pub fn collect(&self, paths: &[PathBuf]) -> Result<Vec<String>> {
        let mut files = BTreeSet::new();

        for path in paths {
            if path.is_file() {
                files.insert(path.display().to_string());
            } else if path.is_dir() {
                self.walk(path, &mut files)?;
            } else {
                bail!("Path does not exist: {}", path.display());
            }
        }

        Ok(files.into_iter().collect())
    }

    fn walk(&self, root: &Path, files: &mut BTreeSet<String>) -> Result<()> {
        let excluded = self.excluded_dirs.clone();
        let walker = WalkBuilder::new(root)
            .hidden(false)
            .git_ignore(true)
            .require_git(false)
            .filter_entry(move |entry| {
                let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
                !(is_dir
                    && entry.depth() > 0
                    && excluded
                        .iter()
                        .any(|d| entry.file_name().to_string_lossy() == d.as_str()))
            })
            .build();

        for entry in walker {
            let entry = entry?;
            let path = entry.path();

            if path.is_file() && self.matches_extension(path) {
                files.insert(path.display().to_string());
            }
        }

        Ok(())
    }

    fn matches_extension(&self, path: &Path) -> bool {
        if self.extensions.is_empty() {
            return true;
        }
        path.extension()
            .map(|ext| {
                let ext = ext.to_string_lossy();
                self.extensions.iter().any(|wanted| wanted == ext.as_ref())
            })
            .unwrap_or(false)
    }
}

/// Shorthand for [`FileCollector::collect`] with the default exclusions.
pub fn collect_files(paths: &[PathBuf], extensions: &[String]) -> Result<Vec<String>> {
    FileCollector::new(extensions.to_vec()).collect(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str) -> PathBuf {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "<?php\n").unwrap();
        path
    }

    #[test]
    fn test_collect_filters_by_extension() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let a = touch(root, "app/A.php");
        let b = touch(root, "app/view/b.phtml");
        touch(root, "app/readme.md");

        let files = collect_files(
            &[root.join("app")],
            &["php".to_string(), "phtml".to_string()],
        )
        .unwrap();

        assert_eq!(files, vec![a.display().to_string(), b.display().to_string()]);
    }

    #[test]
    fn test_collect_skips_vendor() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let kept = touch(root, "src/Kept.php");
        touch(root, "vendor/lib/Skipped.php");

        let files = collect_files(&[root.to_path_buf()], &["php".to_string()]).unwrap();
        assert_eq!(files, vec![kept.display().to_string()]);
    }

    #[test]
    fn test_explicit_file_kept_and_deduplicated() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let script = touch(root, "bin/console");

        let files = collect_files(
            &[script.clone(), script.clone()],
            &["php".to_string()],
        )
        .unwrap();
        assert_eq!(files, vec![script.display().to_string()]);
    }

    #[test]
    fn test_empty_extensions_keep_everything() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        touch(root, "a.php");
        touch(root, "b.inc");

        let files = collect_files(&[root.to_path_buf()], &[]).unwrap();
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn test_missing_path_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope");
        assert!(collect_files(&[missing], &[]).is_err());
    }
}
