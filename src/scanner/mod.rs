//! Directory scanning and file filtering.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::Result;

/// Decides whether a directory entry is submitted for analysis.
pub trait FileFilter {
    fn matches(&self, path: &Path) -> bool;
}

/// Suffix match against the file name. The marker is compared with
/// `ends_with`, so `py` also accepts names like `happy` that merely end
/// in the marker.
pub struct ExtensionFilter {
    marker: String,
}

impl ExtensionFilter {
    #[must_use]
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
        }
    }
}

impl FileFilter for ExtensionFilter {
    fn matches(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.ends_with(&self.marker))
    }
}

/// Collects the matching files directly under one directory.
///
/// Subdirectories are not descended into; only the immediate children
/// are considered. Results come back in lexicographic order so output
/// is stable across runs.
pub struct DirectoryScanner {
    filter: Box<dyn FileFilter>,
}

impl DirectoryScanner {
    #[must_use]
    pub fn new(filter: Box<dyn FileFilter>) -> Self {
        Self { filter }
    }

    /// # Errors
    /// Returns an I/O error if the directory cannot be traversed.
    pub fn scan(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in WalkDir::new(root).min_depth(1).max_depth(1).sort_by_file_name() {
            let entry = entry.map_err(std::io::Error::from)?;
            if entry.file_type().is_file() && self.filter.matches(entry.path()) {
                files.push(entry.into_path());
            }
        }
        Ok(files)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
