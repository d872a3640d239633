use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, StyleGuardError};

/// One file's raw text, viewed as a 1-indexed sequence of lines that
/// keep their trailing terminators.
///
/// Keeping the terminator lets the lexical rules distinguish a blank
/// line (exactly `"\n"`) from a line containing only other whitespace.
/// The content is immutable for the duration of one analysis pass.
#[derive(Debug, Clone)]
pub struct SourceFile {
    path: PathBuf,
    text: String,
}

impl SourceFile {
    /// Reads a file from disk.
    ///
    /// # Errors
    /// Returns `FileRead` if the file cannot be read; unreadable input
    /// is fatal for the invocation.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| StyleGuardError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_text(path, text))
    }

    #[must_use]
    pub fn from_text(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Lines with their trailing terminators preserved.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.split_inclusive('\n')
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines().count()
    }
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod tests;
