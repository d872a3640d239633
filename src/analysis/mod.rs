//! Per-file analysis pipeline.

use std::path::{Path, PathBuf};

use crate::ast;
use crate::error::Result;
use crate::issue::Issue;
use crate::lexical::LexicalAnalyzer;
use crate::source::SourceFile;
use crate::structural::StructuralAnalyzer;

/// One file's analysis outcome: the path and its ordered issue list.
#[derive(Debug, Clone)]
pub struct FileReport {
    pub path: PathBuf,
    pub issues: Vec<Issue>,
}

/// Drives both analyzers over one file and merges their issue lists.
///
/// The merge is a plain concatenation, lexical issues first, regardless
/// of line numbers: the two lists are never sorted together. This
/// ordering is part of the output contract.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalysisCoordinator;

impl AnalysisCoordinator {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Analyzes one file from disk.
    ///
    /// # Errors
    /// Returns `FileRead` for unreadable input and `Parse` for input
    /// the tree builder rejects; either way no issues are produced for
    /// the file.
    pub fn check_file(&self, path: &Path) -> Result<Vec<Issue>> {
        let source = SourceFile::load(path)?;
        self.check_source(&source)
    }

    /// Analyzes already-loaded source text.
    ///
    /// # Errors
    /// Returns `Parse` if the tree builder rejects the input.
    pub fn check_source(&self, source: &SourceFile) -> Result<Vec<Issue>> {
        let mut issues = LexicalAnalyzer::new().analyze(source.lines());
        let tree = ast::parse_module(source.path(), source.text())?;
        issues.extend(StructuralAnalyzer::new().analyze(&tree));
        Ok(issues)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
