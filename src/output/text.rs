use std::fmt::Write;

use crate::analysis::FileReport;
use crate::error::Result;

use super::OutputFormatter;

/// Renders one line per issue:
///
/// ```text
/// <file_path>: Line <n>: <code> <message>
/// ```
///
/// Files are emitted in report order, each file's issues in their
/// recorded order. Clean files produce no lines at all.
pub struct TextFormatter;

impl OutputFormatter for TextFormatter {
    fn format(&self, reports: &[FileReport]) -> Result<String> {
        let mut output = String::new();

        for report in reports {
            for issue in &report.issues {
                let _ = writeln!(output, "{}: {issue}", report.path.display());
            }
        }

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
