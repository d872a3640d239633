use serde::Serialize;

use crate::analysis::FileReport;
use crate::error::Result;

use super::OutputFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput {
    summary: Summary,
    files: Vec<FileEntry>,
}

#[derive(Serialize)]
struct Summary {
    files_scanned: usize,
    files_with_issues: usize,
    total_issues: usize,
}

#[derive(Serialize)]
struct FileEntry {
    path: String,
    issues: Vec<IssueEntry>,
}

#[derive(Serialize)]
struct IssueEntry {
    line: usize,
    code: &'static str,
    message: String,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, reports: &[FileReport]) -> Result<String> {
        let files_with_issues = reports.iter().filter(|r| !r.issues.is_empty()).count();
        let total_issues = reports.iter().map(|r| r.issues.len()).sum();

        let output = JsonOutput {
            summary: Summary {
                files_scanned: reports.len(),
                files_with_issues,
                total_issues,
            },
            files: reports.iter().map(convert_report).collect(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

fn convert_report(report: &FileReport) -> FileEntry {
    FileEntry {
        path: report.path.display().to_string(),
        issues: report
            .issues
            .iter()
            .map(|issue| IssueEntry {
                line: issue.line,
                code: issue.code.as_str(),
                message: issue.message(),
            })
            .collect(),
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
