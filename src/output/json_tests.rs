use std::path::PathBuf;

use serde_json::Value;

use super::*;
use crate::issue::{Issue, IssueCode};

fn format(reports: &[FileReport]) -> Value {
    let output = JsonFormatter.format(reports).unwrap();
    serde_json::from_str(&output).unwrap()
}

#[test]
fn summary_counts_files_and_issues() {
    let reports = vec![
        FileReport {
            path: PathBuf::from("a.py"),
            issues: vec![
                Issue::new(1, IssueCode::S001),
                Issue::new(2, IssueCode::S003),
            ],
        },
        FileReport {
            path: PathBuf::from("b.py"),
            issues: vec![],
        },
    ];

    let value = format(&reports);
    assert_eq!(value["summary"]["files_scanned"], 2);
    assert_eq!(value["summary"]["files_with_issues"], 1);
    assert_eq!(value["summary"]["total_issues"], 2);
}

#[test]
fn issue_entries_carry_line_code_and_message() {
    let reports = vec![FileReport {
        path: PathBuf::from("a.py"),
        issues: vec![Issue::with_detail(3, IssueCode::S011, "Bad")],
    }];

    let value = format(&reports);
    let entry = &value["files"][0]["issues"][0];
    assert_eq!(value["files"][0]["path"], "a.py");
    assert_eq!(entry["line"], 3);
    assert_eq!(entry["code"], "S011");
    assert_eq!(entry["message"], "Variable Bad should be snake_case");
}

#[test]
fn empty_input_serializes_to_empty_collections() {
    let value = format(&[]);
    assert_eq!(value["summary"]["files_scanned"], 0);
    assert_eq!(value["files"].as_array().unwrap().len(), 0);
}

#[test]
fn clean_file_is_listed_with_no_issues() {
    let reports = vec![FileReport {
        path: PathBuf::from("clean.py"),
        issues: vec![],
    }];

    let value = format(&reports);
    assert_eq!(value["files"][0]["path"], "clean.py");
    assert!(value["files"][0]["issues"].as_array().unwrap().is_empty());
}
