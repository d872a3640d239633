use std::path::PathBuf;

use super::*;
use crate::issue::{Issue, IssueCode};

fn report(path: &str, issues: Vec<Issue>) -> FileReport {
    FileReport {
        path: PathBuf::from(path),
        issues,
    }
}

#[test]
fn renders_one_line_per_issue() {
    let reports = vec![report(
        "test.py",
        vec![
            Issue::new(1, IssueCode::S001),
            Issue::with_detail(3, IssueCode::S011, "Bad"),
        ],
    )];

    let output = TextFormatter.format(&reports).unwrap();
    assert_eq!(
        output,
        "test.py: Line 1: S001 Too Long\n\
         test.py: Line 3: S011 Variable Bad should be snake_case\n"
    );
}

#[test]
fn clean_reports_render_nothing() {
    let reports = vec![report("a.py", vec![]), report("b.py", vec![])];
    assert_eq!(TextFormatter.format(&reports).unwrap(), "");
}

#[test]
fn files_keep_report_order() {
    let reports = vec![
        report("z.py", vec![Issue::new(2, IssueCode::S003)]),
        report("a.py", vec![Issue::new(1, IssueCode::S005)]),
    ];

    let output = TextFormatter.format(&reports).unwrap();
    assert_eq!(
        output,
        "z.py: Line 2: S003 Unnecessary semicolon\n\
         a.py: Line 1: S005 TODO found\n"
    );
}

#[test]
fn interpolated_details_appear_in_messages() {
    let reports = vec![report(
        "m.py",
        vec![
            Issue::with_detail(4, IssueCode::S007, "class"),
            Issue::with_detail(7, IssueCode::S010, "badArg"),
        ],
    )];

    let output = TextFormatter.format(&reports).unwrap();
    assert!(output.contains("m.py: Line 4: S007 Too many spaces after construction_name (class)"));
    assert!(output.contains("m.py: Line 7: S010 Argument name badArg should be snake_case"));
}
