use super::*;
use crate::issue::IssueCode;

fn analyze(source: &str) -> Vec<Issue> {
    LexicalAnalyzer::new().analyze(source.split_inclusive('\n'))
}

fn codes(issues: &[Issue]) -> Vec<(usize, IssueCode)> {
    issues.iter().map(|i| (i.line, i.code)).collect()
}

#[test]
fn clean_source_has_no_issues() {
    let source = "class MyClass:\n    def my_func(self):\n        x = 1\n";
    assert!(analyze(source).is_empty());
}

#[test]
fn rules_run_in_catalog_order_within_a_line() {
    // One line violating S001, S003 and S005 at once
    let line = format!("x = 1;  # todo {}\n", "z".repeat(70));
    let issues = analyze(&line);
    assert_eq!(
        codes(&issues),
        vec![
            (1, IssueCode::S001),
            (1, IssueCode::S003),
            (1, IssueCode::S005),
        ]
    );
}

#[test]
fn lines_are_processed_in_order() {
    let source = "def myFunc():\n    pass\nclass bad_name:\n";
    let issues = analyze(source);
    assert_eq!(
        codes(&issues),
        vec![(1, IssueCode::S009), (3, IssueCode::S008)]
    );
}

#[test]
fn blank_run_fires_once_and_resets() {
    let source = "x = 1\n\n\n\ny = 2\n\ny = 3\n";
    let issues = analyze(source);
    assert_eq!(codes(&issues), vec![(5, IssueCode::S006)]);
}

#[test]
fn blank_run_at_start_of_file_counts() {
    let source = "\n\n\n\nx = 1\n";
    let issues = analyze(source);
    assert_eq!(codes(&issues), vec![(5, IssueCode::S006)]);
}

#[test]
fn two_blank_line_runs_each_fire() {
    let source = "x = 1\n\n\n\ny = 2\n\n\n\nz = 3\n";
    let issues = analyze(source);
    assert_eq!(
        codes(&issues),
        vec![(5, IssueCode::S006), (9, IssueCode::S006)]
    );
}

#[test]
fn state_does_not_leak_between_analyzers() {
    let first = analyze("\n\n\n");
    assert!(first.is_empty());
    // a fresh analyzer starts with a zero blank run
    let second = analyze("x = 1\n");
    assert!(second.is_empty());
}

#[test]
fn empty_source_has_no_issues() {
    assert!(analyze("").is_empty());
}

#[test]
fn spacing_and_naming_can_fire_on_the_same_line() {
    // `class  myClass:` passes neither the spacing nor the naming pattern
    let issues = analyze("class  myClass:\n");
    assert_eq!(
        codes(&issues),
        vec![(1, IssueCode::S007), (1, IssueCode::S008)]
    );
}
