//! Tree-walking rule engine.
//!
//! Visits every function definition recursively and evaluates the three
//! structural checks. The two declaration-line checks (S010, S012) are
//! deduplicated per line through sets scoped to the whole-file analyzer
//! instance; they are never reset between functions.

use std::collections::HashSet;

use regex::Regex;

use crate::ast::{DefaultKind, FunctionDef, SyntaxTree};
use crate::issue::{Issue, IssueCode};

pub struct StructuralAnalyzer {
    name_pattern: Regex,
    reported_arguments: HashSet<usize>,
    reported_defaults: HashSet<usize>,
    issues: Vec<Issue>,
}

impl StructuralAnalyzer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            name_pattern: Regex::new(r"^[a-z_]+[_a-z0-9]*$").expect("Invalid regex"),
            reported_arguments: HashSet::new(),
            reported_defaults: HashSet::new(),
            issues: Vec::new(),
        }
    }

    /// Visits every function in the tree, consuming the analyzer: the
    /// dedup sets are scoped to one file's analysis.
    #[must_use]
    pub fn analyze(mut self, tree: &SyntaxTree) -> Vec<Issue> {
        for function in tree.functions() {
            self.visit_function(function);
        }
        self.issues
    }

    fn visit_function(&mut self, function: &FunctionDef) {
        self.check_argument_names(function);
        self.check_assignment_targets(function);
        self.check_mutable_defaults(function);
        for nested in &function.nested {
            self.visit_function(nested);
        }
    }

    fn is_snake_case(&self, name: &str) -> bool {
        self.name_pattern.is_match(name)
    }

    /// S010: reported at the declaration line with the first offending
    /// argument's name, at most once per declaration line.
    fn check_argument_names(&mut self, function: &FunctionDef) {
        for param in &function.params {
            if !self.is_snake_case(&param.name) && self.reported_arguments.insert(function.line) {
                self.issues.push(Issue::with_detail(
                    function.line,
                    IssueCode::S010,
                    param.name.clone(),
                ));
            }
        }
    }

    /// S011: reported at the target's own line, one issue per offending
    /// target, not deduplicated.
    fn check_assignment_targets(&mut self, function: &FunctionDef) {
        for assignment in &function.assignments {
            let name = assignment.target.name();
            if !self.is_snake_case(name) {
                self.issues
                    .push(Issue::with_detail(assignment.line, IssueCode::S011, name));
            }
        }
    }

    /// S012: reported at the declaration line, at most once per
    /// declaration line.
    fn check_mutable_defaults(&mut self, function: &FunctionDef) {
        for param in &function.params {
            if param.default.is_some_and(DefaultKind::is_mutable)
                && self.reported_defaults.insert(function.line)
            {
                self.issues.push(Issue::new(function.line, IssueCode::S012));
            }
        }
    }
}

impl Default for StructuralAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
