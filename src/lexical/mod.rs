//! Line-oriented rule engine.
//!
//! Nine independent checks are evaluated per line, in a fixed order that
//! is part of the output contract. Two of the checks (S003, S005) are
//! deliberate regex/scan heuristics rather than a real tokenizer; their
//! known imprecision is documented on the rules and must not be
//! "corrected".

mod rules;

pub use rules::{
    BlankLineRun, ClassNaming, DeclarationSpacing, FunctionNaming, Indentation,
    InlineCommentSpacing, LineLength, StraySemicolon, TodoMarker,
};

use crate::issue::Issue;

/// Cross-line state threaded through the rules.
///
/// The blank-line run counter is the only cross-line invariant in the
/// system. It is scoped to one file's analysis and discarded after.
#[derive(Debug, Default)]
pub struct LexicalState {
    /// Consecutive blank lines seen so far, reset after every non-blank
    /// line is processed.
    pub blank_run: usize,
}

/// One lexical rule: raw line in, at most one issue out.
///
/// `line` is the raw text including its trailing terminator;
/// `line_number` is 1-indexed.
pub trait LineRule {
    fn check(&self, line_number: usize, line: &str, state: &mut LexicalState) -> Option<Issue>;
}

/// Evaluates the fixed, ordered catalog of line rules over one file.
///
/// For a given line, rules run in catalog order; across lines, in line
/// order. The resulting issue order is an observable contract.
pub struct LexicalAnalyzer {
    rules: Vec<Box<dyn LineRule>>,
    state: LexicalState,
}

impl LexicalAnalyzer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rules: vec![
                Box::new(LineLength),
                Box::new(Indentation),
                Box::new(StraySemicolon),
                Box::new(InlineCommentSpacing),
                Box::new(TodoMarker),
                Box::new(BlankLineRun),
                Box::new(DeclarationSpacing::new()),
                Box::new(ClassNaming::new()),
                Box::new(FunctionNaming::new()),
            ],
            state: LexicalState::default(),
        }
    }

    /// Runs every rule over every line, consuming the analyzer: the
    /// per-file state must not leak into another file's analysis.
    #[must_use]
    pub fn analyze<'a, I>(mut self, lines: I) -> Vec<Issue>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut issues = Vec::new();
        for (index, line) in lines.into_iter().enumerate() {
            let line_number = index + 1;
            for rule in &self.rules {
                if let Some(issue) = rule.check(line_number, line, &mut self.state) {
                    issues.push(issue);
                }
            }
        }
        issues
    }
}

impl Default for LexicalAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
