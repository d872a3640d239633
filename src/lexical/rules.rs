use regex::Regex;

use crate::issue::{Issue, IssueCode};

use super::{LexicalState, LineRule};

const MAX_LINE_WIDTH: usize = 79;
const INDENT_UNIT: usize = 4;

const TODO_VARIANTS: [&str; 3] = ["todo", "TODO", "Todo"];

fn strip_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// S001: line longer than 79 characters, terminator excluded.
pub struct LineLength;

impl LineRule for LineLength {
    fn check(&self, line_number: usize, line: &str, _state: &mut LexicalState) -> Option<Issue> {
        let width = strip_terminator(line).chars().count();
        (width > MAX_LINE_WIDTH).then(|| Issue::new(line_number, IssueCode::S001))
    }
}

/// S002: leading-space count not a multiple of four.
///
/// Only lines that begin with a space are checked; tabs are not
/// normalized.
pub struct Indentation;

impl LineRule for Indentation {
    fn check(&self, line_number: usize, line: &str, _state: &mut LexicalState) -> Option<Issue> {
        if !line.starts_with(' ') {
            return None;
        }
        let count = line.chars().take_while(|&c| c == ' ').count();
        (count % INDENT_UNIT != 0).then(|| Issue::new(line_number, IssueCode::S002))
    }
}

/// S003: a semicolon outside quoted spans and not after a `#`.
///
/// Quote state is a running parity count of `"` and `'` seen so far on
/// the line, not a real tokenizer: an odd number of quote characters
/// before the semicolon will misclassify it. Scanning stops at the
/// first flagged semicolon.
pub struct StraySemicolon;

impl LineRule for StraySemicolon {
    fn check(&self, line_number: usize, line: &str, _state: &mut LexicalState) -> Option<Issue> {
        let mut double_quotes = 0usize;
        let mut single_quotes = 0usize;
        let mut in_comment = false;
        for ch in line.chars() {
            match ch {
                '"' => double_quotes += 1,
                '\'' => single_quotes += 1,
                '#' => in_comment = true,
                ';' if double_quotes % 2 == 0 && single_quotes % 2 == 0 && !in_comment => {
                    return Some(Issue::new(line_number, IssueCode::S003));
                }
                _ => {}
            }
        }
        None
    }
}

/// S004: an inline `#` comment with fewer than two spaces before it.
///
/// Applies only when the `#` is past column 1, i.e. the comment is
/// inline rather than whole-line; exactly the two preceding characters
/// are tested.
pub struct InlineCommentSpacing;

impl LineRule for InlineCommentSpacing {
    fn check(&self, line_number: usize, line: &str, _state: &mut LexicalState) -> Option<Issue> {
        let chars: Vec<char> = line.chars().collect();
        let index = chars.iter().position(|&c| c == '#')?;
        if index > 1 && (chars[index - 1] != ' ' || chars[index - 2] != ' ') {
            return Some(Issue::new(line_number, IssueCode::S004));
        }
        None
    }
}

/// S005: the literal word `todo`, `TODO`, or `Todo` after a `#`.
///
/// The three case variants are checked independently by substring
/// position, not case-insensitively: mixed case like `ToDo` is never
/// flagged.
pub struct TodoMarker;

impl LineRule for TodoMarker {
    fn check(&self, line_number: usize, line: &str, _state: &mut LexicalState) -> Option<Issue> {
        let comment = line.find('#')?;
        for variant in TODO_VARIANTS {
            if line.find(variant).is_some_and(|todo| comment < todo) {
                return Some(Issue::new(line_number, IssueCode::S005));
            }
        }
        None
    }
}

/// S006: a non-blank line preceded by three or more consecutive blank
/// lines.
///
/// A blank line is exactly `"\n"`. The run counter resets after every
/// non-blank line, whether or not it fired.
pub struct BlankLineRun;

impl LineRule for BlankLineRun {
    fn check(&self, line_number: usize, line: &str, state: &mut LexicalState) -> Option<Issue> {
        if line == "\n" {
            state.blank_run += 1;
            return None;
        }
        let run = state.blank_run;
        state.blank_run = 0;
        (run >= 3).then(|| Issue::new(line_number, IssueCode::S006))
    }
}

/// S007: `def` or `class` followed by more than one space before the
/// identifier, tested as a keyword-space-non-space pattern after
/// trimming leading whitespace.
pub struct DeclarationSpacing {
    def_pattern: Regex,
    class_pattern: Regex,
}

impl DeclarationSpacing {
    #[must_use]
    pub fn new() -> Self {
        Self {
            def_pattern: Regex::new(r"^def [^ ]").expect("Invalid regex"),
            class_pattern: Regex::new(r"^class [^ ]").expect("Invalid regex"),
        }
    }
}

impl Default for DeclarationSpacing {
    fn default() -> Self {
        Self::new()
    }
}

impl LineRule for DeclarationSpacing {
    fn check(&self, line_number: usize, line: &str, _state: &mut LexicalState) -> Option<Issue> {
        let trimmed = line.trim_start();
        if trimmed.starts_with("def") {
            if !self.def_pattern.is_match(trimmed) {
                return Some(Issue::with_detail(line_number, IssueCode::S007, "def"));
            }
        } else if trimmed.starts_with("class") && !self.class_pattern.is_match(trimmed) {
            return Some(Issue::with_detail(line_number, IssueCode::S007, "class"));
        }
        None
    }
}

/// S008: a class name that is not CamelCase. The name must start with
/// an uppercase letter, contain only alphanumerics, and be followed
/// immediately by `:` or `(`.
pub struct ClassNaming {
    pattern: Regex,
}

impl ClassNaming {
    #[must_use]
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(r"^class *[A-Z][a-zA-Z0-9]*[:(]").expect("Invalid regex"),
        }
    }
}

impl Default for ClassNaming {
    fn default() -> Self {
        Self::new()
    }
}

impl LineRule for ClassNaming {
    fn check(&self, line_number: usize, line: &str, _state: &mut LexicalState) -> Option<Issue> {
        let trimmed = line.trim_start();
        if trimmed.starts_with("class") && !self.pattern.is_match(trimmed) {
            return Some(Issue::new(line_number, IssueCode::S008));
        }
        None
    }
}

/// S009: a function name that is not snake_case: optional leading and
/// trailing double underscores, lowercase start, alphanumeric or
/// underscore body.
pub struct FunctionNaming {
    pattern: Regex,
}

impl FunctionNaming {
    #[must_use]
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(r"^def *_{0,2}[a-z][a-z0-9_]*_{0,2}\(").expect("Invalid regex"),
        }
    }
}

impl Default for FunctionNaming {
    fn default() -> Self {
        Self::new()
    }
}

impl LineRule for FunctionNaming {
    fn check(&self, line_number: usize, line: &str, _state: &mut LexicalState) -> Option<Issue> {
        let trimmed = line.trim_start();
        if trimmed.starts_with("def") && !self.pattern.is_match(trimmed) {
            return Some(Issue::new(line_number, IssueCode::S009));
        }
        None
    }
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod tests;
