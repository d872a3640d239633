use std::fmt;

/// Identifier of one rule in the fixed catalog.
///
/// S001..S009 are lexical (raw-line) rules, S010..S012 structural
/// (syntax-tree) rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IssueCode {
    S001,
    S002,
    S003,
    S004,
    S005,
    S006,
    S007,
    S008,
    S009,
    S010,
    S011,
    S012,
}

impl IssueCode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::S001 => "S001",
            Self::S002 => "S002",
            Self::S003 => "S003",
            Self::S004 => "S004",
            Self::S005 => "S005",
            Self::S006 => "S006",
            Self::S007 => "S007",
            Self::S008 => "S008",
            Self::S009 => "S009",
            Self::S010 => "S010",
            Self::S011 => "S011",
            Self::S012 => "S012",
        }
    }

    /// Message text without the interpolated detail (keyword or
    /// identifier) some codes carry.
    #[must_use]
    pub const fn base_message(self) -> &'static str {
        match self {
            Self::S001 => "Too Long",
            Self::S002 => "Indentation is not a multiple of four",
            Self::S003 => "Unnecessary semicolon",
            Self::S004 => "At least two spaces before inline comments required",
            Self::S005 => "TODO found",
            Self::S006 => "More than two blank lines used before this line",
            Self::S007 => "Too many spaces after construction_name",
            Self::S008 => "Class name should use CamelCase",
            Self::S009 => "Function name should use snake_case",
            Self::S010 => "Argument name should be snake_case",
            Self::S011 => "Variable should be snake_case",
            Self::S012 => "Default argument is mutable",
        }
    }
}

impl fmt::Display for IssueCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One reported violation: 1-indexed line number, rule code, and the
/// optional detail interpolated into the message (the offending
/// identifier for S010/S011, the declaration keyword for S007).
///
/// Issues are immutable value records; equality is field equality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub line: usize,
    pub code: IssueCode,
    pub detail: Option<String>,
}

impl Issue {
    #[must_use]
    pub const fn new(line: usize, code: IssueCode) -> Self {
        Self {
            line,
            code,
            detail: None,
        }
    }

    #[must_use]
    pub fn with_detail(line: usize, code: IssueCode, detail: impl Into<String>) -> Self {
        Self {
            line,
            code,
            detail: Some(detail.into()),
        }
    }

    /// Renders the human-readable message for this issue.
    #[must_use]
    pub fn message(&self) -> String {
        match (self.code, self.detail.as_deref()) {
            (IssueCode::S007, Some(keyword)) => {
                format!("Too many spaces after construction_name ({keyword})")
            }
            (IssueCode::S010, Some(name)) => format!("Argument name {name} should be snake_case"),
            (IssueCode::S011, Some(name)) => format!("Variable {name} should be snake_case"),
            (code, _) => code.base_message().to_string(),
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line {}: {} {}", self.line, self.code, self.message())
    }
}

#[cfg(test)]
#[path = "issue_tests.rs"]
mod tests;
