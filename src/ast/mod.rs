//! Lightweight Python syntax tree for the structural checks.
//!
//! Only the shapes the structural rules consume are modeled: function
//! definitions with their positional parameters and defaults, the
//! direct-child assignments of each function body, and def-in-def
//! nesting.

mod parser;

pub use parser::parse_module;

/// Parsed structural view of one file, independent of the line
/// sequence. Built once per file and read-only during traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxTree {
    functions: Vec<FunctionDef>,
}

impl SyntaxTree {
    pub(crate) fn new(functions: Vec<FunctionDef>) -> Self {
        Self { functions }
    }

    /// Outermost function definitions, in source order. Class methods
    /// with no enclosing function count as outermost.
    #[must_use]
    pub fn functions(&self) -> &[FunctionDef] {
        &self.functions
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDef {
    pub name: String,
    /// 1-indexed line of the `def` keyword.
    pub line: usize,
    /// Positional parameters only; everything at or after a `*` entry
    /// is outside the checked scope.
    pub params: Vec<Parameter>,
    /// Assignments that are direct children of the function body.
    pub assignments: Vec<Assignment>,
    pub nested: Vec<FunctionDef>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    pub default: Option<DefaultKind>,
}

/// Classification of a parameter's default expression.
///
/// The tuple is the only collection default treated as immutable;
/// anything that is not a literal scalar or a tuple counts as
/// constructed and is S012-eligible. This mirrors the original
/// constant-or-tuple test, so a bare name or a negated number is
/// "constructed" too.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultKind {
    Literal,
    Tuple,
    Constructed,
}

impl DefaultKind {
    #[must_use]
    pub fn classify(expr: &str) -> Self {
        let expr = expr.trim();
        if expr.starts_with('(') {
            return Self::Tuple;
        }
        if matches!(expr, "True" | "False" | "None") || is_string_literal(expr) {
            return Self::Literal;
        }
        let mut chars = expr.chars();
        match (chars.next(), chars.next()) {
            (Some(first), _) if first.is_ascii_digit() => Self::Literal,
            (Some('.'), Some(second)) if second.is_ascii_digit() => Self::Literal,
            _ => Self::Constructed,
        }
    }

    #[must_use]
    pub const fn is_mutable(self) -> bool {
        matches!(self, Self::Constructed)
    }
}

/// String literals including raw/bytes prefixes; f-strings are not
/// constants and stay "constructed".
fn is_string_literal(expr: &str) -> bool {
    if expr.starts_with(['\'', '"']) {
        return true;
    }
    let prefix = expr
        .chars()
        .take_while(|c| matches!(c, 'r' | 'b' | 'u' | 'R' | 'B' | 'U'))
        .count();
    (1..=2).contains(&prefix) && expr[prefix..].starts_with(['\'', '"'])
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub target: AssignTarget,
    /// 1-indexed line of the assignment statement.
    pub line: usize,
}

/// An assignment target the checks care about: a simple name, or the
/// final segment of an attribute access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssignTarget {
    Name(String),
    Attribute(String),
}

impl AssignTarget {
    /// The identifier the snake_case check applies to.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Name(name) | Self::Attribute(name) => name,
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
