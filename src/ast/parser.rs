use std::collections::HashSet;
use std::path::Path;

use regex::Regex;

use super::{AssignTarget, Assignment, DefaultKind, FunctionDef, Parameter, SyntaxTree};
use crate::error::{Result, StyleGuardError};

/// Builds the function tree for one file.
///
/// This is a regex- and indentation-based reader, not a full Python
/// parser: `def` headers are recognized lexically, block extents come
/// from indentation, and text inside triple-quoted strings is not
/// distinguished from code. A line that starts with the `def` keyword
/// but is not a function header (prose in a docstring, say) is simply
/// not a function; only a recognized header that then goes wrong — a
/// parameter list left unclosed at end of input, a missing `:` — is a
/// hard error, aborting the whole file's analysis.
///
/// # Errors
/// Returns `Parse` when a recognized `def` header cannot be read to
/// completion.
pub fn parse_module(path: &Path, source: &str) -> Result<SyntaxTree> {
    ModuleParser::new().parse(path, source)
}

struct ModuleParser {
    def_keyword: Regex,
    def_header: Regex,
    target: Regex,
    identifier: Regex,
}

/// A function before nesting is resolved. Line fields mix two
/// conventions: `line` and `block_end` are 1-indexed, `header_end` is
/// the 0-based index of the header's last physical line.
struct RawFunction {
    name: String,
    line: usize,
    indent: usize,
    params: Vec<Parameter>,
    header_end: usize,
    block_end: usize,
}

struct Header {
    params_text: String,
    end_index: usize,
}

impl ModuleParser {
    fn new() -> Self {
        Self {
            def_keyword: Regex::new(r"^\s*(?:async\s+)?def\b").expect("Invalid regex"),
            def_header: Regex::new(r"^(\s*)(?:async\s+)?def\s+([A-Za-z_][A-Za-z0-9_]*)\s*\(")
                .expect("Invalid regex"),
            target: Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*(?:\.[A-Za-z_][A-Za-z0-9_]*)*$")
                .expect("Invalid regex"),
            identifier: Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("Invalid regex"),
        }
    }

    fn parse(&self, path: &Path, source: &str) -> Result<SyntaxTree> {
        let lines: Vec<&str> = source.lines().collect();
        let mut header_lines: HashSet<usize> = HashSet::new();
        let mut raw: Vec<RawFunction> = Vec::new();

        let mut index = 0;
        while index < lines.len() {
            if !self.def_keyword.is_match(lines[index]) {
                index += 1;
                continue;
            }
            let Some(function) = self.parse_function(path, &lines, index)? else {
                index += 1;
                continue;
            };
            for covered in index..=function.header_end {
                header_lines.insert(covered);
            }
            index = function.header_end + 1;
            raw.push(function);
        }

        let functions = raw
            .into_iter()
            .map(|function| {
                let assignments = self.collect_assignments(&lines, &function, &header_lines);
                (
                    FunctionDef {
                        name: function.name,
                        line: function.line,
                        params: function.params,
                        assignments,
                        nested: Vec::new(),
                    },
                    function.indent,
                    function.block_end,
                )
            })
            .collect();

        Ok(SyntaxTree::new(nest_functions(functions)))
    }

    /// `Ok(None)` means the line starts with `def` but is not a
    /// function header and should be skipped.
    fn parse_function(
        &self,
        path: &Path,
        lines: &[&str],
        index: usize,
    ) -> Result<Option<RawFunction>> {
        let line = lines[index];
        let Some(caps) = self.def_header.captures(line) else {
            return Ok(None);
        };
        let indent = caps.get(1).map_or("", |m| m.as_str()).chars().count();
        let name = caps.get(2).map_or("", |m| m.as_str()).to_string();
        let open_end = caps.get(0).map_or(line.len(), |m| m.end());

        let header = read_header(path, lines, index, open_end)?;
        let params = self.parse_params(path, index + 1, &header.params_text)?;
        let block_end = find_block_end(lines, header.end_index, indent);

        Ok(Some(RawFunction {
            name,
            line: index + 1,
            indent,
            params,
            header_end: header.end_index,
            block_end,
        }))
    }

    fn parse_params(&self, path: &Path, def_line: usize, text: &str) -> Result<Vec<Parameter>> {
        let mut params = Vec::new();
        for piece in split_top_level(text) {
            let piece = piece.trim();
            if piece.is_empty() || piece == "/" {
                continue;
            }
            if piece.starts_with('*') {
                // *args, bare * and everything after it are outside the
                // positional-argument scope the checks cover
                break;
            }
            let (name, default) = split_param(piece);
            let name = name.trim();
            if !self.identifier.is_match(name) {
                return Err(parse_error(
                    path,
                    def_line,
                    &format!("malformed parameter `{piece}`"),
                ));
            }
            params.push(Parameter {
                name: name.to_string(),
                default: default.map(DefaultKind::classify),
            });
        }
        Ok(params)
    }

    fn collect_assignments(
        &self,
        lines: &[&str],
        function: &RawFunction,
        header_lines: &HashSet<usize>,
    ) -> Vec<Assignment> {
        let mut assignments = Vec::new();
        let Some(body_indent) = body_indent(lines, function) else {
            return assignments;
        };
        for index in function.header_end + 1..function.block_end {
            if header_lines.contains(&index) {
                continue;
            }
            let line = lines[index];
            let trimmed = line.trim();
            if trimmed.is_empty()
                || trimmed.starts_with('#')
                || indent_level(line) != body_indent
            {
                continue;
            }
            for piece in split_assignment_targets(line) {
                let text = piece.trim();
                if !self.target.is_match(text) {
                    continue;
                }
                let target = text.rfind('.').map_or_else(
                    || AssignTarget::Name(text.to_string()),
                    |dot| AssignTarget::Attribute(text[dot + 1..].to_string()),
                );
                assignments.push(Assignment {
                    target,
                    line: index + 1,
                });
            }
        }
        assignments
    }
}

/// Splits a statement at its top-level plain `=` signs and returns the
/// pieces left of each one, so `a = b = 1` yields `a` and ` b`.
/// Comparison, augmented and walrus operators do not split; pieces that
/// are not name/attribute shaped (an annotated `y: int`, a subscript)
/// are filtered out by the caller.
fn split_assignment_targets(line: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut prev: Option<char> = None;
    let mut start = 0;
    let mut iter = line.char_indices().peekable();

    while let Some((pos, ch)) = iter.next() {
        if let Some(open) = quote {
            if ch == open {
                quote = None;
            }
            prev = Some(ch);
            continue;
        }
        match ch {
            '\'' | '"' => quote = Some(ch),
            '#' => break,
            '(' | '[' | '{' => depth += 1,
            ')' | ']' | '}' => depth = depth.saturating_sub(1),
            '=' if depth == 0 => {
                let comparison = iter.peek().is_some_and(|&(_, next)| next == '=');
                let operator = prev.is_some_and(|p| "+-*/%@&|^<>!:=~".contains(p));
                if !comparison && !operator {
                    pieces.push(&line[start..pos]);
                    start = pos + 1;
                }
            }
            _ => {}
        }
        prev = Some(ch);
    }
    pieces
}

/// Joins the parameter list across physical lines until its brackets
/// balance, returning the collected text and the header's last line.
fn read_header(path: &Path, lines: &[&str], start: usize, open_end: usize) -> Result<Header> {
    let mut depth = 1usize;
    let mut quote: Option<char> = None;
    let mut text = String::new();
    let mut index = start;

    loop {
        let segment = if index == start {
            &lines[start][open_end..]
        } else {
            lines[index]
        };
        let mut closed_at = None;

        for (pos, ch) in segment.char_indices() {
            if let Some(open) = quote {
                text.push(ch);
                if ch == open {
                    quote = None;
                }
                continue;
            }
            match ch {
                '\'' | '"' => {
                    quote = Some(ch);
                    text.push(ch);
                }
                '#' => break, // comment runs to the end of the physical line
                '(' | '[' | '{' => {
                    depth += 1;
                    text.push(ch);
                }
                ')' | ']' | '}' => {
                    depth -= 1;
                    if depth == 0 {
                        if ch != ')' {
                            return Err(parse_error(
                                path,
                                index + 1,
                                "mismatched bracket in parameter list",
                            ));
                        }
                        closed_at = Some(pos + ch.len_utf8());
                        break;
                    }
                    text.push(ch);
                }
                _ => text.push(ch),
            }
        }

        if let Some(after) = closed_at {
            if !segment[after..].contains(':') {
                return Err(parse_error(
                    path,
                    index + 1,
                    "missing ':' after parameter list",
                ));
            }
            return Ok(Header {
                params_text: text,
                end_index: index,
            });
        }

        text.push(' ');
        index += 1;
        if index >= lines.len() {
            return Err(parse_error(path, start + 1, "unclosed parameter list"));
        }
    }
}

/// Splits the joined parameter text at top-level commas.
fn split_top_level(text: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut start = 0;
    for (pos, ch) in text.char_indices() {
        if let Some(open) = quote {
            if ch == open {
                quote = None;
            }
            continue;
        }
        match ch {
            '\'' | '"' => quote = Some(ch),
            '(' | '[' | '{' => depth += 1,
            ')' | ']' | '}' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                pieces.push(&text[start..pos]);
                start = pos + 1;
            }
            _ => {}
        }
    }
    pieces.push(&text[start..]);
    pieces
}

/// Splits one parameter into its name and the default expression,
/// discarding any annotation between them.
fn split_param(piece: &str) -> (&str, Option<&str>) {
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut name_end = None;
    for (pos, ch) in piece.char_indices() {
        if let Some(open) = quote {
            if ch == open {
                quote = None;
            }
            continue;
        }
        match ch {
            '\'' | '"' => quote = Some(ch),
            '(' | '[' | '{' => depth += 1,
            ')' | ']' | '}' => depth = depth.saturating_sub(1),
            ':' if depth == 0 => {
                if name_end.is_none() {
                    name_end = Some(pos);
                }
            }
            '=' if depth == 0 => {
                let end = name_end.unwrap_or(pos);
                return (&piece[..end], Some(&piece[pos + 1..]));
            }
            _ => {}
        }
    }
    (name_end.map_or(piece, |end| &piece[..end]), None)
}

fn indent_level(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

/// Walks forward from the header until a non-blank, non-comment line
/// dedents back to the function's own level.
fn find_block_end(lines: &[&str], header_end: usize, base_indent: usize) -> usize {
    let mut end = header_end + 1;
    for (index, line) in lines.iter().enumerate().skip(header_end + 1) {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            end = index + 1;
            continue;
        }
        if indent_level(line) <= base_indent {
            break;
        }
        end = index + 1;
    }
    end
}

/// Indentation of the function body's direct children.
fn body_indent(lines: &[&str], function: &RawFunction) -> Option<usize> {
    for index in function.header_end + 1..function.block_end {
        let line = lines[index];
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let indent = indent_level(line);
        return (indent > function.indent).then_some(indent);
    }
    None
}

struct PendingFunction {
    def: FunctionDef,
    indent: usize,
    block_end: usize,
}

/// Resolves def-in-def nesting from block extents: a function nests
/// under the innermost open function whose block still contains it.
fn nest_functions(flat: Vec<(FunctionDef, usize, usize)>) -> Vec<FunctionDef> {
    let mut roots = Vec::new();
    let mut stack: Vec<PendingFunction> = Vec::new();

    for (def, indent, block_end) in flat {
        while stack
            .last()
            .is_some_and(|top| def.line > top.block_end || indent <= top.indent)
        {
            if let Some(done) = stack.pop() {
                attach(&mut stack, &mut roots, done.def);
            }
        }
        stack.push(PendingFunction {
            def,
            indent,
            block_end,
        });
    }
    while let Some(done) = stack.pop() {
        attach(&mut stack, &mut roots, done.def);
    }
    roots
}

fn attach(stack: &mut [PendingFunction], roots: &mut Vec<FunctionDef>, def: FunctionDef) {
    if let Some(parent) = stack.last_mut() {
        parent.def.nested.push(def);
    } else {
        roots.push(def);
    }
}

fn parse_error(path: &Path, line: usize, message: &str) -> StyleGuardError {
    StyleGuardError::Parse {
        path: path.to_path_buf(),
        line,
        message: message.to_string(),
    }
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
