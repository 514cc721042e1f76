//! Hole syntax for template files.
//!
//! A template file is markup with `${...}` holes. Each hole's contents are
//! read as JSON; anything that is not valid JSON becomes a JSON string of
//! the trimmed contents, so `${Card}` names a component tag.

use serde_json::Value;

/// A template file split into fragments and substitution values.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    pub fragments: Vec<String>,
    pub values: Vec<Value>,
}

/// A hole that is opened but never closed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unterminated `${{` opened at line {line}, column {column}")]
pub struct HoleError {
    pub line: usize,
    pub column: usize,
}

/// Split `source` at its `${...}` holes.
pub fn split(source: &str) -> Result<Template, HoleError> {
    let mut fragments = Vec::new();
    let mut values = Vec::new();
    let mut fragment_start = 0;
    let mut search_from = 0;

    while let Some(found) = source[search_from..].find("${") {
        let open = search_from + found;
        let body_start = open + 2;
        let Some(body_len) = hole_len(&source[body_start..]) else {
            let (line, column) = line_column(source, open);
            return Err(HoleError { line, column });
        };

        fragments.push(source[fragment_start..open].to_string());
        values.push(hole_value(&source[body_start..body_start + body_len]));

        fragment_start = body_start + body_len + 1;
        search_from = fragment_start;
    }

    fragments.push(source[fragment_start..].to_string());
    Ok(Template { fragments, values })
}

/// Length of a hole body up to its matching `}`. Braces inside JSON
/// strings do not count.
fn hole_len(body: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, c) in body.char_indices() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' if depth == 0 => return Some(i),
            '}' => depth -= 1,
            _ => {}
        }
    }
    None
}

fn hole_value(body: &str) -> Value {
    let body = body.trim();
    serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string()))
}

fn line_column(source: &str, offset: usize) -> (usize, usize) {
    let before = &source[..offset];
    let line = before.matches('\n').count() + 1;
    let column = before.rsplit('\n').next().map_or(0, |l| l.chars().count()) + 1;
    (line, column)
}
