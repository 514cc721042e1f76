//! Whitespace and escape normalization for text runs and quoted values.

/// Trim a text run and drop it if nothing is left.
///
/// Leading whitespace goes when the run starts a logical line; trailing
/// whitespace goes when the run ends at a newline or at the end of input.
/// The first `kept` bytes (everything through the last escaped newline)
/// were already normalized and are left alone.
pub fn normalize_run(
    text: &str,
    kept: usize,
    at_line_start: bool,
    trim_end: bool,
) -> Option<String> {
    let (head, mut tail) = text.split_at(kept);
    if at_line_start && head.is_empty() {
        tail = tail.trim_start();
    }
    if trim_end {
        tail = tail.trim_end();
    }
    if head.is_empty() && tail.is_empty() {
        return None;
    }
    Some(format!("{head}{tail}"))
}

/// If `text` ends in a backslash (ignoring a `\r`), replace it with a kept
/// newline and report an escaped line end.
///
/// Text before the backslash still gets line-start trimming when it opens a
/// logical line.
pub fn escape_line_end(text: &mut String, at_line_start: bool) -> bool {
    let body = text.strip_suffix('\r').unwrap_or(text.as_str());
    let Some(body) = body.strip_suffix('\\') else {
        return false;
    };
    let body = if at_line_start { body.trim_start() } else { body };
    *text = format!("{body}\n");
    true
}

/// Resolve single-character backslash escapes: `\x` becomes `x`.
///
/// A lone trailing backslash is kept.
pub fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some(escaped) => out.push(escaped),
                None => out.push('\\'),
            }
        } else {
            out.push(c);
        }
    }
    out
}
