use std::collections::VecDeque;

use crate::cursor::Cursor;
use crate::event::{AttrValue, CloseTag, Event, QuotePart, Tag};
use crate::whitespace;
use crate::{describe_text, LexError, LexErrorKind};

/// Scanner mode determines which markers are significant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScannerMode {
    /// Between tags: text runs, child values, tag and comment openers.
    Children,
    /// Inside an opening tag: attributes, spreads, `>` and `/>`.
    Props,
    /// After a closing tag's identifier: whitespace up to `>`.
    ClosingTagTail,
    /// Inside a quoted attribute value delimited by the given quote.
    ClosingQuote(char),
    /// Inside `<!-- ... -->`.
    ClosingComment,
}

/// A marker recognised at `<` in children position.
enum Marker<'s> {
    Comment,
    Open(&'s str),
    OpenValue,
    Close(&'s str),
    CloseValue,
    CloseWildcard,
}

/// Tagged-template scanner.
///
/// Walks the fragments with a [`Cursor`] and emits [`Event`]s. State that
/// has to survive a fragment boundary (the mode, the line-start flag, a
/// half-built quoted attribute, an open comment) lives on the struct, so a
/// token may begin in one fragment and finish after a substitution.
///
/// Events are produced lazily through [`Iterator`]; each step scans up to
/// the next marker and may queue several events at once.
pub struct Scanner<'a, V> {
    cursor: Cursor<'a, V>,
    mode: ScannerMode,
    at_line_start: bool,
    events: VecDeque<Event<V>>,
    attr_name: String,
    quote_raw: String,
    quote_parts: Vec<QuotePart<V>>,
    comment_values: usize,
    finished: bool,
}

impl<'a, V> Scanner<'a, V> {
    /// Create a scanner over `fragments` interleaved with `values`.
    pub fn new(fragments: Vec<&'a str>, values: Vec<V>) -> Result<Self, LexError> {
        if fragments.is_empty() || fragments.len() != values.len() + 1 {
            return Err(LexError {
                kind: LexErrorKind::InvalidInput {
                    fragments: fragments.len(),
                    values: values.len(),
                },
                fragment: 0,
                offset: 0,
            });
        }

        Ok(Self {
            cursor: Cursor::new(fragments, values),
            mode: ScannerMode::Children,
            at_line_start: true,
            events: VecDeque::new(),
            attr_name: String::new(),
            quote_raw: String::new(),
            quote_parts: Vec::new(),
            comment_values: 0,
            finished: false,
        })
    }

    /// Scan the whole input into a vector of events.
    pub fn tokenize(fragments: Vec<&'a str>, values: Vec<V>) -> Result<Vec<Event<V>>, LexError> {
        Scanner::new(fragments, values)?.collect()
    }

    /// The current mode.
    pub fn mode(&self) -> ScannerMode {
        self.mode
    }

    /// Fragment index and byte offset of the cursor.
    pub fn position(&self) -> (usize, usize) {
        (self.cursor.fragment_index(), self.cursor.offset())
    }

    fn step(&mut self) -> Result<(), LexError> {
        match self.mode {
            ScannerMode::Children => self.scan_children(),
            ScannerMode::Props => self.scan_props(),
            ScannerMode::ClosingTagTail => self.scan_closing_tail(),
            ScannerMode::ClosingQuote(quote) => self.scan_quoted(quote),
            ScannerMode::ClosingComment => self.scan_comment(),
        }
    }

    // --- Children ---

    /// Scan text up to the next newline, tag marker, comment opener or
    /// substitution.
    fn scan_children(&mut self) -> Result<(), LexError> {
        let rest = self.cursor.rest();
        let value_follows = self.cursor.has_value_after();
        let mut text = String::new();
        // Bytes of `text` up to the last escaped newline; never trimmed.
        let mut kept = 0;

        for (i, c) in rest.char_indices() {
            match c {
                '\n' => {
                    if whitespace::escape_line_end(&mut text, self.at_line_start) {
                        self.at_line_start = false;
                        kept = text.len();
                        continue;
                    }
                    self.emit_text(&text, kept, true);
                    self.cursor.bump(i + 1);
                    self.at_line_start = true;
                    return Ok(());
                }
                '<' => {
                    if let Some((marker, len)) = match_marker(&rest[i..], value_follows) {
                        self.emit_text(&text, kept, false);
                        self.cursor.bump(i + len);
                        self.at_line_start = false;
                        return self.enter_marker(marker);
                    }
                    text.push(c);
                }
                _ => text.push(c),
            }
        }

        self.cursor.bump_all();
        match self.cursor.take_value() {
            Some(value) => {
                // Whitespace before a substitution is content.
                self.emit_text(&text, kept, false);
                self.events.push_back(Event::Child(value));
                self.at_line_start = false;
            }
            None => {
                self.emit_text(&text, kept, true);
                self.finished = true;
            }
        }
        Ok(())
    }

    fn emit_text(&mut self, text: &str, kept: usize, trim_end: bool) {
        if let Some(run) = whitespace::normalize_run(text, kept, self.at_line_start, trim_end) {
            self.at_line_start = false;
            self.events.push_back(Event::Text(run));
        }
    }

    fn enter_marker(&mut self, marker: Marker<'a>) -> Result<(), LexError> {
        match marker {
            Marker::Comment => {
                self.comment_values = 0;
                self.mode = ScannerMode::ClosingComment;
                return Ok(());
            }
            Marker::Open(name) => {
                self.events.push_back(Event::Open(Tag::Name(name.to_string())));
                self.mode = ScannerMode::Props;
            }
            Marker::OpenValue => {
                let value = self.expect_tag_value()?;
                self.events.push_back(Event::Open(Tag::Value(value)));
                self.mode = ScannerMode::Props;
            }
            Marker::Close(name) => {
                let tag = Tag::Name(name.to_string());
                self.events.push_back(Event::Close(CloseTag::Tag(tag)));
                self.mode = ScannerMode::ClosingTagTail;
            }
            Marker::CloseValue => {
                let value = self.expect_tag_value()?;
                self.events.push_back(Event::Close(CloseTag::Tag(Tag::Value(value))));
                self.mode = ScannerMode::ClosingTagTail;
            }
            Marker::CloseWildcard => {
                self.events.push_back(Event::Close(CloseTag::Wildcard));
                self.mode = ScannerMode::ClosingTagTail;
            }
        }
        Ok(())
    }

    fn expect_tag_value(&mut self) -> Result<V, LexError> {
        match self.cursor.take_value() {
            Some(value) => Ok(value),
            None => Err(self.error(LexErrorKind::UnexpectedText {
                found: describe_text(self.cursor.rest()),
                expected: "a tag name",
            })),
        }
    }

    // --- Props ---

    /// Scan one attribute, spread or tag terminator.
    fn scan_props(&mut self) -> Result<(), LexError> {
        let rest = self.cursor.rest();
        let trimmed = rest.trim_start();
        self.cursor.bump(rest.len() - trimmed.len());

        if trimmed.is_empty() {
            if self.cursor.value_pending() {
                return Err(self.error(LexErrorKind::UnexpectedExpression {
                    context: "tag attributes",
                }));
            }
            // Unterminated opening tag; the assembler reports it.
            self.finished = true;
            return Ok(());
        }

        if trimmed.starts_with("/>") || trimmed.starts_with('>') {
            let self_closing = trimmed.starts_with('/');
            self.cursor.bump(if self_closing { 2 } else { 1 });
            self.events.push_back(Event::TagEnd { self_closing });
            self.mode = ScannerMode::Children;
            self.at_line_start = false;
            return Ok(());
        }

        if let Some(after) = trimmed.strip_prefix("...") {
            self.cursor.bump(3);
            if !after.is_empty() {
                return Err(self.error(LexErrorKind::MissingSpreadExpression {
                    found: describe_text(after),
                }));
            }
            return match self.cursor.take_value() {
                Some(value) => {
                    self.events.push_back(Event::Spread(value));
                    Ok(())
                }
                None => Err(self.error(LexErrorKind::MissingSpreadExpression {
                    found: describe_text(after),
                })),
            };
        }

        let len = attr_name_len(trimmed);
        if len == 0 {
            return Err(self.error(LexErrorKind::UnexpectedText {
                found: describe_text(trimmed),
                expected: "an attribute, `>` or `/>`",
            }));
        }
        let name = &trimmed[..len];
        self.cursor.bump(len);

        let after = &trimmed[len..];
        let Some(assigned) = after.trim_start().strip_prefix('=') else {
            self.events.push_back(Event::Attr {
                name: name.to_string(),
                value: AttrValue::Flag,
            });
            return Ok(());
        };

        let value_src = assigned.trim_start();
        self.cursor.bump(after.len() - value_src.len());

        match value_src.chars().next() {
            Some(quote @ ('"' | '\'')) => {
                self.cursor.bump(1);
                self.attr_name = name.to_string();
                self.quote_raw.clear();
                self.quote_parts.clear();
                self.mode = ScannerMode::ClosingQuote(quote);
                Ok(())
            }
            Some(_) => Err(self.error(LexErrorKind::ExpressionExpected {
                name: name.to_string(),
            })),
            None => match self.cursor.take_value() {
                Some(value) => {
                    self.events.push_back(Event::Attr {
                        name: name.to_string(),
                        value: AttrValue::Value(value),
                    });
                    Ok(())
                }
                None => Err(self.error(LexErrorKind::ExpressionExpected {
                    name: name.to_string(),
                })),
            },
        }
    }

    // --- Closing tag tail ---

    /// Consume whitespace up to the `>` of a closing tag.
    fn scan_closing_tail(&mut self) -> Result<(), LexError> {
        let rest = self.cursor.rest();
        let trimmed = rest.trim_start();
        self.cursor.bump(rest.len() - trimmed.len());

        if trimmed.starts_with('>') {
            self.cursor.bump(1);
            self.mode = ScannerMode::Children;
            self.at_line_start = false;
            return Ok(());
        }

        if self.cursor.value_pending() {
            return Err(self.error(LexErrorKind::UnexpectedExpression {
                context: "closing tag",
            }));
        }
        Err(self.error(LexErrorKind::UnexpectedText {
            found: describe_text(trimmed),
            expected: "`>`",
        }))
    }

    // --- Quoted attribute values ---

    /// Accumulate a quoted value until its unescaped closing quote.
    fn scan_quoted(&mut self, quote: char) -> Result<(), LexError> {
        let rest = self.cursor.rest();
        let mut escaped = false;

        for (i, c) in rest.char_indices() {
            if c == quote && !escaped {
                self.quote_raw.push_str(&rest[..i]);
                self.cursor.bump(i + 1);
                self.flush_quote_text();
                let parts = std::mem::take(&mut self.quote_parts);
                self.events.push_back(Event::Attr {
                    name: std::mem::take(&mut self.attr_name),
                    value: AttrValue::Quoted(parts),
                });
                self.mode = ScannerMode::Props;
                return Ok(());
            }
            escaped = c == '\\' && !escaped;
        }

        self.quote_raw.push_str(rest);
        self.cursor.bump_all();
        match self.cursor.take_value() {
            Some(value) => {
                self.flush_quote_text();
                self.quote_parts.push(QuotePart::Value(value));
            }
            // Unterminated string inside an unterminated tag.
            None => self.finished = true,
        }
        Ok(())
    }

    fn flush_quote_text(&mut self) {
        if !self.quote_raw.is_empty() {
            let text = whitespace::unescape(&self.quote_raw);
            self.quote_raw.clear();
            self.quote_parts.push(QuotePart::Text(text));
        }
    }

    // --- Comments ---

    /// Discard text and values until `-->`.
    fn scan_comment(&mut self) -> Result<(), LexError> {
        let rest = self.cursor.rest();

        if let Some(end) = rest.find("-->") {
            self.cursor.bump(end + 3);
            self.events.push_back(Event::Comment);
            self.mode = ScannerMode::Children;
            self.at_line_start = false;
            return Ok(());
        }

        self.cursor.bump_all();
        if self.cursor.take_value().is_some() {
            self.comment_values += 1;
            return Ok(());
        }

        if self.comment_values > 0 {
            return Err(self.error(LexErrorKind::MissingCommentTerminator {
                count: self.comment_values,
            }));
        }
        // Text-only comments may run to the end of input.
        self.events.push_back(Event::Comment);
        self.finished = true;
        Ok(())
    }

    // --- Helpers ---

    fn error(&self, kind: LexErrorKind) -> LexError {
        LexError {
            kind,
            fragment: self.cursor.fragment_index(),
            offset: self.cursor.offset(),
        }
    }
}

impl<V> Iterator for Scanner<'_, V> {
    type Item = Result<Event<V>, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(event) = self.events.pop_front() {
                return Some(Ok(event));
            }
            if self.finished {
                return None;
            }
            if let Err(err) = self.step() {
                self.finished = true;
                self.events.clear();
                return Some(Err(err));
            }
        }
    }
}

/// Match a marker at the start of `src`, which begins with `<`.
/// `value_follows` allows a bare `<` or `</` at the end of the fragment to
/// take the next substitution as its tag.
fn match_marker(src: &str, value_follows: bool) -> Option<(Marker<'_>, usize)> {
    if src.starts_with("<!--") {
        return Some((Marker::Comment, 4));
    }

    if let Some(after) = src.strip_prefix("<//") {
        // `<//name>` documents the tag but still closes whatever is open.
        return Some((Marker::CloseWildcard, 3 + ident_len(after)));
    }

    if let Some(after) = src.strip_prefix("</") {
        let len = ident_len(after);
        if len > 0 {
            return Some((Marker::Close(&after[..len]), 2 + len));
        }
        return (after.is_empty() && value_follows).then_some((Marker::CloseValue, 2));
    }

    let after = src.strip_prefix('<')?;
    let len = ident_len(after);
    if len > 0 {
        return Some((Marker::Open(&after[..len]), 1 + len));
    }
    (after.is_empty() && value_follows).then_some((Marker::OpenValue, 1))
}

/// Byte length of the tag identifier at the start of `src`.
fn ident_len(src: &str) -> usize {
    let mut chars = src.char_indices();
    match chars.next() {
        Some((_, c)) if c.is_alphabetic() || c == '_' || c == '$' => {}
        _ => return 0,
    }
    chars
        .find(|&(_, c)| !(c.is_alphanumeric() || matches!(c, '-' | '_' | '.' | ':' | '$')))
        .map_or(src.len(), |(i, _)| i)
}

/// Byte length of the attribute name at the start of `src`.
fn attr_name_len(src: &str) -> usize {
    src.char_indices()
        .find(|&(_, c)| c.is_whitespace() || matches!(c, '=' | '>' | '/' | '"' | '\'' | '<'))
        .map_or(src.len(), |(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn events(fragments: &[&'static str], values: Vec<i32>) -> Vec<Event<i32>> {
        Scanner::tokenize(fragments.to_vec(), values).unwrap()
    }

    fn error_kind(fragments: &[&'static str], values: Vec<i32>) -> LexErrorKind {
        Scanner::tokenize(fragments.to_vec(), values)
            .unwrap_err()
            .kind
    }

    fn open(name: &str) -> Event<i32> {
        Event::Open(Tag::Name(name.into()))
    }

    fn close(name: &str) -> Event<i32> {
        Event::Close(CloseTag::Tag(Tag::Name(name.into())))
    }

    fn text(run: &str) -> Event<i32> {
        Event::Text(run.into())
    }

    fn quoted(parts: Vec<QuotePart<i32>>) -> AttrValue<i32> {
        AttrValue::Quoted(parts)
    }

    const END: Event<i32> = Event::TagEnd {
        self_closing: false,
    };

    const SELF_CLOSE: Event<i32> = Event::TagEnd { self_closing: true };

    // =========================================================================
    // Text
    // =========================================================================

    #[test]
    fn test_empty_input() {
        assert_eq!(events(&[""], vec![]), vec![]);
    }

    #[test]
    fn test_plain_text_is_trimmed() {
        assert_eq!(events(&["  hello world  "], vec![]), vec![text("hello world")]);
    }

    #[test]
    fn test_lone_angle_bracket_is_text() {
        assert_eq!(events(&["a < b"], vec![]), vec![text("a < b")]);
    }

    #[test]
    fn test_each_line_is_a_run() {
        assert_eq!(
            events(&["<p>\n  one\n  two\n</p>"], vec![]),
            vec![open("p"), END, text("one"), text("two"), close("p")]
        );
    }

    #[test]
    fn test_trailing_whitespace_before_newline() {
        assert_eq!(
            events(&["<p>text   \n</p>"], vec![]),
            vec![open("p"), END, text("text"), close("p")]
        );
    }

    #[test]
    fn test_escaped_newline_keeps_whitespace() {
        assert_eq!(
            events(&["<p> \\\n text</p>"], vec![]),
            vec![open("p"), END, text(" \n text"), close("p")]
        );
    }

    #[test]
    fn test_escaped_newline_at_line_start() {
        assert_eq!(
            events(&["<p>\n\\\n  x</p>"], vec![]),
            vec![open("p"), END, text("\n  x"), close("p")]
        );
    }

    #[test]
    fn test_escaped_newline_survives_trailing_trim() {
        assert_eq!(
            events(&["<p>\n  a \\\n  \n</p>"], vec![]),
            vec![open("p"), END, text("a \n"), close("p")]
        );
    }

    #[test]
    fn test_whitespace_after_tag_on_same_line_kept() {
        assert_eq!(
            events(&["<b>bold</b> and"], vec![]),
            vec![open("b"), END, text("bold"), close("b"), text(" and")]
        );
    }

    // =========================================================================
    // Substitutions in children
    // =========================================================================

    #[test]
    fn test_sole_value() {
        assert_eq!(events(&["", ""], vec![1]), vec![Event::Child(1)]);
    }

    #[test]
    fn test_whitespace_around_values_preserved() {
        assert_eq!(
            events(&["a ", " ", " b"], vec![1, 2]),
            vec![text("a "), Event::Child(1), text(" "), Event::Child(2), text(" b")]
        );
    }

    #[test]
    fn test_value_clears_line_start() {
        assert_eq!(
            events(&["\n  ", "  x\n"], vec![1]),
            vec![Event::Child(1), text("  x")]
        );
    }

    #[test]
    fn test_value_child_inside_element() {
        assert_eq!(
            events(&["<p>", "</p>"], vec![5]),
            vec![open("p"), END, Event::Child(5), close("p")]
        );
    }

    // =========================================================================
    // Tags
    // =========================================================================

    #[test]
    fn test_self_closing() {
        assert_eq!(events(&["<br/>"], vec![]), vec![open("br"), SELF_CLOSE]);
        assert_eq!(events(&["<br />"], vec![]), vec![open("br"), SELF_CLOSE]);
    }

    #[test]
    fn test_tag_names_with_punctuation() {
        assert_eq!(
            events(&["<my-el.x:y/>"], vec![]),
            vec![open("my-el.x:y"), SELF_CLOSE]
        );
    }

    #[test]
    fn test_wildcard_close() {
        assert_eq!(
            events(&["<a><//>"], vec![]),
            vec![open("a"), END, Event::Close(CloseTag::Wildcard)]
        );
    }

    #[test]
    fn test_wildcard_close_with_name() {
        assert_eq!(
            events(&["<a><//a >"], vec![]),
            vec![open("a"), END, Event::Close(CloseTag::Wildcard)]
        );
    }

    #[test]
    fn test_value_as_tag() {
        assert_eq!(
            events(&["<", ">hi</", ">"], vec![7, 7]),
            vec![
                Event::Open(Tag::Value(7)),
                END,
                text("hi"),
                Event::Close(CloseTag::Tag(Tag::Value(7))),
            ]
        );
    }

    #[test]
    fn test_closing_tag_whitespace() {
        assert_eq!(
            events(&["<a></a   \n >"], vec![]),
            vec![open("a"), END, close("a")]
        );
    }

    // =========================================================================
    // Attributes
    // =========================================================================

    #[test]
    fn test_flag_and_quoted_attributes() {
        assert_eq!(
            events(&[r#"<x a b="1" c='2'/>"#], vec![]),
            vec![
                open("x"),
                Event::Attr { name: "a".into(), value: AttrValue::Flag },
                Event::Attr { name: "b".into(), value: quoted(vec![QuotePart::Text("1".into())]) },
                Event::Attr { name: "c".into(), value: quoted(vec![QuotePart::Text("2".into())]) },
                SELF_CLOSE,
            ]
        );
    }

    #[test]
    fn test_attribute_names_with_symbols() {
        assert_eq!(
            events(&["<x @click aria-label:x/>"], vec![]),
            vec![
                open("x"),
                Event::Attr { name: "@click".into(), value: AttrValue::Flag },
                Event::Attr { name: "aria-label:x".into(), value: AttrValue::Flag },
                SELF_CLOSE,
            ]
        );
    }

    #[test]
    fn test_value_attribute() {
        assert_eq!(
            events(&["<x a=", " b = ", ">"], vec![3, 4]),
            vec![
                open("x"),
                Event::Attr { name: "a".into(), value: AttrValue::Value(3) },
                Event::Attr { name: "b".into(), value: AttrValue::Value(4) },
                END,
            ]
        );
    }

    #[test]
    fn test_empty_quoted_attribute() {
        assert_eq!(
            events(&[r#"<x a=""/>"#], vec![]),
            vec![
                open("x"),
                Event::Attr { name: "a".into(), value: quoted(vec![]) },
                SELF_CLOSE,
            ]
        );
    }

    #[test]
    fn test_quoted_attribute_with_values() {
        assert_eq!(
            events(&["<x a=\"pre-", "-", "-post\">"], vec![4, 5]),
            vec![
                open("x"),
                Event::Attr {
                    name: "a".into(),
                    value: quoted(vec![
                        QuotePart::Text("pre-".into()),
                        QuotePart::Value(4),
                        QuotePart::Text("-".into()),
                        QuotePart::Value(5),
                        QuotePart::Text("-post".into()),
                    ]),
                },
                END,
            ]
        );
    }

    #[test]
    fn test_escaped_quote() {
        assert_eq!(
            events(&[r#"<x a="say \"hi\"" b='it\'s'/>"#], vec![]),
            vec![
                open("x"),
                Event::Attr { name: "a".into(), value: quoted(vec![QuotePart::Text(r#"say "hi""#.into())]) },
                Event::Attr { name: "b".into(), value: quoted(vec![QuotePart::Text("it's".into())]) },
                SELF_CLOSE,
            ]
        );
    }

    #[test]
    fn test_other_quote_is_literal() {
        assert_eq!(
            events(&[r#"<x a="it's">"#], vec![]),
            vec![
                open("x"),
                Event::Attr { name: "a".into(), value: quoted(vec![QuotePart::Text("it's".into())]) },
                END,
            ]
        );
    }

    #[test]
    fn test_spread() {
        assert_eq!(
            events(&["<x a ...", " b/>"], vec![9]),
            vec![
                open("x"),
                Event::Attr { name: "a".into(), value: AttrValue::Flag },
                Event::Spread(9),
                Event::Attr { name: "b".into(), value: AttrValue::Flag },
                SELF_CLOSE,
            ]
        );
    }

    #[test]
    fn test_attributes_across_lines() {
        assert_eq!(
            events(&["<x\n  a\n  b\n/>"], vec![]),
            vec![
                open("x"),
                Event::Attr { name: "a".into(), value: AttrValue::Flag },
                Event::Attr { name: "b".into(), value: AttrValue::Flag },
                SELF_CLOSE,
            ]
        );
    }

    // =========================================================================
    // Comments
    // =========================================================================

    #[test]
    fn test_comment() {
        assert_eq!(
            events(&["<!-- note --><a/>"], vec![]),
            vec![Event::Comment, open("a"), SELF_CLOSE]
        );
    }

    #[test]
    fn test_comment_swallows_values() {
        assert_eq!(
            events(&["<!-- ", " -->x"], vec![1]),
            vec![Event::Comment, text("x")]
        );
    }

    #[test]
    fn test_unterminated_comment_tolerated() {
        assert_eq!(
            events(&["a<!-- open"], vec![]),
            vec![text("a"), Event::Comment]
        );
    }

    // =========================================================================
    // Modes
    // =========================================================================

    #[test]
    fn test_mode_transitions() {
        let mut scanner = Scanner::new(vec![r#"<a b="x"#], vec![]).unwrap();
        assert_eq!(scanner.mode(), ScannerMode::Children);
        assert_eq!(scanner.next(), Some(Ok(open("a"))));
        assert_eq!(scanner.mode(), ScannerMode::Props);
        assert_eq!(scanner.next(), None);
        assert_eq!(scanner.mode(), ScannerMode::ClosingQuote('"'));
    }

    // =========================================================================
    // Errors
    // =========================================================================

    #[test]
    fn test_invalid_input() {
        let err = Scanner::<i32>::new(vec![], vec![]).err().unwrap();
        assert_eq!(err.kind, LexErrorKind::InvalidInput { fragments: 0, values: 0 });

        let err = Scanner::new(vec!["a", "b"], vec![1, 2]).err().unwrap();
        assert_eq!(err.kind, LexErrorKind::InvalidInput { fragments: 2, values: 2 });
    }

    #[test]
    fn test_spread_without_value() {
        assert!(matches!(
            error_kind(&["<x ...y/>"], vec![]),
            LexErrorKind::MissingSpreadExpression { .. }
        ));
        assert!(matches!(
            error_kind(&["<x ..."], vec![]),
            LexErrorKind::MissingSpreadExpression { .. }
        ));
    }

    #[test]
    fn test_unquoted_literal_value() {
        assert_eq!(
            error_kind(&["<x a=1>"], vec![]),
            LexErrorKind::ExpressionExpected { name: "a".into() }
        );
    }

    #[test]
    fn test_text_in_closing_tag() {
        assert_eq!(
            error_kind(&["<a></a x>"], vec![]),
            LexErrorKind::UnexpectedText {
                found: "\"x>\"".into(),
                expected: "`>`",
            }
        );
    }

    #[test]
    fn test_unterminated_closing_tag() {
        assert_eq!(
            error_kind(&["<a></a"], vec![]),
            LexErrorKind::UnexpectedText {
                found: "end of input".into(),
                expected: "`>`",
            }
        );
    }

    #[test]
    fn test_value_in_attribute_list() {
        assert_eq!(
            error_kind(&["<a ", ">"], vec![1]),
            LexErrorKind::UnexpectedExpression { context: "tag attributes" }
        );
    }

    #[test]
    fn test_value_in_closing_tag() {
        assert_eq!(
            error_kind(&["<a></a ", ">"], vec![1]),
            LexErrorKind::UnexpectedExpression { context: "closing tag" }
        );
    }

    #[test]
    fn test_stray_text_in_attribute_list() {
        assert!(matches!(
            error_kind(&["<a =b>"], vec![]),
            LexErrorKind::UnexpectedText { .. }
        ));
    }

    #[test]
    fn test_unterminated_comment_with_value() {
        assert_eq!(
            error_kind(&["<!-- ", " never closed"], vec![1]),
            LexErrorKind::MissingCommentTerminator { count: 1 }
        );
    }

    #[test]
    fn test_error_position() {
        let err = Scanner::tokenize(vec!["<a>", "</a x>"], vec![1]).unwrap_err();
        assert_eq!((err.fragment, err.offset), (1, 4));
    }
}
