//! splice lexer
//!
//! Scans tagged-template markup: literal text fragments interleaved with
//! opaque substitution values. The scanner never inspects a value; it only
//! decides where in the grammar each one lands (tag, attribute, spread,
//! child) and emits a stream of structural events for the tree assembler.
//!
//! # Example
//!
//! ```
//! use splice_lexer::{Event, Scanner, Tag};
//!
//! let events = Scanner::tokenize(vec!["<b>", "</b>"], vec![42]).unwrap();
//! assert_eq!(events[0], Event::Open(Tag::Name("b".into())));
//! assert_eq!(events[2], Event::Child(42));
//! ```

pub mod cursor;
pub mod event;
pub mod scanner;
pub mod whitespace;

pub use cursor::Cursor;
pub use event::{AttrValue, CloseTag, Event, QuotePart, Tag};
pub use scanner::{Scanner, ScannerMode};

/// Lexer error with the fragment index and byte offset where it was detected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Lexer error in fragment {fragment} at offset {offset}: {kind}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub fragment: usize,
    pub offset: usize,
}

/// The kinds of failure the scanner can detect on its own.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexErrorKind {
    /// Fragment and value counts do not interleave.
    #[error("expected one more fragment than values, got {fragments} fragment(s) and {values} value(s)")]
    InvalidInput { fragments: usize, values: usize },

    /// Stray text where only a terminator or whitespace is allowed.
    #[error("unexpected {found}, expected {expected}")]
    UnexpectedText {
        found: String,
        expected: &'static str,
    },

    /// A substitution in a position the grammar does not permit.
    #[error("unexpected substitution in {context}")]
    UnexpectedExpression { context: &'static str },

    /// `...` not immediately followed by a substitution.
    #[error("spread `...` must be followed by a substitution, found {found}")]
    MissingSpreadExpression { found: String },

    /// `name=` followed by neither a quote nor a substitution.
    #[error("attribute `{name}` expects a quoted string or a substitution")]
    ExpressionExpected { name: String },

    /// An unterminated comment swallowed substitutions.
    #[error("comment swallowed {count} substitution(s) and was never closed with `-->`")]
    MissingCommentTerminator { count: usize },
}

/// Describe a piece of source text for an error message.
pub(crate) fn describe_text(text: &str) -> String {
    const MAX: usize = 16;
    match text.char_indices().nth(MAX) {
        _ if text.is_empty() => "end of input".to_string(),
        Some((end, _)) => format!("{:?}...", &text[..end]),
        None => format!("{text:?}"),
    }
}
