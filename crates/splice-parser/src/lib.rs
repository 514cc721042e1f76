//! splice parser
//!
//! Assembles the event stream from `splice-lexer` into an element tree.
//! Elements are opened and closed on an explicit stack, so nesting depth
//! never turns into call-stack depth.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use splice_parser::{parse, ParseNode, PropValue, Tag};
//!
//! let tree = parse(&["<a href=", ">", "</a>"], vec![json!("/home"), json!("Home")])
//!     .unwrap()
//!     .unwrap();
//! let ParseNode::Element(link) = tree else { panic!() };
//! assert_eq!(link.tag, Tag::Name("a".into()));
//! assert_eq!(link.props["href"], PropValue::Value(json!("/home")));
//! assert_eq!(link.children, vec![ParseNode::Value(json!("Home"))]);
//! ```

pub mod ast;
pub mod builder;
pub mod parser;
pub mod value;

pub use ast::{Element, ParseNode, PropValue, Props, Tag};
pub use builder::TreeBuilder;
pub use parser::{parse, Parser};
pub use value::Substitution;

use splice_lexer::{LexError, LexErrorKind};

/// Parse error with the fragment index and byte offset where it was detected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Parse error in fragment {fragment} at offset {offset}: {kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub fragment: usize,
    pub offset: usize,
}

/// Every way a parse can fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    /// Fragment and value counts do not interleave.
    #[error("expected one more fragment than values, got {fragments} fragment(s) and {values} value(s)")]
    InvalidInput { fragments: usize, values: usize },

    /// A closing tag with nothing open.
    #[error("closing tag </{tag}> has no open element")]
    UnmatchedClosingTag { tag: String },

    /// A named closing tag that differs from the innermost open tag.
    #[error("closing tag </{found}> does not match open <{expected}>")]
    MismatchedClosingTag { expected: String, found: String },

    /// End of input with an element still open.
    #[error("<{tag}> is never closed")]
    UnmatchedOpeningTag { tag: String },

    /// `...` not immediately followed by a substitution.
    #[error("spread `...` must be followed by a substitution, found {found}")]
    MissingSpreadExpression { found: String },

    /// `name=` followed by neither a quote nor a substitution.
    #[error("attribute `{name}` expects a quoted string or a substitution")]
    ExpressionExpected { name: String },

    /// Stray text where only a terminator or whitespace is allowed.
    #[error("unexpected {found}, expected {expected}")]
    UnexpectedText {
        found: String,
        expected: &'static str,
    },

    /// A substitution in a position the grammar does not permit.
    #[error("unexpected substitution in {context}")]
    UnexpectedExpression { context: &'static str },

    /// An unterminated comment swallowed substitutions.
    #[error("comment swallowed {count} substitution(s) and was never closed with `-->`")]
    MissingCommentTerminator { count: usize },
}

impl From<LexErrorKind> for ParseErrorKind {
    fn from(kind: LexErrorKind) -> Self {
        match kind {
            LexErrorKind::InvalidInput { fragments, values } => {
                ParseErrorKind::InvalidInput { fragments, values }
            }
            LexErrorKind::UnexpectedText { found, expected } => {
                ParseErrorKind::UnexpectedText { found, expected }
            }
            LexErrorKind::UnexpectedExpression { context } => {
                ParseErrorKind::UnexpectedExpression { context }
            }
            LexErrorKind::MissingSpreadExpression { found } => {
                ParseErrorKind::MissingSpreadExpression { found }
            }
            LexErrorKind::ExpressionExpected { name } => ParseErrorKind::ExpressionExpected { name },
            LexErrorKind::MissingCommentTerminator { count } => {
                ParseErrorKind::MissingCommentTerminator { count }
            }
        }
    }
}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        ParseError {
            kind: err.kind.into(),
            fragment: err.fragment,
            offset: err.offset,
        }
    }
}
