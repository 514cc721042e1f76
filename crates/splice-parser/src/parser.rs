//! Stack-based tree assembler.
//!
//! Pulls events from the scanner one at a time and keeps the chain of open
//! elements on an explicit stack. Content outside any element goes to an
//! implicit root with an empty tag, which is unwrapped when it holds a
//! single node.

use splice_lexer::{AttrValue, CloseTag, Event, QuotePart, Scanner};

use crate::ast::{Element, ParseNode, PropValue, Tag};
use crate::value::Substitution;
use crate::{ParseError, ParseErrorKind};

/// Parse `fragments` interleaved with `values` into an element tree.
///
/// Returns `None` for a template with no content, the single node for a
/// template with one top-level node, and an implicit fragment element (see
/// [`Element::is_fragment`]) otherwise.
pub fn parse<S, V>(fragments: &[S], values: Vec<V>) -> Result<Option<ParseNode<V>>, ParseError>
where
    S: AsRef<str>,
    V: Substitution,
{
    Parser::parse(fragments, values)
}

/// Tree assembler state for one parse call.
pub struct Parser<V> {
    root: Element<V>,
    stack: Vec<Element<V>>,
}

impl<V: Substitution> Default for Parser<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Substitution> Parser<V> {
    /// Create an assembler with an empty stack.
    pub fn new() -> Self {
        Self {
            root: Element::new(Tag::Name(String::new())),
            stack: Vec::new(),
        }
    }

    /// Drive the scanner over the input and assemble the tree.
    pub fn parse<S: AsRef<str>>(
        fragments: &[S],
        values: Vec<V>,
    ) -> Result<Option<ParseNode<V>>, ParseError> {
        let fragments: Vec<&str> = fragments.iter().map(AsRef::as_ref).collect();
        let count = fragments.len();
        let mut scanner = Scanner::new(fragments, values)?;
        let mut parser = Parser::new();

        let at = |scanner: &Scanner<'_, V>, kind: ParseErrorKind| {
            let (fragment, offset) = scanner.position();
            let err = ParseError {
                kind,
                fragment,
                offset,
            };
            tracing::debug!(%err, "template parse failed");
            err
        };

        while let Some(event) = scanner.next() {
            let event = event.map_err(|err| at(&scanner, err.kind.into()))?;
            parser.apply(event).map_err(|kind| at(&scanner, kind))?;
        }

        let tree = parser.finish().map_err(|kind| at(&scanner, kind))?;
        tracing::debug!(fragments = count, empty = tree.is_none(), "parsed template");
        Ok(tree)
    }

    /// Number of currently open elements.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Apply one scanner event to the tree.
    pub fn apply(&mut self, event: Event<V>) -> Result<(), ParseErrorKind> {
        tracing::trace!(?event, depth = self.stack.len(), "apply");

        match event {
            Event::Text(text) => self.current().children.push(ParseNode::Text(text)),
            Event::Child(value) => self.current().children.push(ParseNode::Value(value)),
            Event::Open(tag) => self.stack.push(Element::new(tag)),
            Event::Attr { name, value } => {
                let value = match value {
                    AttrValue::Flag => PropValue::Flag,
                    AttrValue::Value(value) => PropValue::Value(value),
                    AttrValue::Quoted(parts) => PropValue::Text(concat_quoted(parts)),
                };
                self.current().props.insert(name, value);
            }
            Event::Spread(value) => {
                let props = &mut self.current().props;
                for (name, value) in value.into_entries() {
                    props.insert(name, PropValue::Value(value));
                }
            }
            Event::TagEnd { self_closing } => {
                if self_closing {
                    self.close_current();
                }
            }
            Event::Close(close) => {
                let Some(open) = self.stack.last() else {
                    return Err(ParseErrorKind::UnmatchedClosingTag {
                        tag: describe_close(&close),
                    });
                };
                if let CloseTag::Tag(tag) = &close {
                    if *tag != open.tag {
                        return Err(ParseErrorKind::MismatchedClosingTag {
                            expected: describe_tag(&open.tag),
                            found: describe_tag(tag),
                        });
                    }
                }
                self.close_current();
            }
            Event::Comment => {}
        }
        Ok(())
    }

    /// Check that every element was closed and unwrap the root.
    pub fn finish(self) -> Result<Option<ParseNode<V>>, ParseErrorKind> {
        if let Some(open) = self.stack.last() {
            return Err(ParseErrorKind::UnmatchedOpeningTag {
                tag: describe_tag(&open.tag),
            });
        }

        let mut root = self.root;
        Ok(match root.children.len() {
            0 => None,
            1 => root.children.pop(),
            _ => Some(ParseNode::Element(root)),
        })
    }

    fn current(&mut self) -> &mut Element<V> {
        self.stack.last_mut().unwrap_or(&mut self.root)
    }

    fn close_current(&mut self) {
        if let Some(element) = self.stack.pop() {
            self.current().children.push(ParseNode::Element(element));
        }
    }
}

fn concat_quoted<V: Substitution>(parts: Vec<QuotePart<V>>) -> String {
    let mut text = String::new();
    for part in parts {
        match part {
            QuotePart::Text(literal) => text.push_str(&literal),
            QuotePart::Value(value) if value.is_nullish() => {}
            QuotePart::Value(value) => text.push_str(&value.to_text()),
        }
    }
    text
}

fn describe_tag<V: Substitution>(tag: &Tag<V>) -> String {
    match tag {
        Tag::Name(name) => name.clone(),
        Tag::Value(value) => format!("${{{value:?}}}"),
    }
}

fn describe_close<V: Substitution>(close: &CloseTag<V>) -> String {
    match close {
        CloseTag::Tag(tag) => describe_tag(tag),
        CloseTag::Wildcard => "/".to_string(),
    }
}
