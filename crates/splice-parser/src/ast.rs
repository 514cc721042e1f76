//! Element tree produced by the parser.

use indexmap::IndexMap;

pub use splice_lexer::Tag;

/// Attributes in first-insertion order; a later write to a name replaces
/// the value in place.
pub type Props<V> = IndexMap<String, PropValue<V>>;

/// An attribute value.
#[derive(Debug, Clone, PartialEq)]
pub enum PropValue<V> {
    /// Bare attribute, i.e. `true`.
    Flag,
    /// Quoted value with any substitutions stringified into it.
    Text(String),
    /// A substitution assigned directly or merged in by a spread.
    Value(V),
}

/// An element with its attributes and children in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct Element<V> {
    pub tag: Tag<V>,
    pub props: Props<V>,
    pub children: Vec<ParseNode<V>>,
}

impl<V> Element<V> {
    pub fn new(tag: Tag<V>) -> Self {
        Self {
            tag,
            props: Props::new(),
            children: Vec::new(),
        }
    }

    /// The implicit wrapper around several top-level nodes has an empty tag.
    pub fn is_fragment(&self) -> bool {
        matches!(&self.tag, Tag::Name(name) if name.is_empty())
    }
}

// Nested elements are released from a flat work list, so dropping a deep
// tree does not overflow the stack.
impl<V> Drop for Element<V> {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(node) = pending.pop() {
            if let ParseNode::Element(mut element) = node {
                pending.append(&mut element.children);
            }
        }
    }
}

/// A node in the element tree.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseNode<V> {
    Element(Element<V>),
    /// A normalized literal text run.
    Text(String),
    /// A substitution in child position, untouched.
    Value(V),
}

impl<V> ParseNode<V> {
    pub fn as_element(&self) -> Option<&Element<V>> {
        match self {
            ParseNode::Element(element) => Some(element),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ParseNode::Text(text) => Some(text),
            _ => None,
        }
    }
}
