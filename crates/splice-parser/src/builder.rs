//! Folding an element tree into a downstream representation.

use std::mem;

use crate::ast::{ParseNode, Props, Tag};

/// Receives a parsed tree bottom-up as `(tag, props, children)` triples.
pub trait TreeBuilder<V> {
    type Output;

    /// A literal text run.
    fn text(&mut self, text: String) -> Self::Output;

    /// A substitution in child position.
    fn value(&mut self, value: V) -> Self::Output;

    /// An element whose children have already been built.
    fn element(&mut self, tag: Tag<V>, props: Props<V>, children: Vec<Self::Output>)
        -> Self::Output;
}

enum Frame<V> {
    Visit(ParseNode<V>),
    Assemble {
        tag: Tag<V>,
        props: Props<V>,
        len: usize,
    },
}

impl<V> ParseNode<V> {
    /// Build this tree with `builder`, children before parents.
    ///
    /// Uses an explicit work stack, so deep trees do not recurse.
    pub fn build<B: TreeBuilder<V>>(self, builder: &mut B) -> B::Output {
        let mut work = vec![Frame::Visit(self)];
        let mut built: Vec<B::Output> = Vec::new();

        while let Some(frame) = work.pop() {
            match frame {
                Frame::Visit(ParseNode::Text(text)) => built.push(builder.text(text)),
                Frame::Visit(ParseNode::Value(value)) => built.push(builder.value(value)),
                Frame::Visit(ParseNode::Element(mut element)) => {
                    let children = mem::take(&mut element.children);
                    work.push(Frame::Assemble {
                        tag: mem::replace(&mut element.tag, Tag::Name(String::new())),
                        props: mem::take(&mut element.props),
                        len: children.len(),
                    });
                    work.extend(children.into_iter().rev().map(Frame::Visit));
                }
                Frame::Assemble { tag, props, len } => {
                    let children = built.split_off(built.len() - len);
                    built.push(builder.element(tag, props, children));
                }
            }
        }

        built.pop().expect("a tree builds exactly one root")
    }
}
