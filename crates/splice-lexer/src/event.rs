/// A tag identifier: a name parsed from text, or a substitution used as-is.
#[derive(Debug, Clone, PartialEq)]
pub enum Tag<V> {
    Name(String),
    Value(V),
}

impl<V> Tag<V> {
    /// The tag name, if this tag was written as text.
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Tag::Name(name) => Some(name),
            Tag::Value(_) => None,
        }
    }
}

/// The target of a closing marker.
#[derive(Debug, Clone, PartialEq)]
pub enum CloseTag<V> {
    /// `</name>` or `</${value}>`: must match the innermost open tag.
    Tag(Tag<V>),
    /// `<//>`: closes the innermost open tag whatever it is.
    Wildcard,
}

/// One piece of a quoted attribute value.
#[derive(Debug, Clone, PartialEq)]
pub enum QuotePart<V> {
    /// Literal text, already unescaped.
    Text(String),
    /// A substitution to be stringified into the value.
    Value(V),
}

/// The right-hand side of an attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue<V> {
    /// Bare `name`.
    Flag,
    /// `name=${value}`.
    Value(V),
    /// `name="..."`, possibly with substitutions inside the quotes.
    Quoted(Vec<QuotePart<V>>),
}

/// Structural events emitted by the scanner, in input order.
#[derive(Debug, Clone, PartialEq)]
pub enum Event<V> {
    /// A normalized, non-empty text run.
    Text(String),
    /// A substitution in child position.
    Child(V),
    /// `<tag`: a new element starts accepting attributes.
    Open(Tag<V>),
    /// `name`, `name="..."` or `name=${value}`.
    Attr { name: String, value: AttrValue<V> },
    /// `...${value}`.
    Spread(V),
    /// `>` or `/>` ending an opening tag.
    TagEnd { self_closing: bool },
    /// `</tag`, `</${value}` or `<//`.
    Close(CloseTag<V>),
    /// `<!-- ... -->`; its contents are discarded.
    Comment,
}
