use std::fmt;

/// What the parser needs to know about a substitution value.
///
/// Values stay opaque everywhere except in quoted attributes (where they
/// are stringified), in spreads (where their entries become attributes)
/// and in closing tags (where a value tag is compared with `==`).
pub trait Substitution: PartialEq + fmt::Debug + Sized {
    /// Whether the value contributes nothing to a quoted attribute.
    fn is_nullish(&self) -> bool;

    /// The value's text inside a quoted attribute.
    fn to_text(&self) -> String;

    /// Entries merged by `...${value}`. Values that are not mappings
    /// spread nothing.
    fn into_entries(self) -> Vec<(String, Self)>;
}

#[cfg(feature = "json")]
impl Substitution for serde_json::Value {
    fn is_nullish(&self) -> bool {
        self.is_null()
    }

    fn to_text(&self) -> String {
        match self {
            serde_json::Value::String(text) => text.clone(),
            other => other.to_string(),
        }
    }

    fn into_entries(self) -> Vec<(String, Self)> {
        match self {
            serde_json::Value::Object(map) => map.into_iter().collect(),
            _ => Vec::new(),
        }
    }
}
