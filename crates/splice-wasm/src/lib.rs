//! WASM bindings for the splice parser.
//!
//! Exposes `parse(strings, values)` to JavaScript via wasm-bindgen, shaped
//! for tagged templates: `parse(strings, values)` with the arguments a tag
//! function receives. Returns a tree of `{ tag, props, children }` objects
//! or throws on error.

use js_sys::{Array, Object, Reflect};
use splice_parser::{PropValue, Props, Substitution, Tag, TreeBuilder};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// A JavaScript value used as a substitution.
#[derive(Debug, Clone, PartialEq)]
pub struct Slot(pub JsValue);

impl Substitution for Slot {
    fn is_nullish(&self) -> bool {
        self.0.is_null() || self.0.is_undefined()
    }

    fn to_text(&self) -> String {
        match self.0.as_string() {
            Some(text) => text,
            None => String::from(self.0.unchecked_ref::<Object>().to_string()),
        }
    }

    fn into_entries(self) -> Vec<(String, Self)> {
        if !self.0.is_object() {
            return Vec::new();
        }
        Object::entries(self.0.unchecked_ref::<Object>())
            .iter()
            .filter_map(|entry| {
                let pair: Array = entry.unchecked_into();
                let name = pair.get(0).as_string()?;
                Some((name, Slot(pair.get(1))))
            })
            .collect()
    }
}

/// Builds plain JS objects `{ tag, props, children }`.
struct JsTree;

impl JsTree {
    fn set(target: &Object, key: &str, value: &JsValue) -> Result<(), JsError> {
        Reflect::set(target, &JsValue::from_str(key), value)
            .map_err(|_| JsError::new(&format!("Failed to set {key} property")))?;
        Ok(())
    }
}

impl TreeBuilder<Slot> for JsTree {
    type Output = Result<JsValue, JsError>;

    fn text(&mut self, text: String) -> Self::Output {
        Ok(JsValue::from(text))
    }

    fn value(&mut self, value: Slot) -> Self::Output {
        Ok(value.0)
    }

    fn element(
        &mut self,
        tag: Tag<Slot>,
        props: Props<Slot>,
        children: Vec<Self::Output>,
    ) -> Self::Output {
        let tag = match tag {
            Tag::Name(name) => JsValue::from(name),
            Tag::Value(slot) => slot.0,
        };

        let props = if props.is_empty() {
            JsValue::NULL
        } else {
            let object = Object::new();
            for (name, value) in props {
                let value = match value {
                    PropValue::Flag => JsValue::TRUE,
                    PropValue::Text(text) => JsValue::from(text),
                    PropValue::Value(slot) => slot.0,
                };
                Self::set(&object, &name, &value)?;
            }
            object.into()
        };

        let children = children.into_iter().collect::<Result<Array, _>>()?;

        let element = Object::new();
        Self::set(&element, "tag", &tag)?;
        Self::set(&element, "props", &props)?;
        Self::set(&element, "children", &children)?;
        Ok(element.into())
    }
}

/// Parse a tagged template.
///
/// `strings` are the template's literal parts and `values` its
/// substitutions. Returns the single root node, a fragment element with an
/// empty `tag` for several roots, or `null` for an empty template.
/// Throws a JS error if the markup is malformed.
#[wasm_bindgen]
pub fn parse(strings: Array, values: Array) -> Result<JsValue, JsError> {
    let fragments: Vec<String> = strings
        .iter()
        .map(|fragment| fragment.as_string().unwrap_or_default())
        .collect();
    let values: Vec<Slot> = values.iter().map(Slot).collect();

    let tree = splice_parser::parse(&fragments, values).map_err(|e| JsError::new(&e.to_string()))?;
    match tree {
        Some(tree) => tree.build(&mut JsTree),
        None => Ok(JsValue::NULL),
    }
}

/// Get the parser version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
