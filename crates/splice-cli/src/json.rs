use serde_json::{Map, Value};
use splice_parser::{PropValue, Props, Tag, TreeBuilder};

/// Builds `{ "tag", "props", "children" }` JSON objects. Empty props are
/// written as `null`.
pub struct JsonTree;

impl TreeBuilder<Value> for JsonTree {
    type Output = Value;

    fn text(&mut self, text: String) -> Value {
        Value::String(text)
    }

    fn value(&mut self, value: Value) -> Value {
        value
    }

    fn element(&mut self, tag: Tag<Value>, props: Props<Value>, children: Vec<Value>) -> Value {
        let tag = match tag {
            Tag::Name(name) => Value::String(name),
            Tag::Value(value) => value,
        };
        let props = if props.is_empty() {
            Value::Null
        } else {
            let map: Map<String, Value> = props
                .into_iter()
                .map(|(name, value)| {
                    let value = match value {
                        PropValue::Flag => Value::Bool(true),
                        PropValue::Text(text) => Value::String(text),
                        PropValue::Value(value) => value,
                    };
                    (name, value)
                })
                .collect();
            Value::Object(map)
        };

        let mut element = Map::new();
        element.insert("tag".to_string(), tag);
        element.insert("props".to_string(), props);
        element.insert("children".to_string(), Value::Array(children));
        Value::Object(element)
    }
}
