//! Generic JSON tree abstraction consumed by the parser.

use serde_json::Value;

/// Kind of a JSON node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Object,
    Array,
    String,
    Number,
    Bool,
    Null,
}

impl NodeKind {
    pub fn is_container(self) -> bool {
        matches!(self, Self::Object | Self::Array)
    }
}

/// Read-only view of a parsed JSON value.
///
/// Object fields are yielded in document order when the tree preserves it.
pub trait JsonNode {
    fn kind(&self) -> NodeKind;

    /// Field `key` of an object node; `None` for other kinds.
    fn field(&self, key: &str) -> Option<&Self>;

    /// Key/value pairs of an object node; empty for other kinds.
    fn fields(&self) -> impl Iterator<Item = (&str, &Self)>;

    /// Elements of an array node; empty for other kinds.
    fn elements(&self) -> impl Iterator<Item = &Self>;

    fn as_bool(&self) -> Option<bool>;

    /// Textual rendering of a string, number or boolean. Strings are returned
    /// unquoted; containers and `null` yield `None`.
    fn scalar_text(&self) -> Option<String>;

    /// Compact JSON serialization of the node.
    fn to_json_text(&self) -> String;
}

impl JsonNode for Value {
    fn kind(&self) -> NodeKind {
        match self {
            Value::Object(_) => NodeKind::Object,
            Value::Array(_) => NodeKind::Array,
            Value::String(_) => NodeKind::String,
            Value::Number(_) => NodeKind::Number,
            Value::Bool(_) => NodeKind::Bool,
            Value::Null => NodeKind::Null,
        }
    }

    fn field(&self, key: &str) -> Option<&Self> {
        self.as_object().and_then(|map| map.get(key))
    }

    fn fields(&self) -> impl Iterator<Item = (&str, &Self)> {
        self.as_object()
            .into_iter()
            .flat_map(|map| map.iter())
            .map(|(key, value)| (key.as_str(), value))
    }

    fn elements(&self) -> impl Iterator<Item = &Self> {
        self.as_array().into_iter().flatten()
    }

    fn as_bool(&self) -> Option<bool> {
        Value::as_bool(self)
    }

    fn scalar_text(&self) -> Option<String> {
        match self {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }

    fn to_json_text(&self) -> String {
        self.to_string()
    }
}
