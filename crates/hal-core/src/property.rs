//! Property values: the classification of a resource's plain fields.

use serde::Serialize;

/// The value of a property looked up by name.
///
/// Object and array values are kept as their serialized JSON text in
/// [`PropertyValue::RawJson`], so they can be deserialized into a structured
/// type later. They are never collapsed to an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum PropertyValue {
    /// No property with that name exists on the resource.
    #[default]
    Absent,
    /// The property is explicitly `null`.
    Null,
    /// A JSON string, number or boolean in textual form.
    Text(String),
    /// A JSON object or array as compact JSON text.
    RawJson(String),
}

impl PropertyValue {
    /// Text of a `Text` or `RawJson` value; `None` for `Absent` and `Null`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) | Self::RawJson(s) => Some(s),
            Self::Absent | Self::Null => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn is_raw_json(&self) -> bool {
        matches!(self, Self::RawJson(_))
    }

    /// Short lowercase label of the variant, as used in CLI output.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Absent => "absent",
            Self::Null => "null",
            Self::Text(_) => "text",
            Self::RawJson(_) => "raw_json",
        }
    }
}
