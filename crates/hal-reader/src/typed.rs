//! Typed access to resource properties and whole resources.

use hal_core::{HalError, PropertyValue, Resource, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

/// Serde-backed accessors layered over a parsed [`Resource`].
pub trait TypedResource {
    /// Text of a property, or the raw JSON of an object/array property.
    /// `None` for missing and `null` properties.
    fn value_as_string(&self, name: &str) -> Option<&str>;

    /// Deserialize a property into `T`.
    ///
    /// Object and array properties are decoded from their raw JSON. Scalar
    /// properties are decoded as JSON first (so `"42"` can become a number),
    /// then as a JSON string. A value that fits neither is logged and
    /// treated as absent.
    fn value_as<T: DeserializeOwned>(&self, name: &str) -> Option<T>;

    /// Deserialize the whole resource, reserved fields included, into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`HalError::Deserialize`] if the raw content does not fit `T`.
    fn resource_as<T: DeserializeOwned>(&self) -> Result<T>;
}

impl TypedResource for Resource {
    fn value_as_string(&self, name: &str) -> Option<&str> {
        self.property(name).as_str()
    }

    fn value_as<T: DeserializeOwned>(&self, name: &str) -> Option<T> {
        let decoded = match self.property(name) {
            PropertyValue::Absent | PropertyValue::Null => return None,
            PropertyValue::RawJson(raw) => serde_json::from_str(raw),
            PropertyValue::Text(text) => serde_json::from_str(text)
                .or_else(|_| serde_json::from_value(Value::String(text.clone()))),
        };

        match decoded {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(
                    property = name,
                    target_type = std::any::type_name::<T>(),
                    error = %e,
                    "failed to get value as object, returning absent"
                );
                None
            }
        }
    }

    fn resource_as<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_str(self.raw_content()).map_err(|e| {
            warn!(
                target_type = std::any::type_name::<T>(),
                error = %e,
                "failed to parse resource as object"
            );
            HalError::Deserialize(e.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hal_parser::parse;
    use serde::Deserialize;
    use std::collections::HashMap;

    #[derive(Debug, PartialEq, Deserialize)]
    struct Address {
        street: String,
        zip: String,
    }

    #[derive(Debug, PartialEq, Deserialize)]
    struct Order {
        total: u32,
        currency: String,
        #[serde(default)]
        tags: Vec<String>,
    }

    fn order() -> Resource {
        parse(
            r#"{
                "_links": {"self": {"href": "/orders/1"}},
                "total": 42,
                "currency": "GBP",
                "tags": ["a", "b"],
                "address": {"street": "1 Main St", "zip": "N1"},
                "note": null
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn value_as_string_exposes_text_and_raw_json() {
        let order = order();
        assert_eq!(order.value_as_string("currency"), Some("GBP"));
        assert_eq!(order.value_as_string("total"), Some("42"));
        assert_eq!(order.value_as_string("tags"), Some(r#"["a","b"]"#));
        assert_eq!(order.value_as_string("note"), None);
        assert_eq!(order.value_as_string("missing"), None);
    }

    #[test]
    fn value_as_decodes_structured_properties() {
        let order = order();

        let tags: Vec<String> = order.value_as("tags").unwrap();
        assert_eq!(tags, ["a", "b"]);

        let address: Address = order.value_as("address").unwrap();
        assert_eq!(
            address,
            Address {
                street: "1 Main St".to_string(),
                zip: "N1".to_string(),
            }
        );

        let loose: HashMap<String, String> = order.value_as("address").unwrap();
        assert_eq!(loose.get("zip").map(String::as_str), Some("N1"));
    }

    #[test]
    fn value_as_decodes_scalar_properties() {
        let order = order();
        assert_eq!(order.value_as::<u32>("total"), Some(42));
        assert_eq!(order.value_as::<String>("total"), Some("42".to_string()));
        assert_eq!(order.value_as::<String>("currency"), Some("GBP".to_string()));
    }

    #[test]
    fn value_as_decodes_integers_beyond_u64() {
        let resource = parse(r#"{"id":123456789012345678901234567890,"ref":{"id":340282366920938463463374607431768211455}}"#)
            .unwrap();
        assert_eq!(
            resource.value_as::<u128>("id"),
            Some(123_456_789_012_345_678_901_234_567_890)
        );
        assert_eq!(
            resource.value_as::<String>("id"),
            Some("123456789012345678901234567890".to_string())
        );
        let nested: HashMap<String, u128> = resource.value_as("ref").unwrap();
        assert_eq!(nested.get("id"), Some(&u128::MAX));
    }

    #[test]
    fn value_as_returns_none_when_absent_or_mismatched() {
        let order = order();
        assert_eq!(order.value_as::<Vec<String>>("missing"), None);
        assert_eq!(order.value_as::<Vec<String>>("note"), None);
        assert_eq!(order.value_as::<Vec<u32>>("tags"), None);
        assert_eq!(order.value_as::<Address>("currency"), None);
    }

    #[test]
    fn resource_as_decodes_whole_resource() {
        let order: Order = order().resource_as().unwrap();
        assert_eq!(
            order,
            Order {
                total: 42,
                currency: "GBP".to_string(),
                tags: vec!["a".to_string(), "b".to_string()],
            }
        );
    }

    #[test]
    fn resource_as_decodes_embedded_resources() {
        let resource = parse(
            r#"{"_embedded":{"orders":[{"total":1,"currency":"EUR"},{"total":2,"currency":"USD"}]}}"#,
        )
        .unwrap();
        let orders: Vec<Order> = resource
            .embedded("orders")
            .iter()
            .map(|r| r.resource_as().unwrap())
            .collect();
        assert_eq!(orders[0].currency, "EUR");
        assert_eq!(orders[1].total, 2);
    }

    #[test]
    fn resource_as_reports_mismatch() {
        let resource = parse(r#"{"total":"many"}"#).unwrap();
        let err = resource.resource_as::<Order>().unwrap_err();
        assert!(matches!(err, HalError::Deserialize(_)));
    }
}
