//! # hal-reader
//!
//! Entry point for reading HAL+JSON documents.
//!
//! [`HalReader`] reads a document from a string or any [`std::io::Read`] and
//! returns a [`Resource`]. The [`TypedResource`] trait adds serde-based typed
//! access to properties and to the whole resource.
//!
//! ```
//! use hal_reader::{HalReader, TypedResource};
//!
//! let doc = r#"{"_links":{"self":{"href":"/orders/1"}},"tags":["a","b"]}"#;
//! let order = HalReader::new().read_str(doc).unwrap();
//!
//! assert_eq!(order.self_link().unwrap().href, "/orders/1");
//! let tags: Vec<String> = order.value_as("tags").unwrap();
//! assert_eq!(tags, ["a", "b"]);
//! ```

pub mod reader;
pub mod typed;

pub use hal_core::{HalError, Link, ParseError, PropertyValue, Resource, Result};
pub use hal_parser::ParseOptions;
pub use reader::HalReader;
pub use typed::TypedResource;
