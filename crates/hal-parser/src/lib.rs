//! # hal-parser
//!
//! Turns a HAL+JSON document into a [`hal_core::Resource`] tree.
//!
//! The parser works over any JSON tree that implements [`JsonNode`];
//! `serde_json::Value` is supported out of the box. Parsing is pure and
//! atomic: it either returns the complete tree or a [`ParseError`].

pub mod node;
pub mod options;
pub mod parser;

pub use hal_core::ParseError;
pub use node::{JsonNode, NodeKind};
pub use options::ParseOptions;
pub use parser::Parser;

use hal_core::Resource;

/// Parse a HAL+JSON document with default [`ParseOptions`].
///
/// # Errors
///
/// Returns [`ParseError::MalformedJson`] if `text` is not valid JSON, and one
/// of the structural variants if `_links`, `_embedded` or a link-object is
/// malformed.
pub fn parse(text: &str) -> Result<Resource, ParseError> {
    Parser::default().parse_str(text)
}
