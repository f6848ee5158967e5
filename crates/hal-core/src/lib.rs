//! # hal-core
//!
//! Resource model and error types for the HAL+JSON reader.
//!
//! This crate defines the types shared by the parser, the reader façade and the CLI:
//! - [`Resource`]: one parsed HAL object with its links, namespaces, properties
//!   and embedded resources
//! - [`Link`]: a link declared under `_links`
//! - [`PropertyValue`]: the four-way classification of a property lookup
//! - Error hierarchy ([`HalError`], [`ParseError`])

pub mod error;
pub mod link;
pub mod property;
pub mod resource;

pub use error::{HalError, ParseError, Result};
pub use link::Link;
pub use property::PropertyValue;
pub use resource::{Resource, ResourceParts};

/// Reserved field holding the link relations of a resource.
pub const LINKS: &str = "_links";

/// Reserved field holding embedded resources.
pub const EMBEDDED: &str = "_embedded";

/// Reserved relation under `_links` that declares curie namespaces.
pub const CURIES: &str = "curies";

/// Relation of a resource's own canonical link.
pub const SELF_REL: &str = "self";
