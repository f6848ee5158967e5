//! Resource type: one parsed HAL object and its embedded children.

use std::collections::BTreeMap;

use crate::link::Link;
use crate::property::PropertyValue;
use crate::SELF_REL;

static ABSENT: PropertyValue = PropertyValue::Absent;

/// The pieces a [`Resource`] is assembled from.
///
/// The parser fills this in for one node, then freezes it with
/// [`Resource::from_parts`].
#[derive(Debug, Clone, Default)]
pub struct ResourceParts {
    pub links: BTreeMap<String, Vec<Link>>,
    pub namespaces: BTreeMap<String, String>,
    pub properties: BTreeMap<String, PropertyValue>,
    pub embedded: BTreeMap<String, Vec<Resource>>,
    pub raw_content: String,
}

/// An immutable HAL resource.
///
/// Lookups never fail: an undeclared relation yields an empty slice and a
/// missing property yields [`PropertyValue::Absent`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    links: BTreeMap<String, Vec<Link>>,
    namespaces: BTreeMap<String, String>,
    properties: BTreeMap<String, PropertyValue>,
    embedded: BTreeMap<String, Vec<Resource>>,
    raw_content: String,
}

impl Resource {
    pub fn from_parts(parts: ResourceParts) -> Self {
        let ResourceParts {
            links,
            namespaces,
            properties,
            embedded,
            raw_content,
        } = parts;

        Self {
            links,
            namespaces,
            properties,
            embedded,
            raw_content,
        }
    }

    /// The resource's own canonical link: the first link under `self`.
    pub fn self_link(&self) -> Option<&Link> {
        self.link(SELF_REL)
    }

    /// First link declared under `rel`.
    pub fn link(&self, rel: &str) -> Option<&Link> {
        self.links(rel).first()
    }

    /// All links under `rel`, in declaration order.
    pub fn links(&self, rel: &str) -> &[Link] {
        self.links.get(rel).map(Vec::as_slice).unwrap_or_default()
    }

    /// Embedded resources under `rel`, in declaration order.
    pub fn embedded(&self, rel: &str) -> &[Resource] {
        self.embedded.get(rel).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn property(&self, name: &str) -> &PropertyValue {
        self.properties.get(name).unwrap_or(&ABSENT)
    }

    /// JSON text of the whole node this resource was parsed from.
    pub fn raw_content(&self) -> &str {
        &self.raw_content
    }

    /// Href template declared for a curie prefix.
    pub fn namespace(&self, prefix: &str) -> Option<&str> {
        self.namespaces.get(prefix).map(String::as_str)
    }

    pub fn namespaces(&self) -> &BTreeMap<String, String> {
        &self.namespaces
    }

    /// Declared link relations, including `self`.
    pub fn relations(&self) -> impl Iterator<Item = &str> {
        self.links.keys().map(String::as_str)
    }

    pub fn all_links(&self) -> impl Iterator<Item = (&str, &[Link])> {
        self.links
            .iter()
            .map(|(rel, links)| (rel.as_str(), links.as_slice()))
    }

    pub fn properties(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.properties
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    pub fn embedded_relations(&self) -> impl Iterator<Item = (&str, &[Resource])> {
        self.embedded
            .iter()
            .map(|(rel, resources)| (rel.as_str(), resources.as_slice()))
    }
}
