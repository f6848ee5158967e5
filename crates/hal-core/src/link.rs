//! Link type: a relation from a resource to a target URI.

use serde::{Deserialize, Serialize};

/// A link declared under a resource's `_links` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Relation the link was declared under (e.g. "self", "next", "acme:orders").
    pub rel: String,

    /// Target URI or URI template.
    pub href: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hreflang: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    /// Set when the link-object carried `"templated": true`.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub templated: bool,
}

impl Link {
    /// A link with only `rel` and `href` set.
    pub fn new(rel: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            rel: rel.into(),
            href: href.into(),
            name: None,
            title: None,
            hreflang: None,
            profile: None,
            templated: false,
        }
    }

    /// Whether `href` is a URI template, either flagged as such or containing
    /// an RFC 6570 expression.
    pub fn is_templated(&self) -> bool {
        if self.templated {
            return true;
        }
        match self.href.find('{') {
            Some(open) => self.href[open..].contains('}'),
            None => false,
        }
    }
}
