//! HAL resource parser.
//!
//! For each object node the parser reads, in order:
//! 1. curie namespaces from `_links.curies`
//! 2. links from every other `_links` relation
//! 3. properties from every top-level field except `_links` and `_embedded`
//! 4. embedded resources from `_embedded`, recursively
//!
//! The node's own JSON text is kept as the resource's raw content.

use std::collections::BTreeMap;

use hal_core::{Link, ParseError, PropertyValue, Resource, ResourceParts, CURIES, EMBEDDED, LINKS};
use serde_json::Value;
use tracing::{debug, trace};

use crate::node::{JsonNode, NodeKind};
use crate::options::ParseOptions;

const HREF: &str = "href";
const NAME: &str = "name";
const TITLE: &str = "title";
const HREFLANG: &str = "hreflang";
const PROFILE: &str = "profile";
const TEMPLATED: &str = "templated";

const ONE_OR_MANY: &str = "an object or an array of objects";

/// Builds [`Resource`] trees from JSON.
#[derive(Debug, Clone, Default)]
pub struct Parser {
    options: ParseOptions,
}

impl Parser {
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Tokenize `text` and parse the root resource.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::MalformedJson`] for invalid JSON, otherwise any
    /// error from [`Parser::parse_node`].
    pub fn parse_str(&self, text: &str) -> Result<Resource, ParseError> {
        let root: Value =
            serde_json::from_str(text).map_err(|e| ParseError::MalformedJson(e.to_string()))?;
        self.parse_node(&root)
    }

    /// Parse an already tokenized JSON tree.
    ///
    /// # Errors
    ///
    /// Returns a structural [`ParseError`] if the root is not an object,
    /// `_links` or `_embedded` are malformed, a link lacks `href`, a curie
    /// lacks `name` or `href`, or embedding exceeds the depth limit.
    pub fn parse_node<N: JsonNode>(&self, node: &N) -> Result<Resource, ParseError> {
        self.read_resource(node, "$", 0)
    }

    fn read_resource<N: JsonNode>(
        &self,
        node: &N,
        path: &str,
        depth: usize,
    ) -> Result<Resource, ParseError> {
        if depth > self.options.max_depth {
            return Err(ParseError::DepthLimitExceeded {
                path: path.to_string(),
                limit: self.options.max_depth,
            });
        }
        expect_kind(node, NodeKind::Object, path, "an object")?;

        let mut parts = ResourceParts {
            raw_content: node.to_json_text(),
            ..ResourceParts::default()
        };

        if let Some(links) = structural_field(node, LINKS, path)? {
            let links_path = child_path(path, LINKS);
            read_namespaces(links, &links_path, &mut parts.namespaces)?;
            read_links(links, &links_path, &mut parts.links)?;
        }

        read_properties(node, &mut parts.properties);

        if let Some(embedded) = structural_field(node, EMBEDDED, path)? {
            let embedded_path = child_path(path, EMBEDDED);
            self.read_embedded(embedded, &embedded_path, depth, &mut parts.embedded)?;
        }

        debug!(
            path,
            links = parts.links.len(),
            properties = parts.properties.len(),
            embedded = parts.embedded.len(),
            "parsed resource"
        );
        Ok(Resource::from_parts(parts))
    }

    fn read_embedded<N: JsonNode>(
        &self,
        embedded: &N,
        path: &str,
        depth: usize,
        out: &mut BTreeMap<String, Vec<Resource>>,
    ) -> Result<(), ParseError> {
        for (rel, value) in embedded.fields() {
            let rel_path = child_path(path, rel);
            let mut resources = Vec::new();
            for (entry_path, entry) in one_or_many(value, &rel_path)? {
                resources.push(self.read_resource(entry, &entry_path, depth + 1)?);
            }
            trace!(rel, count = resources.len(), "embedded relation");
            if !resources.is_empty() {
                out.insert(rel.to_string(), resources);
            }
        }
        Ok(())
    }
}

fn read_namespaces<N: JsonNode>(
    links: &N,
    path: &str,
    out: &mut BTreeMap<String, String>,
) -> Result<(), ParseError> {
    let Some(curies) = links.field(CURIES) else {
        return Ok(());
    };

    for (entry_path, curie) in one_or_many(curies, &child_path(path, CURIES))? {
        let name = text_field(curie, NAME, &entry_path)?.ok_or_else(|| {
            ParseError::MissingCurieField {
                path: entry_path.clone(),
                field: NAME,
            }
        })?;
        let href = text_field(curie, HREF, &entry_path)?.ok_or_else(|| {
            ParseError::MissingCurieField {
                path: entry_path.clone(),
                field: HREF,
            }
        })?;
        trace!(prefix = %name, %href, "curie namespace");
        out.insert(name, href);
    }
    Ok(())
}

fn read_links<N: JsonNode>(
    links: &N,
    path: &str,
    out: &mut BTreeMap<String, Vec<Link>>,
) -> Result<(), ParseError> {
    for (rel, value) in links.fields() {
        if rel == CURIES {
            continue;
        }
        let rel_path = child_path(path, rel);
        let mut rel_links = Vec::new();
        for (entry_path, entry) in one_or_many(value, &rel_path)? {
            rel_links.push(read_link(rel, entry, &entry_path)?);
        }
        trace!(rel, count = rel_links.len(), "link relation");
        if !rel_links.is_empty() {
            out.insert(rel.to_string(), rel_links);
        }
    }
    Ok(())
}

fn read_link<N: JsonNode>(rel: &str, node: &N, path: &str) -> Result<Link, ParseError> {
    let href = text_field(node, HREF, path)?.ok_or_else(|| ParseError::MissingRequiredLinkField {
        path: path.to_string(),
        rel: rel.to_string(),
        field: HREF,
    })?;

    Ok(Link {
        rel: rel.to_string(),
        href,
        name: text_field(node, NAME, path)?,
        title: text_field(node, TITLE, path)?,
        hreflang: text_field(node, HREFLANG, path)?,
        profile: text_field(node, PROFILE, path)?,
        templated: node
            .field(TEMPLATED)
            .and_then(JsonNode::as_bool)
            .unwrap_or(false),
    })
}

fn read_properties<N: JsonNode>(node: &N, out: &mut BTreeMap<String, PropertyValue>) {
    for (name, value) in node.fields() {
        if name == LINKS || name == EMBEDDED {
            continue;
        }
        out.insert(name.to_string(), property_value(value));
    }
}

/// Classify one property value. Every JSON value has a mapping, so this
/// never fails.
fn property_value<N: JsonNode>(value: &N) -> PropertyValue {
    match value.kind() {
        NodeKind::Null => PropertyValue::Null,
        NodeKind::Object | NodeKind::Array => PropertyValue::RawJson(value.to_json_text()),
        NodeKind::String | NodeKind::Number | NodeKind::Bool => {
            PropertyValue::Text(value.scalar_text().unwrap_or_default())
        }
    }
}

/// A reserved structural field. `null` counts as not declared.
fn structural_field<'n, N: JsonNode>(
    node: &'n N,
    key: &str,
    path: &str,
) -> Result<Option<&'n N>, ParseError> {
    match node.field(key) {
        None => Ok(None),
        Some(value) if value.kind() == NodeKind::Null => Ok(None),
        Some(value) => {
            expect_kind(value, NodeKind::Object, &child_path(path, key), "an object")?;
            Ok(Some(value))
        }
    }
}

/// A relation value: a single object, or an array whose elements are all
/// objects. Each entry is paired with its path.
fn one_or_many<'n, N: JsonNode>(
    value: &'n N,
    path: &str,
) -> Result<Vec<(String, &'n N)>, ParseError> {
    match value.kind() {
        NodeKind::Object => Ok(vec![(path.to_string(), value)]),
        NodeKind::Array => value
            .elements()
            .enumerate()
            .map(|(i, element)| -> Result<(String, &'n N), ParseError> {
                let element_path = format!("{path}[{i}]");
                expect_kind(element, NodeKind::Object, &element_path, "an object")?;
                Ok((element_path, element))
            })
            .collect(),
        _ => Err(ParseError::UnexpectedShape {
            path: path.to_string(),
            expected: ONE_OR_MANY,
        }),
    }
}

/// A textual field of a link-object or curie. Missing or `null` yields
/// `None`; scalars are rendered as text; containers are rejected.
fn text_field<N: JsonNode>(node: &N, key: &str, path: &str) -> Result<Option<String>, ParseError> {
    let Some(value) = node.field(key) else {
        return Ok(None);
    };
    if value.kind().is_container() {
        return Err(ParseError::UnexpectedShape {
            path: child_path(path, key),
            expected: "a string",
        });
    }
    Ok(value.scalar_text())
}

fn expect_kind<N: JsonNode>(
    node: &N,
    kind: NodeKind,
    path: &str,
    expected: &'static str,
) -> Result<(), ParseError> {
    if node.kind() == kind {
        Ok(())
    } else {
        Err(ParseError::UnexpectedShape {
            path: path.to_string(),
            expected,
        })
    }
}

fn child_path(path: &str, key: &str) -> String {
    format!("{path}.{key}")
}
