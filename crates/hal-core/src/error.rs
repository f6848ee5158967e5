//! Error types for the HAL reader.

use thiserror::Error;

/// Top-level result type for reader operations.
pub type Result<T> = std::result::Result<T, HalError>;

/// Top-level error type for the HAL reader.
#[derive(Debug, Error)]
pub enum HalError {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("deserialization error: {0}")]
    Deserialize(String),
}

/// Errors raised while turning a JSON document into a resource tree.
///
/// Every variant aborts the whole parse. `path` points at the offending node,
/// rooted at `$` (e.g. `$._embedded.items[1]._links.self`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("malformed JSON: {0}")]
    MalformedJson(String),

    #[error("link '{rel}' at {path} is missing required field '{field}'")]
    MissingRequiredLinkField {
        path: String,
        rel: String,
        field: &'static str,
    },

    #[error("curie at {path} is missing required field '{field}'")]
    MissingCurieField { path: String, field: &'static str },

    #[error("unexpected shape at {path}: expected {expected}")]
    UnexpectedShape {
        path: String,
        expected: &'static str,
    },

    #[error("embedding depth at {path} exceeds the limit of {limit}")]
    DepthLimitExceeded { path: String, limit: usize },
}
