//! Parser configuration.

use serde::Deserialize;

/// Default limit on `_embedded` nesting.
///
/// Each embedding level costs at least three JSON nesting levels, so this
/// stays below the tokenizer's own recursion limit.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Options controlling a parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Deepest allowed level of embedded resources. The root is level 0.
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParseOptions {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
