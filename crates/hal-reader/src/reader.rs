//! Document reader.

use std::io::Read;

use hal_core::{Resource, Result};
use hal_parser::{ParseOptions, Parser};
use tracing::debug;

/// Reads HAL+JSON documents into [`Resource`] trees.
#[derive(Debug, Clone, Default)]
pub struct HalReader {
    parser: Parser,
}

impl HalReader {
    /// A reader with default [`ParseOptions`].
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ParseOptions) -> Self {
        Self {
            parser: Parser::new(options),
        }
    }

    pub fn options(&self) -> &ParseOptions {
        self.parser.options()
    }

    /// Buffer the whole stream, then parse it.
    ///
    /// # Errors
    ///
    /// Returns [`hal_core::HalError::Io`] if the stream cannot be read and
    /// [`hal_core::HalError::Parse`] if the document is malformed.
    pub fn read<R: Read>(&self, mut reader: R) -> Result<Resource> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        debug!(bytes = text.len(), "read HAL document");
        self.read_str(&text)
    }

    /// Parse a document held in memory.
    ///
    /// # Errors
    ///
    /// Returns [`hal_core::HalError::Parse`] if the document is malformed.
    pub fn read_str(&self, text: &str) -> Result<Resource> {
        Ok(self.parser.parse_str(text)?)
    }
}
