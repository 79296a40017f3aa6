//! Conversion settings passed explicitly into the decoder and encoder

use crate::document::DEFAULT_VERSION;
use crate::marker::{MarkerConvention, DEFAULT_PREFIX};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Marker namespace for class tokens
    pub prefix: String,
    /// Version stamped into decoded documents
    pub version: String,
    /// Pretty-print emitted JSON
    pub pretty_json: bool,
}

impl ParserConfig {
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn with_pretty_json(mut self, pretty: bool) -> Self {
        self.pretty_json = pretty;
        self
    }

    pub fn markers(&self) -> MarkerConvention {
        MarkerConvention::new(self.prefix.clone())
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            version: DEFAULT_VERSION.to_string(),
            pretty_json: true,
        }
    }
}
