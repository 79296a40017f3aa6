//! Block document to HTML
//!
//! Each block becomes one top-level element; siblings are joined by a newline
//! so the fragment stays readable.

use crate::document::BlockDocument;
use crate::dom;
use crate::error::{ParserError, Result};
use crate::marker::MarkerConvention;
use crate::options::ParserConfig;

#[derive(Debug, Clone)]
pub struct Encoder {
    markers: MarkerConvention,
}

impl Encoder {
    pub fn new(config: ParserConfig) -> Self {
        Self {
            markers: config.markers(),
        }
    }

    pub fn encode(&self, document: &BlockDocument) -> Result<String> {
        if document.blocks.is_empty() {
            return Err(ParserError::NoBlocks);
        }
        log::debug!(
            "encoding {} blocks with prefix {:?}",
            document.blocks.len(),
            self.markers.prefix()
        );

        let nodes = document
            .blocks
            .iter()
            .map(|block| {
                log::trace!("encoding {} block", block.block_type());
                block.encode(&self.markers)
            })
            .collect::<Result<Vec<_>>>()?;

        dom::outer_html(&nodes)
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new(ParserConfig::default())
    }
}
