//! HTML to block document
//!
//! Walks the parsed tree in document order, picks every element whose class
//! attribute mentions the prefix and dispatches the typed ones through the
//! registry. Elements that only carry style tokens (sub-elements such as a
//! link card's title paragraph) are skipped.

use crate::document::{now_millis, BlockDocument};
use crate::dom;
use crate::error::{ParserError, Result};
use crate::marker::MarkerConvention;
use crate::options::ParserConfig;
use crate::registry::BlockType;

const NO_HTML: &str = "No HTML to parse";

#[derive(Debug, Clone)]
pub struct Decoder {
    markers: MarkerConvention,
    version: String,
    time: Option<i64>,
}

impl Decoder {
    pub fn new(config: ParserConfig) -> Self {
        Self {
            markers: config.markers(),
            version: config.version,
            time: None,
        }
    }

    /// Stamp decoded documents with a fixed time instead of the current one.
    pub fn with_time(mut self, time: i64) -> Self {
        self.time = Some(time);
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn decode(&self, html: &str) -> Result<BlockDocument> {
        if html.trim().is_empty() {
            return Err(ParserError::EmptyInput(NO_HTML.to_string()));
        }

        let tree = dom::parse_html(html);
        let candidates: Vec<_> = dom::descendants(&tree.document)
            .into_iter()
            .filter_map(|element| {
                let class = dom::attr(&element, "class")?;
                self.markers
                    .is_candidate(&class)
                    .then_some((element, class))
            })
            .collect();

        if candidates.is_empty() {
            return Err(ParserError::EmptyInput(NO_HTML.to_string()));
        }
        log::debug!(
            "decoding {} candidate elements with prefix {:?}",
            candidates.len(),
            self.markers.prefix()
        );

        let mut blocks = Vec::new();
        for (element, class) in &candidates {
            let marker = self.markers.parse_marker(class);
            let Some(name) = marker.block_type else {
                log::debug!("skipping element without type marker: class={class:?}");
                continue;
            };

            let block_type: BlockType = name.parse()?;
            log::trace!("decoding {block_type} block, styles={:?}", marker.styles);
            blocks.push(block_type.decode(element, &marker.styles, &self.markers)?);
        }

        if blocks.is_empty() {
            return Err(ParserError::NoBlocks);
        }
        log::debug!("decoded {} blocks", blocks.len());

        Ok(BlockDocument {
            time: self.time.unwrap_or_else(now_millis),
            blocks,
            version: self.version.clone(),
        })
    }
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new(ParserConfig::default())
    }
}
