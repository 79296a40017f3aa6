//! JSON envelope codec
//!
//! Blocks are read through the registry rather than a derived `Deserialize`,
//! so an unregistered `type` surfaces as [`ParserError::UnknownBlockType`] and a
//! payload that does not fit its record as [`ParserError::MalformedBlockData`].

use crate::document::{now_millis, Block, BlockDocument, DEFAULT_VERSION};
use crate::error::{ParserError, Result};
use crate::registry::BlockType;
use serde::Deserialize;
use serde_json::Value;

#[derive(Deserialize)]
struct RawDocument {
    time: Option<i64>,
    version: Option<String>,
    #[serde(default)]
    blocks: Vec<RawBlock>,
}

#[derive(Deserialize)]
struct RawBlock {
    #[serde(rename = "type")]
    block_type: String,
    #[serde(default)]
    data: Value,
}

impl RawBlock {
    fn into_block(self) -> Result<Block> {
        let block_type: BlockType = self.block_type.parse()?;
        block_type.from_json(self.data)
    }
}

impl BlockDocument {
    pub fn from_json(json: &str) -> Result<Self> {
        if json.trim().is_empty() {
            return Err(ParserError::EmptyInput("No JSON to parse".to_string()));
        }

        let raw: RawDocument = serde_json::from_str(json)?;
        let blocks = raw
            .blocks
            .into_iter()
            .map(RawBlock::into_block)
            .collect::<Result<Vec<_>>>()?;
        log::debug!("read {} blocks from JSON", blocks.len());

        Ok(BlockDocument {
            time: raw.time.unwrap_or_else(now_millis),
            blocks,
            version: raw.version.unwrap_or_else(|| DEFAULT_VERSION.to_string()),
        })
    }

    /// Pretty JSON; Unicode and slashes are written as-is.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_json_compact(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
