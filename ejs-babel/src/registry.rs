//! Block type registry
//!
//! The closed set of block types and the dispatch from a type to its decode /
//! encode pair. Lookup by name goes through [`BlockType::from_name`]; a name
//! with no entry is the unknown-block-type condition. Dispatch is an
//! exhaustive `match`, so adding a variant without a handler does not compile.

use crate::blocks::{
    AlertData, CodeData, DelimiterData, EmbedData, HeaderData, ImageData, LinkToolData, ListData,
    ParagraphData, QuoteData, RawData, TableData, WarningData,
};
use crate::document::Block;
use crate::error::{ParserError, Result};
use crate::marker::MarkerConvention;
use markup5ever_rcdom::Handle;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Per-type decode / encode pair.
///
/// Implemented by every block data record.
pub trait BlockCodec: Sized + DeserializeOwned {
    /// The registry entry this record belongs to
    const TYPE: BlockType;

    /// Read the record from a marked element and its style tokens.
    /// Must not mutate the source tree.
    fn decode(element: &Handle, styles: &[String], markers: &MarkerConvention) -> Result<Self>;

    /// Build the element tree for this record, markers applied.
    fn encode(&self, markers: &MarkerConvention) -> Result<Handle>;

    /// Read the record from the `data` member of a JSON block.
    ///
    /// `null` and `[]` both stand for an empty record.
    fn from_json(data: Value) -> Result<Self> {
        let data = match data {
            Value::Null => Value::Object(Default::default()),
            Value::Array(items) if items.is_empty() => Value::Object(Default::default()),
            other => other,
        };
        serde_json::from_value(data)
            .map_err(|e| ParserError::malformed(Self::TYPE.name(), e.to_string()))
    }
}

/// Registered block types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockType {
    Header,
    Paragraph,
    List,
    Raw,
    LinkTool,
    Delimiter,
    Alert,
    Table,
    Code,
    Quote,
    Embed,
    Image,
    Warning,
}

impl BlockType {
    pub const ALL: [BlockType; 13] = [
        BlockType::Header,
        BlockType::Paragraph,
        BlockType::List,
        BlockType::Raw,
        BlockType::LinkTool,
        BlockType::Delimiter,
        BlockType::Alert,
        BlockType::Table,
        BlockType::Code,
        BlockType::Quote,
        BlockType::Embed,
        BlockType::Image,
        BlockType::Warning,
    ];

    /// Name used in JSON `type` fields and in type markers
    pub fn name(self) -> &'static str {
        match self {
            BlockType::Header => "header",
            BlockType::Paragraph => "paragraph",
            BlockType::List => "list",
            BlockType::Raw => "raw",
            BlockType::LinkTool => "linkTool",
            BlockType::Delimiter => "delimiter",
            BlockType::Alert => "alert",
            BlockType::Table => "table",
            BlockType::Code => "code",
            BlockType::Quote => "quote",
            BlockType::Embed => "embed",
            BlockType::Image => "image",
            BlockType::Warning => "warning",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let block_type = match name {
            "header" => BlockType::Header,
            "paragraph" => BlockType::Paragraph,
            "list" => BlockType::List,
            "raw" => BlockType::Raw,
            "linkTool" => BlockType::LinkTool,
            "delimiter" => BlockType::Delimiter,
            "alert" => BlockType::Alert,
            "table" => BlockType::Table,
            "code" => BlockType::Code,
            "quote" => BlockType::Quote,
            "embed" => BlockType::Embed,
            "image" => BlockType::Image,
            "warning" => BlockType::Warning,
            _ => return None,
        };
        Some(block_type)
    }

    /// Decode a marked element into a block of this type.
    pub fn decode(
        self,
        element: &Handle,
        styles: &[String],
        markers: &MarkerConvention,
    ) -> Result<Block> {
        let block = match self {
            BlockType::Header => Block::Header(HeaderData::decode(element, styles, markers)?),
            BlockType::Paragraph => {
                Block::Paragraph(ParagraphData::decode(element, styles, markers)?)
            }
            BlockType::List => Block::List(ListData::decode(element, styles, markers)?),
            BlockType::Raw => Block::Raw(RawData::decode(element, styles, markers)?),
            BlockType::LinkTool => Block::LinkTool(LinkToolData::decode(element, styles, markers)?),
            BlockType::Delimiter => {
                Block::Delimiter(DelimiterData::decode(element, styles, markers)?)
            }
            BlockType::Alert => Block::Alert(AlertData::decode(element, styles, markers)?),
            BlockType::Table => Block::Table(TableData::decode(element, styles, markers)?),
            BlockType::Code => Block::Code(CodeData::decode(element, styles, markers)?),
            BlockType::Quote => Block::Quote(QuoteData::decode(element, styles, markers)?),
            BlockType::Embed => Block::Embed(EmbedData::decode(element, styles, markers)?),
            BlockType::Image => Block::Image(ImageData::decode(element, styles, markers)?),
            BlockType::Warning => Block::Warning(WarningData::decode(element, styles, markers)?),
        };
        Ok(block)
    }

    /// Build a block of this type from a JSON `data` value.
    pub fn from_json(self, data: Value) -> Result<Block> {
        let block = match self {
            BlockType::Header => Block::Header(HeaderData::from_json(data)?),
            BlockType::Paragraph => Block::Paragraph(ParagraphData::from_json(data)?),
            BlockType::List => Block::List(ListData::from_json(data)?),
            BlockType::Raw => Block::Raw(RawData::from_json(data)?),
            BlockType::LinkTool => Block::LinkTool(LinkToolData::from_json(data)?),
            BlockType::Delimiter => Block::Delimiter(DelimiterData::from_json(data)?),
            BlockType::Alert => Block::Alert(AlertData::from_json(data)?),
            BlockType::Table => Block::Table(TableData::from_json(data)?),
            BlockType::Code => Block::Code(CodeData::from_json(data)?),
            BlockType::Quote => Block::Quote(QuoteData::from_json(data)?),
            BlockType::Embed => Block::Embed(EmbedData::from_json(data)?),
            BlockType::Image => Block::Image(ImageData::from_json(data)?),
            BlockType::Warning => Block::Warning(WarningData::from_json(data)?),
        };
        Ok(block)
    }
}

impl FromStr for BlockType {
    type Err = ParserError;

    fn from_str(name: &str) -> Result<Self> {
        BlockType::from_name(name).ok_or_else(|| ParserError::UnknownBlockType(name.to_string()))
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Block {
    /// Encode this block into its element tree.
    pub fn encode(&self, markers: &MarkerConvention) -> Result<Handle> {
        match self {
            Block::Header(data) => data.encode(markers),
            Block::Paragraph(data) => data.encode(markers),
            Block::List(data) => data.encode(markers),
            Block::Raw(data) => data.encode(markers),
            Block::LinkTool(data) => data.encode(markers),
            Block::Delimiter(data) => data.encode(markers),
            Block::Alert(data) => data.encode(markers),
            Block::Table(data) => data.encode(markers),
            Block::Code(data) => data.encode(markers),
            Block::Quote(data) => data.encode(markers),
            Block::Embed(data) => data.encode(markers),
            Block::Image(data) => data.encode(markers),
            Block::Warning(data) => data.encode(markers),
        }
    }
}

/// All registered type names (sorted)
pub fn list_types() -> Vec<&'static str> {
    let mut names: Vec<_> = BlockType::ALL.iter().map(|t| t.name()).collect();
    names.sort_unstable();
    names
}
