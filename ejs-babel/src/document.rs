//! Block document model
//!
//! A [`BlockDocument`] is the `{time, version, blocks}` envelope produced by a
//! block editor. Every [`Block`] is a tagged variant whose payload is the typed
//! record for its block type; there is no shared base schema beyond the tag.

use crate::blocks::{
    AlertData, CodeData, DelimiterData, EmbedData, HeaderData, ImageData, LinkToolData, ListData,
    ParagraphData, QuoteData, RawData, TableData, WarningData,
};
use crate::registry::BlockType;
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Version stamped into envelopes when none is supplied
pub const DEFAULT_VERSION: &str = "2.28.2";

/// The full document envelope
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlockDocument {
    /// Creation time in epoch milliseconds (metadata only)
    pub time: i64,
    /// Ordered blocks; order is document order
    pub blocks: Vec<Block>,
    /// Editor format version (metadata only)
    pub version: String,
}

impl BlockDocument {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self {
            time: now_millis(),
            blocks,
            version: DEFAULT_VERSION.to_string(),
        }
    }

    pub fn with_time(mut self, time: i64) -> Self {
        self.time = time;
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }
}

/// One typed unit of content
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum Block {
    #[serde(rename = "header")]
    Header(HeaderData),
    #[serde(rename = "paragraph")]
    Paragraph(ParagraphData),
    #[serde(rename = "list")]
    List(ListData),
    #[serde(rename = "raw")]
    Raw(RawData),
    #[serde(rename = "linkTool")]
    LinkTool(LinkToolData),
    #[serde(rename = "delimiter")]
    Delimiter(DelimiterData),
    #[serde(rename = "alert")]
    Alert(AlertData),
    #[serde(rename = "table")]
    Table(TableData),
    #[serde(rename = "code")]
    Code(CodeData),
    #[serde(rename = "quote")]
    Quote(QuoteData),
    #[serde(rename = "embed")]
    Embed(EmbedData),
    #[serde(rename = "image")]
    Image(ImageData),
    #[serde(rename = "warning")]
    Warning(WarningData),
}

impl Block {
    pub fn block_type(&self) -> BlockType {
        match self {
            Block::Header(_) => BlockType::Header,
            Block::Paragraph(_) => BlockType::Paragraph,
            Block::List(_) => BlockType::List,
            Block::Raw(_) => BlockType::Raw,
            Block::LinkTool(_) => BlockType::LinkTool,
            Block::Delimiter(_) => BlockType::Delimiter,
            Block::Alert(_) => BlockType::Alert,
            Block::Table(_) => BlockType::Table,
            Block::Code(_) => BlockType::Code,
            Block::Quote(_) => BlockType::Quote,
            Block::Embed(_) => BlockType::Embed,
            Block::Image(_) => BlockType::Image,
            Block::Warning(_) => BlockType::Warning,
        }
    }
}

/// Horizontal alignment shared by several block types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

impl Alignment {
    pub const ALL: [Alignment; 4] = [
        Alignment::Left,
        Alignment::Center,
        Alignment::Right,
        Alignment::Justify,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
            Alignment::Justify => "justify",
        }
    }

    /// First style token naming an alignment, `Left` if none does.
    pub fn from_styles(styles: &[String]) -> Self {
        styles
            .iter()
            .find_map(|style| Self::ALL.into_iter().find(|a| a.as_str() == style.as_str()))
            .unwrap_or_default()
    }
}

pub(crate) fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or_default()
}
