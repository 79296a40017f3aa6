//! Error types for transcoding operations

/// Errors that can occur while converting between blocks and HTML.
///
/// Every variant aborts the whole conversion; there is no partial output.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParserError {
    /// Input was empty or did not yield anything usable
    #[error("{0}")]
    EmptyInput(String),

    /// The block list to encode (or the decoded one) has no entries
    #[error("No blocks to parse")]
    NoBlocks,

    /// A block or element carries a type with no registered handler
    #[error("Unknown block {0}")]
    UnknownBlockType(String),

    /// A registered handler could not find a field it requires
    #[error("Malformed {block_type} block: {reason}")]
    MalformedBlockData { block_type: String, reason: String },

    /// The JSON or HTML codec rejected the data
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl ParserError {
    pub(crate) fn malformed(block_type: impl Into<String>, reason: impl Into<String>) -> Self {
        ParserError::MalformedBlockData {
            block_type: block_type.into(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for ParserError {
    fn from(err: serde_json::Error) -> Self {
        ParserError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ParserError>;
