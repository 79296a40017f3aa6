//! Block-editor JSON to class-marked HTML, and back
//!
//!     This crate converts between a flat, typed block document (the `{time, blocks, version}`
//!     envelope written by block editors) and an HTML fragment whose elements carry the block
//!     structure in their class attributes.
//!
//!     TLDR: For block authors:
//!         - A block type is one record in ./blocks implementing `BlockCodec` (decode + encode).
//!         - Register it in ./registry.rs; dispatch is an exhaustive match, so a missing arm does
//!           not compile.
//!         - Rich-text fields go in as parsed fragments, plain fields as text nodes.
//!         - Every block gets a round trip unit test next to its codec.
//!
//! Architecture
//!
//!     The file structure :
//!     .
//!     ├── error.rs            # ParserError
//!     ├── marker.rs           # class token convention (type marker + style tokens)
//!     ├── registry.rs         # BlockType, BlockCodec and dispatch
//!     ├── blocks              # one module per block type
//!     ├── document.rs         # BlockDocument / Block model
//!     ├── json.rs             # envelope codec
//!     ├── decoder.rs          # HTML → BlockDocument
//!     ├── encoder.rs          # BlockDocument → HTML
//!     ├── options.rs          # ParserConfig
//!     └── dom.rs              # html5ever / rcdom helpers
//!
//!     This is a pure lib: no code here prints, reads env vars or touches the filesystem.
//!     Configuration files are the concern of ejs-config.
//!
//! Marker Convention
//!
//!     A block's element carries `<prefix>-<type>` as its first class token, followed by
//!     `<prefix>_<value>` tokens for alignment, sub-type and flags. The decoder selects every
//!     element whose class mentions the prefix; the ones without a type marker are sub-elements
//!     (a link card's title, say) and are skipped.
//!
//! Round Trips
//!
//!     Only HTML produced by the encoder is guaranteed to decode back to the same blocks.
//!     Arbitrary third-party HTML is read leniently, and whitespace or attribute order is not
//!     preserved.
//!
//! Testing
//!     tests
//!     ├── common
//!     ├── html
//!     └── json
//!
//!     Note that rust does not by default discover tests in subdirectories, so we need to include these
//!     in the mod.

pub mod blocks;
pub mod decoder;
pub mod document;
pub mod dom;
pub mod encoder;
pub mod error;
pub mod json;
pub mod marker;
pub mod options;
pub mod registry;

pub use decoder::Decoder;
pub use document::{Alignment, Block, BlockDocument, DEFAULT_VERSION};
pub use encoder::Encoder;
pub use error::{ParserError, Result};
pub use marker::{Marker, MarkerConvention, DEFAULT_PREFIX};
pub use options::ParserConfig;
pub use registry::{list_types, BlockCodec, BlockType};

/// Decode an HTML fragment and emit the block document as JSON.
///
/// Pretty or compact output follows `config.pretty_json`.
pub fn html_to_json(html: &str, config: &ParserConfig) -> Result<String> {
    let document = Decoder::new(config.clone()).decode(html)?;
    if config.pretty_json {
        document.to_json()
    } else {
        document.to_json_compact()
    }
}

/// Read a JSON block document and encode it as an HTML fragment.
pub fn json_to_html(json: &str, config: &ParserConfig) -> Result<String> {
    let document = BlockDocument::from_json(json)?;
    Encoder::new(config.clone()).encode(&document)
}
