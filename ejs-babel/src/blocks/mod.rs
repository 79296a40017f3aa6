//! Per-type block records and their HTML codecs
//!
//! Every record here implements [`BlockCodec`](crate::registry::BlockCodec).
//! Element shapes:
//!
//! | Type      | Element                                                    |
//! |-----------|------------------------------------------------------------|
//! | header    | `<hN class="P-header P_align">`                            |
//! | paragraph | `<p class="P-paragraph P_align">`                          |
//! | list      | `<ol>`/`<ul class="P-list P_style">` with `<li>` items     |
//! | raw       | `<div class="P-raw">`                                      |
//! | linkTool  | `<figure class="P-linkTool">` around an `<a>` card         |
//! | delimiter | `<hr class="P-delimiter">`                                 |
//! | alert     | `<p class="P-alert P_align P_type">`                       |
//! | table     | `<table class="P-table [P_withheadings]">`                 |
//! | code      | `<pre class="P-code"><code>`                               |
//! | quote     | `<figure class="P-quote P_align">` blockquote + figcaption |
//! | embed     | `<figure class="P-embed [P_service]">` iframe + figcaption |
//! | image     | `<figure class="P-image [flags]">` img + figcaption        |
//! | warning   | `<div class="P-warning">` h4 + p                           |

mod alert;
mod code;
mod delimiter;
mod embed;
mod header;
mod image;
mod link_tool;
mod list;
mod paragraph;
mod quote;
mod raw;
mod table;
mod warning;

pub use alert::{AlertData, AlertType};
pub use code::CodeData;
pub use delimiter::DelimiterData;
pub use embed::{EmbedData, EMBED_SERVICES};
pub use header::HeaderData;
pub use image::{ImageData, ImageFile, ImageSource};
pub use link_tool::{LinkImage, LinkMeta, LinkToolData};
pub use list::{ListData, ListStyle};
pub use paragraph::ParagraphData;
pub use quote::QuoteData;
pub use raw::RawData;
pub use table::TableData;
pub use warning::WarningData;

use crate::dom;
use crate::error::{ParserError, Result};
use markup5ever_rcdom::Handle;

/// Element with the given tag below `element`, or a malformed-data error.
pub(crate) fn require(element: &Handle, tag: &str, block_type: &str) -> Result<Handle> {
    dom::find_element(element, tag)
        .ok_or_else(|| ParserError::malformed(block_type, format!("missing <{tag}> element")))
}

/// Inner HTML of the first `<figcaption>`, empty when there is none.
pub(crate) fn caption_of(element: &Handle) -> Result<String> {
    match dom::find_element(element, "figcaption") {
        Some(figcaption) => dom::inner_html(&figcaption),
        None => Ok(String::new()),
    }
}

/// Append a `<figcaption>` unless the caption is empty.
pub(crate) fn append_caption(figure: &Handle, caption: &str) {
    if !caption.is_empty() {
        let figcaption = dom::create_element("figcaption", vec![]);
        dom::append_fragment(&figcaption, caption);
        dom::append(figure, figcaption);
    }
}
