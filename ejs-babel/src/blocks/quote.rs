use crate::blocks::{append_caption, caption_of, require};
use crate::document::Alignment;
use crate::dom;
use crate::error::Result;
use crate::marker::MarkerConvention;
use crate::registry::{BlockCodec, BlockType};
use markup5ever_rcdom::Handle;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteData {
    /// Rich text (inline HTML)
    pub text: String,
    #[serde(default)]
    pub caption: String,
    #[serde(default)]
    pub alignment: Alignment,
}

impl BlockCodec for QuoteData {
    const TYPE: BlockType = BlockType::Quote;

    fn decode(element: &Handle, styles: &[String], _markers: &MarkerConvention) -> Result<Self> {
        let blockquote = require(element, "blockquote", Self::TYPE.name())?;
        Ok(QuoteData {
            text: dom::inner_html(&blockquote)?,
            caption: caption_of(element)?,
            alignment: Alignment::from_styles(styles),
        })
    }

    fn encode(&self, markers: &MarkerConvention) -> Result<Handle> {
        let class = markers.add_marker(Self::TYPE.name(), &[self.alignment.as_str()]);
        let figure = dom::create_element("figure", vec![("class", &class)]);

        let blockquote = dom::create_element("blockquote", vec![]);
        dom::append_fragment(&blockquote, &self.text);
        dom::append(&figure, blockquote);
        append_caption(&figure, &self.caption);

        Ok(figure)
    }
}
