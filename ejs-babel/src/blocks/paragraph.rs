use crate::document::Alignment;
use crate::dom;
use crate::error::Result;
use crate::marker::MarkerConvention;
use crate::registry::{BlockCodec, BlockType};
use markup5ever_rcdom::Handle;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParagraphData {
    /// Rich text (inline HTML)
    pub text: String,
    #[serde(default)]
    pub alignment: Alignment,
}

impl BlockCodec for ParagraphData {
    const TYPE: BlockType = BlockType::Paragraph;

    fn decode(element: &Handle, styles: &[String], _markers: &MarkerConvention) -> Result<Self> {
        Ok(ParagraphData {
            text: dom::inner_html(element)?,
            alignment: Alignment::from_styles(styles),
        })
    }

    fn encode(&self, markers: &MarkerConvention) -> Result<Handle> {
        let class = markers.add_marker(Self::TYPE.name(), &[self.alignment.as_str()]);
        let p = dom::create_element("p", vec![("class", &class)]);
        dom::append_fragment(&p, &self.text);
        Ok(p)
    }
}
