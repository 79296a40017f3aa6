use crate::dom;
use crate::error::Result;
use crate::marker::MarkerConvention;
use crate::registry::{BlockCodec, BlockType};
use markup5ever_rcdom::Handle;
use serde::{Deserialize, Serialize};

/// Opaque HTML carried as-is inside a wrapper
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawData {
    pub html: String,
}

impl BlockCodec for RawData {
    const TYPE: BlockType = BlockType::Raw;

    fn decode(element: &Handle, _styles: &[String], _markers: &MarkerConvention) -> Result<Self> {
        Ok(RawData {
            html: dom::inner_html(element)?,
        })
    }

    fn encode(&self, markers: &MarkerConvention) -> Result<Handle> {
        let class = markers.add_marker::<&str>(Self::TYPE.name(), &[]);
        let wrapper = dom::create_element("div", vec![("class", &class)]);
        dom::append_fragment(&wrapper, &self.html);
        Ok(wrapper)
    }
}
