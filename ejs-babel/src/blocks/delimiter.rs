use crate::dom;
use crate::error::Result;
use crate::marker::MarkerConvention;
use crate::registry::{BlockCodec, BlockType};
use markup5ever_rcdom::Handle;
use serde::{Deserialize, Serialize};

/// Thematic break; carries no data
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DelimiterData {}

impl BlockCodec for DelimiterData {
    const TYPE: BlockType = BlockType::Delimiter;

    fn decode(_element: &Handle, _styles: &[String], _markers: &MarkerConvention) -> Result<Self> {
        Ok(DelimiterData {})
    }

    fn encode(&self, markers: &MarkerConvention) -> Result<Handle> {
        let class = markers.add_marker::<&str>(Self::TYPE.name(), &[]);
        Ok(dom::create_element("hr", vec![("class", &class)]))
    }
}
