use crate::blocks::require;
use crate::dom;
use crate::error::Result;
use crate::marker::MarkerConvention;
use crate::registry::{BlockCodec, BlockType};
use markup5ever_rcdom::Handle;
use serde::{Deserialize, Serialize};

/// Titled notice; both fields are plain text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarningData {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub message: String,
}

impl BlockCodec for WarningData {
    const TYPE: BlockType = BlockType::Warning;

    fn decode(element: &Handle, _styles: &[String], _markers: &MarkerConvention) -> Result<Self> {
        let title = require(element, "h4", Self::TYPE.name())?;
        let message = require(element, "p", Self::TYPE.name())?;
        Ok(WarningData {
            title: dom::text_content(&title),
            message: dom::text_content(&message),
        })
    }

    fn encode(&self, markers: &MarkerConvention) -> Result<Handle> {
        let class = markers.add_marker::<&str>(Self::TYPE.name(), &[]);
        let wrapper = dom::create_element("div", vec![("class", &class)]);

        let title = dom::create_element("h4", vec![]);
        dom::append_text(&title, &self.title);
        dom::append(&wrapper, title);

        let message = dom::create_element("p", vec![]);
        dom::append_text(&message, &self.message);
        dom::append(&wrapper, message);

        Ok(wrapper)
    }
}
