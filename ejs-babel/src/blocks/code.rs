use crate::blocks::require;
use crate::dom;
use crate::error::Result;
use crate::marker::MarkerConvention;
use crate::registry::{BlockCodec, BlockType};
use markup5ever_rcdom::Handle;
use serde::{Deserialize, Serialize};

/// Source code; plain text, never interpreted as markup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeData {
    pub code: String,
}

impl BlockCodec for CodeData {
    const TYPE: BlockType = BlockType::Code;

    fn decode(element: &Handle, _styles: &[String], _markers: &MarkerConvention) -> Result<Self> {
        let code = require(element, "code", Self::TYPE.name())?;
        Ok(CodeData {
            code: dom::text_content(&code),
        })
    }

    fn encode(&self, markers: &MarkerConvention) -> Result<Handle> {
        let class = markers.add_marker::<&str>(Self::TYPE.name(), &[]);
        let pre = dom::create_element("pre", vec![("class", &class)]);
        let code = dom::create_element("code", vec![]);
        dom::append_text(&code, &self.code);
        dom::append(&pre, code);
        Ok(pre)
    }
}
