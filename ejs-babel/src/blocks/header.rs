use crate::document::Alignment;
use crate::dom;
use crate::error::{ParserError, Result};
use crate::marker::MarkerConvention;
use crate::registry::{BlockCodec, BlockType};
use markup5ever_rcdom::Handle;
use serde::{Deserialize, Serialize};

/// Heading, levels 1 through 6
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderData {
    /// Rich text (inline HTML)
    pub text: String,
    pub level: u8,
    #[serde(default)]
    pub alignment: Alignment,
}

impl BlockCodec for HeaderData {
    const TYPE: BlockType = BlockType::Header;

    fn decode(element: &Handle, styles: &[String], _markers: &MarkerConvention) -> Result<Self> {
        let tag = dom::tag_name(element).unwrap_or_default();
        let level = tag
            .strip_prefix('h')
            .and_then(|n| n.parse::<u8>().ok())
            .filter(|n| (1..=6).contains(n))
            .ok_or_else(|| {
                ParserError::malformed(Self::TYPE.name(), format!("<{tag}> is not a heading"))
            })?;

        Ok(HeaderData {
            text: dom::inner_html(element)?,
            level,
            alignment: Alignment::from_styles(styles),
        })
    }

    fn encode(&self, markers: &MarkerConvention) -> Result<Handle> {
        if !(1..=6).contains(&self.level) {
            return Err(ParserError::malformed(
                Self::TYPE.name(),
                format!("level {} is outside 1-6", self.level),
            ));
        }

        let class = markers.add_marker(Self::TYPE.name(), &[self.alignment.as_str()]);
        let heading = dom::create_element(&format!("h{}", self.level), vec![("class", &class)]);
        dom::append_fragment(&heading, &self.text);
        Ok(heading)
    }
}
