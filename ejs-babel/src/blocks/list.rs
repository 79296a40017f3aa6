use crate::dom;
use crate::error::Result;
use crate::marker::MarkerConvention;
use crate::registry::{BlockCodec, BlockType};
use markup5ever_rcdom::Handle;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListStyle {
    Ordered,
    #[default]
    Unordered,
}

impl ListStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            ListStyle::Ordered => "ordered",
            ListStyle::Unordered => "unordered",
        }
    }

    fn tag(self) -> &'static str {
        match self {
            ListStyle::Ordered => "ol",
            ListStyle::Unordered => "ul",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListData {
    #[serde(default)]
    pub style: ListStyle,
    /// One inline HTML string per item
    #[serde(default)]
    pub items: Vec<String>,
}

impl BlockCodec for ListData {
    const TYPE: BlockType = BlockType::List;

    fn decode(element: &Handle, styles: &[String], _markers: &MarkerConvention) -> Result<Self> {
        // The style token wins; the tag only decides when no token is present.
        let style = if styles.iter().any(|s| s == "ordered") {
            ListStyle::Ordered
        } else if styles.iter().any(|s| s == "unordered") {
            ListStyle::Unordered
        } else if dom::is_element(element, "ol") {
            ListStyle::Ordered
        } else {
            ListStyle::Unordered
        };

        let items = dom::element_children(element)
            .iter()
            .filter(|child| dom::is_element(child, "li"))
            .map(dom::inner_html)
            .collect::<Result<Vec<_>>>()?;

        Ok(ListData { style, items })
    }

    fn encode(&self, markers: &MarkerConvention) -> Result<Handle> {
        let class = markers.add_marker(Self::TYPE.name(), &[self.style.as_str()]);
        let list = dom::create_element(self.style.tag(), vec![("class", &class)]);
        for item in &self.items {
            let li = dom::create_element("li", vec![]);
            dom::append_fragment(&li, item);
            dom::append(&list, li);
        }
        Ok(list)
    }
}
