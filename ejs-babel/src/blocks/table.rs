use crate::dom;
use crate::error::Result;
use crate::marker::MarkerConvention;
use crate::registry::{BlockCodec, BlockType};
use markup5ever_rcdom::Handle;
use serde::{Deserialize, Serialize};

const WITH_HEADINGS: &str = "withheadings";

/// Grid of rich-text cells. With `with_headings` the first row is the header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableData {
    #[serde(rename = "withHeadings", default)]
    pub with_headings: bool,
    #[serde(default)]
    pub content: Vec<Vec<String>>,
}

impl BlockCodec for TableData {
    const TYPE: BlockType = BlockType::Table;

    fn decode(element: &Handle, styles: &[String], _markers: &MarkerConvention) -> Result<Self> {
        let mut content = Vec::new();
        let mut has_head = false;

        // Rows keep document order across thead and tbody.
        for section in dom::element_children(element) {
            let rows = match dom::tag_name(&section).as_deref() {
                Some("thead") => {
                    has_head = true;
                    dom::element_children(&section)
                }
                Some("tbody") | Some("tfoot") => dom::element_children(&section),
                Some("tr") => vec![section],
                _ => continue,
            };

            for row in rows.iter().filter(|row| dom::is_element(row, "tr")) {
                let cells = dom::element_children(row)
                    .iter()
                    .filter(|cell| dom::is_element(cell, "td") || dom::is_element(cell, "th"))
                    .map(dom::inner_html)
                    .collect::<Result<Vec<_>>>()?;
                content.push(cells);
            }
        }

        Ok(TableData {
            with_headings: has_head || styles.iter().any(|s| s == WITH_HEADINGS),
            content,
        })
    }

    fn encode(&self, markers: &MarkerConvention) -> Result<Handle> {
        let styles: &[&str] = if self.with_headings {
            &[WITH_HEADINGS]
        } else {
            &[]
        };
        let class = markers.add_marker(Self::TYPE.name(), styles);
        let table = dom::create_element("table", vec![("class", &class)]);

        let mut rows = self.content.iter();
        if self.with_headings {
            if let Some(first) = rows.next() {
                let thead = dom::create_element("thead", vec![]);
                dom::append(&thead, row_element(first, "th"));
                dom::append(&table, thead);
            }
        }

        let tbody = dom::create_element("tbody", vec![]);
        for row in rows {
            dom::append(&tbody, row_element(row, "td"));
        }
        dom::append(&table, tbody);

        Ok(table)
    }
}

fn row_element(cells: &[String], cell_tag: &str) -> Handle {
    let tr = dom::create_element("tr", vec![]);
    for cell in cells {
        let td = dom::create_element(cell_tag, vec![]);
        dom::append_fragment(&td, cell);
        dom::append(&tr, td);
    }
    tr
}
