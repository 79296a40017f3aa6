use crate::document::Alignment;
use crate::dom;
use crate::error::Result;
use crate::marker::MarkerConvention;
use crate::registry::{BlockCodec, BlockType};
use markup5ever_rcdom::Handle;
use serde::{Deserialize, Serialize};

/// Visual variant of an alert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertType {
    #[default]
    Primary,
    Secondary,
    Info,
    Success,
    Warning,
    Danger,
    Light,
    Dark,
}

impl AlertType {
    pub const ALL: [AlertType; 8] = [
        AlertType::Primary,
        AlertType::Secondary,
        AlertType::Info,
        AlertType::Success,
        AlertType::Warning,
        AlertType::Danger,
        AlertType::Light,
        AlertType::Dark,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AlertType::Primary => "primary",
            AlertType::Secondary => "secondary",
            AlertType::Info => "info",
            AlertType::Success => "success",
            AlertType::Warning => "warning",
            AlertType::Danger => "danger",
            AlertType::Light => "light",
            AlertType::Dark => "dark",
        }
    }

    fn from_styles(styles: &[String]) -> Self {
        AlertType::ALL
            .into_iter()
            .find(|kind| styles.iter().any(|style| style.as_str() == kind.as_str()))
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertData {
    #[serde(rename = "type", default)]
    pub kind: AlertType,
    #[serde(default)]
    pub align: Alignment,
    /// Rich text (inline HTML)
    pub message: String,
}

impl BlockCodec for AlertData {
    const TYPE: BlockType = BlockType::Alert;

    fn decode(element: &Handle, styles: &[String], _markers: &MarkerConvention) -> Result<Self> {
        Ok(AlertData {
            kind: AlertType::from_styles(styles),
            align: Alignment::from_styles(styles),
            message: dom::inner_html(element)?,
        })
    }

    fn encode(&self, markers: &MarkerConvention) -> Result<Handle> {
        let class = markers.add_marker(Self::TYPE.name(), &[self.align.as_str(), self.kind.as_str()]);
        let p = dom::create_element("p", vec![("class", &class)]);
        dom::append_fragment(&p, &self.message);
        Ok(p)
    }
}
