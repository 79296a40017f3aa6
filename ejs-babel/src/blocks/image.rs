use crate::blocks::{append_caption, caption_of, require};
use crate::dom;
use crate::error::Result;
use crate::marker::MarkerConvention;
use crate::registry::{BlockCodec, BlockType};
use markup5ever_rcdom::Handle;
use serde::{Deserialize, Serialize};

const WITH_BORDER: &str = "withborder";
const WITH_BACKGROUND: &str = "withbackground";
const STRETCHED: &str = "stretched";
const FILE: &str = "file";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageData {
    #[serde(flatten)]
    pub source: ImageSource,
    #[serde(default)]
    pub caption: String,
    #[serde(rename = "withBorder", default)]
    pub with_border: bool,
    #[serde(rename = "withBackground", default)]
    pub with_background: bool,
    #[serde(default)]
    pub stretched: bool,
}

/// Where the picture lives: an uploaded file (`{"file": {"url": ..}}`) or a
/// plain URL (`{"url": ..}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImageSource {
    File { file: ImageFile },
    Url { url: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageFile {
    pub url: String,
}

impl ImageSource {
    pub fn url(&self) -> &str {
        match self {
            ImageSource::File { file } => &file.url,
            ImageSource::Url { url } => url,
        }
    }
}

impl BlockCodec for ImageData {
    const TYPE: BlockType = BlockType::Image;

    fn decode(element: &Handle, styles: &[String], _markers: &MarkerConvention) -> Result<Self> {
        let img = require(element, "img", Self::TYPE.name())?;
        let url = dom::attr(&img, "src").unwrap_or_default();
        let has = |flag: &str| styles.iter().any(|s| s == flag);

        let source = if has(FILE) {
            ImageSource::File {
                file: ImageFile { url },
            }
        } else {
            ImageSource::Url { url }
        };

        Ok(ImageData {
            source,
            caption: caption_of(element)?,
            with_border: has(WITH_BORDER),
            with_background: has(WITH_BACKGROUND),
            stretched: has(STRETCHED),
        })
    }

    fn encode(&self, markers: &MarkerConvention) -> Result<Handle> {
        let flags = [
            (self.with_border, WITH_BORDER),
            (self.with_background, WITH_BACKGROUND),
            (self.stretched, STRETCHED),
            (matches!(self.source, ImageSource::File { .. }), FILE),
        ];
        let styles: Vec<&str> = flags
            .iter()
            .filter(|(on, _)| *on)
            .map(|(_, token)| *token)
            .collect();

        let class = markers.add_marker(Self::TYPE.name(), &styles);
        let figure = dom::create_element("figure", vec![("class", &class)]);
        let img = dom::create_element(
            "img",
            vec![("src", self.source.url()), ("alt", self.caption.as_str())],
        );
        dom::append(&figure, img);
        append_caption(&figure, &self.caption);

        Ok(figure)
    }
}
