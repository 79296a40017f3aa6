use crate::blocks::{append_caption, caption_of, require};
use crate::dom;
use crate::error::Result;
use crate::marker::MarkerConvention;
use crate::registry::{BlockCodec, BlockType};
use markup5ever_rcdom::Handle;
use serde::{Deserialize, Deserializer, Serialize};

/// Services the embed tool recognizes; the name travels as a style token.
pub const EMBED_SERVICES: &[&str] = &[
    "facebook",
    "instagram",
    "youtube",
    "twitter",
    "twitch-video",
    "miro",
    "vimeo",
    "gfycat",
    "imgur",
    "vine",
    "aparat",
    "yandex-music-track",
    "yandex-music-album",
    "yandex-music-playlist",
    "coub",
    "codepen",
    "pinterest",
    "github",
];

const YOUTUBE_ALLOW: &str = "accelerometer; autoplay; encrypted-media; gyroscope; picture-in-picture";

/// Embedded third-party content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbedData {
    #[serde(default)]
    pub service: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub embed: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub width: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub height: String,
    #[serde(default)]
    pub caption: String,
}

/// Editors emit dimensions either as `580` or `"580"`.
fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Dimension {
        Text(String),
        Number(serde_json::Number),
        Missing(()),
    }

    Ok(match Dimension::deserialize(deserializer)? {
        Dimension::Text(text) => text,
        Dimension::Number(number) => number.to_string(),
        Dimension::Missing(()) => String::new(),
    })
}

impl BlockCodec for EmbedData {
    const TYPE: BlockType = BlockType::Embed;

    fn decode(element: &Handle, styles: &[String], _markers: &MarkerConvention) -> Result<Self> {
        let iframe = require(element, "iframe", Self::TYPE.name())?;
        let src = dom::attr(&iframe, "src").unwrap_or_default();
        let service = styles
            .iter()
            .find(|style| EMBED_SERVICES.contains(&style.as_str()))
            .cloned()
            .unwrap_or_default();

        Ok(EmbedData {
            service,
            source: src.clone(),
            embed: src,
            width: dom::attr(&iframe, "width").unwrap_or_default(),
            height: dom::attr(&iframe, "height").unwrap_or_default(),
            caption: caption_of(element)?,
        })
    }

    fn encode(&self, markers: &MarkerConvention) -> Result<Handle> {
        let styles: Vec<&str> = if self.service.is_empty() {
            Vec::new()
        } else {
            vec![self.service.as_str()]
        };
        let class = markers.add_marker(Self::TYPE.name(), &styles);
        let figure = dom::create_element("figure", vec![("class", &class)]);

        let mut attrs = vec![("src", self.embed.as_str())];
        if !self.width.is_empty() {
            attrs.push(("width", self.width.as_str()));
        }
        if !self.height.is_empty() {
            attrs.push(("height", self.height.as_str()));
        }
        if self.service == "youtube" {
            attrs.push(("allow", YOUTUBE_ALLOW));
            attrs.push(("allowfullscreen", ""));
        }
        dom::append(&figure, dom::create_element("iframe", attrs));
        append_caption(&figure, &self.caption);

        Ok(figure)
    }
}
