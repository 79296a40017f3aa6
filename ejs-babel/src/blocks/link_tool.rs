use crate::blocks::require;
use crate::dom;
use crate::error::{ParserError, Result};
use crate::marker::MarkerConvention;
use crate::registry::{BlockCodec, BlockType};
use markup5ever_rcdom::Handle;
use serde::{Deserialize, Serialize};

/// Link preview card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkToolData {
    pub link: String,
    #[serde(default)]
    pub meta: LinkMeta,
}

/// Fetched page metadata. All text is plain.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LinkMeta {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub site_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<LinkImage>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkImage {
    pub url: String,
}

impl BlockCodec for LinkToolData {
    const TYPE: BlockType = BlockType::LinkTool;

    fn decode(element: &Handle, _styles: &[String], markers: &MarkerConvention) -> Result<Self> {
        let anchor = require(element, "a", Self::TYPE.name())?;
        let text_of = |name: &str| {
            dom::find_element_with_class(&anchor, "p", &markers.style_token(name))
                .map(|p| dom::text_content(&p))
        };

        let title = text_of("title").ok_or_else(|| {
            ParserError::malformed(Self::TYPE.name(), "missing title paragraph")
        })?;
        let image = dom::find_element(&anchor, "img")
            .and_then(|img| dom::attr(&img, "src"))
            .map(|url| LinkImage { url });

        Ok(LinkToolData {
            link: dom::attr(&anchor, "href").unwrap_or_default(),
            meta: LinkMeta {
                title,
                description: text_of("description").unwrap_or_default(),
                site_name: text_of("site_name").unwrap_or_default(),
                image,
            },
        })
    }

    fn encode(&self, markers: &MarkerConvention) -> Result<Handle> {
        let class = markers.add_marker::<&str>(Self::TYPE.name(), &[]);
        let figure = dom::create_element("figure", vec![("class", &class)]);
        let anchor = dom::create_element(
            "a",
            vec![("href", self.link.as_str()), ("target", "_blank")],
        );

        if let Some(image) = &self.meta.image {
            let img = dom::create_element(
                "img",
                vec![("src", image.url.as_str()), ("alt", self.meta.title.as_str())],
            );
            dom::append(&anchor, img);
        }

        let mut fields = vec![
            ("title", &self.meta.title),
            ("description", &self.meta.description),
        ];
        if !self.meta.site_name.is_empty() {
            fields.push(("site_name", &self.meta.site_name));
        }
        for (name, value) in fields {
            let token = markers.style_token(name);
            let p = dom::create_element("p", vec![("class", &token)]);
            dom::append_text(&p, value);
            dom::append(&anchor, p);
        }

        dom::append(&figure, anchor);
        Ok(figure)
    }
}
