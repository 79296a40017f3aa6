//! Shared fixtures for the integration tests.

use ejs_babel::blocks::{
    AlertData, AlertType, CodeData, DelimiterData, EmbedData, HeaderData, ImageData, ImageFile,
    ImageSource, LinkImage, LinkMeta, LinkToolData, ListData, ListStyle, ParagraphData, QuoteData,
    RawData, TableData, WarningData,
};
use ejs_babel::{Alignment, Block, BlockDocument};

pub const FIXED_TIME: i64 = 1_700_000_000_000;

fn s(value: &str) -> String {
    value.to_string()
}

/// One block of every registered type, in a deliberately unsorted order.
pub fn kitchen_sink_blocks() -> Vec<Block> {
    vec![
        Block::Header(HeaderData {
            text: s("Release <i>notes</i>"),
            level: 1,
            alignment: Alignment::Center,
        }),
        Block::Paragraph(ParagraphData {
            text: s("Plain text with <b>bold</b>, <a href=\"https://example.com/x\">a link</a> and caf\u{e9}."),
            alignment: Alignment::Justify,
        }),
        Block::List(ListData {
            style: ListStyle::Ordered,
            items: vec![s("first"), s("second <code>inline</code>"), s("third")],
        }),
        Block::Delimiter(DelimiterData {}),
        Block::Alert(AlertData {
            kind: AlertType::Warning,
            align: Alignment::Right,
            message: s("Read <u>carefully</u>"),
        }),
        Block::Table(TableData {
            with_headings: true,
            content: vec![
                vec![s("Name"), s("Value")],
                vec![s("alpha"), s("<b>1</b>")],
                vec![s("beta"), s("2")],
            ],
        }),
        Block::Code(CodeData {
            code: s("<script>\n  if (a < b && c > d) {}\n</script>"),
        }),
        Block::Quote(QuoteData {
            text: s("Simplicity is <i>prerequisite</i> for reliability."),
            caption: s("Dijkstra"),
            alignment: Alignment::Left,
        }),
        Block::Embed(EmbedData {
            service: s("youtube"),
            source: s("https://www.youtube.com/embed/dQw4w9WgXcQ"),
            embed: s("https://www.youtube.com/embed/dQw4w9WgXcQ"),
            width: s("580"),
            height: s("320"),
            caption: s("A video"),
        }),
        Block::Image(ImageData {
            source: ImageSource::File {
                file: ImageFile {
                    url: s("https://cdn.example.com/cat.png"),
                },
            },
            caption: s("The <b>cat</b>"),
            with_border: false,
            with_background: true,
            stretched: true,
        }),
        Block::LinkTool(LinkToolData {
            link: s("https://example.com/article"),
            meta: LinkMeta {
                title: s("An article"),
                description: s("About things & stuff"),
                site_name: s("Example"),
                image: Some(LinkImage {
                    url: s("https://example.com/cover.jpg"),
                }),
            },
        }),
        Block::Raw(RawData {
            html: s("<section><span data-widget=\"clock\">12:00</span></section>"),
        }),
        Block::Warning(WarningData {
            title: s("Heads up"),
            message: s("Use <em>only</em> on weekdays"),
        }),
    ]
}

pub fn kitchen_sink() -> BlockDocument {
    BlockDocument::new(kitchen_sink_blocks()).with_time(FIXED_TIME)
}

pub fn paragraph(text: &str) -> Block {
    Block::Paragraph(ParagraphData {
        text: s(text),
        alignment: Alignment::Left,
    })
}
