use crate::common::{kitchen_sink, paragraph};
use ejs_babel::blocks::{CodeData, HeaderData};
use ejs_babel::{Alignment, Block, BlockDocument, Encoder, ParserConfig, ParserError};
use insta::assert_snapshot;

fn encode(blocks: Vec<Block>) -> String {
    Encoder::default()
        .encode(&BlockDocument::new(blocks))
        .expect("encode")
}

#[test]
fn test_small_document() {
    let html = encode(vec![
        Block::Header(HeaderData {
            text: "Hello <i>World</i>".to_string(),
            level: 2,
            alignment: Alignment::Center,
        }),
        paragraph("Some <b>bold</b> text"),
    ]);
    assert_snapshot!(html, @r#"
    <h2 class="prs-header prs_center">Hello <i>World</i></h2>
    <p class="prs-paragraph prs_left">Some <b>bold</b> text</p>
    "#);
}

#[test]
fn test_code_is_escaped_paragraph_is_markup() {
    let html = encode(vec![
        Block::Code(CodeData {
            code: "<script>alert(1)</script>".to_string(),
        }),
        paragraph("<b>bold</b>"),
    ]);
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(html.contains("<b>bold</b>"));
}

#[test]
fn test_one_top_level_element_per_block() {
    let doc = kitchen_sink();
    let html = Encoder::default().encode(&doc).unwrap();
    assert_eq!(html.lines().filter(|line| line.contains("class=\"prs-")).count(), 13);
    for (line, block) in html.lines().filter(|l| l.contains("class=\"prs-")).zip(&doc.blocks) {
        let marker = format!("class=\"prs-{}", block.block_type());
        assert!(line.contains(&marker), "{line} should carry {marker}");
    }
}

#[test]
fn test_non_ascii_is_written_literally() {
    let html = encode(vec![paragraph("caf\u{e9} \u{1f600} 1\u{a0}000")]);
    assert_eq!(
        html,
        "<p class=\"prs-paragraph prs_left\">caf\u{e9} \u{1f600} 1\u{a0}000</p>"
    );
}

#[test]
fn test_empty_block_list() {
    let err = Encoder::new(ParserConfig::default())
        .encode(&BlockDocument::new(Vec::new()))
        .unwrap_err();
    assert_eq!(err, ParserError::NoBlocks);
    assert_eq!(err.to_string(), "No blocks to parse");
}

#[test]
fn test_header_level_out_of_range() {
    let err = Encoder::default()
        .encode(&BlockDocument::new(vec![Block::Header(HeaderData {
            text: "x".to_string(),
            level: 0,
            alignment: Alignment::Left,
        })]))
        .unwrap_err();
    assert!(matches!(err, ParserError::MalformedBlockData { .. }));
}
