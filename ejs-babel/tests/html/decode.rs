use ejs_babel::blocks::{LinkToolData, ListStyle};
use ejs_babel::{Block, BlockType, Decoder, ParserConfig, ParserError};

#[test]
fn test_decode_third_party_wrapping() {
    let html = r#"<!DOCTYPE html>
<html><head><title>Post</title></head>
<body>
  <article class="post">
    <h2 class="prs-header prs_center">Intro</h2>
    <div class="sidebar"><p>not a block</p></div>
    <ul class="prs-list">
      <li>a</li>
      <li>b</li>
    </ul>
  </article>
</body></html>"#;

    let doc = Decoder::default().decode(html).unwrap();
    let types: Vec<_> = doc.blocks.iter().map(Block::block_type).collect();
    assert_eq!(types, vec![BlockType::Header, BlockType::List]);

    match &doc.blocks[1] {
        Block::List(list) => {
            assert_eq!(list.style, ListStyle::Unordered);
            assert_eq!(list.items, vec!["a".to_string(), "b".to_string()]);
        }
        other => panic!("Expected list, got {other:?}"),
    }
}

#[test]
fn test_link_card_sub_elements_are_not_blocks() {
    let html = r#"<figure class="prs-linkTool">
  <a href="https://example.com" target="_blank">
    <p class="prs_title">Example</p>
    <p class="prs_description">Desc</p>
  </a>
</figure>"#;
    let doc = Decoder::default().decode(html).unwrap();
    assert_eq!(doc.blocks.len(), 1);
    match &doc.blocks[0] {
        Block::LinkTool(LinkToolData { link, meta }) => {
            assert_eq!(link, "https://example.com");
            assert_eq!(meta.title, "Example");
            assert_eq!(meta.description, "Desc");
            assert_eq!(meta.site_name, "");
            assert!(meta.image.is_none());
        }
        other => panic!("Expected linkTool, got {other:?}"),
    }
}

#[test]
fn test_unknown_type_aborts_whole_document() {
    let html = "<p class=\"prs-paragraph\">ok</p><p class=\"prs-gallery\">x</p>";
    let err = Decoder::default().decode(html).unwrap_err();
    assert_eq!(err, ParserError::UnknownBlockType("gallery".to_string()));
}

#[test]
fn test_malformed_block_aborts_whole_document() {
    let html = "<p class=\"prs-paragraph\">ok</p><div class=\"prs-warning\"><p>no title</p></div>";
    let err = Decoder::default().decode(html).unwrap_err();
    assert!(matches!(err, ParserError::MalformedBlockData { .. }));
}

#[test]
fn test_no_markers() {
    let err = Decoder::default()
        .decode("<p>Just some text</p>")
        .unwrap_err();
    assert_eq!(err.to_string(), "No HTML to parse");
}

#[test]
fn test_prefix_is_configurable() {
    let decoder = Decoder::new(ParserConfig::default().with_prefix("cms"));
    let doc = decoder
        .decode("<hr class=\"cms-delimiter\"><p class=\"cms-paragraph cms_right\">r</p>")
        .unwrap();
    assert_eq!(doc.blocks.len(), 2);
}

#[test]
fn test_time_and_version_stamp() {
    let doc = Decoder::default()
        .with_time(7)
        .with_version("9.9.9")
        .decode("<hr class=\"prs-delimiter\">")
        .unwrap();
    assert_eq!(doc.time, 7);
    assert_eq!(doc.version, "9.9.9");
}
