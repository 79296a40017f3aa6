use crate::common::{kitchen_sink, FIXED_TIME};
use ejs_babel::blocks::{EmbedData, ImageSource};
use ejs_babel::{Block, BlockDocument, ParserError, DEFAULT_VERSION};
use serde_json::{json, Value};

#[test]
fn test_json_round_trip() {
    let doc = kitchen_sink();
    let json = doc.to_json().unwrap();
    assert_eq!(BlockDocument::from_json(&json).unwrap(), doc);

    let compact = doc.to_json_compact().unwrap();
    assert!(!compact.contains('\n'));
    assert_eq!(BlockDocument::from_json(&compact).unwrap(), doc);
}

#[test]
fn test_block_shapes() {
    let value: Value = serde_json::from_str(&kitchen_sink().to_json().unwrap()).unwrap();
    assert_eq!(value["time"], json!(FIXED_TIME));
    assert_eq!(value["version"], json!(DEFAULT_VERSION));

    let blocks = value["blocks"].as_array().unwrap();
    assert_eq!(blocks.len(), 13);
    assert_eq!(
        blocks[0],
        json!({
            "type": "header",
            "data": { "text": "Release <i>notes</i>", "level": 1, "alignment": "center" }
        })
    );
    assert_eq!(blocks[3], json!({ "type": "delimiter", "data": {} }));
    assert_eq!(blocks[4]["data"]["type"], json!("warning"));
    assert_eq!(blocks[5]["data"]["withHeadings"], json!(true));
    assert_eq!(
        blocks[10]["data"]["meta"]["image"]["url"],
        json!("https://example.com/cover.jpg")
    );
}

#[test]
fn test_editor_output_is_accepted() {
    let json = r#"{
        "time": 1550476186479,
        "blocks": [
            {"id": "oUq2g_tl8y", "type": "header", "data": {"text": "Editor.js", "level": 2}},
            {"id": "zbGZFPM-iI", "type": "embed", "data": {
                "service": "vimeo",
                "source": "https://vimeo.com/1",
                "embed": "https://player.vimeo.com/video/1",
                "width": 580,
                "height": 320,
                "caption": ""
            }},
            {"id": "q3Xw1", "type": "image", "data": {
                "url": "https://example.com/pic.jpg",
                "caption": "",
                "withBorder": false,
                "withBackground": false,
                "stretched": true
            }}
        ],
        "version": "2.8.1"
    }"#;
    let doc = BlockDocument::from_json(json).unwrap();
    assert_eq!(doc.version, "2.8.1");
    assert_eq!(doc.blocks.len(), 3);

    match &doc.blocks[1] {
        Block::Embed(EmbedData { width, height, .. }) => {
            assert_eq!(width, "580");
            assert_eq!(height, "320");
        }
        other => panic!("Expected embed, got {other:?}"),
    }
    match &doc.blocks[2] {
        Block::Image(image) => {
            assert!(matches!(image.source, ImageSource::Url { .. }));
            assert!(image.stretched);
        }
        other => panic!("Expected image, got {other:?}"),
    }
}

#[test]
fn test_unknown_type_is_rejected() {
    let err = BlockDocument::from_json(r#"{"blocks": [{"type": "checklist", "data": {}}]}"#)
        .unwrap_err();
    assert_eq!(err.to_string(), "Unknown block checklist");
}

#[test]
fn test_bad_data_names_the_block() {
    let err = BlockDocument::from_json(
        r#"{"blocks": [{"type": "alert", "data": {"type": "purple", "message": "m"}}]}"#,
    )
    .unwrap_err();
    match err {
        ParserError::MalformedBlockData { block_type, .. } => assert_eq!(block_type, "alert"),
        other => panic!("Expected MalformedBlockData, got {other:?}"),
    }
}
