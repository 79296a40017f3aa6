use crate::common::kitchen_sink;
use ejs_babel::{html_to_json, json_to_html, BlockDocument, ParserConfig, ParserError};
use insta::assert_snapshot;

#[test]
fn test_json_to_html() {
    let json = r#"{
        "time": 1,
        "blocks": [
            {"type": "alert", "data": {"type": "info", "align": "center", "message": "Note"}},
            {"type": "delimiter", "data": []},
            {"type": "warning", "data": {"title": "T", "message": "<M>"}}
        ],
        "version": "2.28.2"
    }"#;
    let html = json_to_html(json, &ParserConfig::default()).unwrap();
    assert_snapshot!(html, @r#"
    <p class="prs-alert prs_center prs_info">Note</p>
    <hr class="prs-delimiter">
    <div class="prs-warning"><h4>T</h4><p>&lt;M&gt;</p></div>
    "#);
}

#[test]
fn test_html_to_json_compact() {
    let config = ParserConfig::default()
        .with_pretty_json(false)
        .with_version("2.30.0");
    let json = html_to_json("<hr class=\"prs-delimiter\">", &config).unwrap();
    assert!(json.starts_with("{\"time\":"));
    assert!(json.ends_with(",\"blocks\":[{\"type\":\"delimiter\",\"data\":{}}],\"version\":\"2.30.0\"}"));
}

#[test]
fn test_html_to_json_pretty() {
    let json = html_to_json("<hr class=\"prs-delimiter\">", &ParserConfig::default()).unwrap();
    assert!(json.contains("\n  \"blocks\": ["));
}

#[test]
fn test_full_cycle_through_both_text_forms() {
    let config = ParserConfig::default();
    let source = kitchen_sink();

    let html = json_to_html(&source.to_json().unwrap(), &config).unwrap();
    let json = html_to_json(&html, &config).unwrap();
    let decoded = BlockDocument::from_json(&json).unwrap();

    assert_eq!(decoded.blocks, source.blocks);
    assert_eq!(decoded.version, source.version);
}

#[test]
fn test_empty_inputs() {
    let config = ParserConfig::default();
    assert_eq!(
        json_to_html("", &config).unwrap_err(),
        ParserError::EmptyInput("No JSON to parse".to_string())
    );
    assert_eq!(
        json_to_html(r#"{"blocks": []}"#, &config).unwrap_err(),
        ParserError::NoBlocks
    );
    assert_eq!(
        html_to_json("", &config).unwrap_err(),
        ParserError::EmptyInput("No HTML to parse".to_string())
    );
}
