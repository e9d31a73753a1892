//! Integration tests for Markdown conversion of Docs API JSON.

use ungdoc::render::{self, RenderOptions};
use ungdoc::{parse_str, Error, Ungdoc};

const TABBED: &str = r#"{
    "documentId": "doc-42",
    "title": "Plan Doc",
    "revisionId": "rev-7",
    "tabs": [
        {
            "tabProperties": {"tabId": "t.0", "title": "Overview", "index": 0},
            "documentTab": {
                "body": {"content": [
                    {"startIndex": 0, "endIndex": 1, "sectionBreak": {"sectionStyle": {}}},
                    {"startIndex": 1, "paragraph": {
                        "paragraphStyle": {"namedStyleType": "TITLE"},
                        "elements": [{"textRun": {"content": "Project Plan\n"}}]
                    }},
                    {"paragraph": {
                        "paragraphStyle": {"namedStyleType": "NORMAL_TEXT"},
                        "elements": [
                            {"textRun": {"content": "See"}},
                            {"textRun": {"content": " docs ", "textStyle": {"link": {"url": "https://d.test"}}}},
                            {"textRun": {"content": "now\n"}}
                        ]
                    }},
                    {"paragraph": {"elements": [
                        {"textRun": {"content": "gone\n", "textStyle": {"bold": true, "italic": true, "strikethrough": true}}}
                    ]}},
                    {"paragraph": {
                        "paragraphStyle": {"namedStyleType": "HEADING_5"},
                        "elements": [{"textRun": {"content": "Detail\n"}}]
                    }},
                    {"paragraph": {
                        "bullet": {"listId": "kix.a"},
                        "elements": [{"textRun": {"content": "step one\n"}}]
                    }},
                    {"paragraph": {
                        "bullet": {"listId": "kix.a", "nestingLevel": 1},
                        "elements": [{"textRun": {"content": "sub\n"}}]
                    }},
                    {"paragraph": {
                        "bullet": {"listId": "kix.a"},
                        "elements": [{"textRun": {"content": "-\n"}}]
                    }},
                    {"table": {"rows": 2, "columns": 2, "tableRows": [
                        {"tableCells": [
                            {"content": [{"paragraph": {"elements": [{"textRun": {"content": "A\n"}}]}}]},
                            {"content": [{"paragraph": {"elements": [{"textRun": {"content": "B\n"}}]}}]}
                        ]},
                        {"tableCells": [
                            {"content": [{"paragraph": {"elements": [{"textRun": {"content": "C\n"}}]}}]},
                            {"content": [{"paragraph": {"elements": [{"textRun": {"content": "D\n"}}]}}]}
                        ]}
                    ]}},
                    {"tableOfContents": {"content": []}}
                ]},
                "lists": {"kix.a": {"listProperties": {"nestingLevels": [
                    {"glyphType": "DECIMAL"},
                    {"glyphSymbol": "●"}
                ]}}}
            },
            "childTabs": [
                {
                    "tabProperties": {"tabId": "t.1", "title": "Notes", "parentTabId": "t.0", "nestingLevel": 1},
                    "documentTab": {"body": {"content": [
                        {"paragraph": {"elements": [{"textRun": {"content": "child\n"}}]}}
                    ]}}
                }
            ]
        },
        {
            "tabProperties": {"tabId": "t.2", "title": "", "index": 1},
            "documentTab": {}
        }
    ]
}"#;

const OVERVIEW: &str = concat!(
    "# Project Plan\n\n",
    "See[docs](https://d.test) now\n\n",
    "~~***gone***~~\n\n",
    "##### Detail\n\n",
    "1. step one\n",
    "  - sub\n",
    "\n| A | B |\n| --- | --- |\n| C | D |\n\n",
);

#[test]
fn test_tabbed_document_to_markdown() {
    let doc = parse_str(TABBED).unwrap();
    let tabs = render::to_markdown(&doc, &RenderOptions::default());

    assert_eq!(tabs.len(), 3);
    assert_eq!(tabs[0].tab_id, "t.0");
    assert_eq!(tabs[0].tab_title, "Overview");
    assert_eq!(tabs[0].tab_markdown, OVERVIEW);
}

#[test]
fn test_child_tab_follows_parent() {
    let doc = parse_str(TABBED).unwrap();
    let tabs = render::to_markdown(&doc, &RenderOptions::default());

    let ids: Vec<&str> = tabs.iter().map(|t| t.tab_id.as_str()).collect();
    assert_eq!(ids, ["t.0", "t.1", "t.2"]);
    assert_eq!(tabs[1].tab_markdown, "child\n\n");
}

#[test]
fn test_untitled_tab_without_body() {
    let doc = parse_str(TABBED).unwrap();
    let tabs = render::to_markdown(&doc, &RenderOptions::default());

    assert_eq!(tabs[2].tab_title, "Plan Doc");
    assert_eq!(tabs[2].tab_markdown, "");
}

#[test]
fn test_heading_offset_caps_at_six() {
    let result = Ungdoc::new()
        .with_heading_offset(2)
        .parse_bytes(TABBED.as_bytes())
        .unwrap();
    let markdown = result.tab_markdown("Overview").unwrap();

    assert!(markdown.starts_with("### Project Plan\n\n"));
    assert!(markdown.contains("\n###### Detail\n\n"));
}

#[test]
fn test_without_child_tabs() {
    let result = Ungdoc::new()
        .without_child_tabs()
        .parse_bytes(TABBED.as_bytes())
        .unwrap();

    let ids: Vec<String> = result.to_markdown().into_iter().map(|t| t.tab_id).collect();
    assert_eq!(ids, ["t.0", "t.2"]);
    assert!(matches!(
        result.tab_markdown("Notes"),
        Err(Error::TabNotFound(_))
    ));
}

#[test]
fn test_parallel_and_sequential_agree() {
    let parallel = Ungdoc::new().parse_bytes(TABBED.as_bytes()).unwrap();
    let sequential = Ungdoc::new()
        .sequential()
        .parse_bytes(TABBED.as_bytes())
        .unwrap();

    assert_eq!(parallel.to_markdown(), sequential.to_markdown());
}

#[test]
fn test_response_envelope() {
    let result = Ungdoc::new().parse_bytes(TABBED.as_bytes()).unwrap();
    let response = result.to_response();

    assert_eq!(response.doc_id, "doc-42");
    assert_eq!(response.doc_title, "Plan Doc");
    assert_eq!(response.tabs.len(), 3);

    let json: serde_json::Value =
        serde_json::from_str(&result.to_json(ungdoc::JsonFormat::Pretty).unwrap()).unwrap();
    assert_eq!(json["docId"], "doc-42");
    assert_eq!(json["tabs"][1]["tabTitle"], "Notes");
    assert_eq!(json["tabs"][0]["tabMarkdown"], OVERVIEW);
}

#[test]
fn test_text_output() {
    let result = Ungdoc::new().parse_bytes(TABBED.as_bytes()).unwrap();
    let text = result.to_text();

    assert!(text.starts_with("Document: Plan Doc (doc-42)\n"));
    assert!(text.contains("\n== Overview [t.0] ==\n# Project Plan\n"));
    assert!(text.contains("\n== Notes [t.1] ==\nchild\n"));
}

#[test]
fn test_stats() {
    let result = Ungdoc::new().parse_bytes(TABBED.as_bytes()).unwrap();
    let stats = result.to_markdown_with_stats().stats;

    assert_eq!(stats.tab_count, 3);
    assert_eq!(stats.heading_count, 2);
    assert_eq!(stats.list_item_count, 2);
    assert_eq!(stats.table_count, 1);
    assert_eq!(stats.skipped_count, 1);
    // Leading section breaks are not written.
    assert_eq!(stats.section_break_count, 0);
}

#[test]
fn test_section_break_between_content() {
    let doc = parse_str(
        r#"{"documentId": "d", "body": {"content": [
            {"paragraph": {"elements": [{"textRun": {"content": "one\n"}}]}},
            {"sectionBreak": {}},
            {"paragraph": {"elements": [{"textRun": {"content": "two\n"}}]}}
        ]}}"#,
    )
    .unwrap();
    let tabs = render::to_markdown(&doc, &RenderOptions::default());

    assert_eq!(tabs[0].tab_markdown, "one\n\n---\n\ntwo\n\n");
}

#[test]
fn test_vertical_tab_and_typography() {
    let doc = parse_str(
        r#"{"documentId": "d", "body": {"content": [
            {"paragraph": {"elements": [
                {"textRun": {"content": "“line”\u000bit’s — done\n"}}
            ]}}
        ]}}"#,
    )
    .unwrap();
    let tabs = render::to_markdown(&doc, &RenderOptions::default());

    assert_eq!(tabs[0].tab_markdown, "\"line\"\n\nit's -- done\n\n");
}

#[test]
fn test_unknown_style_and_glyph_values() {
    let doc = parse_str(
        r#"{"documentId": "d", "tabs": [{
            "tabProperties": {"tabId": "t.0", "title": "Main"},
            "documentTab": {
                "lists": {"l": {"listProperties": {"nestingLevels": [{"glyphType": "FANCY_STARS"}]}}},
                "body": {"content": [
                    {"paragraph": {
                        "paragraphStyle": {"namedStyleType": "HEADING_9"},
                        "elements": [{"textRun": {"content": "plain\n"}}]
                    }},
                    {"paragraph": {
                        "bullet": {"listId": "l"},
                        "elements": [{"textRun": {"content": "star\n"}}]
                    }}
                ]}
            }
        }]}"#,
    )
    .unwrap();
    let tabs = render::to_markdown(&doc, &RenderOptions::default());

    assert_eq!(tabs[0].tab_markdown, "plain\n\n- star\n");
}

#[test]
fn test_legacy_body_bullets_are_unordered() {
    let doc = parse_str(
        r#"{"documentId": "d", "title": "Old",
            "lists": {"kix.1": {"listProperties": {"nestingLevels": [{"glyphType": "DECIMAL"}]}}},
            "body": {"content": [
                {"paragraph": {
                    "bullet": {"listId": "kix.1"},
                    "elements": [{"textRun": {"content": "first\n"}}]
                }}
            ]}}"#,
    )
    .unwrap();
    let tabs = render::to_markdown(&doc, &RenderOptions::default());

    assert_eq!(tabs[0].tab_markdown, "- first\n");
}
