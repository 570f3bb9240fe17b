use super::convert_default;
use tp_babel::ir::document::{Block, Heading, Paragraph, Run};

fn paragraph(block: &Block) -> &Paragraph {
    match block {
        Block::Paragraph(paragraph) => paragraph,
        other => panic!("expected paragraph, got {other:?}"),
    }
}

#[test]
fn test_plain_paragraph_is_one_unstyled_run() {
    let doc = convert_default("   Plain words only.   \n");
    assert_eq!(doc.blocks.len(), 1);
    assert_eq!(
        paragraph(&doc.blocks[0]).runs,
        vec![Run::plain("Plain words only.")]
    );
}

#[test]
fn test_emphasis_splits_runs_in_order() {
    let doc = convert_default("a **b** *c* d\n");
    assert_eq!(
        paragraph(&doc.blocks[0]).runs,
        vec![
            Run::plain("a "),
            Run::bold("b"),
            Run::plain(" "),
            Run::italic("c"),
            Run::plain(" d"),
        ]
    );
}

#[test]
fn test_adjacent_bold_runs_stay_separate() {
    let doc = convert_default("**x** **y**\n");
    let runs = &paragraph(&doc.blocks[0]).runs;
    assert_eq!(
        runs,
        &vec![Run::bold("x"), Run::plain(" "), Run::bold("y")]
    );
}

#[test]
fn test_malformed_emphasis_is_literal_text() {
    let doc = convert_default("**never closed\n");
    assert_eq!(
        paragraph(&doc.blocks[0]).runs,
        vec![Run::plain("**never closed")]
    );
}

#[test]
fn test_code_spans_and_links_become_plain_runs() {
    let doc = convert_default("call `run()` or see [docs](http://example.com)\n");
    assert_eq!(paragraph(&doc.blocks[0]).text(), "call run() or see docs");
    assert!(paragraph(&doc.blocks[0])
        .runs
        .iter()
        .all(|run| !run.bold && !run.italic));
}

#[test]
fn test_headings_keep_level_and_deeper_headings_are_skipped() {
    let doc = convert_default("# One\n\n## Two *styled*\n\n### Three\n\n#### Four\n");
    assert_eq!(
        doc.blocks,
        vec![
            Block::Heading(Heading {
                level: 1,
                text: "One".into()
            }),
            Block::Heading(Heading {
                level: 2,
                text: "Two styled".into()
            }),
            Block::Heading(Heading {
                level: 3,
                text: "Three".into()
            }),
        ]
    );
}

#[test]
fn test_blocks_keep_document_order() {
    let doc = convert_default("First\n\n# Heading\n\n- item\n\nLast\n");
    let kinds: Vec<&str> = doc
        .blocks
        .iter()
        .map(|block| match block {
            Block::Heading(_) => "heading",
            Block::Paragraph(_) => "paragraph",
            Block::ListItem(_) => "list-item",
            Block::Table(_) => "table",
            Block::Image(_) => "image",
            Block::Caption(_) => "caption",
        })
        .collect();
    assert_eq!(kinds, vec!["paragraph", "heading", "list-item", "paragraph"]);
}

#[test]
fn test_empty_markup_yields_empty_document() {
    assert!(convert_default("").is_empty());
    assert!(convert_default("\n\n   \n").is_empty());
}
