//! Property tests over generated markup.

use super::list_items;
use proptest::prelude::*;
use tp_babel::ir::document::{Block, ListKind, Run};
use tp_babel::{convert, ConvertOptions};

fn markup_line() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z ]{0,20}",
        "#{1,4} [a-z]{1,10}",
        "[-*] [a-z*_]{1,10}",
        " {0,6}1\\. [a-z]{1,10}",
        "\\|\\| [a-z=]{1,5} \\|\\| [a-z]{0,5} \\|\\|",
        "\\| [a-z]{1,5} \\| [a-z]{1,5} \\|",
        "\\|-+\\|-+\\|",
        "!\\[[a-z]{0,5}\\]\\([a-z]{1,5}\\.png\\)",
        Just(String::new()),
    ]
}

fn markup() -> impl Strategy<Value = String> {
    prop::collection::vec(markup_line(), 0..20).prop_map(|lines| lines.join("\n"))
}

proptest! {
    #[test]
    fn conversion_is_idempotent(source in markup()) {
        let options = ConvertOptions::default();
        let first = convert(&source, &options).unwrap();
        let second = convert(&source, &options).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn plain_paragraph_is_one_trimmed_run(
        words in prop::collection::vec("[a-z]{1,8}", 1..12),
        lead in " {0,3}",
        trail in " {0,3}",
    ) {
        let text = words.join(" ");
        let source = format!("{lead}{text}{trail}\n");
        let doc = convert(&source, &ConvertOptions::default()).unwrap();
        prop_assert_eq!(doc.blocks.len(), 1);
        match &doc.blocks[0] {
            Block::Paragraph(paragraph) => {
                prop_assert_eq!(&paragraph.runs, &vec![Run::plain(text.trim())]);
            }
            other => prop_assert!(false, "expected paragraph, got {:?}", other),
        }
    }

    #[test]
    fn nested_list_levels_increase_by_one(depth in 1usize..8) {
        let source: String = (0..depth)
            .map(|level| format!("{}- item{level}\n", "  ".repeat(level)))
            .collect();
        let doc = convert(&source, &ConvertOptions::default()).unwrap();
        let expected: Vec<(String, ListKind, usize)> = (0..depth)
            .map(|level| (format!("item{level}"), ListKind::Bulleted, level))
            .collect();
        prop_assert_eq!(list_items(&doc), expected);
    }
}
