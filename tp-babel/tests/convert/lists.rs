use super::{convert_default, list_items};
use tp_babel::ir::document::{Block, ListKind};

fn item(text: &str, kind: ListKind, level: usize) -> (String, ListKind, usize) {
    (text.to_string(), kind, level)
}

#[test]
fn test_nested_bullets_step_one_level_at_a_time() {
    let doc = convert_default("- A\n  - B\n    - C");
    assert_eq!(
        list_items(&doc),
        vec![
            item("A", ListKind::Bulleted, 0),
            item("B", ListKind::Bulleted, 1),
            item("C", ListKind::Bulleted, 2),
        ]
    );
}

#[test]
fn test_two_space_ordered_lists_nest() {
    let doc = convert_default("1. A\n  1. B\n  2. C\n2. D\n");
    assert_eq!(
        list_items(&doc),
        vec![
            item("A", ListKind::Numbered, 0),
            item("B", ListKind::Numbered, 1),
            item("C", ListKind::Numbered, 1),
            item("D", ListKind::Numbered, 0),
        ]
    );
}

#[test]
fn test_mixed_kinds_follow_their_own_list() {
    let doc = convert_default("- A\n  1. B\n  2. C\n- D\n");
    assert_eq!(
        list_items(&doc),
        vec![
            item("A", ListKind::Bulleted, 0),
            item("B", ListKind::Numbered, 1),
            item("C", ListKind::Numbered, 1),
            item("D", ListKind::Bulleted, 0),
        ]
    );
}

#[test]
fn test_loose_items_keep_their_text() {
    let doc = convert_default("- first\n\n- second **bold**\n");
    assert_eq!(
        list_items(&doc),
        vec![
            item("first", ListKind::Bulleted, 0),
            item("second bold", ListKind::Bulleted, 0),
        ]
    );
}

#[test]
fn test_parent_text_excludes_nested_items() {
    let doc = convert_default("- parent\n  - child one\n  - child two\n");
    let items = list_items(&doc);
    assert_eq!(items[0].0, "parent");
    assert_eq!(items.len(), 3);
}

#[test]
fn test_list_items_carry_style_names() {
    let doc = convert_default("1. top\n  - nested\n");
    let styles: Vec<&str> = doc
        .blocks
        .iter()
        .filter_map(|block| match block {
            Block::ListItem(item) => Some(item.style.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(styles, vec!["List Number", "List Bullet 2"]);
}

#[test]
fn test_separate_lists_are_separate_runs_of_items() {
    let doc = convert_default("- a\n\nbetween\n\n1. b\n");
    assert_eq!(doc.blocks.len(), 3);
    assert!(matches!(&doc.blocks[1], Block::Paragraph(_)));
}
