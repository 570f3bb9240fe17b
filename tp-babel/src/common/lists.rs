//! List flattening.
//!
//! Nested lists become a flat, pre-order sequence of list item blocks where
//! the nesting depth is kept as an indentation level.
//!
//! ```text
//! - A              ListItem("A", Bulleted, 0)
//!   - B      =>    ListItem("B", Bulleted, 1)
//!     1. C         ListItem("C", Numbered, 2)
//! ```

use crate::ir::document::{Block, ListItem, ListKind};
use crate::ir::element::Element;

/// Flatten `list` into list item blocks, starting at `level`.
///
/// Only direct item children of `list` are items at `level`. An item's own
/// text excludes the text of its nested lists, which are flattened right after
/// it at `level + 1` in the order they appear.
pub fn flatten_list(list: &Element, kind: ListKind, level: usize) -> Vec<Block> {
    let mut blocks = Vec::new();
    flatten_into(list, kind, level, &mut blocks);
    blocks
}

fn flatten_into(list: &Element, kind: ListKind, level: usize, out: &mut Vec<Block>) {
    for item in list.children() {
        let Element::ListItem(children) = item else {
            continue;
        };

        let text = item_text(children);
        if !text.is_empty() {
            out.push(Block::ListItem(ListItem::new(text, kind, level)));
        }

        for child in children {
            match child {
                Element::UnorderedList(_) => flatten_into(child, ListKind::Bulleted, level + 1, out),
                Element::OrderedList(_) => flatten_into(child, ListKind::Numbered, level + 1, out),
                _ => {}
            }
        }
    }
}

/// Text of an item's non-list children, each trimmed, joined by single spaces.
fn item_text(children: &[Element]) -> String {
    children
        .iter()
        .filter(|child| !child.is_list())
        .map(Element::text_content)
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
