//! Paragraph, character and table styles referenced by the writer.

use crate::ir::document::ListKind;
use docx_rs::*;

/// Deepest list level that gets a style and a numbering level of its own.
pub const MAX_LIST_LEVEL: usize = 8;

pub const CAPTION: &str = "Caption";
pub const TABLE_GRID: &str = "TableGrid";

/// Style id for a heading level, e.g. `Heading2`.
pub fn heading_style_id(level: u8) -> String {
    format!("Heading{}", level.clamp(1, 3))
}

/// Style id for a style name: its name without spaces (`List Bullet 2` →
/// `ListBullet2`).
pub fn style_id(name: &str) -> String {
    name.split_whitespace().collect()
}

fn heading_style(level: u8, size: usize) -> Style {
    Style::new(&heading_style_id(level), StyleType::Paragraph)
        .name(&format!("Heading {level}"))
        .size(size)
        .bold()
}

fn list_style(kind: ListKind, level: usize) -> Style {
    let name = kind.style_name(level);
    let indent = 720 * (level as i32 + 1);
    Style::new(&style_id(&name), StyleType::Paragraph)
        .name(&name)
        .indent(Some(indent), Some(SpecialIndentType::Hanging(360)), None, None)
}

/// Register every style the writer can reference.
pub fn add_styles(docx: Docx) -> Docx {
    let mut docx = docx
        .add_style(heading_style(1, 32))
        .add_style(heading_style(2, 28))
        .add_style(heading_style(3, 26));

    for kind in [ListKind::Bulleted, ListKind::Numbered] {
        for level in 0..=MAX_LIST_LEVEL {
            docx = docx.add_style(list_style(kind, level));
        }
    }

    let caption = Style::new(CAPTION, StyleType::Paragraph)
        .name("Caption")
        .italic()
        .size(18)
        .align(AlignmentType::Center);

    let table = Style::new(TABLE_GRID, StyleType::Table).name("Table Grid");

    docx.add_style(caption).add_style(table)
}
