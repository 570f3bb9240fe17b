use super::convert_default;
use tp_babel::ir::document::{Block, Table};

fn tables(markup: &str) -> Vec<Table> {
    convert_default(markup)
        .blocks
        .into_iter()
        .filter_map(|block| match block {
            Block::Table(table) => Some(table),
            _ => None,
        })
        .collect()
}

fn row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|cell| cell.to_string()).collect()
}

#[test]
fn test_pipe_table_with_header_row() {
    let tables = tables("| H1 | H2 |\n|----|----|\n| a | b |\n| c | d |\n");
    assert_eq!(tables.len(), 1);
    let table = &tables[0];
    assert_eq!(table.columns, 2);
    assert!(table.header_row);
    assert_eq!(
        table.rows,
        vec![row(&["H1", "H2"]), row(&["a", "b"]), row(&["c", "d"])]
    );
    assert!(table.is_bold_row(0));
    assert!(!table.is_bold_row(1));
    assert!(!table.is_bold_row(2));
}

#[test]
fn test_wiki_table_with_header_row() {
    let tables = tables("|| = H1 = || = H2 = ||\n|| a || b ||\n|| c || d ||\n");
    assert_eq!(tables.len(), 1);
    assert!(tables[0].header_row);
    assert_eq!(
        tables[0].rows,
        vec![row(&["H1", "H2"]), row(&["a", "b"]), row(&["c", "d"])]
    );
}

#[test]
fn test_wiki_table_without_header_cells() {
    let tables = tables("|| a || b ||\n|| c || d ||\n");
    assert!(!tables[0].header_row);
    assert_eq!(tables[0].rows.len(), 2);
}

#[test]
fn test_extra_cells_beyond_first_row_are_dropped() {
    let tables = tables("|| a || b ||\n|| c || d || e ||\n");
    assert_eq!(tables[0].columns, 2);
    assert_eq!(tables[0].rows[1], row(&["c", "d"]));
}

#[test]
fn test_short_rows_leave_trailing_cells_absent() {
    let tables = tables("|| a || b || c ||\n|| d ||\n");
    assert_eq!(tables[0].columns, 3);
    assert_eq!(tables[0].rows[1], row(&["d"]));
}

#[test]
fn test_cell_text_is_trimmed_and_flattened() {
    let tables = tables("| Name | Note |\n|---|---|\n|  **x**  | *y* z |\n");
    assert_eq!(tables[0].rows[1], row(&["x", "y z"]));
}

#[test]
fn test_wiki_table_between_paragraphs() {
    let doc = convert_default("Before\n|| a || b ||\nAfter\n");
    assert_eq!(doc.blocks.len(), 3);
    assert!(matches!(&doc.blocks[0], Block::Paragraph(p) if p.text() == "Before"));
    assert!(matches!(&doc.blocks[1], Block::Table(_)));
    assert!(matches!(&doc.blocks[2], Block::Paragraph(p) if p.text() == "After"));
}
