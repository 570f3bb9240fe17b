//! Table grid building.

use crate::ir::document::Table;
use crate::ir::element::Element;

/// Build a grid from a table node.
///
/// Rows without cells are dropped. The first surviving row fixes the column
/// count and later rows keep at most that many cells. The table has a header
/// row when the first row of the source table holds a header cell.
///
/// Returns `None` when no row has any cell.
pub fn build_table(table: &Element) -> Option<Table> {
    let source_rows: Vec<&Element> = table
        .children()
        .iter()
        .filter(|child| matches!(child, Element::TableRow(_)))
        .collect();

    let header_row = source_rows.first().is_some_and(|row| {
        row.children()
            .iter()
            .any(|cell| matches!(cell, Element::HeaderCell(_)))
    });

    let mut rows: Vec<Vec<String>> = source_rows
        .iter()
        .map(|row| row_cells(row))
        .filter(|cells| !cells.is_empty())
        .collect();

    let columns = rows.first()?.len();
    for row in &mut rows {
        row.truncate(columns);
    }

    Some(Table {
        columns,
        rows,
        header_row,
    })
}

fn row_cells(row: &Element) -> Vec<String> {
    row.children()
        .iter()
        .filter(|cell| cell.is_table_cell())
        .map(|cell| cell.text_content().trim().to_string())
        .collect()
}
