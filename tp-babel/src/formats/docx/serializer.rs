//! Document → DOCX package.

use super::numbering::DocxNumbering;
use super::styles::{self, MAX_LIST_LEVEL};
use crate::error::FormatError;
use crate::ir::document::{self as doc, Block, Document};
use docx_rs::*;
use std::io::Cursor;

pub struct DocxWriter {
    numbering: DocxNumbering,
}

impl DocxWriter {
    pub fn new() -> Self {
        Self {
            numbering: DocxNumbering::new(),
        }
    }

    /// Build and pack the document.
    pub fn write(&mut self, document: &Document) -> Result<Vec<u8>, FormatError> {
        let mut docx = styles::add_styles(Docx::new());

        for block in &document.blocks {
            if !matches!(block, Block::ListItem(_)) {
                self.numbering.end_list();
            }
            docx = self.push_block(docx, block);
        }

        let mut buffer = Vec::new();
        docx.build()
            .pack(&mut Cursor::new(&mut buffer))
            .map_err(|e| FormatError::SerializationError(format!("Failed to pack DOCX: {e}")))?;
        Ok(buffer)
    }

    fn push_block(&mut self, docx: Docx, block: &Block) -> Docx {
        match block {
            Block::Heading(heading) => docx.add_paragraph(
                Paragraph::new()
                    .style(&styles::heading_style_id(heading.level))
                    .add_run(text_lines(Run::new(), &heading.text)),
            ),
            Block::Paragraph(paragraph) => docx.add_paragraph(
                paragraph
                    .runs
                    .iter()
                    .fold(Paragraph::new(), |p, run| p.add_run(text_run(run))),
            ),
            Block::ListItem(item) => {
                let (docx, id) = self.numbering.numbering_for(docx, item.kind);
                let level = item.level.min(MAX_LIST_LEVEL);
                docx.add_paragraph(
                    Paragraph::new()
                        .style(&styles::style_id(&item.kind.style_name(level)))
                        .numbering(NumberingId::new(id), IndentLevel::new(level))
                        .add_run(text_lines(Run::new(), &item.text)),
                )
            }
            Block::Table(table) => docx.add_table(build_table(table)),
            Block::Image(image) => {
                let pic = Pic::new(&image.png).size(image.width_emu, image.height_emu());
                docx.add_paragraph(
                    Paragraph::new()
                        .align(AlignmentType::Center)
                        .add_run(Run::new().add_image(pic)),
                )
            }
            Block::Caption(caption) => docx.add_paragraph(
                Paragraph::new()
                    .style(styles::CAPTION)
                    .add_run(text_lines(Run::new(), &caption.text)),
            ),
        }
    }
}

impl Default for DocxWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Append `text` to `run`, turning each `\n` into a line break. Word drops
/// newlines inside `w:t`.
fn text_lines(run: Run, text: &str) -> Run {
    text.split('\n')
        .enumerate()
        .fold(run, |run, (index, line)| {
            let run = if index > 0 {
                run.add_break(BreakType::TextWrapping)
            } else {
                run
            };
            if line.is_empty() {
                run
            } else {
                run.add_text(line)
            }
        })
}

fn text_run(run: &doc::Run) -> Run {
    let mut out = text_lines(Run::new(), &run.text);
    if run.bold {
        out = out.bold();
    }
    if run.italic {
        out = out.italic();
    }
    out
}

/// Grid with `columns` cells per row; absent trailing cells are left empty.
fn build_table(table: &doc::Table) -> Table {
    let rows = table
        .rows
        .iter()
        .enumerate()
        .map(|(index, cells)| {
            let bold = table.is_bold_row(index);
            let cells = (0..table.columns)
                .map(|column| {
                    let text = cells.get(column).map(String::as_str).unwrap_or_default();
                    let mut run = text_lines(Run::new(), text);
                    if bold {
                        run = run.bold();
                    }
                    // Every cell needs a paragraph, even an empty one.
                    TableCell::new().add_paragraph(Paragraph::new().add_run(run))
                })
                .collect();
            TableRow::new(cells)
        })
        .collect();
    Table::new(rows).style(styles::TABLE_GRID)
}
