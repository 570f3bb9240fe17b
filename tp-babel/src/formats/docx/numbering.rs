//! List numbering definitions.
//!
//! Every run of consecutive list items gets fresh numbering instances, so a
//! numbered list interrupted by other content starts again at 1.

use super::styles::MAX_LIST_LEVEL;
use crate::ir::document::ListKind;
use docx_rs::*;

#[derive(Debug, Clone)]
pub struct DocxNumbering {
    next_id: usize,
    bulleted: Option<usize>,
    numbered: Option<usize>,
}

impl DocxNumbering {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            bulleted: None,
            numbered: None,
        }
    }

    /// Forget the numbering of the current list run.
    pub fn end_list(&mut self) {
        self.bulleted = None;
        self.numbered = None;
    }

    /// Numbering id for `kind` in the current list run, defining it in
    /// `docx` on first use.
    pub fn numbering_for(&mut self, docx: Docx, kind: ListKind) -> (Docx, usize) {
        let current = match kind {
            ListKind::Bulleted => self.bulleted,
            ListKind::Numbered => self.numbered,
        };
        if let Some(id) = current {
            return (docx, id);
        }

        let id = self.next_id;
        self.next_id += 1;
        match kind {
            ListKind::Bulleted => self.bulleted = Some(id),
            ListKind::Numbered => self.numbered = Some(id),
        }

        let docx = docx
            .add_abstract_numbering(abstract_numbering(id, kind))
            .add_numbering(Numbering::new(id, id));
        (docx, id)
    }
}

impl Default for DocxNumbering {
    fn default() -> Self {
        Self::new()
    }
}

fn abstract_numbering(id: usize, kind: ListKind) -> AbstractNumbering {
    (0..=MAX_LIST_LEVEL).fold(AbstractNumbering::new(id), |numbering, level| {
        let (format, text) = match kind {
            ListKind::Bulleted => ("bullet", bullet_glyph(level).to_string()),
            ListKind::Numbered => ("decimal", format!("%{}.", level + 1)),
        };
        let hanging = match kind {
            ListKind::Bulleted => 360,
            ListKind::Numbered => 420,
        };
        let mut definition = Level::new(
            level,
            Start::new(1),
            NumberFormat::new(format),
            LevelText::new(&text),
            LevelJc::new("left"),
        )
        .indent(
            Some(720 * (level as i32 + 1)),
            Some(SpecialIndentType::Hanging(hanging)),
            None,
            None,
        );
        if level > 0 {
            definition = definition.level_restart(0_u32);
        }
        numbering.add_level(definition)
    })
}

fn bullet_glyph(level: usize) -> &'static str {
    match level % 3 {
        0 => "•",
        1 => "○",
        _ => "▪",
    }
}
