//! DOCX format implementation
//!
//! Serializes a [`Document`] into a Word package with the `docx-rs` crate.
//!
//! # Block Mapping
//!
//! | Block      | DOCX                                                             |
//! |------------|------------------------------------------------------------------|
//! | Heading    | paragraph styled `Heading1`..`Heading3`                          |
//! | Paragraph  | paragraph with one run per document run (bold / italic)          |
//! | ListItem   | paragraph styled `ListBullet`, `ListNumber2`, ... with numbering |
//! | Table      | `TableGrid` table, short rows padded, header row in bold         |
//! | Image      | centred inline picture, sized in EMU                             |
//! | Caption    | paragraph styled `Caption`                                       |
//!
//! Consecutive list items share numbering; any other block in between starts
//! a new list.

mod numbering;
mod serializer;
mod styles;

pub use serializer::DocxWriter;

use crate::error::FormatError;
use crate::format::{Format, SerializedDocument};
use crate::ir::document::Document;

/// Format implementation for DOCX packages
#[derive(Debug, Clone, Copy, Default)]
pub struct DocxFormat;

impl Format for DocxFormat {
    fn name(&self) -> &str {
        "docx"
    }

    fn description(&self) -> &str {
        "Office Open XML word processing document"
    }

    fn file_extensions(&self) -> &[&str] {
        &["docx"]
    }

    fn is_binary(&self) -> bool {
        true
    }

    fn serialize(&self, doc: &Document) -> Result<SerializedDocument, FormatError> {
        DocxWriter::new().write(doc).map(SerializedDocument::Binary)
    }
}
