use crate::convert::write_png;
use tempfile::TempDir;
use tp_babel::format::Format;
use tp_babel::formats::DocxFormat;
use tp_babel::ir::document::{Block, Document, ListItem, ListKind, Table};
use tp_babel::{convert, ConvertOptions, FormatRegistry, SerializedDocument};

const KITCHENSINK: &str = "\
# Report

Intro with **bold** and *italic* text.

## Items

- first
  - nested
    1. numbered

|| = Name = || = Value = ||
|| a || 1 ||
|| b ||

![Diagram](diagram.png \"Figure 1\")

![Missing](missing.png \"Lost\")

### End
";

fn is_zip(bytes: &[u8]) -> bool {
    bytes.starts_with(b"PK\x03\x04")
}

#[test]
fn test_kitchensink_serializes_to_a_package() {
    let dir = TempDir::new().unwrap();
    write_png(dir.path(), "diagram.png", 64, 48);

    let options = ConvertOptions::new().with_base_dir(dir.path());
    let doc = convert(KITCHENSINK, &options).unwrap();
    assert!(doc.blocks.iter().any(|block| matches!(block, Block::Image(_))));

    match DocxFormat.serialize(&doc).unwrap() {
        SerializedDocument::Binary(bytes) => assert!(is_zip(&bytes)),
        SerializedDocument::Text(_) => panic!("docx must be binary"),
    }
}

#[test]
fn test_empty_document_is_still_a_package() {
    let bytes = DocxFormat.serialize(&Document::new()).unwrap().into_bytes();
    assert!(is_zip(&bytes));
}

#[test]
fn test_deep_list_levels_and_ragged_tables_serialize() {
    let mut doc = Document::new();
    for level in 0..12 {
        doc.push(Block::ListItem(ListItem::new(
            format!("level {level}"),
            ListKind::Numbered,
            level,
        )));
    }
    doc.push(Block::Table(Table {
        columns: 3,
        rows: vec![vec!["a".into()], vec![]],
        header_row: true,
    }));

    let bytes = DocxFormat.serialize(&doc).unwrap().into_bytes();
    assert!(is_zip(&bytes));
}

#[test]
fn test_registry_picks_docx_from_the_file_name() {
    let registry = FormatRegistry::default();
    let name = registry.detect_format_from_filename("out/report.docx").unwrap();
    let output = registry.serialize(&Document::new(), &name).unwrap();
    assert!(output.is_binary());
}
