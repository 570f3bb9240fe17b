use crate::convert::write_png;
use std::io::{Cursor, Read};
use tempfile::TempDir;
use tp_babel::format::Format;
use tp_babel::formats::DocxFormat;
use tp_babel::{convert, ConvertOptions, Document};
use zip::ZipArchive;

fn document_xml(doc: &Document) -> String {
    let bytes = DocxFormat.serialize(doc).unwrap().into_bytes();
    let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .unwrap()
        .read_to_string(&mut xml)
        .unwrap();
    xml
}

fn xml_for(markup: &str) -> String {
    document_xml(&convert(markup, &ConvertOptions::default()).unwrap())
}

fn is_bold(run_xml: &str) -> bool {
    run_xml.contains("<w:b ") || run_xml.contains("<w:b/>")
}

/// Runs of a stretch of document markup, each with its properties.
fn runs(xml: &str) -> Vec<&str> {
    let mut pieces: Vec<&str> = xml.split("</w:r>").collect();
    pieces.pop();
    pieces
}

#[test]
fn test_newlines_become_line_breaks() {
    let xml = xml_for("first line\nsecond line\n\n- item wraps\n  onto next\n\na  \nb\n");

    assert!(xml.contains(">first line</w:t>"));
    assert!(xml.contains(">second line</w:t>"));
    assert!(xml.contains(">item wraps</w:t>"));
    assert!(xml.contains(">onto next</w:t>"));
    assert!(!xml.contains("first linesecond line"));
    assert!(!xml.contains("item wrapsonto next"));

    // soft break, wrapped list item, hard break
    assert_eq!(xml.matches("<w:br ").count(), 3);
    assert!(xml.contains("w:type=\"textWrapping\""));
}

#[test]
fn test_header_row_runs_are_bold() {
    let xml = xml_for("| H1 | H2 |\n|----|----|\n| a | b |\n| c | d |\n");
    let rows: Vec<&str> = xml.split("</w:tr>").collect();
    assert_eq!(rows.len(), 4);

    let header = runs(rows[0]);
    assert_eq!(header.len(), 2);
    assert!(header.iter().all(|run| is_bold(run)));

    for row in &rows[1..3] {
        let cells = runs(row);
        assert_eq!(cells.len(), 2);
        assert!(cells.iter().all(|run| !is_bold(run)));
    }
}

#[test]
fn test_headings_and_lists_reference_their_styles() {
    let xml = xml_for("# One\n\n## Two\n\n### Three\n\n- a\n  - b\n    1. c\n");

    for style in ["Heading1", "Heading2", "Heading3", "ListBullet", "ListBullet2", "ListNumber3"] {
        assert!(
            xml.contains(&format!("<w:pStyle w:val=\"{style}\"")),
            "missing paragraph style {style}"
        );
    }
    assert!(xml.contains("<w:ilvl w:val=\"1\""));
    assert!(xml.contains("<w:ilvl w:val=\"2\""));
    assert!(xml.contains("<w:numId w:val="));
}

#[test]
fn test_images_are_drawn_with_their_caption() {
    let dir = TempDir::new().unwrap();
    write_png(dir.path(), "diagram.png", 64, 48);

    let markup = "![Diagram](diagram.png \"Figure 1\")\n\n![Missing](missing.png \"Lost\")\n";
    let options = ConvertOptions::new().with_base_dir(dir.path());
    let xml = document_xml(&convert(markup, &options).unwrap());

    assert_eq!(xml.matches("<w:drawing>").count(), 1);
    assert!(xml.contains("<w:pStyle w:val=\"Caption\""));
    assert!(xml.contains(">Figure 1</w:t>"));
    assert!(!xml.contains("Lost"));
}
