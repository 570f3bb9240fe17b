use super::{convert_default, write_png};
use std::fs;
use tempfile::TempDir;
use tp_babel::ir::document::{Block, Caption, Run};
use tp_babel::{convert, ConvertOptions};

fn convert_in(dir: &TempDir, markup: &str) -> Vec<Block> {
    let options = ConvertOptions::new().with_base_dir(dir.path());
    convert(markup, &options).unwrap().blocks
}

#[test]
fn test_missing_image_produces_no_blocks() {
    let doc = convert_default("![Missing](missing.png \"Figure 1\")\n");
    assert!(doc.blocks.is_empty());
}

#[test]
fn test_image_resolved_through_base_dir_gets_caption() {
    let dir = TempDir::new().unwrap();
    write_png(dir.path(), "pic.png", 400, 300);

    let blocks = convert_in(&dir, "![Alt text](pic.png \"Figure 1\")\n");
    assert_eq!(blocks.len(), 2);
    match &blocks[0] {
        Block::Image(image) => {
            assert_eq!(image.source, dir.path().join("pic.png"));
            assert_eq!((image.pixel_width, image.pixel_height), (400, 300));
            assert_eq!(image.width_emu, 5_486_400);
            assert_eq!(image.height_emu(), 4_114_800);
        }
        other => panic!("expected image, got {other:?}"),
    }
    assert_eq!(
        blocks[1],
        Block::Caption(Caption {
            text: "Figure 1".into()
        })
    );
}

#[test]
fn test_alt_text_is_the_fallback_caption() {
    let dir = TempDir::new().unwrap();
    write_png(dir.path(), "pic.png", 8, 8);

    let blocks = convert_in(&dir, "![Alt text](pic.png)\n");
    assert_eq!(
        blocks[1],
        Block::Caption(Caption {
            text: "Alt text".into()
        })
    );
}

#[test]
fn test_image_without_title_or_alt_has_no_caption() {
    let dir = TempDir::new().unwrap();
    write_png(dir.path(), "pic.png", 8, 8);

    let blocks = convert_in(&dir, "![](pic.png)\n");
    assert_eq!(blocks.len(), 1);
    assert!(matches!(blocks[0], Block::Image(_)));
}

#[test]
fn test_absolute_source_needs_no_base_dir() {
    let dir = TempDir::new().unwrap();
    let path = write_png(dir.path(), "pic.png", 8, 8);

    let doc = convert_default(&format!("![](<{}>)\n", path.display()));
    assert!(matches!(&doc.blocks[0], Block::Image(image) if image.source == path));
}

#[test]
fn test_undecodable_image_is_skipped_and_conversion_continues() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("broken.png"), b"not an image").unwrap();

    let blocks = convert_in(&dir, "![Broken](broken.png \"Caption\")\n\nAfter\n");
    assert_eq!(blocks.len(), 1);
    assert!(matches!(&blocks[0], Block::Paragraph(p) if p.text() == "After"));
}

#[test]
fn test_image_inside_text_yields_no_run() {
    let dir = TempDir::new().unwrap();
    write_png(dir.path(), "pic.png", 8, 8);

    let blocks = convert_in(&dir, "See ![x](pic.png) here\n");
    assert_eq!(
        blocks,
        vec![Block::Paragraph(tp_babel::ir::document::Paragraph {
            runs: vec![Run::plain("See "), Run::plain(" here")]
        })]
    );
}

#[test]
fn test_configured_width_scales_height() {
    let dir = TempDir::new().unwrap();
    write_png(dir.path(), "wide.png", 200, 100);

    let options = ConvertOptions::new()
        .with_base_dir(dir.path())
        .with_image_width_inches(3.0);
    let doc = convert("![](wide.png)\n", &options).unwrap();
    match &doc.blocks[0] {
        Block::Image(image) => {
            assert_eq!(image.width_emu, 2_743_200);
            assert_eq!(image.height_emu(), 1_371_600);
        }
        other => panic!("expected image, got {other:?}"),
    }
}
