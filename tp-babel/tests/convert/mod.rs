//! End to end conversion tests
//!
//! Markup in, document model out. Image fixtures are generated into temporary
//! directories with the `image` crate.

mod images;
mod lists;
mod paragraphs;
mod properties;
mod tables;

use std::path::{Path, PathBuf};
use tp_babel::ir::document::{Block, ListKind};
use tp_babel::{convert, ConvertOptions, Document};

pub fn convert_default(markup: &str) -> Document {
    convert(markup, &ConvertOptions::default()).expect("conversion should succeed")
}

pub fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    image::RgbImage::new(width, height)
        .save(&path)
        .expect("write png fixture");
    path
}

/// `(text, kind, level)` of every list item block.
pub fn list_items(doc: &Document) -> Vec<(String, ListKind, usize)> {
    doc.blocks
        .iter()
        .filter_map(|block| match block {
            Block::ListItem(item) => Some((item.text.clone(), item.kind, item.level)),
            _ => None,
        })
        .collect()
}
