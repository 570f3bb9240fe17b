//! Image resolution and embedding.
//!
//! Resolution never fails the conversion. [`resolve_image`] reports why an
//! image could not be used and the assembler logs the reason and moves on.

use crate::error::ImageError;
use crate::ir::document::{Block, Caption, ImageBlock};
use crate::ir::element::Attributes;
use image::ImageFormat;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use url::Url;

/// An image that was found and decoded, with its caption if it has one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbeddedImage {
    pub image: ImageBlock,
    pub caption: Option<Caption>,
}

impl EmbeddedImage {
    /// The image block followed by its caption block, if any.
    pub fn into_blocks(self) -> Vec<Block> {
        let mut blocks = vec![Block::Image(self.image)];
        blocks.extend(self.caption.map(Block::Caption));
        blocks
    }
}

/// Caption of an image: its `title` if non-empty, else its `alt` if
/// non-empty, else none. Values are taken as written.
pub fn caption_text(attrs: &Attributes) -> Option<String> {
    ["title", "alt"]
        .iter()
        .filter_map(|key| attrs.get(*key))
        .find(|value| !value.is_empty())
        .cloned()
}

/// Find the file an image `src` refers to.
///
/// The source is tried as given first, then relative to `base_dir`. `file:`
/// URLs are turned into paths before either attempt.
pub fn resolve_path(src: &str, base_dir: Option<&Path>) -> Option<PathBuf> {
    if src.is_empty() {
        return None;
    }

    let candidate = match Url::parse(src) {
        Ok(url) if url.scheme() == "file" => url.to_file_path().ok()?,
        _ => PathBuf::from(src),
    };
    if candidate.exists() {
        return Some(candidate);
    }

    let joined = base_dir?.join(&candidate);
    joined.exists().then_some(joined)
}

/// Resolve, read and decode the image an image node points at.
///
/// The picture is re-encoded as PNG and given a display width of `width_emu`.
pub fn resolve_image(
    attrs: &Attributes,
    base_dir: Option<&Path>,
    width_emu: u32,
) -> Result<EmbeddedImage, ImageError> {
    let src = attrs.get("src").map(String::as_str).unwrap_or_default();
    let path =
        resolve_path(src, base_dir).ok_or_else(|| ImageError::NotFound(src.to_string()))?;

    let bytes = fs::read(&path).map_err(|source| ImageError::Read {
        path: path.clone(),
        source,
    })?;
    let decoded = image::load_from_memory(&bytes).map_err(|source| ImageError::Decode {
        path: path.clone(),
        source,
    })?;

    let mut png = Vec::new();
    decoded
        .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .map_err(|source| ImageError::Encode {
            path: path.clone(),
            source,
        })?;

    Ok(EmbeddedImage {
        image: ImageBlock {
            source: path,
            png,
            pixel_width: decoded.width(),
            pixel_height: decoded.height(),
            width_emu,
        },
        caption: caption_text(attrs).map(|text| Caption { text }),
    })
}
