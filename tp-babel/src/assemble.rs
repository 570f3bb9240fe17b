//! Document assembly: the conversion entry point.
//!
//! [`convert`] normalizes the markup once and folds the top-level nodes of the
//! element tree, in order, into a [`Document`]:
//!
//! | node                         | builder                         |
//! |------------------------------|---------------------------------|
//! | heading                      | heading block                   |
//! | unordered / ordered list     | [`common::lists`] at level 0    |
//! | table                        | [`common::tables`]              |
//! | paragraph with a lone image  | [`common::images`]              |
//! | any other paragraph          | [`common::inlines`]             |
//!
//! Anything else is skipped.

use crate::common::{images, inlines, lists, tables};
use crate::error::{ConvertError, ImageError};
use crate::ir::document::{
    inches_to_emu, Block, Document, Heading, ListKind, Paragraph, DEFAULT_IMAGE_WIDTH_INCHES,
};
use crate::ir::element::{Attributes, Element};
use crate::normalize::normalize;
use std::path::{Path, PathBuf};

/// Nesting depth accepted by default.
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 128;

/// Options for a single conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Directory relative image sources are resolved against when they do not
    /// resolve as given.
    pub base_dir: Option<PathBuf>,
    /// Display width of embedded images.
    pub image_width_emu: u32,
    pub max_nesting_depth: usize,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            base_dir: None,
            image_width_emu: inches_to_emu(DEFAULT_IMAGE_WIDTH_INCHES),
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
        }
    }
}

impl ConvertOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(base_dir.into());
        self
    }

    pub fn with_image_width_inches(mut self, inches: f64) -> Self {
        self.image_width_emu = inches_to_emu(inches);
        self
    }

    pub fn with_max_nesting_depth(mut self, depth: usize) -> Self {
        self.max_nesting_depth = depth;
        self
    }
}

/// Convert markup into a document.
///
/// Malformed markup, missing images and undecodable images never fail the
/// conversion. The only error is nesting deeper than
/// [`ConvertOptions::max_nesting_depth`].
pub fn convert(markup: &str, options: &ConvertOptions) -> Result<Document, ConvertError> {
    let tree = normalize(markup, options.max_nesting_depth)?;
    let assembler = Assembler {
        base_dir: options.base_dir.as_deref(),
        image_width_emu: options.image_width_emu,
    };

    let mut document = Document::new();
    for node in &tree.children {
        assembler.push_node(node, &mut document);
    }
    Ok(document)
}

struct Assembler<'a> {
    base_dir: Option<&'a Path>,
    image_width_emu: u32,
}

impl Assembler<'_> {
    fn push_node(&self, node: &Element, document: &mut Document) {
        match node {
            Element::Heading { level, .. } => document.push(Block::Heading(Heading {
                level: *level,
                text: node.text_content().trim().to_string(),
            })),
            Element::UnorderedList(_) => {
                document.extend(lists::flatten_list(node, ListKind::Bulleted, 0))
            }
            Element::OrderedList(_) => {
                document.extend(lists::flatten_list(node, ListKind::Numbered, 0))
            }
            Element::Table(_) => match tables::build_table(node) {
                Some(table) => document.push(Block::Table(table)),
                None => log::debug!("skipping table without cells"),
            },
            Element::Paragraph(children) => match lone_image(children) {
                Some(attrs) => document.extend(self.image_blocks(attrs)),
                None => document.push(Block::Paragraph(Paragraph {
                    runs: inlines::build_runs(node),
                })),
            },
            other => log::trace!("skipping top-level {} node", other.kind()),
        }
    }

    /// Image and caption blocks for an image node, or nothing when the image
    /// cannot be used.
    fn image_blocks(&self, attrs: &Attributes) -> Vec<Block> {
        match images::resolve_image(attrs, self.base_dir, self.image_width_emu) {
            Ok(embedded) => embedded.into_blocks(),
            Err(err @ ImageError::NotFound(_)) => {
                log::debug!("skipping image: {err}");
                Vec::new()
            }
            Err(err) => {
                log::warn!("skipping image: {err}");
                Vec::new()
            }
        }
    }
}

/// The attributes of a paragraph's image when it is the paragraph's only
/// non-blank child.
fn lone_image(children: &[Element]) -> Option<&Attributes> {
    let mut meaningful = children.iter().filter(|child| !child.is_blank_text());
    match (meaningful.next(), meaningful.next()) {
        (Some(Element::Image(attrs)), None) => Some(attrs),
        _ => None,
    }
}
