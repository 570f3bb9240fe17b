//! Output document model built by the assembler.
//!
//! A [`Document`] is an ordered sequence of [`Block`]s. Consumers (the
//! assembler itself and every serializer in [`crate::formats`]) match
//! exhaustively over the closed set of block kinds.

use serde::Serialize;
use std::path::PathBuf;

/// English Metric Units per inch, the length unit of DOCX drawings.
pub const EMU_PER_INCH: u32 = 914_400;

/// Display width used for embedded images unless configured otherwise.
pub const DEFAULT_IMAGE_WIDTH_INCHES: f64 = 6.0;

/// Converts inches to EMU, rounding to the nearest unit.
pub fn inches_to_emu(inches: f64) -> u32 {
    (inches * f64::from(EMU_PER_INCH)).round().max(0.0) as u32
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    pub fn extend(&mut self, blocks: impl IntoIterator<Item = Block>) {
        self.blocks.extend(blocks);
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Block {
    Heading(Heading),
    Paragraph(Paragraph),
    ListItem(ListItem),
    Table(Table),
    Image(ImageBlock),
    /// Caption of the image block immediately preceding it.
    Caption(Caption),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heading {
    /// 1 to 3.
    pub level: u8,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Paragraph {
    pub runs: Vec<Run>,
}

impl Paragraph {
    pub fn text(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }
}

/// A span of text with uniform character styling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Run {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
}

impl Run {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
            italic: false,
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            bold: true,
            ..Self::plain(text)
        }
    }

    pub fn italic(text: impl Into<String>) -> Self {
        Self {
            italic: true,
            ..Self::plain(text)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ListKind {
    Bulleted,
    Numbered,
}

impl ListKind {
    /// Paragraph style name for an item of this kind at `level`:
    /// `List Bullet`, `List Bullet 2`, `List Number 3`, ...
    pub fn style_name(self, level: usize) -> String {
        let base = match self {
            ListKind::Bulleted => "List Bullet",
            ListKind::Numbered => "List Number",
        };
        if level == 0 {
            base.to_string()
        } else {
            format!("{base} {}", level + 1)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItem {
    pub text: String,
    pub kind: ListKind,
    pub level: usize,
    pub style: String,
}

impl ListItem {
    pub fn new(text: impl Into<String>, kind: ListKind, level: usize) -> Self {
        Self {
            text: text.into(),
            kind,
            level,
            style: kind.style_name(level),
        }
    }
}

/// A grid of cell texts.
///
/// Rows never hold more than `columns` cells; a row may hold fewer, in which
/// case the trailing cells are absent and serializers render them empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    pub columns: usize,
    pub rows: Vec<Vec<String>>,
    /// The first row is a header row and is rendered bold.
    pub header_row: bool,
}

impl Table {
    pub fn is_bold_row(&self, index: usize) -> bool {
        self.header_row && index == 0
    }
}

/// An embedded picture, already decoded and re-encoded as PNG.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageBlock {
    /// Path the picture was read from.
    pub source: PathBuf,
    #[serde(skip)]
    pub png: Vec<u8>,
    pub pixel_width: u32,
    pub pixel_height: u32,
    /// Target display width in EMU.
    pub width_emu: u32,
}

impl ImageBlock {
    /// Display height in EMU, keeping the picture's aspect ratio.
    pub fn height_emu(&self) -> u32 {
        if self.pixel_width == 0 {
            return 0;
        }
        let ratio = f64::from(self.pixel_height) / f64::from(self.pixel_width);
        (f64::from(self.width_emu) * ratio).round() as u32
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Caption {
    pub text: String,
}
