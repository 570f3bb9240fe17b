//! Outline formatter for the document model
//!
//! A tree view of the blocks of a document, one line per node, meant for
//! eyeballing what a conversion produced:
//!
//! <prefix><connector> <icon> <label>   (label truncated to 30 characters)
//!
//! Example:
//!
//!   ⧉ Document (4 blocks)
//!   ├─ § h1 Title
//!   ├─ ¶ 2 runs
//!   │ ├─ ◦ Hello
//!   │ └─ 𝐁 world
//!   ├─ • List Bullet: item
//!   └─ ▦ 2 columns, 1 rows
//!     └─ ↵ a | b
//!
//! Icons
//!     Document: ⧉
//!     Heading: §
//!     Paragraph: ¶
//!     ListItem: •
//!     Table: ▦
//!     TableRow: ↵ (header row: ⊤)
//!     Image: ▣
//!     Caption: ”
//!     Runs: ◦ plain, 𝐁 bold, 𝐼 italic, 𝐁𝐼 both

use crate::error::FormatError;
use crate::format::{Format, SerializedDocument};
use crate::ir::document::{Block, Document, Run};

const LABEL_WIDTH: usize = 30;

#[derive(Debug, Clone, Copy, Default)]
pub struct OutlineFormat;

impl Format for OutlineFormat {
    fn name(&self) -> &str {
        "outline"
    }

    fn description(&self) -> &str {
        "Tree outline of the document model"
    }

    fn file_extensions(&self) -> &[&str] {
        &["outline"]
    }

    fn serialize(&self, doc: &Document) -> Result<SerializedDocument, FormatError> {
        Ok(SerializedDocument::Text(to_outline(doc)))
    }
}

/// Render the outline of a document.
pub fn to_outline(doc: &Document) -> String {
    let mut output = format!("⧉ Document ({} blocks)\n", doc.blocks.len());
    let count = doc.blocks.len();
    for (index, block) in doc.blocks.iter().enumerate() {
        write_block(&mut output, block, index == count - 1);
    }
    output
}

fn write_block(output: &mut String, block: &Block, is_last: bool) {
    let connector = if is_last { "└─" } else { "├─" };
    let child_prefix = if is_last { "  " } else { "│ " };

    let (icon, label, children) = match block {
        Block::Heading(heading) => ("§", format!("h{} {}", heading.level, heading.text), vec![]),
        Block::Paragraph(paragraph) => (
            "¶",
            format!("{} runs", paragraph.runs.len()),
            paragraph
                .runs
                .iter()
                .map(|run| (run_icon(run), run.text.clone()))
                .collect(),
        ),
        Block::ListItem(item) => ("•", format!("{}: {}", item.style, item.text), vec![]),
        Block::Table(table) => (
            "▦",
            format!("{} columns, {} rows", table.columns, table.rows.len()),
            table
                .rows
                .iter()
                .enumerate()
                .map(|(index, row)| {
                    let icon = if table.is_bold_row(index) { "⊤" } else { "↵" };
                    (icon, row.join(" | "))
                })
                .collect(),
        ),
        Block::Image(image) => {
            let name = image
                .source
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
            (
                "▣",
                format!("{name} {}x{} px", image.pixel_width, image.pixel_height),
                vec![],
            )
        }
        Block::Caption(caption) => ("”", caption.text.clone(), vec![]),
    };

    output.push_str(&format!("{connector} {icon} {}\n", truncate(&label)));

    let count = children.len();
    for (index, (icon, label)) in children.into_iter().enumerate() {
        let connector = if index == count - 1 { "└─" } else { "├─" };
        output.push_str(&format!(
            "{child_prefix}{connector} {icon} {}\n",
            truncate(&label)
        ));
    }
}

fn run_icon(run: &Run) -> &'static str {
    match (run.bold, run.italic) {
        (true, true) => "𝐁𝐼",
        (true, false) => "𝐁",
        (false, true) => "𝐼",
        (false, false) => "◦",
    }
}

/// Single-line label of at most `LABEL_WIDTH` characters.
fn truncate(label: &str) -> String {
    let flat = label.replace('\n', " ");
    if flat.chars().count() <= LABEL_WIDTH {
        flat
    } else {
        let mut short: String = flat.chars().take(LABEL_WIDTH - 1).collect();
        short.push('…');
        short
    }
}
