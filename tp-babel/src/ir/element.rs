//! Semantic element tree produced by the markup normalizer.
//!
//! The tree is a strict tree: every node is owned by exactly one parent and is
//! never mutated after [`crate::normalize`] returns it.

use std::collections::BTreeMap;
use std::fmt;

/// Attribute map carried by image nodes (`src`, `alt`, `title`, ...).
pub type Attributes = BTreeMap<String, String>;

/// Root of a normalized document: the ordered top-level block nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementTree {
    pub children: Vec<Element>,
}

/// A node of the semantic element tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    /// Heading of level 1 to 3.
    Heading { level: u8, children: Vec<Element> },
    Paragraph(Vec<Element>),
    UnorderedList(Vec<Element>),
    OrderedList(Vec<Element>),
    ListItem(Vec<Element>),
    Table(Vec<Element>),
    TableRow(Vec<Element>),
    HeaderCell(Vec<Element>),
    DataCell(Vec<Element>),
    Bold(Vec<Element>),
    Italic(Vec<Element>),
    Image(Attributes),
    Text(String),
    /// Any markup construct without a dedicated kind. The original tag is kept
    /// so that consumers can still reach its text.
    Other { tag: String, children: Vec<Element> },
}

/// The kind tag of an [`Element`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Heading1,
    Heading2,
    Heading3,
    Paragraph,
    UnorderedList,
    OrderedList,
    ListItem,
    Table,
    TableRow,
    HeaderCell,
    DataCell,
    Bold,
    Italic,
    Image,
    Text,
    Other,
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ElementKind::Heading1 => "heading-1",
            ElementKind::Heading2 => "heading-2",
            ElementKind::Heading3 => "heading-3",
            ElementKind::Paragraph => "paragraph",
            ElementKind::UnorderedList => "unordered-list",
            ElementKind::OrderedList => "ordered-list",
            ElementKind::ListItem => "list-item",
            ElementKind::Table => "table",
            ElementKind::TableRow => "table-row",
            ElementKind::HeaderCell => "table-cell-header",
            ElementKind::DataCell => "table-cell-data",
            ElementKind::Bold => "inline-bold",
            ElementKind::Italic => "inline-italic",
            ElementKind::Image => "inline-image",
            ElementKind::Text => "plain-text",
            ElementKind::Other => "other",
        };
        f.write_str(name)
    }
}

impl Element {
    pub fn kind(&self) -> ElementKind {
        match self {
            Element::Heading { level: 1, .. } => ElementKind::Heading1,
            Element::Heading { level: 2, .. } => ElementKind::Heading2,
            Element::Heading { .. } => ElementKind::Heading3,
            Element::Paragraph(_) => ElementKind::Paragraph,
            Element::UnorderedList(_) => ElementKind::UnorderedList,
            Element::OrderedList(_) => ElementKind::OrderedList,
            Element::ListItem(_) => ElementKind::ListItem,
            Element::Table(_) => ElementKind::Table,
            Element::TableRow(_) => ElementKind::TableRow,
            Element::HeaderCell(_) => ElementKind::HeaderCell,
            Element::DataCell(_) => ElementKind::DataCell,
            Element::Bold(_) => ElementKind::Bold,
            Element::Italic(_) => ElementKind::Italic,
            Element::Image(_) => ElementKind::Image,
            Element::Text(_) => ElementKind::Text,
            Element::Other { .. } => ElementKind::Other,
        }
    }

    /// Child nodes in document order. Leaf kinds have none.
    pub fn children(&self) -> &[Element] {
        match self {
            Element::Heading { children, .. } | Element::Other { children, .. } => children,
            Element::Paragraph(children)
            | Element::UnorderedList(children)
            | Element::OrderedList(children)
            | Element::ListItem(children)
            | Element::Table(children)
            | Element::TableRow(children)
            | Element::HeaderCell(children)
            | Element::DataCell(children)
            | Element::Bold(children)
            | Element::Italic(children) => children,
            Element::Image(_) | Element::Text(_) => &[],
        }
    }

    /// Attributes of an image node; empty for every other kind.
    pub fn attributes(&self) -> Option<&Attributes> {
        match self {
            Element::Image(attrs) => Some(attrs),
            _ => None,
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Element::UnorderedList(_) | Element::OrderedList(_))
    }

    pub fn is_table_cell(&self) -> bool {
        matches!(self, Element::HeaderCell(_) | Element::DataCell(_))
    }

    /// Text node made only of whitespace.
    pub fn is_blank_text(&self) -> bool {
        matches!(self, Element::Text(text) if text.trim().is_empty())
    }

    /// Concatenated text of this node and all of its descendants.
    ///
    /// Image nodes contribute nothing.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Element::Text(text) => out.push_str(text),
            Element::Image(_) => {}
            other => {
                for child in other.children() {
                    child.collect_text(out);
                }
            }
        }
    }
}
