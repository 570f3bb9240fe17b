//! HTML side of the normalizer: html5ever DOM → semantic element tree.

use crate::error::ConvertError;
use crate::ir::element::{Attributes, Element, ElementTree};
use html5ever::tendril::TendrilSink;
use html5ever::{parse_document, Attribute, ParseOpts};
use markup5ever_rcdom::{Handle, NodeData, RcDom};
use std::cell::RefCell;

/// Parse an HTML fragment and convert the content of its `<body>`.
///
/// Elements nested deeper than `max_depth` below the body are rejected.
pub(crate) fn html_to_tree(html: &str, max_depth: usize) -> Result<ElementTree, ConvertError> {
    let dom = parse_document(RcDom::default(), ParseOpts::default()).one(html);

    let children = match find_body(&dom.document) {
        Some(body) => convert_children(&body, true, 1, max_depth)?,
        None => Vec::new(),
    };

    Ok(ElementTree { children })
}

fn find_body(document: &Handle) -> Option<Handle> {
    let html = document
        .children
        .borrow()
        .iter()
        .find(|child| element_name(child) == Some("html"))
        .cloned()?;
    let body = html
        .children
        .borrow()
        .iter()
        .find(|child| element_name(child) == Some("body"))
        .cloned();
    body
}

fn element_name(handle: &Handle) -> Option<&str> {
    match &handle.data {
        NodeData::Element { name, .. } => Some(&*name.local),
        _ => None,
    }
}

fn is_break(handle: &Handle) -> bool {
    element_name(handle) == Some("br")
}

/// Containers whose whitespace-only text carries no meaning.
fn is_structural(tag: &str) -> bool {
    matches!(
        tag,
        "body" | "ul" | "ol" | "table" | "thead" | "tbody" | "tfoot" | "tr"
    )
}

fn convert_children(
    parent: &Handle,
    structural: bool,
    depth: usize,
    max_depth: usize,
) -> Result<Vec<Element>, ConvertError> {
    if depth > max_depth {
        return Err(ConvertError::NestingTooDeep { limit: max_depth });
    }

    let mut elements = Vec::new();
    let mut after_break = false;
    for child in parent.children.borrow().iter() {
        let Some(mut element) = convert_node(child, depth, max_depth)? else {
            continue;
        };
        // The source newline after `<br />` is already carried by the break.
        if after_break {
            if let Element::Text(text) = &mut element {
                if let Some(rest) = text.strip_prefix('\n') {
                    *text = rest.to_string();
                }
                if text.is_empty() {
                    continue;
                }
            }
        }
        after_break = is_break(child);
        if structural && element.is_blank_text() {
            continue;
        }
        elements.push(element);
    }
    Ok(elements)
}

fn convert_node(
    handle: &Handle,
    depth: usize,
    max_depth: usize,
) -> Result<Option<Element>, ConvertError> {
    let (name, attrs) = match &handle.data {
        NodeData::Text { contents } => {
            return Ok(Some(Element::Text(contents.borrow().to_string())));
        }
        NodeData::Element { name, attrs, .. } => (name, attrs),
        // Comments, doctypes and processing instructions carry no content.
        _ => return Ok(None),
    };

    let tag: &str = &name.local;
    let children =
        |handle: &Handle| convert_children(handle, is_structural(tag), depth + 1, max_depth);

    let element = match tag {
        "h1" => Element::Heading {
            level: 1,
            children: children(handle)?,
        },
        "h2" => Element::Heading {
            level: 2,
            children: children(handle)?,
        },
        "h3" => Element::Heading {
            level: 3,
            children: children(handle)?,
        },
        "p" => Element::Paragraph(children(handle)?),
        "ul" => Element::UnorderedList(children(handle)?),
        "ol" => Element::OrderedList(children(handle)?),
        "li" => Element::ListItem(children(handle)?),
        "table" => Element::Table(flatten_row_groups(children(handle)?)),
        "tr" => Element::TableRow(children(handle)?),
        "th" => Element::HeaderCell(children(handle)?),
        "td" => Element::DataCell(children(handle)?),
        "strong" | "b" => Element::Bold(children(handle)?),
        "em" | "i" => Element::Italic(children(handle)?),
        "img" => Element::Image(collect_attributes(attrs)),
        "br" => Element::Text("\n".to_string()),
        other => Element::Other {
            tag: other.to_string(),
            children: children(handle)?,
        },
    };

    Ok(Some(element))
}

/// `thead`, `tbody` and `tfoot` are transparent: their rows become direct
/// children of the table.
fn flatten_row_groups(children: Vec<Element>) -> Vec<Element> {
    let mut rows = Vec::with_capacity(children.len());
    for child in children {
        match child {
            Element::Other { tag, children }
                if matches!(tag.as_str(), "thead" | "tbody" | "tfoot") =>
            {
                rows.extend(children);
            }
            other => rows.push(other),
        }
    }
    rows
}

fn collect_attributes(attrs: &RefCell<Vec<Attribute>>) -> Attributes {
    attrs
        .borrow()
        .iter()
        .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
        .collect()
}
