//! Inline run building.

use crate::ir::document::Run;
use crate::ir::element::Element;

/// Split the inline children of a paragraph-like node into styled runs.
///
/// Each inline child yields at most one run, in document order, and adjacent
/// runs with the same style are not merged. Images yield nothing here; a
/// paragraph made of a single image is handled by the image resolver.
pub fn build_runs(node: &Element) -> Vec<Run> {
    node.children().iter().filter_map(inline_run).collect()
}

fn inline_run(inline: &Element) -> Option<Run> {
    match inline {
        Element::Text(text) => Some(Run::plain(text.as_str())),
        Element::Bold(_) => Some(Run::bold(inline.text_content())),
        Element::Italic(_) => Some(Run::italic(inline.text_content())),
        Element::Image(attrs) => {
            log::debug!(
                "skipping inline image '{}' inside mixed paragraph",
                attrs.get("src").map(String::as_str).unwrap_or_default()
            );
            None
        }
        other => {
            let text = other.text_content();
            if text.is_empty() {
                None
            } else {
                Some(Run::plain(text))
            }
        }
    }
}
