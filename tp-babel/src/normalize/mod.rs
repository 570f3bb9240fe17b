//! Markup normalizer.
//!
//! Turns template markup into the semantic element tree in three steps:
//!
//! 1. a line-level pre-pass for the dialect constructs (wiki tables, two-space
//!    nested lists), see [`markdown`],
//! 2. CommonMark + GFM tables rendered to HTML by comrak,
//! 3. the HTML parsed by html5ever and walked into [`Element`]s, see [`html`].
//!
//! Malformed markup never fails: comrak renders anything it cannot match as
//! literal text. The only error is [`ConvertError::NestingTooDeep`].
//!
//! [`Element`]: crate::ir::element::Element

mod html;
mod markdown;

use crate::error::ConvertError;
use crate::ir::element::ElementTree;

/// Normalize markup into an element tree, rejecting nesting deeper than
/// `max_depth` elements.
pub fn normalize(markup: &str, max_depth: usize) -> Result<ElementTree, ConvertError> {
    let html = markdown::render_html(markup);
    log::trace!("normalized markup to {} bytes of html", html.len());
    html::html_to_tree(&html, max_depth)
}
