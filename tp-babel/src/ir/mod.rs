//! Intermediate representations used by the converter.
//!
//! Conversion goes through two trees:
//! - [`element`]: the semantic element tree produced from the markup, shaped
//!   like the HTML the markup renders to.
//! - [`document`]: the output document model, a flat sequence of blocks ready
//!   to be serialized by a [`crate::Format`].

pub mod document;
pub mod element;
