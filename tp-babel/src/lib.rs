//! Template markup to structured documents
//!
//!     This crate converts the markup produced by instantiating a document template into a
//!     structured document model (headings, styled paragraphs, multi-level lists, tables,
//!     images with captions) and serializes that model to concrete formats, DOCX first.
//!
//!     This is a pure lib, that is, it powers the template-processor cli but is shell agnostic:
//!     no code here supposes a shell environment, be it std printing, env vars or exit codes.
//!     Diagnostics go through the `log` facade and the caller decides where they end up.
//!
//! Architecture
//!
//!     Conversion is a straight pipeline, each stage owning its own representation:
//!
//!         markup ──normalize──▶ ElementTree ──assemble──▶ Document ──Format──▶ bytes
//!
//!     The element tree (./ir/element.rs) is shaped like the HTML the markup renders to and is
//!     read-only once built. The document model (./ir/document.rs) is a flat sequence of blocks,
//!     a closed sum type every consumer matches on exhaustively.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── assemble.rs             # convert() entry point, ConvertOptions
//!     ├── normalize               # markup → element tree (comrak, html5ever)
//!     ├── common                  # builders: lists, inline runs, tables, images
//!     ├── ir                      # element tree and document model
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── formats
//!     │   ├── docx                # docx-rs writer, styles, numbering
//!     │   ├── json
//!     │   └── outline
//!     ├── publish.rs              # postprocessors: none (.md) / md2docx (.docx)
//!     └── lib.rs
//!
//! Testing
//!     tests
//!     ├── convert                 # end to end markup → document model
//!     └── docx                    # serialized packages
//!
//!     Note that rust does not by default discover tests in subdirectories, so we need to include these
//!     in the mod.
//!
//! Failure Policy
//!
//!     Malformed markup degrades to literal text. Images that cannot be found or decoded are
//!     skipped together with their caption, and logged. The one conversion failure is input
//!     nested deeper than ConvertOptions::max_nesting_depth, reported as
//!     ConvertError::NestingTooDeep instead of exhausting the stack.
//!
//! Library Choices
//!
//!     We do not parse markdown or write OOXML ourselves: comrak renders the markup to HTML,
//!     html5ever parses that HTML, docx-rs writes the package and image decodes pictures. The
//!     crate's own work is the mapping between those trees.
//!
pub mod assemble;
pub mod common;
pub mod error;
pub mod format;
pub mod formats;
pub mod ir;
pub mod normalize;
pub mod publish;
pub mod registry;

pub use assemble::{convert, ConvertOptions, DEFAULT_MAX_NESTING_DEPTH};
pub use error::{ConvertError, FormatError, ImageError};
pub use format::{Format, SerializedDocument};
pub use ir::document::{Block, Document};
pub use normalize::normalize;
pub use publish::{publish, Postprocessor, PublishSpec};
pub use registry::FormatRegistry;
