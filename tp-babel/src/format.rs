//! Format trait definition
//!
//! A format turns an assembled [`Document`] into a concrete artifact. Formats
//! are looked up by name or file extension through the
//! [`FormatRegistry`](crate::registry::FormatRegistry).

use crate::error::FormatError;
use crate::ir::document::Document;

/// Serialized output produced by a [`Format`] implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SerializedDocument {
    /// UTF-8 text output (e.g., json, outline)
    Text(String),
    /// Binary output (e.g., docx)
    Binary(Vec<u8>),
}

impl SerializedDocument {
    /// Consume the serialized output and return the underlying bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            SerializedDocument::Text(text) => text.into_bytes(),
            SerializedDocument::Binary(bytes) => bytes,
        }
    }

    pub fn is_binary(&self) -> bool {
        matches!(self, SerializedDocument::Binary(_))
    }
}

/// Trait for output formats
///
/// # Examples
///
/// ```ignore
/// struct WordCount;
///
/// impl Format for WordCount {
///     fn name(&self) -> &str {
///         "wc"
///     }
///
///     fn serialize(&self, doc: &Document) -> Result<SerializedDocument, FormatError> {
///         Ok(SerializedDocument::Text(doc.blocks.len().to_string()))
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "docx", "json")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format, without the leading dot.
    ///
    /// Used for automatic format detection from filenames.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Whether [`Format::serialize`] produces binary output.
    fn is_binary(&self) -> bool {
        false
    }

    /// Serialize a document.
    fn serialize(&self, doc: &Document) -> Result<SerializedDocument, FormatError>;
}
