//! JSON format implementation
//!
//! Dumps the document model as pretty-printed JSON. Every block is an object
//! tagged with its `type`; image bytes are left out.

use crate::error::FormatError;
use crate::format::{Format, SerializedDocument};
use crate::ir::document::Document;

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormat;

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Document model as JSON"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn serialize(&self, doc: &Document) -> Result<SerializedDocument, FormatError> {
        serde_json::to_string_pretty(doc)
            .map(SerializedDocument::Text)
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }
}
