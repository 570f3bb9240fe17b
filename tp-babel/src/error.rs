//! Error types for conversion and serialization

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors propagated by [`crate::convert`].
///
/// Malformed markup and broken images never surface here; they degrade to
/// literal text or are skipped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// The markup nests deeper than the configured limit.
    #[error("document nesting exceeds the limit of {limit} levels")]
    NestingTooDeep { limit: usize },
}

/// Reasons an image could not be embedded.
///
/// The image resolver returns these and the assembler logs and discards them.
#[derive(Debug, Error)]
pub enum ImageError {
    #[error("image source '{0}' could not be resolved")]
    NotFound(String),
    #[error("failed to read image '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to decode image '{path}': {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("failed to re-encode image '{path}': {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Errors that can occur during format operations
#[derive(Debug, Error)]
pub enum FormatError {
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// Error during serialization
    #[error("Serialization error: {0}")]
    SerializationError(String),
    /// Operation the format or postprocessor cannot perform
    #[error("Operation not supported: {0}")]
    NotSupported(String),
    #[error("Conversion error: {0}")]
    Convert(#[from] ConvertError),
    #[error("I/O error on '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
