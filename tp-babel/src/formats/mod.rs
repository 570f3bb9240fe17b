//! Format implementations
//!
//! This module contains all format implementations that serialize the
//! assembled document model.

pub mod docx;
pub mod json;
pub mod outline;

pub use docx::DocxFormat;
pub use json::JsonFormat;
pub use outline::OutlineFormat;
