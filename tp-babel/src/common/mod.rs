//! Builders shared by the assembler: each one maps a kind of element node to
//! output blocks or runs.
//!
//! All of them are plain recursive functions over the immutable element tree.
//! None of them fails; content they cannot use is skipped.

pub mod images;
pub mod inlines;
pub mod lists;
pub mod tables;
