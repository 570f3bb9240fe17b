//! DOCX format tests
//!
//! `export` checks that documents pack into a container at all; `package`
//! opens `word/document.xml` and checks the markup Word will read.

mod export;
mod package;
