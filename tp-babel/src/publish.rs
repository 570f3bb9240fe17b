//! Postprocessing pipeline.
//!
//! Takes instantiated template markup and writes the final artifact next to a
//! base file name (a path without extension):
//!
//! - [`Postprocessor::None`] writes the markup unchanged to `<base>.md`,
//! - [`Postprocessor::Md2Docx`] converts it and writes `<base>.docx`.
//!
//! `html2docx` is a recognised name without an implementation and is rejected
//! with [`FormatError::NotSupported`].

use crate::assemble::{convert, ConvertOptions};
use crate::error::FormatError;
use crate::format::Format;
use crate::formats::DocxFormat;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// How instantiated markup is turned into an output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Postprocessor {
    /// Write the markup as is.
    None,
    /// Convert the markup to a DOCX document.
    #[default]
    Md2Docx,
    Html2Docx,
}

impl Postprocessor {
    pub fn as_str(self) -> &'static str {
        match self {
            Postprocessor::None => "none",
            Postprocessor::Md2Docx => "md2docx",
            Postprocessor::Html2Docx => "html2docx",
        }
    }

    /// Extension of the file this postprocessor writes, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            Postprocessor::None => "md",
            Postprocessor::Md2Docx | Postprocessor::Html2Docx => "docx",
        }
    }
}

impl fmt::Display for Postprocessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Postprocessor {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(Postprocessor::None),
            "md2docx" => Ok(Postprocessor::Md2Docx),
            "html2docx" => Ok(Postprocessor::Html2Docx),
            other => Err(FormatError::NotSupported(format!(
                "unknown postprocessor '{other}'"
            ))),
        }
    }
}

/// Specifies how to publish instantiated markup.
///
/// ```ignore
/// let path = publish(
///     PublishSpec::new(&markup, "out/report")
///         .with_postprocessor(Postprocessor::Md2Docx)
///         .with_options(ConvertOptions::new().with_base_dir("templates")),
/// )?;
/// ```
#[derive(Debug, Clone)]
pub struct PublishSpec<'a> {
    pub markup: &'a str,
    /// Output path without extension.
    pub base: PathBuf,
    pub postprocessor: Postprocessor,
    pub options: ConvertOptions,
}

impl<'a> PublishSpec<'a> {
    pub fn new(markup: &'a str, base: impl AsRef<Path>) -> Self {
        Self {
            markup,
            base: base.as_ref().to_path_buf(),
            postprocessor: Postprocessor::default(),
            options: ConvertOptions::default(),
        }
    }

    pub fn with_postprocessor(mut self, postprocessor: Postprocessor) -> Self {
        self.postprocessor = postprocessor;
        self
    }

    pub fn with_options(mut self, options: ConvertOptions) -> Self {
        self.options = options;
        self
    }

    /// The file the publication writes to.
    pub fn output_path(&self) -> PathBuf {
        let mut name = self.base.clone().into_os_string();
        name.push(".");
        name.push(self.postprocessor.extension());
        PathBuf::from(name)
    }
}

/// Runs the postprocessor and returns the path of the written file.
///
/// # Errors
///
/// Returns [`FormatError`] if:
/// - The postprocessor is not implemented
/// - The markup nests too deeply to convert
/// - Serialization or file I/O fails
pub fn publish(spec: PublishSpec<'_>) -> Result<PathBuf, FormatError> {
    let bytes = match spec.postprocessor {
        Postprocessor::None => spec.markup.as_bytes().to_vec(),
        Postprocessor::Md2Docx => {
            let document = convert(spec.markup, &spec.options)?;
            DocxFormat.serialize(&document)?.into_bytes()
        }
        Postprocessor::Html2Docx => {
            return Err(FormatError::NotSupported(format!(
                "postprocessor '{}' is not implemented",
                spec.postprocessor
            )))
        }
    };

    let path = spec.output_path();
    log::debug!("{} writing {}", spec.postprocessor, path.display());
    fs::write(&path, bytes).map_err(|source| FormatError::Io {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}
