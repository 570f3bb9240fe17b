//! Shared configuration loader for the template processor.
//!
//! `defaults/tp.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`TpConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;
use tp_babel::{ConvertOptions, Postprocessor};

const DEFAULT_TOML: &str = include_str!("../defaults/tp.default.toml");

/// Top-level configuration consumed by template-processor applications.
#[derive(Debug, Clone, Deserialize)]
pub struct TpConfig {
    pub convert: ConvertConfig,
    pub publish: PublishConfig,
    pub inspect: InspectConfig,
}

/// Knobs of the markup → document conversion.
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    pub image_width_inches: f64,
    pub max_nesting_depth: usize,
}

impl From<&ConvertConfig> for ConvertOptions {
    fn from(config: &ConvertConfig) -> Self {
        ConvertOptions::new()
            .with_image_width_inches(config.image_width_inches)
            .with_max_nesting_depth(config.max_nesting_depth)
    }
}

impl From<ConvertConfig> for ConvertOptions {
    fn from(config: ConvertConfig) -> Self {
        ConvertOptions::from(&config)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PublishConfig {
    pub postprocessor: Postprocessor,
}

/// Controls `inspect` output.
#[derive(Debug, Clone, Deserialize)]
pub struct InspectConfig {
    pub format: InspectFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InspectFormat {
    Outline,
    Json,
}

impl InspectFormat {
    /// Name of the registered format that renders this view.
    pub fn as_str(self) -> &'static str {
        match self {
            InspectFormat::Outline => "outline",
            InspectFormat::Json => "json",
        }
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<TpConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<TpConfig, ConfigError> {
    Loader::new().build()
}
