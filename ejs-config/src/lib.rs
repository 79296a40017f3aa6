//! Shared configuration loader for the ejs transcoder.
//!
//! `defaults/ejs.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`EjsConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use ejs_babel::ParserConfig;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/ejs.default.toml");

/// Top-level configuration consumed by ejs applications.
#[derive(Debug, Clone, Deserialize)]
pub struct EjsConfig {
    pub parser: ParserSection,
    pub json: JsonSection,
}

/// Marker namespace and envelope stamp.
#[derive(Debug, Clone, Deserialize)]
pub struct ParserSection {
    pub prefix: String,
    pub version: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JsonSection {
    pub pretty: bool,
}

impl From<&EjsConfig> for ParserConfig {
    fn from(config: &EjsConfig) -> Self {
        ParserConfig::default()
            .with_prefix(config.parser.prefix.clone())
            .with_version(config.parser.version.clone())
            .with_pretty_json(config.json.pretty)
    }
}

impl From<EjsConfig> for ParserConfig {
    fn from(config: EjsConfig) -> Self {
        ParserConfig::default()
            .with_prefix(config.parser.prefix)
            .with_version(config.parser.version)
            .with_pretty_json(config.json.pretty)
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

    /// Apply a single key/value override, e.g. `("parser.prefix", "cms")`.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<EjsConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<EjsConfig, ConfigError> {
    Loader::new().build()
}
