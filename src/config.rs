//! Configuration loading
//!
//! The file `defaults/cifra.default.toml` is compiled into the crate and forms the bottom
//! layer. On top of it the binary stacks the `--config` file, then flags such as
//! `--format`:
//!
//!     defaults  <  --config FILE  <  --format
//!
//! [`ParserConfig::default`] holds the same values as the embedded file, so library users
//! that never load configuration parse exactly like the binary does.

use ::config::builder::DefaultState;
use ::config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/cifra.default.toml");

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CifraConfig {
    pub parser: ParserConfig,
    pub inspect: InspectConfig,
}

/// Lexical knobs of the parser
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ParserConfig {
    /// Leading spaces a chord line needs to continue an inline section header
    pub continuation_indent: usize,
    /// Sequence wrapped around bold lyric text
    pub bold_marker: String,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            continuation_indent: 10,
            bold_marker: "**".to_string(),
        }
    }
}

/// Controls the output of the `cifra` binary
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InspectConfig {
    pub format: String,
    pub show_positions: bool,
    pub label_width: usize,
}

impl Default for InspectConfig {
    fn default() -> Self {
        Self {
            format: "treeviz".to_string(),
            show_positions: true,
            label_width: 40,
        }
    }
}

/// Builds a [`CifraConfig`] from the embedded defaults plus any number of layers.
/// Layers added later take precedence.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        let defaults = File::from_str(DEFAULT_TOML, FileFormat::Toml);
        Self {
            builder: Config::builder().add_source(defaults),
        }
    }

    /// Add a TOML file that must exist
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), true)
    }

    /// Add a TOML file, skipped when it does not exist
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), false)
    }

    fn layer(mut self, path: &Path, required: bool) -> Self {
        let file = File::from(path).format(FileFormat::Toml).required(required);
        self.builder = self.builder.add_source(file);
        self
    }

    /// Set one dotted key, e.g. `inspect.format` from `--format`
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<CifraConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The embedded defaults with no user layers
pub fn load_defaults() -> Result<CifraConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_defaults_match_default_impls() {
        let config = load_defaults().unwrap();
        assert_eq!(config.parser, ParserConfig::default());
        assert_eq!(config.inspect, InspectConfig::default());
        assert_eq!(config.parser.continuation_indent, 10);
        assert_eq!(config.inspect.format, "treeviz");
    }

    #[test]
    fn overrides_apply_per_key() {
        let config = Loader::new()
            .set_override("inspect.format", "json")
            .and_then(|loader| loader.set_override("parser.bold_marker", "__"))
            .and_then(Loader::build)
            .unwrap();
        assert_eq!(config.inspect.format, "json");
        assert_eq!(config.parser.bold_marker, "__");
        assert!(config.inspect.show_positions);
    }

    #[test]
    fn absent_files() {
        let optional = Loader::new()
            .with_optional_file("/nao/existe/cifra.toml")
            .build();
        assert_eq!(optional.unwrap().parser, ParserConfig::default());

        let required = Loader::new().with_file("/nao/existe/cifra.toml").build();
        assert!(required.is_err());
    }
}
