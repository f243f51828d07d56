//! Format registry
//!
//! Formatters are looked up by name, which is what the `--format` flag and the
//! `inspect.format` config key hold. Names are kept ordered so `--list-formats` output is
//! stable.

use crate::ast::Song;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Renders a whole song as text
pub trait Formatter: Send + Sync {
    /// Registry key, e.g. "treeviz"
    fn name(&self) -> &str;

    fn serialize(&self, song: &Song) -> Result<String, FormatError>;

    /// One-line summary shown by `--list-formats`
    fn description(&self) -> &str {
        ""
    }
}

#[derive(Default)]
pub struct FormatRegistry {
    by_name: BTreeMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    /// An empty registry; see [FormatRegistry::with_defaults] for the built-in formats
    pub fn new() -> Self {
        Self::default()
    }

    /// The treeviz, json and yaml formatters with default options
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(super::TreevizFormatter::default());
        registry.register(super::JsonFormatter);
        registry.register(super::YamlFormatter);
        registry
    }

    /// Add a formatter under its own name. A later formatter with the same name wins,
    /// which is how the binary swaps in a treeviz formatter built from its config.
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        let name = formatter.name().to_string();
        self.by_name.insert(name, Box::new(formatter));
    }

    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.by_name.get(name).map(Box::as_ref)
    }

    pub fn has(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn serialize(&self, song: &Song, format: &str) -> Result<String, FormatError> {
        match self.get(format) {
            Some(formatter) => formatter.serialize(song),
            None => Err(FormatError::FormatNotFound(format.to_string())),
        }
    }

    /// Registered names in alphabetical order
    pub fn list_formats(&self) -> Vec<String> {
        self.by_name.keys().cloned().collect()
    }
}
