//! Serialized song formats
//!
//! Both formats write the song tree exactly as its serde derives describe it, which is
//! the shape renderers consume:
//!
//!     {"metadata": {"title": "Teste", "key": "C"},
//!      "parts": [{"sections": [{"type": "INTRO", "isChorus": false,
//!                               "lines": [{"type": "lyrics", "text": "Olá mundo",
//!                                          "chords": [{"chord": "C", "position": 0}]}]}]}]}

use super::registry::{FormatError, Formatter};
use crate::ast::Song;

/// Pretty-printed JSON
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, song: &Song) -> Result<String, FormatError> {
        serde_json::to_string_pretty(song).map_err(|e| FormatError::Serialization(e.to_string()))
    }

    fn description(&self) -> &str {
        "Song tree as pretty-printed JSON"
    }
}

pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn serialize(&self, song: &Song) -> Result<String, FormatError> {
        serde_yaml::to_string(song).map_err(|e| FormatError::Serialization(e.to_string()))
    }

    fn description(&self) -> &str {
        "Song tree as YAML"
    }
}
