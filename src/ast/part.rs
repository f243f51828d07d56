//! Song parts
//!
//! A plain song has one part. A medley has one part per `===`-delimited chunk, each
//! optionally described by `[parte: NAME]` and `[tom: KEY]` markers found in its chunk.

use super::section::Section;
use super::traits::AstNode;
use serde::{Deserialize, Serialize};

/// Metadata declared by part markers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartMetadata {
    #[serde(
        default,
        rename = "partName",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl PartMetadata {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.key.is_none()
    }

    /// `None` when no field was declared
    pub fn into_option(self) -> Option<Self> {
        if self.is_empty() {
            None
        } else {
            Some(self)
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongPart {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<PartMetadata>,
    pub sections: Vec<Section>,
}

impl SongPart {
    pub fn new(metadata: Option<PartMetadata>, sections: Vec<Section>) -> Self {
        Self { metadata, sections }
    }

    pub fn name(&self) -> Option<&str> {
        self.metadata.as_ref().and_then(|m| m.name.as_deref())
    }

    pub fn key(&self) -> Option<&str> {
        self.metadata.as_ref().and_then(|m| m.key.as_deref())
    }
}

impl AstNode for SongPart {
    fn node_type(&self) -> &'static str {
        "Part"
    }

    fn display_label(&self) -> String {
        match (self.name(), self.key()) {
            (Some(name), Some(key)) => format!("{} [{}]", name, key),
            (Some(name), None) => name.to_string(),
            (None, Some(key)) => format!("[{}]", key),
            (None, None) => format!("{} sections", self.sections.len()),
        }
    }
}
