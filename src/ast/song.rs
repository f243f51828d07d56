//! Song root node

use super::part::SongPart;
use super::section::Section;
use super::traits::AstNode;
use serde::{Deserialize, Serialize};

/// Global metadata from the `---` header block
///
/// `key` holds a musical key, or a slash-joined list of keys for a medley (`Dm / Am`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongMetadata {
    pub title: String,
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub metadata: SongMetadata,
    pub parts: Vec<SongPart>,
}

impl Song {
    pub fn new(metadata: SongMetadata, parts: Vec<SongPart>) -> Self {
        Self { metadata, parts }
    }

    pub fn title(&self) -> &str {
        &self.metadata.title
    }

    pub fn is_medley(&self) -> bool {
        self.parts.len() > 1
    }

    /// All sections across parts, in document order
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.parts.iter().flat_map(|part| part.sections.iter())
    }

    pub fn section_count(&self) -> usize {
        self.parts.iter().map(|part| part.sections.len()).sum()
    }
}

impl AstNode for Song {
    fn node_type(&self) -> &'static str {
        "Song"
    }

    fn display_label(&self) -> String {
        if self.metadata.key.is_empty() {
            self.metadata.title.clone()
        } else {
            format!("{} ({})", self.metadata.title, self.metadata.key)
        }
    }
}
