//! Chord positions

use super::traits::AstNode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A chord symbol anchored at a character offset
///
/// `position` is zero-based and counts characters of the line the chord is aligned to: the
/// paired lyric line for a chord/lyric pair, or the chord line itself otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChordPosition {
    pub chord: String,
    pub position: usize,
}

impl ChordPosition {
    pub fn new(chord: impl Into<String>, position: usize) -> Self {
        Self {
            chord: chord.into(),
            position,
        }
    }
}

impl AstNode for ChordPosition {
    fn node_type(&self) -> &'static str {
        "Chord"
    }

    fn display_label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ChordPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.chord, self.position)
    }
}
