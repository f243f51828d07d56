//! Song lines
//!
//! A section is a flat sequence of lines. Each line carries exactly one payload:
//!
//! | Variant     | Source shape                                   | Payload             |
//! |-------------|------------------------------------------------|---------------------|
//! | Lyrics      | plain text, or a chord line + the text below it | text, chords, bold  |
//! | ChordsOnly  | a chord line with no lyric under it            | chords, raw text    |
//! | Instruction | `[SOBE UM TOM]`, `[Repete 2x]`, ...            | directive text      |
//! | Empty       | blank line inside a section                    | -                   |
//!
//! Serialized lines are tagged with `"type"` (`lyrics`, `chords-only`, `instruction`,
//! `empty`); empty collections and false flags are omitted.

use super::chord::ChordPosition;
use super::traits::AstNode;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum SongLine {
    Lyrics {
        text: String,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        chords: Vec<ChordPosition>,
        #[serde(default, rename = "isBold", skip_serializing_if = "is_false")]
        bold: bool,
    },
    ChordsOnly {
        /// Verbatim chord text, kept when the line came from a section header or its
        /// indented continuation and may hold more than the chord symbols.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        text: Option<String>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        chords: Vec<ChordPosition>,
    },
    Instruction {
        #[serde(rename = "instruction")]
        text: String,
    },
    Empty,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl SongLine {
    /// A lyric line without chords
    pub fn lyrics(text: impl Into<String>, bold: bool) -> Self {
        SongLine::Lyrics {
            text: text.into(),
            chords: Vec::new(),
            bold,
        }
    }

    pub fn instruction(text: impl Into<String>) -> Self {
        SongLine::Instruction { text: text.into() }
    }

    /// The line's text: lyric text, raw chord text or instruction text
    pub fn text(&self) -> Option<&str> {
        match self {
            SongLine::Lyrics { text, .. } | SongLine::Instruction { text } => Some(text),
            SongLine::ChordsOnly { text, .. } => text.as_deref(),
            SongLine::Empty => None,
        }
    }

    pub fn chords(&self) -> &[ChordPosition] {
        match self {
            SongLine::Lyrics { chords, .. } | SongLine::ChordsOnly { chords, .. } => chords,
            _ => &[],
        }
    }

    pub fn is_bold(&self) -> bool {
        matches!(self, SongLine::Lyrics { bold: true, .. })
    }

    /// Serialized tag of the variant
    pub fn kind_name(&self) -> &'static str {
        match self {
            SongLine::Lyrics { .. } => "lyrics",
            SongLine::ChordsOnly { .. } => "chords-only",
            SongLine::Instruction { .. } => "instruction",
            SongLine::Empty => "empty",
        }
    }
}

impl AstNode for SongLine {
    fn node_type(&self) -> &'static str {
        match self {
            SongLine::Lyrics { .. } => "Lyrics",
            SongLine::ChordsOnly { .. } => "ChordsOnly",
            SongLine::Instruction { .. } => "Instruction",
            SongLine::Empty => "Empty",
        }
    }

    fn display_label(&self) -> String {
        match self {
            SongLine::Lyrics { text, .. } | SongLine::Instruction { text } => text.clone(),
            SongLine::ChordsOnly { text: Some(text), .. } => text.clone(),
            SongLine::ChordsOnly { chords, .. } => chords
                .iter()
                .map(|c| c.chord.as_str())
                .collect::<Vec<_>>()
                .join(" "),
            SongLine::Empty => String::new(),
        }
    }
}

impl fmt::Display for SongLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}('{}')", self.node_type(), self.display_label())
    }
}
