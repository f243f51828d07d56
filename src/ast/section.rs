//! Section element
//!
//! A section is a labelled block of lines. Labels come from bracketed headers:
//!
//!     [INTRO]     C  G  Am  F
//!     [REFRÃO]
//!     [PÕE A MÃO NA CABECINHA]
//!
//! The label is kept verbatim in `kind`. Content that arrives before any header lands in a
//! section with an empty label.

use super::line::SongLine;
use super::traits::AstNode;
use crate::lexing::line_classification::is_refrain_label;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    #[serde(rename = "type")]
    pub kind: String,
    pub is_chorus: bool,
    pub lines: Vec<SongLine>,
}

impl Section {
    /// Open an empty section; `is_chorus` follows from the label.
    pub fn new(kind: impl Into<String>) -> Self {
        let kind = kind.into();
        Self {
            is_chorus: is_refrain_label(&kind),
            kind,
            lines: Vec::new(),
        }
    }

    /// The section opened for content that precedes any header
    pub fn untyped() -> Self {
        Self::new("")
    }

    pub fn is_untyped(&self) -> bool {
        self.kind.is_empty()
    }

    pub fn with_lines(mut self, lines: Vec<SongLine>) -> Self {
        self.lines = lines;
        self
    }
}

impl AstNode for Section {
    fn node_type(&self) -> &'static str {
        "Section"
    }

    fn display_label(&self) -> String {
        let kind = if self.is_untyped() {
            "(untyped)"
        } else {
            self.kind.as_str()
        };
        format!("{} ({} lines)", kind, self.lines.len())
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Section('{}', {} lines)", self.kind, self.lines.len())
    }
}
