//! Section accumulator for one part
//!
//! Sections are only ever appended. The current section is an index into that list,
//! cleared when a solista block closes so that following content cannot leak into it.

use crate::ast::{Section, SongLine};
use tracing::debug;

#[derive(Debug, Default)]
pub struct PartAccumulator {
    sections: Vec<Section>,
    current: Option<usize>,
}

impl PartAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new section and make it current
    pub fn open_section(&mut self, kind: impl Into<String>) {
        let section = Section::new(kind);
        debug!(kind = %section.kind, is_chorus = section.is_chorus, "opened section");
        self.sections.push(section);
        self.current = Some(self.sections.len() - 1);
    }

    /// Forget the current section; the next content opens a fresh one
    pub fn close_current(&mut self) {
        self.current = None;
    }

    pub fn has_open_section(&self) -> bool {
        self.current.is_some()
    }

    pub fn current_kind(&self) -> Option<&str> {
        self.current.map(|index| self.sections[index].kind.as_str())
    }

    /// Append to the current section, opening an untyped one if none is open
    pub fn push(&mut self, line: SongLine) {
        let index = match self.current {
            Some(index) => index,
            None => {
                self.open_section(String::new());
                self.sections.len() - 1
            }
        };
        self.sections[index].lines.push(line);
    }

    /// Append only when a section is open; returns whether the line was kept
    pub fn push_if_open(&mut self, line: SongLine) -> bool {
        match self.current {
            Some(index) => {
                self.sections[index].lines.push(line);
                true
            }
            None => false,
        }
    }

    pub fn finish(self) -> Vec<Section> {
        self.sections
    }
}
