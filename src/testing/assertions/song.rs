//! Song-level assertions

use super::{summarize_sections, PartAssertion, SectionAssertion};
use crate::ast::Song;

pub struct SongAssertion<'a> {
    pub(crate) song: &'a Song,
}

impl<'a> SongAssertion<'a> {
    pub fn title(self, expected: &str) -> Self {
        assert_eq!(
            self.song.metadata.title, expected,
            "Expected title '{}', found '{}'",
            expected, self.song.metadata.title
        );
        self
    }

    pub fn key(self, expected: &str) -> Self {
        assert_eq!(
            self.song.metadata.key, expected,
            "Expected key '{}', found '{}'",
            expected, self.song.metadata.key
        );
        self
    }

    pub fn artist(self, expected: Option<&str>) -> Self {
        let actual = self.song.metadata.artist.as_deref();
        assert_eq!(
            actual, expected,
            "Expected artist {:?}, found {:?}",
            expected, actual
        );
        self
    }

    pub fn subtitle(self, expected: Option<&str>) -> Self {
        let actual = self.song.metadata.subtitle.as_deref();
        assert_eq!(
            actual, expected,
            "Expected subtitle {:?}, found {:?}",
            expected, actual
        );
        self
    }

    pub fn part_count(self, expected: usize) -> Self {
        let actual = self.song.parts.len();
        assert_eq!(
            actual, expected,
            "Expected {} parts, found {} parts",
            expected, actual
        );
        self
    }

    pub fn medley(self, expected: bool) -> Self {
        assert_eq!(
            self.song.is_medley(),
            expected,
            "Expected medley={}, song has {} parts",
            expected,
            self.song.parts.len()
        );
        self
    }

    /// Total number of sections across all parts
    pub fn section_count(self, expected: usize) -> Self {
        let actual = self.song.section_count();
        assert_eq!(
            actual,
            expected,
            "Expected {} sections, found {} sections: [{}]",
            expected,
            actual,
            summarize_sections(self.song.sections())
        );
        self
    }

    /// Section kinds across all parts, untyped sections as `""`
    pub fn section_kinds(self, expected: &[&str]) -> Self {
        let actual: Vec<&str> = self.song.sections().map(|s| s.kind.as_str()).collect();
        assert_eq!(actual, expected, "Section kinds differ");
        self
    }

    pub fn part<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(PartAssertion<'a>),
    {
        assert!(
            index < self.song.parts.len(),
            "Part index {} out of bounds (song has {} parts)",
            index,
            self.song.parts.len()
        );
        assertion(PartAssertion {
            part: &self.song.parts[index],
            context: format!("parts[{}]", index),
        });
        self
    }

    /// Assert on a section, indexed across all parts in document order
    pub fn section<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(SectionAssertion<'a>),
    {
        let song: &'a Song = self.song;
        let section = song.sections().nth(index).unwrap_or_else(|| {
            panic!(
                "Section index {} out of bounds (song has {} sections: [{}])",
                index,
                song.section_count(),
                summarize_sections(song.sections())
            )
        });
        assertion(SectionAssertion {
            section,
            context: format!("sections[{}]", index),
        });
        self
    }
}
