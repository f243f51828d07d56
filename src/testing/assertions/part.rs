//! Part assertions

use super::{summarize_sections, SectionAssertion};
use crate::ast::SongPart;

pub struct PartAssertion<'a> {
    pub(crate) part: &'a SongPart,
    pub(crate) context: String,
}

impl<'a> PartAssertion<'a> {
    pub fn name(self, expected: Option<&str>) -> Self {
        let actual = self.part.name();
        assert_eq!(
            actual, expected,
            "{}: Expected part name {:?}, found {:?}",
            self.context, expected, actual
        );
        self
    }

    pub fn key(self, expected: Option<&str>) -> Self {
        let actual = self.part.key();
        assert_eq!(
            actual, expected,
            "{}: Expected part key {:?}, found {:?}",
            self.context, expected, actual
        );
        self
    }

    /// Neither `[parte: ..]` nor `[tom: ..]` was declared
    pub fn no_metadata(self) -> Self {
        assert!(
            self.part.metadata.is_none(),
            "{}: Expected no part metadata, found {:?}",
            self.context,
            self.part.metadata
        );
        self
    }

    pub fn section_count(self, expected: usize) -> Self {
        let actual = self.part.sections.len();
        assert_eq!(
            actual,
            expected,
            "{}: Expected {} sections, found {} sections: [{}]",
            self.context,
            expected,
            actual,
            summarize_sections(self.part.sections.iter())
        );
        self
    }

    pub fn section<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(SectionAssertion<'a>),
    {
        assert!(
            index < self.part.sections.len(),
            "{}: Section index {} out of bounds (part has {} sections)",
            self.context,
            index,
            self.part.sections.len()
        );
        assertion(SectionAssertion {
            section: &self.part.sections[index],
            context: format!("{}.sections[{}]", self.context, index),
        });
        self
    }
}
