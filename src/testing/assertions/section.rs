//! Section assertions

use super::{summarize_lines, LineAssertion};
use crate::ast::{Section, SongLine};

pub struct SectionAssertion<'a> {
    pub(crate) section: &'a Section,
    pub(crate) context: String,
}

impl<'a> SectionAssertion<'a> {
    pub fn kind(self, expected: &str) -> Self {
        assert_eq!(
            self.section.kind, expected,
            "{}: Expected section type '{}', found '{}'",
            self.context, expected, self.section.kind
        );
        self
    }

    /// The section holds content that preceded any header
    pub fn untyped(self) -> Self {
        assert!(
            self.section.is_untyped(),
            "{}: Expected an untyped section, found '{}'",
            self.context,
            self.section.kind
        );
        self
    }

    pub fn chorus(self, expected: bool) -> Self {
        assert_eq!(
            self.section.is_chorus, expected,
            "{}: Expected isChorus={} for '{}'",
            self.context, expected, self.section.kind
        );
        self
    }

    pub fn line_count(self, expected: usize) -> Self {
        let actual = self.section.lines.len();
        assert_eq!(
            actual,
            expected,
            "{}: Expected {} lines, found {} lines: [{}]",
            self.context,
            expected,
            actual,
            summarize_lines(&self.section.lines)
        );
        self
    }

    /// Line variants in order, by serialized tag (`lyrics`, `chords-only`, ...)
    pub fn line_kinds(self, expected: &[&str]) -> Self {
        let actual: Vec<&str> = self.section.lines.iter().map(SongLine::kind_name).collect();
        assert_eq!(actual, expected, "{}: Line kinds differ", self.context);
        self
    }

    pub fn line<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(LineAssertion<'a>),
    {
        assert!(
            index < self.section.lines.len(),
            "{}: Line index {} out of bounds (section has {} lines: [{}])",
            self.context,
            index,
            self.section.lines.len(),
            summarize_lines(&self.section.lines)
        );
        assertion(LineAssertion {
            line: &self.section.lines[index],
            context: format!("{}.lines[{}]", self.context, index),
        });
        self
    }

    /// Assert on the first line whose text contains `needle`
    pub fn line_containing<F>(self, needle: &str, assertion: F) -> Self
    where
        F: FnOnce(LineAssertion<'a>),
    {
        let section: &'a Section = self.section;
        let (index, line) = section
            .lines
            .iter()
            .enumerate()
            .find(|(_, line)| line.text().is_some_and(|text| text.contains(needle)))
            .unwrap_or_else(|| {
                panic!(
                    "{}: No line contains '{}' (section '{}')",
                    self.context, needle, section.kind
                )
            });
        assertion(LineAssertion {
            line,
            context: format!("{}.lines[{}]", self.context, index),
        });
        self
    }
}
