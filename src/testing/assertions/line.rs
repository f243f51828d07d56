//! Line assertions
//!
//! `LineAssertion` first pins the variant (`assert_lyrics`, `assert_chords_only`, ...),
//! then hands out assertions for that variant's payload.

use super::summarize_chords;
use crate::ast::{ChordPosition, SongLine};
use crate::testing::matchers::TextMatch;

pub struct LineAssertion<'a> {
    pub(crate) line: &'a SongLine,
    pub(crate) context: String,
}

impl<'a> LineAssertion<'a> {
    pub fn assert_lyrics(self) -> LyricsAssertion<'a> {
        match self.line {
            SongLine::Lyrics { text, chords, bold } => LyricsAssertion {
                text,
                chords,
                bold: *bold,
                context: self.context,
            },
            other => panic!("{}: Expected lyrics, found {}", self.context, other),
        }
    }

    pub fn assert_chords_only(self) -> ChordsOnlyAssertion<'a> {
        match self.line {
            SongLine::ChordsOnly { text, chords } => ChordsOnlyAssertion {
                text: text.as_deref(),
                chords,
                context: self.context,
            },
            other => panic!("{}: Expected chords-only, found {}", self.context, other),
        }
    }

    pub fn assert_instruction(self) -> InstructionAssertion<'a> {
        match self.line {
            SongLine::Instruction { text } => InstructionAssertion {
                text,
                context: self.context,
            },
            other => panic!("{}: Expected instruction, found {}", self.context, other),
        }
    }

    pub fn assert_empty(self) {
        assert!(
            matches!(self.line, SongLine::Empty),
            "{}: Expected empty line, found {}",
            self.context,
            self.line
        );
    }
}

fn assert_chords(actual: &[ChordPosition], expected: &[(&str, usize)], context: &str) {
    let expected: Vec<ChordPosition> = expected
        .iter()
        .map(|(chord, position)| ChordPosition::new(*chord, *position))
        .collect();
    assert_eq!(
        actual,
        expected.as_slice(),
        "{}: Expected chords [{}], found [{}]",
        context,
        summarize_chords(&expected),
        summarize_chords(actual)
    );
}

fn assert_chord_symbols(actual: &[ChordPosition], expected: &[&str], context: &str) {
    let symbols: Vec<&str> = actual.iter().map(|c| c.chord.as_str()).collect();
    assert_eq!(
        symbols, expected,
        "{}: Expected chord symbols {:?}, found {:?}",
        context, expected, symbols
    );
}

pub struct LyricsAssertion<'a> {
    text: &'a str,
    chords: &'a [ChordPosition],
    bold: bool,
    context: String,
}

impl<'a> LyricsAssertion<'a> {
    pub fn text(self, expected: &str) -> Self {
        TextMatch::Exact(expected.to_string()).assert(self.text, &self.context);
        self
    }

    pub fn text_starts_with(self, prefix: &str) -> Self {
        TextMatch::StartsWith(prefix.to_string()).assert(self.text, &self.context);
        self
    }

    pub fn text_contains(self, substring: &str) -> Self {
        TextMatch::Contains(substring.to_string()).assert(self.text, &self.context);
        self
    }

    pub fn bold(self, expected: bool) -> Self {
        assert_eq!(
            self.bold, expected,
            "{}: Expected isBold={} for '{}'",
            self.context, expected, self.text
        );
        self
    }

    /// Exact chords as `(symbol, position)` pairs
    pub fn chords(self, expected: &[(&str, usize)]) -> Self {
        assert_chords(self.chords, expected, &self.context);
        self
    }

    pub fn chord_symbols(self, expected: &[&str]) -> Self {
        assert_chord_symbols(self.chords, expected, &self.context);
        self
    }

    pub fn no_chords(self) -> Self {
        assert!(
            self.chords.is_empty(),
            "{}: Expected no chords, found [{}]",
            self.context,
            summarize_chords(self.chords)
        );
        self
    }

    /// The chord at `index` sits over the lyric character that starts `fragment`
    pub fn chord_over(self, index: usize, fragment: &str) -> Self {
        let chord = self.chords.get(index).unwrap_or_else(|| {
            panic!(
                "{}: Chord index {} out of bounds ({} chords)",
                self.context,
                index,
                self.chords.len()
            )
        });
        let rest: String = self.text.chars().skip(chord.position).collect();
        assert!(
            rest.starts_with(fragment),
            "{}: Expected {} over '{}', found it over '{}'",
            self.context,
            chord,
            fragment,
            rest
        );
        self
    }
}

pub struct ChordsOnlyAssertion<'a> {
    text: Option<&'a str>,
    chords: &'a [ChordPosition],
    context: String,
}

impl<'a> ChordsOnlyAssertion<'a> {
    /// Raw chord text kept from a header's inline content or a continuation line
    pub fn raw_text(self, expected: Option<&str>) -> Self {
        assert_eq!(
            self.text, expected,
            "{}: Expected raw text {:?}, found {:?}",
            self.context, expected, self.text
        );
        self
    }

    pub fn chords(self, expected: &[(&str, usize)]) -> Self {
        assert_chords(self.chords, expected, &self.context);
        self
    }

    pub fn chord_symbols(self, expected: &[&str]) -> Self {
        assert_chord_symbols(self.chords, expected, &self.context);
        self
    }
}

pub struct InstructionAssertion<'a> {
    text: &'a str,
    context: String,
}

impl<'a> InstructionAssertion<'a> {
    pub fn text(self, expected: &str) -> Self {
        TextMatch::Exact(expected.to_string()).assert(self.text, &self.context);
        self
    }

    pub fn text_contains(self, substring: &str) -> Self {
        TextMatch::Contains(substring.to_string()).assert(self.text, &self.context);
        self
    }
}
