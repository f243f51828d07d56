//! Section builder
//!
//! Walks the body lines of one part and emits its sections. For each line the first
//! matching rule wins:
//!
//!     1.  `[parte: X]` / `[tom: X]`        consumed, nothing emitted
//!     2.  `[SOLISTA]`                      open a SOLISTA section, enter solista mode
//!     3.  `[/SOLISTA]`                     leave solista mode, close the current section
//!     4.  inside solista                   blank → Empty, else trimmed text → Lyrics
//!     5.  section header                   open a section, emit inline chords and the
//!                                          indented chord lines that follow it
//!     6.  instruction                      Instruction
//!     7.  blank                            Empty, only inside an open section
//!     8.  chord line                       paired with the next line as Lyrics when that
//!                                          line is plain text, else ChordsOnly
//!     9.  text inside PASSAGEM             trimmed text → Lyrics
//!     10. anything else                    Lyrics with bold markers stripped

use super::accumulator::PartAccumulator;
use crate::ast::{ChordPosition, Section, SongLine};
use crate::config::ParserConfig;
use crate::lexing::chords::extract_chord_positions;
use crate::lexing::line_classification::{
    classify_bracket, has_indent, is_blank, is_chord_line, is_medley_separator, is_passage_label,
    solista_marker, strip_bold, BoldText, BracketLine, SolistaMarker,
};
use tracing::{debug, trace};

const SOLISTA_SECTION: &str = "SOLISTA";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Normal,
    InsideSolista,
}

/// Single-pass builder over the lines of one part
pub struct SectionBuilder<'a> {
    lines: &'a [&'a str],
    config: &'a ParserConfig,
    cursor: usize,
    mode: Mode,
    part: PartAccumulator,
}

impl<'a> SectionBuilder<'a> {
    pub fn new(lines: &'a [&'a str], config: &'a ParserConfig) -> Self {
        Self {
            lines,
            config,
            cursor: 0,
            mode: Mode::Normal,
            part: PartAccumulator::new(),
        }
    }

    pub fn build(mut self) -> Vec<Section> {
        while let Some(&line) = self.lines.get(self.cursor) {
            let consumed = self.step(line);
            self.cursor += consumed;
        }
        self.part.finish()
    }

    /// Process the line under the cursor and return how many lines were consumed
    fn step(&mut self, line: &'a str) -> usize {
        let bracket = classify_bracket(line);

        if let Some(BracketLine::PartMarker(marker)) = bracket {
            trace!(line = self.cursor, field = ?marker.field, value = marker.value, "part marker");
            return 1;
        }

        match solista_marker(line) {
            Some(SolistaMarker::Open) => {
                self.part.open_section(SOLISTA_SECTION);
                self.mode = Mode::InsideSolista;
                debug!(line = self.cursor, "entered solista block");
                return 1;
            }
            Some(SolistaMarker::Close) => {
                self.mode = Mode::Normal;
                self.part.close_current();
                debug!(line = self.cursor, "left solista block");
                return 1;
            }
            None => {}
        }

        if self.mode == Mode::InsideSolista {
            if is_blank(line) {
                self.part.push(SongLine::Empty);
            } else {
                self.part.push(SongLine::lyrics(line.trim(), false));
            }
            return 1;
        }

        if let Some(bracket) = bracket {
            if let Some(label) = bracket.section_label() {
                return self.open_header(label, bracket.inline_content());
            }
            if let BracketLine::Instruction(text) = bracket {
                trace!(line = self.cursor, text, "instruction");
                self.part.push(SongLine::instruction(text));
                return 1;
            }
        }

        if is_blank(line) {
            if !self.part.push_if_open(SongLine::Empty) {
                trace!(line = self.cursor, "dropped leading blank line");
            }
            return 1;
        }

        if is_chord_line(line) {
            return self.chord_line(line);
        }

        let in_passage = self.part.current_kind().is_some_and(is_passage_label);
        if in_passage && line.starts_with(|c: char| !c.is_whitespace()) {
            trace!(line = self.cursor, "passage cue");
            self.part.push(SongLine::lyrics(line.trim(), false));
            return 1;
        }

        let BoldText { text, bold } = strip_bold(line, &self.config.bold_marker);
        trace!(line = self.cursor, bold, "lyrics");
        self.part.push(SongLine::lyrics(text, bold));
        1
    }

    /// Open a section, emit its inline chords and grab the chord lines indented under it
    fn open_header(&mut self, label: &str, inline: Option<&str>) -> usize {
        self.part.open_section(label);
        if let Some(inline) = inline {
            self.part.push(chords_only_with_text(inline));
        }

        let mut consumed = 1;
        while let Some(&next) = self.lines.get(self.cursor + consumed) {
            if !self.is_continuation(next) {
                break;
            }
            trace!(line = self.cursor + consumed, "header continuation");
            self.part.push(chords_only_with_text(next.trim()));
            consumed += 1;
        }
        consumed
    }

    fn is_continuation(&self, line: &str) -> bool {
        has_indent(line, self.config.continuation_indent)
            && !is_blank(line)
            && !line.trim_start().starts_with('[')
            && is_chord_line(line)
    }

    /// Pair a chord line with the lyric under it, or keep it on its own
    fn chord_line(&mut self, line: &str) -> usize {
        let chords = extract_chord_positions(line);
        let lyric = self
            .lines
            .get(self.cursor + 1)
            .copied()
            .filter(|next| is_pairable_lyric(next));

        match lyric {
            Some(next) => {
                let BoldText { text, bold } = strip_bold(next, &self.config.bold_marker);
                let chords = clamp_to(chords, text.chars().count());
                debug!(line = self.cursor, chords = chords.len(), "paired chord line with lyric");
                self.part.push(SongLine::Lyrics { text, chords, bold });
                2
            }
            None => {
                trace!(line = self.cursor, "standalone chord line");
                self.part.push(SongLine::ChordsOnly { text: None, chords });
                1
            }
        }
    }
}

/// Build the sections of one part from its lines
pub fn build_sections(lines: &[&str], config: &ParserConfig) -> Vec<Section> {
    SectionBuilder::new(lines, config).build()
}

/// A line that may sit under a chord line as its lyric
fn is_pairable_lyric(line: &str) -> bool {
    !is_blank(line)
        && !is_chord_line(line)
        && classify_bracket(line).is_none()
        && !is_medley_separator(line)
}

fn chords_only_with_text(text: &str) -> SongLine {
    SongLine::ChordsOnly {
        text: Some(text.to_string()),
        chords: extract_chord_positions(text),
    }
}

/// Chords placed past the end of a shorter lyric are pinned to its end
fn clamp_to(chords: Vec<ChordPosition>, width: usize) -> Vec<ChordPosition> {
    chords
        .into_iter()
        .map(|chord| ChordPosition {
            position: chord.position.min(width),
            ..chord
        })
        .collect()
}
