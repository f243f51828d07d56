//! Lexing
//!
//! Line-level recognition for chord sheets. A chord sheet has no token stream worth the
//! name: every decision is made on a whole line, so this module stays a set of pure
//! functions over `&str` rather than a tokenizer.
//!
//!     chords               chord grammar, token test and positional extraction
//!     line_classification  chord lines, brackets, bold markers, separators
//!
//! Everything here is stateless. The lookahead that pairs a chord line with its lyric
//! lives in [crate::building].

pub mod chords;
pub mod line_classification;

pub use chords::{extract_chord_positions, is_chord_token};
pub use line_classification::{
    classify_bracket, is_blank, is_chord_line, is_medley_separator, strip_bold, BracketLine,
    PartField, PartMarker, SolistaMarker,
};
