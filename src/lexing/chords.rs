//! Chord tokens
//!
//!     A chord token is a root note, an optional accidental, an optional quality and an
//!     optional slash bass:
//!
//!         <root>      A-G (uppercase only)
//!         <accident>  # | b
//!         <quality>   maj | min | m | dim | aug | sus | sus2 | sus4 | add<N> | <N>
//!         <bass>      /<root><accident>?
//!
//!     So `C`, `F#m`, `Bb7`, `Gsus4`, `Cadd9`, `D/F#` are chords; `Am7`, `c`, `H` are not
//!     (a single quality only, lowercase roots are lyrics).
//!
//!     Qualities are tried longest first, so the scan reads `Cmaj` and `Dmin` whole instead
//!     of stopping at `Cm` and `Dm`.
//!
//!     The same grammar drives two operations: the anchored token test used when deciding
//!     whether a whole line is made of chords, and the unanchored scan that extracts every
//!     chord together with its character offset.

use crate::ast::ChordPosition;
use once_cell::sync::Lazy;
use regex::Regex;

/// Chord grammar. Qualities are listed longest first so the scan prefers `Cmaj` over `Cm`.
const CHORD_PATTERN: &str = r"[A-G][#b]?(?:maj|min|m|dim|aug|sus[24]?|add[0-9]+|[0-9]+)?(?:/[A-G][#b]?)?";

static CHORD_TOKEN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("^(?:{})$", CHORD_PATTERN)).expect("chord token pattern is valid")
});

static CHORD_SCAN_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(CHORD_PATTERN).expect("chord scan pattern is valid"));

/// Check whether a whitespace-free token is exactly one chord
pub fn is_chord_token(token: &str) -> bool {
    CHORD_TOKEN_REGEX.is_match(token)
}

/// Scan a line left to right and return every chord with its starting character offset.
///
/// Offsets are measured in the line as given (leading whitespace included), which is what
/// aligns a chord line with the lyric line printed under it.
pub fn extract_chord_positions(line: &str) -> Vec<ChordPosition> {
    CHORD_SCAN_REGEX
        .find_iter(line)
        .map(|m| ChordPosition::new(m.as_str(), char_offset(line, m.start())))
        .collect()
}

/// Convert a byte offset into a character offset
fn char_offset(line: &str, byte_offset: usize) -> usize {
    line[..byte_offset].chars().count()
}
