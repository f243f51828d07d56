//! Testing utilities
//!
//!     Chord sheets are hand-written and full of conventions that are easy to get slightly
//!     wrong (ten-space continuation indents, `{ ... } 2x` blocks, bold markers around a
//!     line). A test built on a made-up string that misses one of them tunes the parser to
//!     the wrong thing. So tests follow two rules:
//!
//!         1. Use verified sample files (via [samples::Samples]) for realistic content.
//!            Small inline sources are fine for single-rule unit tests.
//!         2. Check the result with the fluent assertions (via [assert_song]) rather than
//!            indexing into the tree by hand.
//!
//! Example
//!
//!     ```rust,ignore
//!     use cifra::testing::{assert_song, samples::Samples};
//!
//!     let song = Samples::song("podes-partir").parse();
//!     assert_song(&song).section(2, |section| {
//!         section.kind("SOLISTA").line(0, |line| {
//!             line.assert_lyrics().text_starts_with("Sinto a falta").no_chords();
//!         });
//!     });
//!     ```

pub mod assertions;
pub mod matchers;
pub mod samples;

pub use assertions::assert_song;
pub use matchers::TextMatch;
pub use samples::Samples;
