//! Fluent assertion API for parsed songs
//!
//!     Tests that index into `song.parts[0].sections[2].lines[1]` by hand break every time
//!     the tree changes shape, and they tend to check counts rather than content. The
//!     assertions here walk the tree for you and report the path of the failing node
//!     (`sections[2].lines[1]`) in the panic message.
//!
//! Usage Example
//!
//!     ```rust,ignore
//!     use cifra::testing::{assert_song, samples::Samples};
//!
//!     let song = Samples::song("ai-viseu").parse();
//!
//!     assert_song(&song)
//!         .title("Ai Viseu")
//!         .part_count(1)
//!         .section(0, |section| {
//!             section
//!                 .kind("INTRO")
//!                 .chorus(false)
//!                 .line(0, |line| {
//!                     line.assert_chords_only().chord_symbols(&["C", "G", "C"]);
//!                 });
//!         })
//!         .section(1, |section| {
//!             section.chorus(true).line(0, |line| {
//!                 line.assert_lyrics()
//!                     .text("Tens ruelas tortuosas")
//!                     .bold(true);
//!             });
//!         });
//!     ```
//!
//!     `section(i, ..)` on the song indexes sections across all parts in document order;
//!     use `part(i, ..)` to scope to one medley part.

mod line;
mod part;
mod section;
mod song;

pub use line::{
    ChordsOnlyAssertion, InstructionAssertion, LineAssertion, LyricsAssertion,
};
pub use part::PartAssertion;
pub use section::SectionAssertion;
pub use song::SongAssertion;

use crate::ast::{ChordPosition, Section, Song, SongLine};

/// Create an assertion builder for a song
pub fn assert_song(song: &Song) -> SongAssertion<'_> {
    SongAssertion { song }
}

pub(super) fn summarize_sections<'s>(sections: impl Iterator<Item = &'s Section>) -> String {
    sections
        .map(|s| {
            if s.is_untyped() {
                "(untyped)".to_string()
            } else {
                s.kind.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

pub(super) fn summarize_lines(lines: &[SongLine]) -> String {
    lines
        .iter()
        .map(SongLine::kind_name)
        .collect::<Vec<_>>()
        .join(", ")
}

pub(super) fn summarize_chords(chords: &[ChordPosition]) -> String {
    chords
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
