//! Solista blocks
//!
//!     [SOLISTA]
//!     free text sung by the soloist, (Am) chords written inline
//!     [/SOLISTA]
//!
//! Everything between the markers is kept as plain text. Chord lines, brackets and bold
//! markers inside the block get no special treatment.

use cifra::testing::{assert_song, Samples};
use cifra::{parse_song, Song};

fn song_with_body(body: &str) -> Song {
    let source = format!("---\ntitulo: Solista\ntom: Em\n---\n{body}");
    parse_song(&source).unwrap()
}

#[test]
fn test_block_contents_are_plain_lyrics() {
    let body = "[SOLISTA]\nEm    Am\n**ninguém**\n[REFRÃO]\n   recuado   \n[/SOLISTA]\n";
    let song = song_with_body(body);

    assert_song(&song)
        .section_kinds(&["SOLISTA"])
        .section(0, |section| {
            section
                .line_count(4)
                .line(0, |line| {
                    line.assert_lyrics().text("Em    Am").no_chords();
                })
                .line(1, |line| {
                    line.assert_lyrics().text("**ninguém**").bold(false);
                })
                .line(2, |line| {
                    line.assert_lyrics().text("[REFRÃO]");
                })
                .line(3, |line| {
                    line.assert_lyrics().text("recuado");
                });
        });
}

#[test]
fn test_blank_lines_inside_block_are_kept() {
    let song = song_with_body("[SOLISTA]\n\num\n\n[/SOLISTA]\n");

    assert_song(&song).section(0, |section| {
        section.line_kinds(&["empty", "lyrics", "empty"]);
    });
}

#[test]
fn test_content_after_block_opens_untyped_section() {
    let song = song_with_body("[INTRO]\nla\n[SOLISTA]\nsolo\n[/SOLISTA]\n\nde volta\n");

    assert_song(&song)
        .section_kinds(&["INTRO", "SOLISTA", ""])
        .section(2, |section| {
            // The blank line right after the close marker has no section to land in
            section.line_kinds(&["lyrics"]).line(0, |line| {
                line.assert_lyrics().text("de volta");
            });
        });
}

#[test]
fn test_header_after_block_opens_named_section() {
    let song = song_with_body("[SOLISTA]\nsolo\n[/SOLISTA]\n[REFRÃO]\nla\n");

    assert_song(&song)
        .section_kinds(&["SOLISTA", "REFRÃO"])
        .section(1, |section| {
            section.chorus(true).line_count(1);
        });
}

#[test]
fn test_unclosed_block_runs_to_end_of_part() {
    let song = song_with_body("[SOLISTA]\num\n[INTRO]\ndois\n");

    assert_song(&song)
        .section_kinds(&["SOLISTA"])
        .section(0, |section| {
            section.line_count(3);
        });
}

#[test]
fn test_stray_close_marker_closes_current_section() {
    let song = song_with_body("[INTRO]\num\n[/SOLISTA]\ndois\n");

    assert_song(&song).section_kinds(&["INTRO", ""]);
}

#[test]
fn test_markers_are_case_sensitive() {
    let song = song_with_body("[solista]\nC  G\nla\n");

    // Lowercase is an ordinary custom header, so the chord line pairs as usual
    assert_song(&song)
        .section_kinds(&["solista"])
        .section(0, |section| {
            section.line(0, |line| {
                line.assert_lyrics().text("la").chord_symbols(&["C", "G"]);
            });
        });
}

#[test]
fn test_sample_solista_block() {
    let song = Samples::song("podes-partir").parse();

    assert_song(&song).section(2, |section| {
        section
            .kind("SOLISTA")
            .line_containing("guitarra", |line| {
                line.assert_lyrics().text("e a guitarra (Em) chora").no_chords();
            });
    });
}
