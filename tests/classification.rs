//! Line classification as seen through a full parse
//!
//! The unit tests in `lexing::line_classification` check the predicates one by one;
//! these check what each kind of line turns into once it sits inside a real song.

use cifra::config::ParserConfig;
use cifra::testing::assert_song;
use cifra::{parse_song, parse_song_with, Song};
use rstest::rstest;

fn song_with_body(body: &str) -> Song {
    let source = format!("---\ntitulo: Teste\ntom: C\n---\n{body}");
    parse_song(&source).unwrap()
}

#[rstest]
#[case("[INTRO]", "INTRO", false)]
#[case("[Refrão]", "Refrão", true)]
#[case("[REFRAO]", "REFRAO", true)]
#[case("[INSTR.]", "INSTR.", false)]
#[case("[PÕE A MÃO NA CABECINHA]", "PÕE A MÃO NA CABECINHA", false)]
#[case("[PONTE] Am  G", "PONTE", false)]
fn test_section_headers(#[case] header: &str, #[case] kind: &str, #[case] chorus: bool) {
    let song = song_with_body(&format!("{header}\nla la la\n"));

    assert_song(&song).section_count(1).section(0, |section| {
        section
            .kind(kind)
            .chorus(chorus)
            .line_containing("la la la", |line| {
                line.assert_lyrics().no_chords();
            });
    });
}

#[rstest]
#[case("[SOBE UM TOM]", "SOBE UM TOM")]
#[case("[Repete 2x]", "Repete 2x")]
#[case("[Param os instrumentos]", "Param os instrumentos")]
#[case("[SAÍDA PARA AI VISEU]", "SAÍDA PARA AI VISEU")]
fn test_instructions_inside_a_section(#[case] line: &str, #[case] text: &str) {
    let song = song_with_body(&format!("[INTRO]\nla\n{line}\n"));

    assert_song(&song).section_count(1).section(0, |section| {
        section
            .line_kinds(&["lyrics", "instruction"])
            .line(1, |line| {
                line.assert_instruction().text(text);
            });
    });
}

#[test]
fn test_keyword_in_title_reads_as_instruction() {
    // "SOBE" anywhere in the brackets wins over a custom section header
    let song = song_with_body("[INTRO]\nla\n[QUEM SOBE A SERRA]\nlu\n");

    assert_song(&song)
        .section_kinds(&["INTRO"])
        .section(0, |section| {
            section
                .line_kinds(&["lyrics", "instruction", "lyrics"])
                .line(1, |line| {
                    line.assert_instruction().text("QUEM SOBE A SERRA");
                });
        });
}

#[test]
fn test_instruction_before_any_header_opens_untyped_section() {
    let song = song_with_body("[Repete 2x]\n[INTRO]\nla\n");

    assert_song(&song)
        .section_kinds(&["", "INTRO"])
        .section(0, |section| {
            section.untyped().line_kinds(&["instruction"]);
        });
}

#[test]
fn test_leading_blank_lines_are_dropped() {
    let song = song_with_body("\n\n   \n[INTRO]\nla\n");

    assert_song(&song).section_kinds(&["INTRO"]);
}

#[test]
fn test_chord_line_with_repetition_marker_pairs_with_lyric() {
    let song = song_with_body("[INTRO]\nAm       G (2x)\nvamos lá cantar\n");

    assert_song(&song).section(0, |section| {
        section.line_count(1).line(0, |line| {
            line.assert_lyrics()
                .text("vamos lá cantar")
                .chords(&[("Am", 0), ("G", 9)]);
        });
    });
}

#[test]
fn test_chord_line_followed_by_chord_line() {
    let song = song_with_body("[INTRO]\nC  G\nAm  F\n");

    assert_song(&song).section(0, |section| {
        section
            .line_kinds(&["chords-only", "chords-only"])
            .line(0, |line| {
                line.assert_chords_only()
                    .raw_text(None)
                    .chords(&[("C", 0), ("G", 3)]);
            });
    });
}

#[test]
fn test_opening_brace_line_is_not_a_chord_line() {
    let song = song_with_body("[INTRO]\n{ Gm              Dm\n  a pensar nas marés\nDm  A7 } 2x\nque o levam\n");

    assert_song(&song).section(0, |section| {
        section
            .line_kinds(&["lyrics", "lyrics", "lyrics"])
            .line(0, |line| {
                line.assert_lyrics().text("{ Gm              Dm").no_chords();
            })
            .line(1, |line| {
                line.assert_lyrics().text("  a pensar nas marés").no_chords();
            })
            .line(2, |line| {
                line.assert_lyrics()
                    .text("que o levam")
                    .chords(&[("Dm", 0), ("A7", 4)]);
            });
    });
}

#[test]
fn test_chord_line_before_header_stays_chords_only() {
    let song = song_with_body("[INTRO]\nC  G\n[REFRÃO]\nla\n");

    assert_song(&song)
        .section_kinds(&["INTRO", "REFRÃO"])
        .section(0, |section| {
            section.line_kinds(&["chords-only"]);
        });
}

#[test]
fn test_continuation_needs_full_indent() {
    let body = "[INTRO] C  G\n          Am  F\n         Dm  E\n";
    let song = song_with_body(body);

    // The nine-space line is a plain chord line, not a header continuation
    assert_song(&song).section(0, |section| {
        section
            .line_count(3)
            .line(1, |line| {
                line.assert_chords_only().raw_text(Some("Am  F"));
            })
            .line(2, |line| {
                line.assert_chords_only().raw_text(None);
            });
    });
}

#[test]
fn test_custom_continuation_indent() {
    let source = "---\ntitulo: T\ntom: C\n---\n[INTRO] C  G\n    Am  F\n";
    let config = ParserConfig {
        continuation_indent: 4,
        ..ParserConfig::default()
    };
    let song = parse_song_with(source, &config).unwrap();

    assert_song(&song).section(0, |section| {
        section.line(1, |line| {
            line.assert_chords_only()
                .raw_text(Some("Am  F"))
                .chords(&[("Am", 0), ("F", 4)]);
        });
    });
}

#[test]
fn test_custom_bold_marker() {
    let source = "---\ntitulo: T\ntom: C\n---\n[REFRÃO]\n__Podes partir__\n**fica**\n";
    let config = ParserConfig {
        bold_marker: "__".to_string(),
        ..ParserConfig::default()
    };
    let song = parse_song_with(source, &config).unwrap();

    assert_song(&song).section(0, |section| {
        section
            .line(0, |line| {
                line.assert_lyrics().text("Podes partir").bold(true);
            })
            .line(1, |line| {
                line.assert_lyrics().text("**fica**").bold(false);
            });
    });
}

#[test]
fn test_passage_cue_is_trimmed_but_indented_text_is_kept() {
    let song = song_with_body("[PASSAGEM]\nPulp Fiction  \n   a tocar baixinho\n");

    assert_song(&song).section(0, |section| {
        section
            .kind("PASSAGEM")
            .line(0, |line| {
                line.assert_lyrics().text("Pulp Fiction");
            })
            .line(1, |line| {
                line.assert_lyrics().text("   a tocar baixinho");
            });
    });
}

#[test]
fn test_part_markers_emit_nothing() {
    let song = song_with_body("[parte: Única]\n[tom: G]\n[INTRO]\nla\n");

    assert_song(&song)
        .part_count(1)
        .medley(false)
        .section_kinds(&["INTRO"])
        .part(0, |part| {
            part.name(Some("Única")).key(Some("G"));
        });
}
