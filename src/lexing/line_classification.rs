//! Line Classification
//!
//! Pure predicates over single lines. Nothing here looks at neighbouring lines; the
//! lookahead decisions (chord/lyric pairing, continuation grabs) belong to the
//! [builder](crate::building).
//!
//! Bracketed Lines
//!
//!     A line starting with `[` is resolved by an ordered chain of mutually exclusive
//!     checks over the bracket content (text up to the first `]`). The first match wins:
//!
//!         1. `parte:` / `tom:` prefix          → PartMarker
//!         2. known section name               → KnownSection (trailing text is inline content)
//!         3. trailing text is a chord line    → InlineChordSection
//!         4. contains an instruction keyword  → Instruction (whole outermost content)
//!         5. anything else                    → CustomSection
//!
//!     Markers and instructions must close the line with `]`; otherwise the line is not a
//!     bracket line at all and falls through to lyric handling.

use super::chords::is_chord_token;
use once_cell::sync::Lazy;
use regex::Regex;

/// Section names recognized regardless of what follows the bracket, in folded form
const KNOWN_SECTIONS: &[&str] = &[
    "INTRO", "REFRAO", "PASSAGEM", "SOLO", "INSTR.", "SAIDA", "SOLISTA", "/SOLISTA",
];

/// Substrings that turn an otherwise unknown bracket into an instruction
const INSTRUCTION_KEYWORDS: &[&str] = &[
    "SOBE",
    "REPETE",
    "PARAM",
    "CONCLUSÃO",
    "ANEXO",
    "SAÍDA PARA",
    "MISSÃO",
];

const MEDLEY_SEPARATOR: &str = "===";
const SOLISTA_OPEN: &str = "[SOLISTA]";
const SOLISTA_CLOSE: &str = "[/SOLISTA]";

/// Trailing `(2x)`
static REPETITION_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\([0-9]+x\)\s*$").expect("repetition pattern is valid"));

/// Trailing `} 2x` closing a brace-delimited repetition
static BRACE_REPETITION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)[{}]\s*[0-9]*x?\s*$").expect("brace repetition pattern is valid")
});

pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// A line that is exactly `===` once trimmed splits a medley into parts
pub fn is_medley_separator(line: &str) -> bool {
    line.trim() == MEDLEY_SEPARATOR
}

/// Check if every token of the line is a chord
///
/// A trailing repetition annotation (`(2x)` or a closing `} 2x`) is ignored. Any other
/// brace is part of its token, so `{ Gm  Dm` opening a repeated block is not a chord line.
pub fn is_chord_line(line: &str) -> bool {
    if is_blank(line) {
        return false;
    }
    let cleaned = REPETITION_REGEX.replace(line, "");
    let cleaned = BRACE_REPETITION_REGEX.replace(&cleaned, "");

    let mut tokens = cleaned.split_whitespace().peekable();

    tokens.peek().is_some() && tokens.all(is_chord_token)
}

/// Check if the line starts with at least `width` spaces
pub fn has_indent(line: &str, width: usize) -> bool {
    line.len() >= width && line.bytes().take(width).all(|b| b == b' ')
}

/// Lyric text with bold markers removed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoldText {
    pub text: String,
    pub bold: bool,
}

/// Remove every occurrence of the bold marker; the line is bold if it held any
pub fn strip_bold(line: &str, marker: &str) -> BoldText {
    if marker.is_empty() || !line.contains(marker) {
        return BoldText {
            text: line.to_string(),
            bold: false,
        };
    }
    BoldText {
        text: line.replace(marker, ""),
        bold: true,
    }
}

/// Normalize a section label for comparison: uppercase, single spaces, no accents
pub fn fold_label(label: &str) -> String {
    label
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .chars()
        .flat_map(char::to_uppercase)
        .map(strip_accent)
        .collect()
}

fn strip_accent(c: char) -> char {
    match c {
        'Á' | 'À' | 'Â' | 'Ã' | 'Ä' => 'A',
        'É' | 'È' | 'Ê' | 'Ë' => 'E',
        'Í' | 'Ì' | 'Î' | 'Ï' => 'I',
        'Ó' | 'Ò' | 'Ô' | 'Õ' | 'Ö' => 'O',
        'Ú' | 'Ù' | 'Û' | 'Ü' => 'U',
        'Ç' => 'C',
        other => other,
    }
}

pub fn is_known_section(label: &str) -> bool {
    let folded = fold_label(label);
    KNOWN_SECTIONS.contains(&folded.as_str())
}

/// REFRÃO / REFRAO in any case
pub fn is_refrain_label(label: &str) -> bool {
    fold_label(label) == "REFRAO"
}

/// PASSAGEM in any case
pub fn is_passage_label(label: &str) -> bool {
    fold_label(label) == "PASSAGEM"
}

pub fn has_instruction_keyword(content: &str) -> bool {
    let upper = content.to_uppercase();
    INSTRUCTION_KEYWORDS.iter().any(|kw| upper.contains(kw))
}

/// Which part field a marker declares
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartField {
    /// `[parte: NAME]`
    Name,
    /// `[tom: KEY]`
    Key,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartMarker<'a> {
    pub field: PartField,
    pub value: &'a str,
}

/// Classification of a bracketed line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BracketLine<'a> {
    PartMarker(PartMarker<'a>),
    KnownSection {
        label: &'a str,
        inline: Option<&'a str>,
    },
    InlineChordSection {
        label: &'a str,
        inline: &'a str,
    },
    Instruction(&'a str),
    CustomSection {
        label: &'a str,
    },
}

impl<'a> BracketLine<'a> {
    /// Label of the section this line opens, if it opens one
    pub fn section_label(&self) -> Option<&'a str> {
        match *self {
            BracketLine::KnownSection { label, .. }
            | BracketLine::InlineChordSection { label, .. }
            | BracketLine::CustomSection { label } => Some(label),
            BracketLine::PartMarker(_) | BracketLine::Instruction(_) => None,
        }
    }

    /// Text following the closing bracket of a section header
    pub fn inline_content(&self) -> Option<&'a str> {
        match *self {
            BracketLine::KnownSection { inline, .. } => inline,
            BracketLine::InlineChordSection { inline, .. } => Some(inline),
            _ => None,
        }
    }
}

/// Classify a bracketed line; `None` for anything that is not one
pub fn classify_bracket(line: &str) -> Option<BracketLine<'_>> {
    let trimmed = line.trim();
    let rest = trimmed.strip_prefix('[')?;
    let close = rest.find(']')?;
    let content = &rest[..close];
    if content.is_empty() {
        return None;
    }
    // Content between the first `[` and the last `]`, when the line closes with one
    let outer = trimmed
        .strip_suffix(']')
        .map(|inner| &inner[1..])
        .filter(|inner| !inner.is_empty());
    let after = rest[close + 1..].trim();
    let inline = (!after.is_empty()).then_some(after);

    if let Some(field) = part_field(content) {
        let outer = outer?;
        let value = outer[outer.find(':')? + 1..].trim();
        return Some(BracketLine::PartMarker(PartMarker { field, value }));
    }

    if is_known_section(content) {
        return Some(BracketLine::KnownSection {
            label: content,
            inline,
        });
    }

    if let Some(inline) = inline.filter(|text| is_chord_line(text)) {
        return Some(BracketLine::InlineChordSection {
            label: content,
            inline,
        });
    }

    if has_instruction_keyword(content) {
        return outer.map(BracketLine::Instruction);
    }

    Some(BracketLine::CustomSection { label: content })
}

fn part_field(content: &str) -> Option<PartField> {
    let lower = content.trim_start().to_ascii_lowercase();
    if lower.starts_with("parte:") {
        Some(PartField::Name)
    } else if lower.starts_with("tom:") {
        Some(PartField::Key)
    } else {
        None
    }
}

/// Delimiters of a free-text soloist block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolistaMarker {
    Open,
    Close,
}

pub fn solista_marker(line: &str) -> Option<SolistaMarker> {
    match line.trim() {
        SOLISTA_OPEN => Some(SolistaMarker::Open),
        SOLISTA_CLOSE => Some(SolistaMarker::Close),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("C")]
    #[case(" C")]
    #[case("   G                 D")]
    #[case("Am  F  C  G (2x)")]
    #[case("Dm  A7 } 2x")]
    #[case("Dm  A7 }")]
    #[case("C  G  Am  F   (4x)   ")]
    fn test_chord_lines(#[case] line: &str) {
        assert!(is_chord_line(line), "{line:?} should be a chord line");
    }

    #[rstest]
    #[case("")]
    #[case("     ")]
    #[case("(2x)")]
    #[case("} 2x")]
    #[case("{ Dm  A7 } 2X")]
    #[case("{Dm A7}")]
    #[case("{ Gm              Dm")]
    #[case("Olá mundo")]
    #[case("A vida é bela")]
    #[case("C G Am7")]
    #[case("[INTRO] C G")]
    fn test_non_chord_lines(#[case] line: &str) {
        assert!(!is_chord_line(line), "{line:?} should not be a chord line");
    }

    #[test]
    fn test_medley_separator() {
        assert!(is_medley_separator("==="));
        assert!(is_medley_separator("  ===  "));
        assert!(!is_medley_separator("===="));
        assert!(!is_medley_separator("= = ="));
    }

    #[test]
    fn test_strip_bold() {
        assert_eq!(
            strip_bold("**Tens ruelas tortuosas**", "**"),
            BoldText {
                text: "Tens ruelas tortuosas".to_string(),
                bold: true
            }
        );
        assert_eq!(
            strip_bold("  Meu **barco** está", "**"),
            BoldText {
                text: "  Meu barco está".to_string(),
                bold: true
            }
        );
        assert!(!strip_bold("sem negrito", "**").bold);
        assert!(!strip_bold("um * só", "**").bold);
    }

    #[test]
    fn test_has_indent() {
        assert!(has_indent("          C  G", 10));
        assert!(!has_indent("         C  G", 10));
        assert!(!has_indent("\t\tC", 2));
    }

    #[test]
    fn test_fold_label() {
        assert_eq!(fold_label("  Refrão "), "REFRAO");
        assert_eq!(fold_label("saída"), "SAIDA");
        assert_eq!(fold_label("PÕE  A MÃO"), "POE A MAO");
    }

    #[rstest]
    #[case("INTRO", true)]
    #[case("intro", true)]
    #[case("REFRÃO", true)]
    #[case("Refrao", true)]
    #[case("INSTR.", true)]
    #[case("SAÍDA", true)]
    #[case("/SOLISTA", true)]
    #[case("VERSO", false)]
    #[case("SAÍDA PARA AI VISEU", false)]
    fn test_known_sections(#[case] label: &str, #[case] expected: bool) {
        assert_eq!(is_known_section(label), expected, "{label}");
    }

    #[test]
    fn test_bracket_part_markers() {
        assert_eq!(
            classify_bracket("[parte: Caravelas]"),
            Some(BracketLine::PartMarker(PartMarker {
                field: PartField::Name,
                value: "Caravelas"
            }))
        );
        assert_eq!(
            classify_bracket("  [TOM:Am]  "),
            Some(BracketLine::PartMarker(PartMarker {
                field: PartField::Key,
                value: "Am"
            }))
        );
        // A marker must close the line
        assert_eq!(classify_bracket("[tom: C] e mais"), None);
    }

    #[test]
    fn test_bracket_known_section() {
        assert_eq!(
            classify_bracket("[INTRO]"),
            Some(BracketLine::KnownSection {
                label: "INTRO",
                inline: None
            })
        );
        assert_eq!(
            classify_bracket("[PASSAGEM] Pulp Fiction   A# A"),
            Some(BracketLine::KnownSection {
                label: "PASSAGEM",
                inline: Some("Pulp Fiction   A# A")
            })
        );
    }

    #[test]
    fn test_bracket_inline_chord_section() {
        let line = classify_bracket("[PONTE]  Am  G  F  E").unwrap();
        assert_eq!(
            line,
            BracketLine::InlineChordSection {
                label: "PONTE",
                inline: "Am  G  F  E"
            }
        );
        assert_eq!(line.section_label(), Some("PONTE"));
        assert_eq!(line.inline_content(), Some("Am  G  F  E"));
    }

    #[rstest]
    #[case("[SOBE UM TOM]", "SOBE UM TOM")]
    #[case("[Repete 2x]", "Repete 2x")]
    #[case("[Param os instrumentos]", "Param os instrumentos")]
    #[case("[CONCLUSÃO – ANEXO]", "CONCLUSÃO – ANEXO")]
    #[case("[SAÍDA PARA AI VISEU]", "SAÍDA PARA AI VISEU")]
    #[case("[Missão cumprida]", "Missão cumprida")]
    fn test_bracket_instructions(#[case] line: &str, #[case] expected: &str) {
        assert_eq!(
            classify_bracket(line),
            Some(BracketLine::Instruction(expected))
        );
    }

    #[test]
    fn test_instruction_must_close_the_line() {
        assert_eq!(classify_bracket("[Repete 2x] outra vez"), None);
    }

    #[test]
    fn test_bracket_custom_section() {
        let line = classify_bracket("[PÕE A MÃO NA CABECINHA]").unwrap();
        assert_eq!(
            line,
            BracketLine::CustomSection {
                label: "PÕE A MÃO NA CABECINHA"
            }
        );
        assert_eq!(line.inline_content(), None);
    }

    #[test]
    fn test_keyword_substring_wins_over_custom_section() {
        // Known ambiguity: a title that merely contains "SOBE" reads as an instruction
        assert_eq!(
            classify_bracket("[QUEM SOBE A SERRA]"),
            Some(BracketLine::Instruction("QUEM SOBE A SERRA"))
        );
    }

    #[test]
    fn test_not_bracketed() {
        assert_eq!(classify_bracket("Olá mundo"), None);
        assert_eq!(classify_bracket("[]"), None);
        assert_eq!(classify_bracket("[sem fecho"), None);
    }

    #[test]
    fn test_solista_markers() {
        assert_eq!(solista_marker("[SOLISTA]"), Some(SolistaMarker::Open));
        assert_eq!(solista_marker("  [/SOLISTA] "), Some(SolistaMarker::Close));
        assert_eq!(solista_marker("[solista]"), None);
        assert_eq!(solista_marker("[SOLISTA] Em"), None);
    }

    #[test]
    fn test_refrain_and_passage_labels() {
        assert!(is_refrain_label("refrão"));
        assert!(!is_refrain_label("REFRÃO 2"));
        assert!(is_passage_label("Passagem"));
        assert!(!is_passage_label("PASSAGEM FINAL"));
    }
}
