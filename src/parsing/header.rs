//! Header extraction
//!
//! A chord sheet opens with a front-matter block:
//!
//!     ---
//!     titulo: Ai Viseu
//!     tom: C
//!     artista: Tunadão 1998
//!     ---
//!
//! Lines between the delimiters are `key: value` pairs split on the first colon. Unknown
//! keys and lines without a colon are ignored; a repeated key keeps its last value.
//!
//! `titulo` and `tom` default to the empty string. `artista` and `subtitulo` are optional,
//! and a key given with an empty value counts as absent, so `artista:` alone yields `None`
//! and the field is left out of serialized output.

use super::ParseError;
use crate::ast::SongMetadata;
use tracing::debug;

const HEADER_DELIMITER: &str = "---";

/// Metadata plus the index of the first body line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub metadata: SongMetadata,
    pub body_start: usize,
}

pub fn extract_header(lines: &[&str]) -> Result<Header, ParseError> {
    match lines.first() {
        Some(first) if first.trim() == HEADER_DELIMITER => {}
        _ => return Err(ParseError::MissingHeaderStart),
    }

    let end = lines
        .iter()
        .skip(1)
        .position(|line| line.trim() == HEADER_DELIMITER)
        .map(|offset| offset + 1)
        .ok_or(ParseError::UnterminatedHeader)?;

    let mut metadata = SongMetadata::default();
    for line in &lines[1..end] {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let value = value.trim();
        match key.trim() {
            "titulo" => metadata.title = value.to_string(),
            "tom" => metadata.key = value.to_string(),
            "artista" => metadata.artist = non_empty(value),
            "subtitulo" => metadata.subtitle = non_empty(value),
            _ => {}
        }
    }

    debug!(title = %metadata.title, key = %metadata.key, body_start = end + 1, "parsed header");
    Ok(Header {
        metadata,
        body_start: end + 1,
    })
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}
