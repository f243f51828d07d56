//! Parsing entry points
//!
//!     Source text goes through three stages:
//!
//!         1. Header: the `---` block is split off and read into [SongMetadata](crate::ast::SongMetadata).
//!         2. Medley split: when the body holds `===` lines it is cut into chunks, each
//!            with the part metadata declared by its own markers.
//!         3. Building: each chunk (or the whole body) is turned into sections by the
//!            [section builder](crate::building).
//!
//!     Only the header can fail. Everything after it is classified best-effort: any line
//!     ends up as a lyric, a chord line, an instruction or a section header.
//!
//! Terminology
//!
//!     - **body**: the lines after the closing `---`, trailing blank lines removed
//!     - **chunk**: the body lines of one medley part
//!
//! Testing
//!
//!     Tests should use [crate::testing::assert_song] over sources from
//!     [crate::testing::samples] rather than matching on the tree by hand.

pub mod header;
pub mod medley;

use crate::ast::{Song, SongPart};
use crate::building::build_sections;
use crate::config::ParserConfig;
use thiserror::Error;
use tracing::debug;

pub use header::{extract_header, Header};

/// Fatal header errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("missing header start: a chord sheet must begin with a `---` line")]
    MissingHeaderStart,
    #[error("unterminated header: no closing `---` line after the header block")]
    UnterminatedHeader,
}

/// Parse a chord sheet with the default options
pub fn parse_song(source: &str) -> Result<Song, ParseError> {
    parse_song_with(source, &ParserConfig::default())
}

pub fn parse_song_with(source: &str, config: &ParserConfig) -> Result<Song, ParseError> {
    let mut lines: Vec<&str> = source.lines().collect();
    while lines.last().is_some_and(|line| line.trim().is_empty()) {
        lines.pop();
    }

    let Header {
        metadata,
        body_start,
    } = extract_header(&lines)?;
    let body = &lines[body_start..];

    if !medley::has_separator(body) {
        return Ok(Song::new(metadata, vec![build_part(body, config)]));
    }

    let parts: Vec<SongPart> = medley::split_chunks(body)
        .iter()
        .map(|chunk| build_part(chunk, config))
        .collect();
    debug!(parts = parts.len(), "split medley");
    Ok(Song::new(metadata, parts))
}

fn build_part(chunk: &[&str], config: &ParserConfig) -> SongPart {
    SongPart::new(
        medley::collect_part_metadata(chunk),
        build_sections(chunk, config),
    )
}
