//! Song loading utilities
//!
//! `SongLoader` reads chord-sheet text from a file or a string and parses it. Reading
//! the file is the only I/O in the crate; parsing stays a pure function of the text.
//!
//! # Example
//!
//! ```rust,ignore
//! use cifra::loader::SongLoader;
//!
//! let song = SongLoader::from_path("samples/tunadao/ai-viseu.txt")?.parse()?;
//! let song = SongLoader::from_string("---\ntitulo: X\n---\n").parse()?;
//! ```

use crate::ast::Song;
use crate::config::ParserConfig;
use crate::parsing::{parse_song_with, ParseError};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Error that can occur when loading songs
#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
}

pub struct SongLoader {
    source: String,
}

impl SongLoader {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let source = fs::read_to_string(path)?;
        Ok(SongLoader { source })
    }

    pub fn from_string<S: Into<String>>(source: S) -> Self {
        SongLoader {
            source: source.into(),
        }
    }

    /// The raw chord-sheet text
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn parse(&self) -> Result<Song, LoaderError> {
        self.parse_with(&ParserConfig::default())
    }

    pub fn parse_with(&self, config: &ParserConfig) -> Result<Song, LoaderError> {
        Ok(parse_song_with(&self.source, config)?)
    }
}
