//! Verified sample chord sheets
//!
//! Sample files live under `samples/<songbook>/<name>.txt` at the crate root. Tests load
//! them by name instead of embedding ad-hoc chord-sheet strings, so a change to the
//! format means updating one file rather than hunting through test code.
//!
//!     let song = Samples::song("ai-viseu").parse();
//!     let source = Samples::song("vejam-bem").source();
//!     let names = Samples::list();

use crate::ast::Song;
use crate::config::ParserConfig;
use crate::parsing::{parse_song_with, ParseError};
use std::fs;
use std::path::PathBuf;

const DEFAULT_SONGBOOK: &str = "tunadao";

/// Entry point for sample lookup
pub struct Samples;

impl Samples {
    /// Root of the sample tree
    pub fn root() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("samples")
    }

    /// A sample from the default songbook
    pub fn song(name: &str) -> SampleLoader {
        Self::from_songbook(DEFAULT_SONGBOOK, name)
    }

    pub fn from_songbook(songbook: &str, name: &str) -> SampleLoader {
        SampleLoader {
            path: Self::root().join(songbook).join(format!("{name}.txt")),
        }
    }

    /// Names of every sample in the default songbook, sorted
    pub fn list() -> Vec<String> {
        let dir = Self::root().join(DEFAULT_SONGBOOK);
        let entries = fs::read_dir(&dir)
            .unwrap_or_else(|e| panic!("Failed to read samples in {}: {}", dir.display(), e));
        let mut names: Vec<String> = entries
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "txt"))
            .filter_map(|path| path.file_stem().map(|s| s.to_string_lossy().into_owned()))
            .collect();
        names.sort();
        names
    }
}

pub struct SampleLoader {
    path: PathBuf,
}

impl SampleLoader {
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    pub fn source(&self) -> String {
        fs::read_to_string(&self.path)
            .unwrap_or_else(|e| panic!("Failed to read sample {}: {}", self.path.display(), e))
    }

    /// Parse with default options; panics if the sample does not parse
    pub fn parse(&self) -> Song {
        self.try_parse_with(&ParserConfig::default())
            .unwrap_or_else(|e| panic!("Failed to parse sample {}: {}", self.path.display(), e))
    }

    pub fn try_parse_with(&self, config: &ParserConfig) -> Result<Song, ParseError> {
        parse_song_with(&self.source(), config)
    }
}
