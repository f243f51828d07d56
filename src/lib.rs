//! # cifra
//!
//! A parser for plain-text chord sheets ("cifras"): lyrics with chord symbols written
//! above them, bracketed section headers, performance instructions and `===`-separated
//! medleys.
//!
//!     ---
//!     titulo: Ai Viseu
//!     tom: C
//!     ---
//!     [INTRO] C  G  C
//!
//!     [REFRÃO]
//!     C                  G
//!     **Tens ruelas tortuosas**
//!
//! [parse_song] turns such a text into a [Song](ast::Song): parts, sections and typed
//! lines, with every chord carrying the character offset it sits over.
//!
//! ## Layout
//!
//!     ast        the song tree and its snapshot form
//!     lexing     chord grammar and single-line classification
//!     building   the section builder state machine
//!     parsing    header, medley split and the entry points
//!     config     parser and inspection options
//!     loader     read a chord sheet from disk or memory
//!     formats    treeviz / json / yaml output
//!     testing    fluent assertions and verified samples
//!
//! ## Testing
//!
//! For testing guidelines, see the [testing module](testing).

pub mod ast;
pub mod building;
pub mod config;
pub mod formats;
pub mod lexing;
pub mod loader;
pub mod parsing;
pub mod testing;

pub use ast::{ChordPosition, PartMetadata, Section, Song, SongLine, SongMetadata, SongPart};
pub use parsing::{parse_song, parse_song_with, ParseError};
