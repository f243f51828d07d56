//! Document model for parsed chord sheets
//!
//!     A chord sheet parses into a [Song](song::Song). The tree is shallow and fixed in depth:
//!
//!         Song
//!         └── SongPart          one per medley chunk (exactly one for a plain song)
//!             └── Section       INTRO, REFRÃO, SOLISTA, custom labels, or untyped
//!                 └── SongLine  lyrics | chords-only | instruction | empty
//!
//!     The tree is produced in a single pass by the [building](crate::building) module and
//!     is not mutated afterwards. Every node is serde-serializable; the serialized shape is
//!     the contract handed to renderers (see [formats](crate::formats)).
//!
//! Chord Alignment
//!
//!     Chords are stored as [ChordPosition](chord::ChordPosition) values: the chord symbol
//!     and the character offset where it starts. For a chord line paired with a lyric line
//!     the offset indexes into the lyric text, so a renderer can place the chord glyph
//!     above the right character:
//!
//!         "   C        G"          chord line
//!         "Olá mundo, olá"         lyric line
//!          → [C@3, G@12]
//!
//!     Offsets count characters, not bytes, so accented lyrics keep their alignment.
//!
//! Modules
//!
//!     - `song`, `part`, `section`, `line`, `chord` - the node types
//!     - `traits` - uniform node description ([AstNode](traits::AstNode))
//!     - `snapshot` - normalized tree used by textual formatters

pub mod chord;
pub mod line;
pub mod part;
pub mod section;
pub mod snapshot;
pub mod song;
pub mod traits;

pub use chord::ChordPosition;
pub use line::SongLine;
pub use part::{PartMetadata, SongPart};
pub use section::Section;
pub use snapshot::{snapshot_from_song, SongSnapshot};
pub use song::{Song, SongMetadata};
pub use traits::AstNode;
