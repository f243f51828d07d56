//! Song snapshots
//!
//! A snapshot is the song flattened into generic nodes: a type name, a label, string
//! attributes and children. Text formatters such as treeviz walk snapshots instead of the
//! typed tree, so adding a format never touches `Song`, `SongPart` or `Section`.
//!
//! Chords become children of their line so that a tree view shows the alignment offsets
//! next to the text they decorate.

use super::traits::AstNode;
use super::{Section, Song, SongLine, SongPart};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SongSnapshot {
    /// `Song`, `Part`, `Section`, `Lyrics`, `Chord` ...
    pub node_type: String,
    pub label: String,
    /// Extra facts such as `isChorus` or `partName`; ordered for stable output
    pub attributes: BTreeMap<String, String>,
    pub children: Vec<SongSnapshot>,
}

impl SongSnapshot {
    pub fn new(node_type: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            node_type: node_type.into(),
            label: label.into(),
            attributes: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    /// Leaf snapshot carrying the node's type and display label
    pub fn of<T: AstNode>(node: &T) -> Self {
        Self::new(node.node_type(), node.display_label())
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn with_child(mut self, child: SongSnapshot) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: Vec<SongSnapshot>) -> Self {
        self.children.extend(children);
        self
    }
}

/// Build the snapshot of a whole song
///
/// When `include_chords` is false, chord positions are left out and only the line
/// structure is kept.
pub fn snapshot_from_song(song: &Song, include_chords: bool) -> SongSnapshot {
    let mut snapshot = SongSnapshot::of(song);
    if let Some(artist) = &song.metadata.artist {
        snapshot = snapshot.with_attribute("artist", artist.clone());
    }
    if let Some(subtitle) = &song.metadata.subtitle {
        snapshot = snapshot.with_attribute("subtitle", subtitle.clone());
    }

    // A plain song shows its sections directly under the root
    if song.parts.len() == 1 {
        let part = &song.parts[0];
        return snapshot.with_children(
            part.sections
                .iter()
                .map(|s| snapshot_from_section(s, include_chords))
                .collect(),
        );
    }

    snapshot.with_children(
        song.parts
            .iter()
            .map(|p| snapshot_from_part(p, include_chords))
            .collect(),
    )
}

pub fn snapshot_from_part(part: &SongPart, include_chords: bool) -> SongSnapshot {
    let mut snapshot = SongSnapshot::of(part);
    if let Some(name) = part.name() {
        snapshot = snapshot.with_attribute("partName", name);
    }
    if let Some(key) = part.key() {
        snapshot = snapshot.with_attribute("key", key);
    }
    snapshot.with_children(
        part.sections
            .iter()
            .map(|s| snapshot_from_section(s, include_chords))
            .collect(),
    )
}

pub fn snapshot_from_section(section: &Section, include_chords: bool) -> SongSnapshot {
    let mut snapshot = SongSnapshot::of(section);
    if section.is_chorus {
        snapshot = snapshot.with_attribute("isChorus", "true");
    }
    snapshot.with_children(
        section
            .lines
            .iter()
            .map(|l| snapshot_from_line(l, include_chords))
            .collect(),
    )
}

pub fn snapshot_from_line(line: &SongLine, include_chords: bool) -> SongSnapshot {
    let mut snapshot = SongSnapshot::of(line);
    if line.is_bold() {
        snapshot = snapshot.with_attribute("isBold", "true");
    }
    if include_chords {
        snapshot = snapshot.with_children(line.chords().iter().map(SongSnapshot::of).collect());
    }
    snapshot
}
