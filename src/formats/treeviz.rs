//! Treeviz formatter for songs
//!
//! Treeviz is a one line per node view of the song tree, handy for checking how a chord
//! sheet was read. Nesting is drawn with box connectors:
//!
//!     <prefix><connector> <icon> <label>
//!
//! Labels longer than the configured width are truncated with `...`.
//!
//! Example:
//!
//!     ♫ Ai Viseu (C)
//!     ├─ § INTRO (1 lines)
//!     │ └─ ♯ C G C
//!     │   ├─ ◦ C@0
//!     │   ├─ ◦ G@3
//!     │   └─ ◦ C@6
//!     └─ § REFRÃO (2 lines)
//!       ├─ ¶ Tens ruelas tortuosas
//!       └─ ↵
//!
//! Icons
//!     Song: ♫
//!     Part: ⧉
//!     Section: §
//!     Lyrics: ¶
//!     ChordsOnly: ♯
//!     Instruction: ➔
//!     Empty: ↵
//!     Chord: ◦

use super::registry::{FormatError, Formatter};
use crate::ast::{snapshot_from_song, Song, SongSnapshot};
use crate::config::InspectConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreevizOptions {
    /// Emit chord positions as children of their line
    pub show_positions: bool,
    /// Maximum label length in characters
    pub label_width: usize,
}

impl Default for TreevizOptions {
    fn default() -> Self {
        Self::from(&InspectConfig::default())
    }
}

impl From<&InspectConfig> for TreevizOptions {
    fn from(config: &InspectConfig) -> Self {
        Self {
            show_positions: config.show_positions,
            label_width: config.label_width,
        }
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

fn get_icon(node_type: &str) -> &'static str {
    match node_type {
        "Song" => "♫",
        "Part" => "⧉",
        "Section" => "§",
        "Lyrics" => "¶",
        "ChordsOnly" => "♯",
        "Instruction" => "➔",
        "Empty" => "↵",
        "Chord" => "◦",
        _ => "○",
    }
}

fn node_line(snapshot: &SongSnapshot, options: &TreevizOptions) -> String {
    let icon = get_icon(&snapshot.node_type);
    if snapshot.label.is_empty() {
        icon.to_string()
    } else {
        format!("{} {}", icon, truncate(&snapshot.label, options.label_width))
    }
}

fn format_snapshot(
    snapshot: &SongSnapshot,
    prefix: &str,
    is_last: bool,
    options: &TreevizOptions,
    output: &mut String,
) {
    let connector = if is_last { "└─" } else { "├─" };
    output.push_str(&format!(
        "{}{} {}\n",
        prefix,
        connector,
        node_line(snapshot, options)
    ));

    let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    let child_count = snapshot.children.len();
    for (i, child) in snapshot.children.iter().enumerate() {
        format_snapshot(child, &child_prefix, i + 1 == child_count, options, output);
    }
}

pub fn to_treeviz_str(song: &Song) -> String {
    to_treeviz_str_with_options(song, &TreevizOptions::default())
}

pub fn to_treeviz_str_with_options(song: &Song, options: &TreevizOptions) -> String {
    let snapshot = snapshot_from_song(song, options.show_positions);
    let mut output = format!("{}\n", node_line(&snapshot, options));

    let child_count = snapshot.children.len();
    for (i, child) in snapshot.children.iter().enumerate() {
        format_snapshot(child, "", i + 1 == child_count, options, &mut output);
    }
    output
}

/// Formatter implementation for treeviz format
#[derive(Debug, Clone, Default)]
pub struct TreevizFormatter {
    options: TreevizOptions,
}

impl TreevizFormatter {
    pub fn new(options: TreevizOptions) -> Self {
        Self { options }
    }
}

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn serialize(&self, song: &Song) -> Result<String, FormatError> {
        Ok(to_treeviz_str_with_options(song, &self.options))
    }

    fn description(&self) -> &str {
        "Visual tree representation with box connectors and icons"
    }
}
