//! Medley splitting
//!
//! A body holding at least one `===` line is a medley. Each chunk between separators
//! becomes one part; the separator lines themselves belong to no chunk. A chunk's
//! `[parte: X]` / `[tom: X]` markers declare that part's metadata.

use crate::ast::PartMetadata;
use crate::lexing::line_classification::{
    classify_bracket, is_medley_separator, BracketLine, PartField,
};

pub fn has_separator(lines: &[&str]) -> bool {
    lines.iter().any(|line| is_medley_separator(line))
}

/// Split the body at every separator line
///
/// A separator on the first body line yields an empty first chunk. An empty chunk after
/// the last separator is dropped.
pub fn split_chunks<'a>(lines: &[&'a str]) -> Vec<Vec<&'a str>> {
    let mut chunks = Vec::new();
    let mut current = Vec::new();
    for &line in lines {
        if is_medley_separator(line) {
            chunks.push(std::mem::take(&mut current));
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

/// Collect the part markers of one chunk; `None` unless a non-empty value was declared
pub fn collect_part_metadata(chunk: &[&str]) -> Option<PartMetadata> {
    let mut metadata = PartMetadata::default();
    for line in chunk {
        let Some(BracketLine::PartMarker(marker)) = classify_bracket(line) else {
            continue;
        };
        if marker.value.is_empty() {
            continue;
        }
        let value = Some(marker.value.to_string());
        match marker.field {
            PartField::Name => metadata.name = value,
            PartField::Key => metadata.key = value,
        }
    }
    metadata.into_option()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_discards_separators() {
        let lines = ["a", "b", "===", "c", " === ", "d"];
        assert!(has_separator(&lines));
        assert_eq!(
            split_chunks(&lines),
            vec![vec!["a", "b"], vec!["c"], vec!["d"]]
        );
    }

    #[test]
    fn test_leading_and_trailing_separators() {
        assert_eq!(
            split_chunks(&["===", "a", "==="]),
            vec![Vec::<&str>::new(), vec!["a"]]
        );
    }

    #[test]
    fn test_no_separator() {
        let lines = ["a", "=="];
        assert!(!has_separator(&lines));
        assert_eq!(split_chunks(&lines), vec![vec!["a", "=="]]);
    }

    #[test]
    fn test_collect_part_metadata() {
        let chunk = ["[parte: Caravelas]", "[tom: Dm]", "[INTRO]", "Dm"];
        assert_eq!(
            collect_part_metadata(&chunk),
            Some(PartMetadata {
                name: Some("Caravelas".to_string()),
                key: Some("Dm".to_string()),
            })
        );
    }

    #[test]
    fn test_partial_part_metadata() {
        let meta = collect_part_metadata(&["[TOM: Am]", "letra"]).unwrap();
        assert_eq!(meta.name, None);
        assert_eq!(meta.key.as_deref(), Some("Am"));
    }

    #[test]
    fn test_no_part_metadata() {
        assert_eq!(collect_part_metadata(&["[INTRO]", "letra"]), None);
        assert_eq!(collect_part_metadata(&["[tom: ]"]), None);
        assert_eq!(collect_part_metadata(&[]), None);
    }
}
