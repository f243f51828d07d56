//! How an expected lyric or instruction text is compared against the parsed one

#[derive(Debug, Clone)]
pub enum TextMatch {
    Exact(String),
    StartsWith(String),
    Contains(String),
}

impl TextMatch {
    pub fn matches(&self, actual: &str) -> bool {
        match self {
            TextMatch::Exact(expected) => actual == expected,
            TextMatch::StartsWith(prefix) => actual.starts_with(prefix.as_str()),
            TextMatch::Contains(fragment) => actual.contains(fragment.as_str()),
        }
    }

    fn describe(&self) -> String {
        match self {
            TextMatch::Exact(expected) => format!("text '{expected}'"),
            TextMatch::StartsWith(prefix) => format!("text starting with '{prefix}'"),
            TextMatch::Contains(fragment) => format!("text containing '{fragment}'"),
        }
    }

    /// Panics naming `context` (e.g. `parts[0].sections[1].lines[2]`) on mismatch
    pub fn assert(&self, actual: &str, context: &str) {
        assert!(
            self.matches(actual),
            "{context}: wanted {}, found '{actual}'",
            self.describe()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches() {
        let verse = "Ai Viseu, terra de encanto";
        assert!(TextMatch::Exact(verse.into()).matches(verse));
        assert!(TextMatch::StartsWith("Ai Viseu".into()).matches(verse));
        assert!(TextMatch::Contains("encanto".into()).matches(verse));
        assert!(!TextMatch::Exact("Ai Viseu".into()).matches(verse));
        assert!(!TextMatch::StartsWith("terra".into()).matches(verse));
    }

    #[test]
    #[should_panic(expected = "lines[0]: wanted text containing 'saudade', found 'Ai Viseu'")]
    fn test_assert_reports_context() {
        TextMatch::Contains("saudade".into()).assert("Ai Viseu", "lines[0]");
    }
}
