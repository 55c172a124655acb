//! Choice list parsing
//!
//! A `ChoiceSet` is never empty: blank input falls back to a default triple.

use serde::{Deserialize, Serialize};

/// Labels used when the input contains no usable lines
pub const DEFAULT_CHOICES: [&str; 3] = ["Option A", "Option B", "Option C"];

/// Ordered, non-empty list of wheel labels
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct ChoiceSet {
    labels: Vec<String>,
}

impl ChoiceSet {
    /// Build a choice set from raw text, one label per line.
    ///
    /// Whitespace-only lines are dropped; surviving lines keep their text as
    /// typed. Never fails.
    pub fn parse(raw: &str) -> Self {
        Self::from_labels(raw.lines().map(str::to_owned))
    }

    fn from_labels(labels: impl IntoIterator<Item = String>) -> Self {
        let labels: Vec<String> = labels
            .into_iter()
            .filter(|line| !line.trim().is_empty())
            .collect();

        if labels.is_empty() {
            log::debug!("No usable choices, falling back to defaults");
            return Self::default();
        }

        Self { labels }
    }

    /// Number of slices (always >= 1)
    #[inline]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Always false; kept for API symmetry with collections
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    pub fn is_default(&self) -> bool {
        self.labels.iter().map(String::as_str).eq(DEFAULT_CHOICES)
    }
}

impl Default for ChoiceSet {
    fn default() -> Self {
        Self {
            labels: DEFAULT_CHOICES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl From<Vec<String>> for ChoiceSet {
    fn from(labels: Vec<String>) -> Self {
        Self::from_labels(labels)
    }
}

impl From<ChoiceSet> for Vec<String> {
    fn from(set: ChoiceSet) -> Self {
        set.labels
    }
}

/// Replace the current choices from raw input text
pub fn set_choices(raw: &str) -> ChoiceSet {
    ChoiceSet::parse(raw)
}

/// Cut a label to at most `max_chars` characters for display
pub fn display_label(label: &str, max_chars: usize) -> &str {
    match label.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &label[..byte_idx],
        None => label,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_uses_defaults() {
        let set = set_choices("");
        assert_eq!(set.len(), 3);
        assert!(set.is_default());
        assert_eq!(set.get(0), Some("Option A"));
    }

    #[test]
    fn test_whitespace_only_input_uses_defaults() {
        let set = set_choices("   \n\t\n \r\n");
        assert!(set.is_default());
    }

    #[test]
    fn test_blank_lines_dropped_order_kept() {
        let set = set_choices("Pizza\n\n  \nSushi\r\nTacos\n");
        let labels: Vec<&str> = set.iter().collect();
        assert_eq!(labels, vec!["Pizza", "Sushi", "Tacos"]);
    }

    #[test]
    fn test_labels_not_trimmed() {
        let set = set_choices("  padded  \nplain");
        assert_eq!(set.get(0), Some("  padded  "));
        assert_eq!(set.get(2), None);
    }

    #[test]
    fn test_deserialize_enforces_invariant() {
        let set: ChoiceSet = serde_json::from_str(r#"["", "   "]"#).unwrap();
        assert!(set.is_default());

        let set: ChoiceSet = serde_json::from_str(r#"["Yes", "", "No"]"#).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(serde_json::to_string(&set).unwrap(), r#"["Yes","No"]"#);
    }

    #[test]
    fn test_display_label_truncates_by_char() {
        assert_eq!(display_label("short", 20), "short");
        assert_eq!(display_label("abcdefghijklmnopqrstuvwxyz", 20), "abcdefghijklmnopqrst");
        assert_eq!(display_label("Şans Kader Kısmet", 4), "Şans");
    }
}
