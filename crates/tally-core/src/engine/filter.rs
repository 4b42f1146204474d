//! Context-marker filter for page-number suppression.
//!
//! Printed documents carry running footers like "Page 3 of 10" whose digits
//! are not data. The filter inspects a fixed-radius window around each token
//! and drops the token when a marker word appears inside it. Purely
//! heuristic: false positives and false negatives are accepted.

use regex::Regex;
use tracing::warn;

/// Whole-word, case-insensitive marker matcher over a character window.
pub struct ContextFilter {
    radius: usize,
    pattern: Option<Regex>,
}

impl ContextFilter {
    /// Build a filter for the given window radius and marker words.
    ///
    /// An empty word list yields a filter that never matches.
    pub fn new(radius: usize, words: &[String]) -> Self {
        let pattern = if words.is_empty() {
            None
        } else {
            let alternation = words
                .iter()
                .map(|w| regex::escape(w))
                .collect::<Vec<_>>()
                .join("|");
            match Regex::new(&format!(r"(?i)\b(?:{alternation})\b")) {
                Ok(re) => Some(re),
                Err(e) => {
                    warn!("invalid marker word list, filter disabled: {}", e);
                    None
                }
            }
        };

        Self { radius, pattern }
    }

    /// Whether the window around `[start, end)` contains a marker word.
    pub fn matches(&self, text: &str, start: usize, end: usize) -> bool {
        let Some(pattern) = &self.pattern else {
            return false;
        };
        pattern.is_match(context_window(text, start, end, self.radius))
    }
}

/// The window of `radius` characters before `start` and after `end`,
/// clipped to the text bounds.
pub(crate) fn context_window(text: &str, start: usize, end: usize, radius: usize) -> &str {
    let left = text[..start]
        .char_indices()
        .rev()
        .take(radius)
        .last()
        .map_or(start, |(i, _)| i);
    let right = text[end..]
        .char_indices()
        .nth(radius)
        .map_or(text.len(), |(i, _)| end + i);
    &text[left..right]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn window_is_clipped_to_bounds() {
        let text = "abc 12 def";
        assert_eq!(context_window(text, 4, 6, 30), text);
        assert_eq!(context_window(text, 4, 6, 2), "c 12 d");
        assert_eq!(context_window(text, 4, 6, 0), "12");
    }

    #[test]
    fn window_respects_char_boundaries() {
        let text = "złoty 5 złoty";
        let start = text.find('5').unwrap();
        let window = context_window(text, start, start + 1, 3);
        assert_eq!(window, "ty 5 zł");
    }

    #[test]
    fn marker_word_is_case_insensitive() {
        let filter = ContextFilter::new(30, &["page".into(), "pg".into()]);
        assert!(filter.matches("PAGE 3", 5, 6));
        assert!(filter.matches("see pg 7", 7, 8));
    }

    #[test]
    fn marker_must_be_a_whole_word() {
        let filter = ContextFilter::new(30, &["page".into(), "pg".into()]);
        assert!(!filter.matches("pages 3", 6, 7));
        assert!(!filter.matches("kpg 3", 4, 5));
    }

    #[test]
    fn marker_outside_radius_is_ignored() {
        let filter = ContextFilter::new(5, &["page".into()]);
        let text = "page xxxxxxxxxx 3";
        let start = text.find('3').unwrap();
        assert!(!filter.matches(text, start, start + 1));
    }

    #[test]
    fn empty_word_list_never_matches() {
        let filter = ContextFilter::new(30, &[]);
        assert!(!filter.matches("page 3", 5, 6));
    }
}
