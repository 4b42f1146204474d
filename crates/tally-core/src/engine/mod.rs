//! Numeric token extraction engine.
//!
//! A stateless, single-pass transformation: scan candidate tokens, optionally
//! drop those sitting next to context markers ("Page 3 of 10"), normalize the
//! survivors to finite floats, and aggregate statistics. The engine never
//! errors; malformed tokens are excluded, and empty input yields an empty
//! result.

mod filter;
mod normalize;
mod scanner;
mod stats;

pub use filter::ContextFilter;
pub use normalize::normalize;
pub use scanner::TokenScanner;
pub use stats::Stats;

use serde::Serialize;
use tracing::debug;

use crate::models::config::EngineConfig;

/// A candidate numeric substring as it appeared in the source text.
///
/// `start`/`end` are half-open byte offsets with
/// `text[start..end] == raw`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RawToken {
    pub raw: String,
    pub start: usize,
    pub end: usize,
}

/// The normalized numeric result for an accepted token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParsedValue {
    /// Always finite; NaN/Inf candidates are rejected, not emitted.
    pub value: f64,
    /// Whether the raw token carried a percent marker.
    pub is_percent: bool,
}

/// One accepted token with its value and positional provenance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumberEntry {
    pub raw: String,
    pub value: f64,
    pub is_percent: bool,
    pub start: usize,
    pub end: usize,
}

/// The engine's output for one run. Entries are in scan order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractionResult {
    pub entries: Vec<NumberEntry>,
    pub stats: Stats,
    /// Candidates that failed normalization, kept for diagnostics.
    pub rejected: Vec<RawToken>,
}

impl ExtractionResult {
    /// The accepted values in scan order.
    pub fn values(&self) -> Vec<f64> {
        self.entries.iter().map(|e| e.value).collect()
    }
}

/// Configured numeric extraction engine.
pub struct NumberEngine {
    config: EngineConfig,
}

impl NumberEngine {
    /// Create an engine with default settings.
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
        }
    }

    /// Create an engine from a configuration.
    pub fn from_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Interpret percent tokens as fractions (10% -> 0.10).
    pub fn with_percent_as_fraction(mut self, enabled: bool) -> Self {
        self.config.percent_as_fraction = enabled;
        self
    }

    /// Enable or disable the context-marker filter.
    pub fn with_context_filter(mut self, enabled: bool) -> Self {
        self.config.ignore_context_markers = enabled;
        self
    }

    /// Extract all numeric values from `text`.
    ///
    /// Pure and idempotent: the same text and configuration always produce
    /// the same result.
    pub fn extract(&self, text: &str) -> ExtractionResult {
        let marker_filter = self.config.ignore_context_markers.then(|| {
            ContextFilter::new(self.config.context_radius, &self.config.marker_words)
        });

        let mut entries = Vec::new();
        let mut rejected = Vec::new();

        for token in TokenScanner::new(text) {
            if let Some(filter) = &marker_filter {
                if filter.matches(text, token.start, token.end) {
                    debug!("suppressed token near context marker: {:?}", token.raw);
                    continue;
                }
            }

            match normalize(&token.raw, self.config.percent_as_fraction) {
                Some(parsed) => entries.push(NumberEntry {
                    value: parsed.value,
                    is_percent: parsed.is_percent,
                    start: token.start,
                    end: token.end,
                    raw: token.raw,
                }),
                None => rejected.push(token),
            }
        }

        let values: Vec<f64> = entries.iter().map(|e| e.value).collect();
        let stats = Stats::from_values(&values);

        debug!(
            "extracted {} values ({} rejected) from {} chars",
            stats.count,
            rejected.len(),
            text.len()
        );

        ExtractionResult {
            entries,
            stats,
            rejected,
        }
    }
}

impl Default for NumberEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract numeric values from `text` with the given configuration.
pub fn extract(text: &str, config: &EngineConfig) -> ExtractionResult {
    NumberEngine::from_config(config.clone()).extract(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn digit_free_text_yields_empty_result() {
        let result = NumberEngine::new().extract("no numbers, only words & symbols");
        assert_eq!(result.entries, vec![]);
        assert_eq!(result.stats, Stats::empty());
    }

    #[test]
    fn empty_input_yields_empty_result() {
        let result = NumberEngine::new().extract("");
        assert_eq!(result.stats.count, 0);
        assert_eq!(result.stats.sum, 0.0);
    }

    #[test]
    fn end_to_end_mixed_document() {
        let result = NumberEngine::new().extract("Total: 1,250.50 USD (up 12%)");

        let raws: Vec<&str> = result.entries.iter().map(|e| e.raw.as_str()).collect();
        assert_eq!(raws, vec!["1,250.50", "12%"]);

        assert_eq!(result.stats.count, 2);
        assert_eq!(result.stats.sum, 1262.5);
        assert_eq!(result.stats.min, Some(12.0));
        assert_eq!(result.stats.max, Some(1250.5));
        assert_eq!(result.stats.mean, Some(631.25));
    }

    #[test]
    fn page_footer_digits_are_suppressed() {
        let text = format!("Page 3 of 45 {} Revenue 200", "x".repeat(40));
        let result = NumberEngine::new().extract(&text);

        assert_eq!(result.stats.count, 1);
        assert_eq!(result.stats.sum, 200.0);
        assert_eq!(result.entries[0].raw, "200");
    }

    #[test]
    fn filter_can_be_disabled() {
        let result = NumberEngine::new()
            .with_context_filter(false)
            .extract("Page 3 of 45");
        assert_eq!(result.stats.count, 2);
        assert_eq!(result.stats.sum, 48.0);
    }

    #[test]
    fn percent_as_fraction_scales_entries_and_stats() {
        let result = NumberEngine::new()
            .with_percent_as_fraction(true)
            .with_context_filter(false)
            .extract("10% of 50");
        assert_eq!(result.values(), vec![0.1, 50.0]);
        assert_eq!(result.stats.sum, 50.1);
    }

    #[test]
    fn entries_are_in_scan_order_with_valid_offsets() {
        let text = "9 then 2 then 5";
        let result = NumberEngine::new().extract(text);

        assert_eq!(result.values(), vec![9.0, 2.0, 5.0]);
        for entry in &result.entries {
            assert_eq!(&text[entry.start..entry.end], entry.raw);
        }
    }

    #[test]
    fn extraction_is_idempotent() {
        let engine = NumberEngine::new();
        let text = "Totals: 1,234 and \u{2212}5 and 3.5e2 and 17%";
        assert_eq!(engine.extract(text), engine.extract(text));
    }

    #[test]
    fn mean_is_bounded_by_extrema() {
        let result = NumberEngine::new().extract("4 8 15 16 23 42");
        let stats = &result.stats;
        assert!(stats.min.unwrap() <= stats.mean.unwrap());
        assert!(stats.mean.unwrap() <= stats.max.unwrap());
    }

    #[test]
    fn malformed_candidates_land_in_rejected() {
        let result = NumberEngine::new().with_context_filter(false).extract("1.2.3");
        assert_eq!(result.stats.count, 0);
        assert_eq!(result.rejected.len(), 1);
        assert_eq!(result.rejected[0].raw, "1.2.3");
    }

    #[test]
    fn free_function_matches_engine() {
        let config = EngineConfig::default();
        assert_eq!(
            extract("12 and 13", &config),
            NumberEngine::from_config(config.clone()).extract("12 and 13")
        );
    }
}
