//! Token normalization.
//!
//! Takes a raw candidate substring and either produces a finite parsed value
//! or rejects it. Rejection is silent exclusion, never an error: this is the
//! deliberate robustness policy for noisy real-world documents.

use super::scanner::UNICODE_MINUS;
use super::ParsedValue;

/// Normalize a raw token into a parsed value, or reject it.
///
/// Commas are treated unconditionally as thousands separators; no locale
/// where `,` is a decimal point is supported. When `percent_as_fraction` is
/// set, a token carrying `%` is divided by 100.
pub fn normalize(raw: &str, percent_as_fraction: bool) -> Option<ParsedValue> {
    let trimmed = raw.trim().replace(UNICODE_MINUS, "-");
    let is_percent = trimmed.ends_with('%');

    // Strip stray currency symbols or footnote markers the scanner grammar
    // accidentally admitted, then drop thousands separators.
    let cleaned: String = trimmed
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | 'e' | 'E' | '+' | ',' | '%'))
        .collect();
    let cleaned = cleaned.replace(',', "");

    if matches!(cleaned.as_str(), "" | "%" | "+" | "-") {
        return None;
    }

    let bare = cleaned.strip_suffix('%').unwrap_or(&cleaned);
    let value = parse_finite(bare).or_else(|| {
        // Fallback: residual punctuation the first pass missed.
        let digits_only: String = bare
            .chars()
            .filter(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | 'e' | 'E' | '+'))
            .collect();
        parse_finite(&digits_only)
    })?;

    let value = if is_percent && percent_as_fraction {
        value / 100.0
    } else {
        value
    };

    Some(ParsedValue { value, is_percent })
}

/// Parse a decimal float, rejecting NaN and infinities.
fn parse_finite(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}
