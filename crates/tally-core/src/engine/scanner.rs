//! Numeric token scanner.
//!
//! Scans left to right and yields non-overlapping candidate tokens, taking
//! the longest match at each starting position. The grammar deliberately
//! overmatches (separators may sit anywhere between digits); the normalizer
//! decides validity.

use super::RawToken;

/// Unicode minus sign, produced by some PDF extractors and OCR output.
pub(crate) const UNICODE_MINUS: char = '\u{2212}';

/// Lazy iterator over numeric token candidates in a text.
pub struct TokenScanner<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> TokenScanner<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }
}

impl Iterator for TokenScanner<'_> {
    type Item = RawToken;

    fn next(&mut self) -> Option<RawToken> {
        while self.pos < self.text.len() {
            let rest = &self.text[self.pos..];
            if let Some(len) = match_token(rest) {
                let start = self.pos;
                let end = start + len;
                self.pos = end;
                return Some(RawToken {
                    raw: self.text[start..end].to_string(),
                    start,
                    end,
                });
            }
            // No match here; resume at the next character.
            self.pos += rest.chars().next().map_or(1, char::len_utf8);
        }
        None
    }
}

/// Match a candidate token at the start of `s`, returning its byte length.
///
/// Grammar: optional sign (`+`, `-`, or U+2212), one or more digits greedily
/// interleaved with `,` and `.`, an optional complete exponent, an optional
/// trailing `%`. At least one digit is required.
fn match_token(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    let mut i = if s.starts_with(UNICODE_MINUS) {
        UNICODE_MINUS.len_utf8()
    } else if matches!(bytes.first(), Some(&b'+') | Some(&b'-')) {
        1
    } else {
        0
    };

    if !matches!(bytes.get(i), Some(b) if b.is_ascii_digit()) {
        return None;
    }
    i += 1;

    while matches!(bytes.get(i), Some(b) if b.is_ascii_digit() || *b == b',' || *b == b'.') {
        i += 1;
    }

    // Exponent is consumed only when complete; a stray "e" stays outside
    // the token.
    if matches!(bytes.get(i), Some(&b'e') | Some(&b'E')) {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(&b'+') | Some(&b'-')) {
            j += 1;
        }
        let digits_start = j;
        while matches!(bytes.get(j), Some(b) if b.is_ascii_digit()) {
            j += 1;
        }
        if j > digits_start {
            i = j;
        }
    }

    if bytes.get(i) == Some(&b'%') {
        i += 1;
    }

    Some(i)
}
