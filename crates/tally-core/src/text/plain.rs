//! Plain-text adapter.

/// Decode bytes as UTF-8, replacing invalid sequences.
pub fn extract_plain(data: &[u8]) -> String {
    String::from_utf8_lossy(data).into_owned()
}
