//! HTML adapter: text nodes joined with spaces, script/style skipped.

use ego_tree::iter::Edge;
use scraper::{Html, Node};

use crate::error::ExtractError;

const SKIPPED_ELEMENTS: [&str; 3] = ["script", "style", "noscript"];

pub fn extract_html(data: &[u8]) -> Result<String, ExtractError> {
    let raw = String::from_utf8_lossy(data);
    let document = Html::parse_document(&raw);

    let mut out = String::new();
    let mut skip_depth = 0usize;
    for edge in document.root_element().traverse() {
        match edge {
            Edge::Open(node) => match node.value() {
                Node::Element(el) if SKIPPED_ELEMENTS.contains(&el.name()) => skip_depth += 1,
                Node::Text(text) if skip_depth == 0 => {
                    let trimmed = text.trim();
                    if !trimmed.is_empty() {
                        if !out.is_empty() {
                            out.push(' ');
                        }
                        out.push_str(trimmed);
                    }
                }
                _ => {}
            },
            Edge::Close(node) => {
                if let Node::Element(el) = node.value() {
                    if SKIPPED_ELEMENTS.contains(&el.name()) {
                        skip_depth -= 1;
                    }
                }
            }
        }
    }
    Ok(out)
}
