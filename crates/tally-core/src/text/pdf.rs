//! PDF adapter using lopdf for structure checks and pdf-extract for text.

use lopdf::Document;
use tracing::debug;

use crate::error::ExtractError;
use crate::models::config::PdfConfig;

/// Extract embedded text from a PDF.
///
/// A scanned (image-only) PDF legitimately yields an empty or near-empty
/// string; that is a valid result, not an error. Encrypted documents are
/// rejected when the config says so.
pub fn extract_pdf(data: &[u8], config: &PdfConfig) -> Result<String, ExtractError> {
    let doc = Document::load_mem(data).map_err(|e| ExtractError::Parse(format!("pdf: {e}")))?;

    if config.reject_encrypted && doc.is_encrypted() {
        return Err(ExtractError::Encrypted);
    }

    let pages = doc.get_pages();
    debug!("PDF has {} pages", pages.len());
    if pages.is_empty() {
        return Ok(String::new());
    }

    if config.max_pages > 0 && pages.len() > config.max_pages {
        let page_numbers: Vec<u32> = pages.keys().copied().take(config.max_pages).collect();
        return doc
            .extract_text(&page_numbers)
            .map_err(|e| ExtractError::TextExtraction(format!("pdf: {e}")));
    }

    pdf_extract::extract_text_from_mem(data)
        .map_err(|e| ExtractError::TextExtraction(format!("pdf: {e}")))
}
