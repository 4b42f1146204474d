//! Per-format text extraction adapters.
//!
//! Each adapter maps a document blob to a single flat text string for the
//! numeric engine. Extraction is lossy and best-effort; an empty string is a
//! valid (if unhelpful) result and is reported to the user, not treated as a
//! fault.

mod docx;
mod html;
#[cfg(feature = "native")]
mod ocr;
mod pdf;
mod plain;
mod table;

pub use docx::extract_docx;
pub use html::extract_html;
#[cfg(feature = "native")]
pub use ocr::OcrTextExtractor;
pub use pdf::extract_pdf;
pub use plain::extract_plain;
pub use table::{extract_csv, extract_xlsx};

use std::path::Path;

use crate::error::ExtractError;
use crate::models::config::PdfConfig;

/// Declared document formats accepted at the system boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Text,
    Csv,
    Xlsx,
    Docx,
    Pdf,
    Html,
    /// Scanned image; goes through OCR rather than [`extract_text`].
    Image,
}

impl DocumentFormat {
    /// Sniff the format from a file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "txt" => Some(Self::Text),
            "csv" => Some(Self::Csv),
            "xlsx" => Some(Self::Xlsx),
            "docx" => Some(Self::Docx),
            "pdf" => Some(Self::Pdf),
            "html" | "htm" => Some(Self::Html),
            "jpg" | "jpeg" | "png" => Some(Self::Image),
            _ => None,
        }
    }

    /// Sniff the format from a file path.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }

    pub fn is_image(&self) -> bool {
        matches!(self, Self::Image)
    }
}

/// Extract a flat text string from a document blob.
///
/// Image formats require a configured OCR engine and are handled by
/// [`OcrTextExtractor`] instead.
pub fn extract_text(data: &[u8], format: DocumentFormat) -> Result<String, ExtractError> {
    match format {
        DocumentFormat::Text => Ok(extract_plain(data)),
        DocumentFormat::Csv => extract_csv(data),
        DocumentFormat::Xlsx => extract_xlsx(data),
        DocumentFormat::Docx => extract_docx(data),
        DocumentFormat::Pdf => extract_pdf(data, &PdfConfig::default()),
        DocumentFormat::Html => extract_html(data),
        DocumentFormat::Image => Err(ExtractError::UnsupportedFormat(
            "image input requires an OCR engine".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn extension_sniffing() {
        assert_eq!(DocumentFormat::from_extension("TXT"), Some(DocumentFormat::Text));
        assert_eq!(DocumentFormat::from_extension("htm"), Some(DocumentFormat::Html));
        assert_eq!(DocumentFormat::from_extension("jpeg"), Some(DocumentFormat::Image));
        assert_eq!(DocumentFormat::from_extension("exe"), None);
    }

    #[test]
    fn path_sniffing() {
        assert_eq!(
            DocumentFormat::from_path(Path::new("/tmp/report.PDF")),
            Some(DocumentFormat::Pdf)
        );
        assert_eq!(DocumentFormat::from_path(Path::new("noext")), None);
    }

    #[test]
    fn image_dispatch_is_refused_without_ocr() {
        let err = extract_text(b"\x89PNG", DocumentFormat::Image).unwrap_err();
        assert!(matches!(err, ExtractError::UnsupportedFormat(_)));
    }
}
