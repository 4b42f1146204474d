//! Core library for numeric document extraction.
//!
//! This crate provides:
//! - Text extraction adapters for common document formats (txt, csv, xlsx,
//!   docx, pdf, html, and scanned images via OCR)
//! - A numeric token scanner with positional provenance
//! - Token normalization (thousands separators, percents, scientific notation)
//! - Aggregate statistics over the extracted values

pub mod engine;
pub mod error;
pub mod models;
pub mod text;

pub use error::{ExtractError, Result, TallyError};
pub use models::config::{EngineConfig, OcrConfig, PdfConfig, TallyConfig};
pub use engine::{ExtractionResult, NumberEngine, NumberEntry, ParsedValue, RawToken, Stats};
pub use text::{extract_text, DocumentFormat};
