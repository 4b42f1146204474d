//! Configuration models.

pub mod config;

pub use config::{EngineConfig, OcrConfig, PdfConfig, TallyConfig};
