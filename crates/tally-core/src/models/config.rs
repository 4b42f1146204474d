//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{Result, TallyError};

/// Main configuration for the tally pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TallyConfig {
    /// Numeric engine configuration.
    pub engine: EngineConfig,

    /// PDF processing configuration.
    pub pdf: PdfConfig,

    /// OCR configuration for image inputs.
    pub ocr: OcrConfig,
}

/// Numeric engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Interpret percent tokens as fractions (10% -> 0.10).
    pub percent_as_fraction: bool,

    /// Drop tokens that sit next to a context marker word such as "page"
    /// (running-footer suppression).
    pub ignore_context_markers: bool,

    /// Radius, in characters, of the context window inspected around each
    /// token when marker filtering is enabled.
    pub context_radius: usize,

    /// Marker words that disqualify nearby tokens, matched case-insensitively
    /// as whole words.
    pub marker_words: Vec<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            percent_as_fraction: false,
            ignore_context_markers: true,
            context_radius: 30,
            marker_words: vec!["page".to_string(), "pg".to_string()],
        }
    }
}

/// PDF processing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Reject encrypted PDFs instead of attempting extraction.
    pub reject_encrypted: bool,

    /// Maximum pages to process (0 = unlimited).
    pub max_pages: usize,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            reject_encrypted: true,
            max_pages: 0,
        }
    }
}

/// OCR configuration for image inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OcrConfig {
    /// Directory containing the detection/recognition model files.
    pub model_dir: PathBuf,

    /// Text detection model file name.
    pub detection_model: String,

    /// Text recognition model file name.
    pub recognition_model: String,

    /// Character dictionary file name.
    pub dictionary: String,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            model_dir: PathBuf::from("models"),
            detection_model: "det.onnx".to_string(),
            recognition_model: "latin_rec.onnx".to_string(),
            dictionary: "latin_dict.txt".to_string(),
        }
    }
}

impl TallyConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| TallyError::Config(format!("{}: {e}", path.display())))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| TallyError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn engine_defaults() {
        let config = EngineConfig::default();
        assert!(!config.percent_as_fraction);
        assert!(config.ignore_context_markers);
        assert_eq!(config.context_radius, 30);
        assert_eq!(config.marker_words, vec!["page", "pg"]);
    }

    #[test]
    fn config_json_round_trip() {
        let config = TallyConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: TallyConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.engine.context_radius, config.engine.context_radius);
        assert_eq!(back.ocr.detection_model, config.ocr.detection_model);
    }

    #[test]
    fn partial_json_uses_defaults() {
        let config: TallyConfig =
            serde_json::from_str(r#"{"engine": {"percent_as_fraction": true}}"#).unwrap();
        assert!(config.engine.percent_as_fraction);
        assert_eq!(config.engine.context_radius, 30);
        assert!(config.pdf.reject_encrypted);
    }

    #[test]
    fn save_then_from_file_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = TallyConfig::default();
        config.engine.context_radius = 12;
        config.save(&path).unwrap();

        let back = TallyConfig::from_file(&path).unwrap();
        assert_eq!(back.engine.context_radius, 12);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = TallyConfig::from_file(std::path::Path::new("/no/such/config.json")).unwrap_err();
        assert!(matches!(err, TallyError::Io(_)));
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = TallyConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, TallyError::Config(_)));
        assert!(err.to_string().contains("config.json"));
    }
}
