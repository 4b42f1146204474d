//! OCR adapter for scanned images, backed by `pure-onnx-ocr` (pure Rust,
//! no external ONNX Runtime).

use std::path::Path;

use image::DynamicImage;
use tracing::{debug, info};

use crate::error::ExtractError;
use crate::models::config::OcrConfig;

/// Text extractor for image inputs.
pub struct OcrTextExtractor {
    engine: pure_onnx_ocr::engine::OcrEngine,
}

impl OcrTextExtractor {
    /// Create an extractor from model files in a directory.
    pub fn from_dir(model_dir: &Path, config: &OcrConfig) -> Result<Self, ExtractError> {
        let det_path = model_dir.join(&config.detection_model);
        let rec_path = model_dir.join(&config.recognition_model);
        let dict_path = model_dir.join(&config.dictionary);

        let engine = pure_onnx_ocr::engine::OcrEngineBuilder::new()
            .det_model_path(&det_path)
            .rec_model_path(&rec_path)
            .dictionary_path(&dict_path)
            .build()
            .map_err(|e| ExtractError::Ocr(format!("pure-onnx-ocr: {e}")))?;

        info!("Loaded OCR engine from {}", model_dir.display());
        Ok(Self { engine })
    }

    /// Run OCR on raw image bytes.
    pub fn extract(&self, data: &[u8]) -> Result<String, ExtractError> {
        let image = image::load_from_memory(data)
            .map_err(|e| ExtractError::Ocr(format!("image decode: {e}")))?;
        self.extract_image(&image)
    }

    /// Run OCR on a decoded image.
    pub fn extract_image(&self, image: &DynamicImage) -> Result<String, ExtractError> {
        let results = self
            .engine
            .run_from_image(image)
            .map_err(|e| ExtractError::Ocr(format!("pure-onnx-ocr: {e}")))?;

        debug!("OCR returned {} text regions", results.len());

        let text = results
            .iter()
            .map(|r| r.text.replace("[UNK]", " "))
            .collect::<Vec<_>>()
            .join("\n");
        Ok(text)
    }
}
