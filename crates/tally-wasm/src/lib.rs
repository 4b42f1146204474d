//! WASM bindings for numeric document extraction.
//!
//! This crate provides WebAssembly bindings for use in browsers and Node.js.
//! Text extraction happens on the JavaScript side (e.g. a file reader or a
//! DOM walk); these bindings run the numeric engine over the resulting text.

use wasm_bindgen::prelude::*;

use tally_core::models::config::EngineConfig;
use tally_core::NumberEngine;

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Extract numeric values and statistics from text.
#[wasm_bindgen]
pub fn extract_numbers(
    text: &str,
    percent_as_fraction: bool,
    ignore_context_markers: bool,
) -> Result<JsValue, JsValue> {
    let engine = NumberEngine::new()
        .with_percent_as_fraction(percent_as_fraction)
        .with_context_filter(ignore_context_markers);

    let result = engine.extract(text);

    serde_wasm_bindgen::to_value(&result).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Count of accepted numeric tokens in the text.
///
/// Scalar convenience for callers that only need a badge or a quick check
/// and do not want to deserialize the full result object.
#[wasm_bindgen]
pub fn count_numbers(text: &str, ignore_context_markers: bool) -> usize {
    NumberEngine::new()
        .with_context_filter(ignore_context_markers)
        .extract(text)
        .stats
        .count
}

/// Sum of accepted numeric values in the text.
#[wasm_bindgen]
pub fn sum_numbers(text: &str, percent_as_fraction: bool, ignore_context_markers: bool) -> f64 {
    NumberEngine::new()
        .with_percent_as_fraction(percent_as_fraction)
        .with_context_filter(ignore_context_markers)
        .extract(text)
        .stats
        .sum
}

/// Numeric extractor class for browser use.
#[wasm_bindgen]
pub struct NumberExtractor {
    config: EngineConfig,
}

#[wasm_bindgen]
impl NumberExtractor {
    /// Create a new extractor with default settings.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
        }
    }

    /// Interpret percents as fractions (10% -> 0.10).
    #[wasm_bindgen]
    pub fn set_percent_as_fraction(&mut self, enabled: bool) {
        self.config.percent_as_fraction = enabled;
    }

    /// Enable or disable the page/footer marker filter.
    #[wasm_bindgen]
    pub fn set_ignore_context_markers(&mut self, enabled: bool) {
        self.config.ignore_context_markers = enabled;
    }

    /// Radius, in characters, of the marker-filter context window.
    #[wasm_bindgen]
    pub fn set_context_radius(&mut self, radius: usize) {
        self.config.context_radius = radius;
    }

    /// Extract numeric values and statistics from text.
    #[wasm_bindgen]
    pub fn extract(&self, text: &str) -> Result<JsValue, JsValue> {
        let result = NumberEngine::from_config(self.config.clone()).extract(text);
        serde_wasm_bindgen::to_value(&result).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl Default for NumberExtractor {
    fn default() -> Self {
        Self::new()
    }
}
