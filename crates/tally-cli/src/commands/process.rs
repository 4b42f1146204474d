//! Process command - extract and sum numbers from a single document.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use console::style;
use serde::Serialize;
use tracing::{debug, info};

use tally_core::models::config::TallyConfig;
use tally_core::text::{self, DocumentFormat};
use tally_core::{EngineConfig, ExtractionResult, NumberEngine, NumberEntry, RawToken, Stats};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input file (txt, csv, xlsx, docx, pdf, html, or image)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Interpret percents as fractions (10% -> 0.10)
    #[arg(long)]
    percent_as_fraction: bool,

    /// Keep numbers that sit next to page/footer markers
    #[arg(long)]
    no_page_filter: bool,

    /// Include candidates that failed normalization in the output
    #[arg(long)]
    show_rejected: bool,

    /// OCR model directory for image inputs
    #[arg(short, long)]
    model_dir: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON report
    Json,
    /// CSV of extracted entries
    Csv,
    /// Plain text summary
    Text,
}

pub fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    let text = extract_document_text(&args.input, &config, args.model_dir.as_deref())?;
    if text.trim().is_empty() {
        println!(
            "{} No text extracted from this document (the PDF might be scanned, or the file has no textual content).",
            style("!").yellow()
        );
        return Ok(());
    }
    debug!("extracted {} chars of text", text.len());

    let engine_config =
        engine_config_with_overrides(&config, args.percent_as_fraction, args.no_page_filter);
    let result = NumberEngine::from_config(engine_config).extract(&text);

    let output = format_result(&args.input, &result, args.format, args.show_rejected)?;

    match &args.output {
        Some(path) => {
            fs::write(path, &output)?;
            println!(
                "{} Output written to {}",
                style("✓").green(),
                path.display()
            );
        }
        None => println!("{}", output),
    }

    Ok(())
}

/// Load the pipeline configuration, falling back to defaults.
pub(crate) fn load_config(config_path: Option<&str>) -> anyhow::Result<TallyConfig> {
    Ok(match config_path {
        Some(path) => TallyConfig::from_file(Path::new(path))?,
        None => TallyConfig::default(),
    })
}

/// Apply CLI flag overrides on top of the configured engine settings.
pub(crate) fn engine_config_with_overrides(
    config: &TallyConfig,
    percent_as_fraction: bool,
    no_page_filter: bool,
) -> EngineConfig {
    let mut engine = config.engine.clone();
    if percent_as_fraction {
        engine.percent_as_fraction = true;
    }
    if no_page_filter {
        engine.ignore_context_markers = false;
    }
    engine
}

/// Read a document and run the adapter matching its extension.
pub(crate) fn extract_document_text(
    path: &Path,
    config: &TallyConfig,
    model_dir: Option<&Path>,
) -> anyhow::Result<String> {
    let format = DocumentFormat::from_path(path)
        .ok_or_else(|| anyhow::anyhow!("Unsupported file format: {}", path.display()))?;
    let data = fs::read(path)?;

    if format.is_image() {
        let model_dir = model_dir
            .map(Path::to_path_buf)
            .unwrap_or_else(|| config.ocr.model_dir.clone());
        let ocr = text::OcrTextExtractor::from_dir(&model_dir, &config.ocr)?;
        return Ok(ocr.extract(&data)?);
    }

    if format == DocumentFormat::Pdf {
        return Ok(text::extract_pdf(&data, &config.pdf)?);
    }

    Ok(text::extract_text(&data, format)?)
}

#[derive(Serialize)]
struct Report<'a> {
    file: String,
    stats: &'a Stats,
    entries: &'a [NumberEntry],
    #[serde(skip_serializing_if = "Option::is_none")]
    rejected: Option<&'a [RawToken]>,
}

/// Render an extraction result in the requested output format.
pub(crate) fn format_result(
    path: &Path,
    result: &ExtractionResult,
    format: OutputFormat,
    show_rejected: bool,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => {
            let report = Report {
                file: path.display().to_string(),
                stats: &result.stats,
                entries: &result.entries,
                rejected: show_rejected.then_some(result.rejected.as_slice()),
            };
            Ok(serde_json::to_string_pretty(&report)?)
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            writer.write_record(["raw", "value", "is_percent", "start", "end"])?;
            for entry in &result.entries {
                writer.write_record(&[
                    entry.raw.clone(),
                    entry.value.to_string(),
                    entry.is_percent.to_string(),
                    entry.start.to_string(),
                    entry.end.to_string(),
                ])?;
            }
            Ok(String::from_utf8(writer.into_inner()?)?)
        }
        OutputFormat::Text => Ok(render_text(result, show_rejected)),
    }
}

fn render_text(result: &ExtractionResult, show_rejected: bool) -> String {
    let stats = &result.stats;
    let mut out = format!("Found {} numeric tokens\n", stats.count);
    out.push_str(&format!("  sum:  {}\n", stats.sum));
    out.push_str(&format!("  min:  {}\n", fmt_opt(stats.min)));
    out.push_str(&format!("  max:  {}\n", fmt_opt(stats.max)));
    out.push_str(&format!("  mean: {}\n", fmt_opt(stats.mean)));

    if !result.entries.is_empty() {
        out.push_str("\n  raw             value           position\n");
        for entry in &result.entries {
            out.push_str(&format!(
                "  {:<15} {:<15} {}..{}\n",
                entry.raw, entry.value, entry.start, entry.end
            ));
        }
    }

    if show_rejected && !result.rejected.is_empty() {
        out.push_str("\n  rejected candidates:\n");
        for token in &result.rejected {
            out.push_str(&format!("  {:<15} {}..{}\n", token.raw, token.start, token.end));
        }
    }

    out
}

fn fmt_opt(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| v.to_string())
}
