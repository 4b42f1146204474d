//! Batch processing command for multiple documents.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, error};

use tally_core::text::DocumentFormat;
use tally_core::{NumberEngine, Stats};

use super::process::{
    engine_config_with_overrides, extract_document_text, format_result, load_config, OutputFormat,
};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Output directory for per-file reports
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each file
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,

    /// Interpret percents as fractions (10% -> 0.10)
    #[arg(long)]
    percent_as_fraction: bool,

    /// Keep numbers that sit next to page/footer markers
    #[arg(long)]
    no_page_filter: bool,

    /// OCR model directory for image inputs
    #[arg(short, long)]
    model_dir: Option<PathBuf>,
}

/// Result of processing a single file.
struct FileResult {
    path: PathBuf,
    stats: Option<Stats>,
    error: Option<String>,
}

pub fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    // Expand glob pattern, keeping only files with a known adapter.
    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| DocumentFormat::from_path(p).is_some())
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")
            .unwrap()
            .progress_chars("=>-"),
    );

    let engine_config =
        engine_config_with_overrides(&config, args.percent_as_fraction, args.no_page_filter);
    let engine = NumberEngine::from_config(engine_config);

    let mut results = Vec::with_capacity(files.len());
    for path in files {
        debug!("processing {}", path.display());

        let outcome = extract_document_text(&path, &config, args.model_dir.as_deref())
            .and_then(|text| {
                let result = engine.extract(&text);
                if let Some(ref output_dir) = args.output_dir {
                    let report = format_result(&path, &result, args.format, false)?;
                    let name = path.file_stem().and_then(|s| s.to_str()).unwrap_or("report");
                    let ext = match args.format {
                        OutputFormat::Json => "json",
                        OutputFormat::Csv => "csv",
                        OutputFormat::Text => "txt",
                    };
                    fs::write(output_dir.join(format!("{name}.{ext}")), report)?;
                }
                Ok(result.stats)
            });

        match outcome {
            Ok(stats) => results.push(FileResult {
                path,
                stats: Some(stats),
                error: None,
            }),
            Err(e) => {
                error!("failed to process {}: {}", path.display(), e);
                if !args.continue_on_error {
                    pb.abandon();
                    return Err(e.context(format!("while processing {}", path.display())));
                }
                results.push(FileResult {
                    path,
                    stats: None,
                    error: Some(e.to_string()),
                });
            }
        }
        pb.inc(1);
    }

    pb.finish_with_message("Done");

    let succeeded = results.iter().filter(|r| r.stats.is_some()).count();
    let failed = results.len() - succeeded;
    println!(
        "{} Processed {} files ({} failed)",
        style("✓").green(),
        succeeded,
        failed
    );

    if args.summary {
        let summary = render_summary(&results)?;
        match &args.output_dir {
            Some(dir) => {
                let path = dir.join("summary.csv");
                fs::write(&path, summary)?;
                println!("{} Summary written to {}", style("✓").green(), path.display());
            }
            None => print!("{summary}"),
        }
    }

    Ok(())
}

fn render_summary(results: &[FileResult]) -> anyhow::Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["file", "count", "sum", "min", "max", "mean", "error"])?;

    for result in results {
        let (count, sum, min, max, mean) = match &result.stats {
            Some(s) => (
                s.count.to_string(),
                s.sum.to_string(),
                opt_cell(s.min),
                opt_cell(s.max),
                opt_cell(s.mean),
            ),
            None => Default::default(),
        };
        writer.write_record(&[
            result.path.display().to_string(),
            count,
            sum,
            min,
            max,
            mean,
            result.error.clone().unwrap_or_default(),
        ])?;
    }

    Ok(String::from_utf8(writer.into_inner()?)?)
}

fn opt_cell(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
