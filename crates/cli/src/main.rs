use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use labelcheck_ocr::{BatchReport, ImageFailure, LabelPipeline, PipelineConfig, UnavailableRecognizer};
use tracing_subscriber::EnvFilter;

mod input;
mod output;

#[derive(Parser, Debug)]
#[command(name = "labelcheck", version, about = "Check alcohol label text against labeling rules")]
struct Cli {
    #[arg(long, help = "Output machine-readable JSON")]
    json: bool,
    #[arg(long, value_name = "FILE", help = "Pipeline configuration (TOML)")]
    config: Option<PathBuf>,
    #[cfg(feature = "tesseract")]
    #[arg(long, help = "Treat inputs as label images and run OCR on them")]
    images: bool,
    #[cfg(feature = "tesseract")]
    #[arg(long, value_name = "DIR", help = "Tesseract language data directory")]
    tessdata: Option<String>,
    #[arg(
        required = true,
        value_name = "INPUT",
        help = "Transcription file, or directory of per-pass .txt transcriptions"
    )]
    inputs: Vec<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => PipelineConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => PipelineConfig::default(),
    };

    #[cfg(feature = "tesseract")]
    if cli.images {
        use labelcheck_ocr::recognizer::tesseract_backend::TesseractRecognizer;
        use std::sync::Arc;

        let recognizer = TesseractRecognizer::new(cli.tessdata.clone(), "eng");
        let pipeline = Arc::new(LabelPipeline::new(recognizer, config));
        let batch = pipeline.process_batch(cli.inputs.clone()).await;
        return finish(cli.json, &batch);
    }

    let pipeline = LabelPipeline::new(UnavailableRecognizer, config);
    let batch = check_transcriptions(&pipeline, &cli.inputs);
    finish(cli.json, &batch)
}

fn check_transcriptions(pipeline: &LabelPipeline<UnavailableRecognizer>, inputs: &[PathBuf]) -> BatchReport {
    let mut results = Vec::new();
    let mut failures = Vec::new();
    for path in inputs {
        let filename = input::label_name(path);
        match input::read_transcriptions(path) {
            Ok(texts) => results.push(pipeline.analyze_text(&filename, &texts)),
            Err(e) => {
                tracing::warn!(filename = %filename, "skipping input: {e:#}");
                failures.push(ImageFailure { filename, error: format!("{e:#}") });
            }
        }
    }
    BatchReport::new(results, failures)
}

fn finish(json: bool, batch: &BatchReport) -> anyhow::Result<()> {
    output::print_batch(json, batch)?;
    if batch.results.is_empty() {
        anyhow::bail!("no input could be read");
    }
    Ok(())
}
