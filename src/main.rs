//! Cyberpunk OCR command line.
//!
//! Parses Chinese text in Cyberpunk 2077 screenshots using the remote
//! vision service, with results cached next to each screenshot.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use cyberpunk_ocr::config::{get_config, init_config_from};
use cyberpunk_ocr::export::{write_frame_type_row, DialogueLog};
use cyberpunk_ocr::ocr::{AiVisionClient, OcrResultCache, ReqwestTransport};
use cyberpunk_ocr::{log, FrameBuilder};

#[derive(Parser, Debug)]
#[command(
    name = "cyberpunk-ocr",
    version,
    about = "Parse Chinese text in Cyberpunk 2077 screenshots"
)]
struct Args {
    /// Config file (defaults to config.json next to the executable)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write `filename,frameType` CSV rows to stdout
    FrameTraining {
        #[arg(required = true)]
        images: Vec<PathBuf>,
    },
    /// Print each new subtitle line of normal frames
    Dialogues {
        #[arg(required = true)]
        images: Vec<PathBuf>,
    },
    /// Print every classified frame as JSON
    Classify {
        #[arg(required = true)]
        images: Vec<PathBuf>,
    },
}

fn frame_builder() -> FrameBuilder<ReqwestTransport> {
    let config = get_config();
    let client = AiVisionClient::new(&config.resolve_endpoint(), &config.resolve_api_key());
    FrameBuilder::new(OcrResultCache::new(client), config.layout.clone())
}

fn frame_training(images: &[PathBuf]) -> Result<()> {
    let builder = frame_builder();
    let mut out = io::stdout().lock();

    for image in images {
        let frame = builder
            .parse(image)
            .with_context(|| format!("Failed to parse {}", image.display()))?;
        write_frame_type_row(&mut out, image, &frame)?;
    }
    out.flush().context("Failed to flush CSV output")?;
    Ok(())
}

fn dialogues(images: &[PathBuf]) -> Result<()> {
    let builder = frame_builder();
    let mut dialogue_log = DialogueLog::new();
    let mut out = io::stdout().lock();

    for image in images {
        let frame = builder
            .parse(image)
            .with_context(|| format!("Failed to parse {}", image.display()))?;
        for line in dialogue_log.new_lines(&frame) {
            writeln!(out, "{}", line)?;
        }
    }
    Ok(())
}

fn classify(images: &[PathBuf]) -> Result<()> {
    let builder = frame_builder();
    let mut out = io::stdout().lock();

    for image in images {
        let frame = builder
            .parse(image)
            .with_context(|| format!("Failed to parse {}", image.display()))?;
        let json = serde_json::to_string_pretty(&frame).context("Failed to serialize frame")?;
        writeln!(out, "{}", json)?;
    }
    Ok(())
}

fn run(args: Args) -> Result<()> {
    if let Some(path) = &args.config {
        init_config_from(path);
    }

    match args.command {
        Command::FrameTraining { images } => frame_training(&images),
        Command::Dialogues { images } => dialogues(&images),
        Command::Classify { images } => classify(&images),
    }
}

fn main() -> ExitCode {
    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log(&format!("Error: {:#}", e));
            ExitCode::FAILURE
        }
    }
}
