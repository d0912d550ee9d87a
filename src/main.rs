//! Command-line entry point.
//!
//! `duo-ocr <image_path> [max_width] [max_height]` prints exactly one JSON
//! array on stdout: the selected detections, or a single error record. All
//! diagnostics go to stderr. The only failure exit is a missing image path;
//! every other problem is folded into the payload so callers can always
//! parse stdout.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, error};

use duo_ocr::core::{DEFAULT_MAX_HEIGHT, DEFAULT_MAX_WIDTH};
use duo_ocr::domain::OutputRecord;
use duo_ocr::engine::CommandEngine;
use duo_ocr::pipeline::RecognitionArbiter;
use duo_ocr::processors::SizeBounds;
use duo_ocr::utils::init_tracing;

/// Dual-variant OCR front end: preprocess an image two ways, let an
/// external engine read both, keep the better result.
#[derive(Parser, Debug)]
#[command(name = "duo-ocr", version, about)]
struct Args {
    /// Path of the image to recognize.
    #[arg(allow_hyphen_values = true)]
    image_path: Option<PathBuf>,

    /// Maximum variant width in pixels; unparsable values fall back to 1600.
    #[arg(allow_hyphen_values = true)]
    max_width: Option<String>,

    /// Maximum variant height in pixels; unparsable values fall back to 1600.
    #[arg(allow_hyphen_values = true)]
    max_height: Option<String>,

    /// Engine command, e.g. "paddle-worker --lang en". Defaults to the
    /// DUO_OCR_ENGINE environment variable, then to "duo-ocr-engine".
    #[arg(long)]
    engine: Option<String>,

    /// Surplus positional arguments are tolerated and ignored.
    #[arg(hide = true)]
    _rest: Vec<String>,
}

fn parse_bound(raw: Option<&str>, default: u32) -> u32 {
    match raw {
        None => default,
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            debug!("ignoring unparsable size bound '{}', using {}", raw, default);
            default
        }),
    }
}

fn print_records(records: &[OutputRecord]) {
    match serde_json::to_string(records) {
        Ok(payload) => println!("{}", payload),
        Err(err) => {
            error!("failed to serialize output: {}", err);
            println!("[{{\"error\": \"output serialization failed\"}}]");
        }
    }
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    let Some(image_path) = args.image_path else {
        print_records(&[OutputRecord::error("No image path provided")]);
        return ExitCode::FAILURE;
    };

    let bounds = SizeBounds {
        max_width: parse_bound(args.max_width.as_deref(), DEFAULT_MAX_WIDTH),
        max_height: parse_bound(args.max_height.as_deref(), DEFAULT_MAX_HEIGHT),
    };

    let records = match CommandEngine::resolve(args.engine.as_deref()) {
        Ok(engine) => RecognitionArbiter::new(engine, bounds).run(&image_path),
        Err(err) => {
            error!("engine resolution failed: {}", err);
            vec![OutputRecord::error(err.to_string())]
        }
    };

    print_records(&records);
    ExitCode::SUCCESS
}
