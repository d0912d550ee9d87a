//! Utility functions shared across the pipeline.
//!
//! This module provides image loading helpers and the logging setup used by
//! the binary.

use std::path::Path;

use image::{GrayImage, RgbImage};

use crate::core::{OcrError, OcrResult};

/// Loads an image from a file path and converts it to an RgbImage.
///
/// Handles any container format supported by the image crate; palette and
/// alpha sources are normalized to 8-bit RGB.
///
/// # Errors
///
/// Returns an `OcrError::ImageLoad` error if the image cannot be decoded.
pub fn load_image(path: &Path) -> OcrResult<RgbImage> {
    let img = image::open(path).map_err(OcrError::ImageLoad)?;
    Ok(img.to_rgb8())
}

/// Loads an image from a file path and converts it to an 8-bit grayscale
/// image.
///
/// # Errors
///
/// Returns an `OcrError::ImageLoad` error if the image cannot be decoded.
pub fn load_gray(path: &Path) -> OcrResult<GrayImage> {
    let img = image::open(path).map_err(OcrError::ImageLoad)?;
    Ok(img.to_luma8())
}

/// Initializes the tracing subscriber for logging.
///
/// This function sets up the tracing subscriber with environment filter and
/// formatting layer. All diagnostics are written to stderr; stdout is
/// reserved for the final JSON payload.
pub fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
