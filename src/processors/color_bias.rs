//! Color-bias detection.
//!
//! Classifies whether an image is predominantly dark (light text on a dark
//! background) by comparing grayscale histogram mass below and above the
//! midpoint. The inverted variant tends to recognize better on such images,
//! and the arbiter uses this classification to break ties in its favor.

use std::path::Path;

use image::GrayImage;
use imageproc::stats::histogram;
use tracing::{debug, warn};

use crate::core::LIGHT_BUCKET_START;
use crate::domain::ColorBias;
use crate::utils::load_gray;

/// Classifies a 256-bucket grayscale histogram.
///
/// Dark mass is the total population of buckets `0..LIGHT_BUCKET_START`,
/// light mass the rest. Only a strictly smaller light mass classifies as
/// light text on dark background; a perfectly balanced histogram keeps the
/// default classification.
pub fn classify_histogram(counts: &[u32; 256]) -> ColorBias {
    let dark_mass: u64 = counts[..LIGHT_BUCKET_START]
        .iter()
        .map(|&c| u64::from(c))
        .sum();
    let light_mass: u64 = counts[LIGHT_BUCKET_START..]
        .iter()
        .map(|&c| u64::from(c))
        .sum();

    if light_mass < dark_mass {
        ColorBias::LightTextOnDark
    } else {
        ColorBias::DarkTextOnLight
    }
}

/// Classifies a decoded grayscale image by its luminance histogram.
pub fn classify_image(gray: &GrayImage) -> ColorBias {
    let hist = histogram(gray);
    classify_histogram(&hist.channels[0])
}

/// Detects the color bias of the image at `path`.
///
/// The image is decoded to 8-bit grayscale for classification. Any failure
/// to load it is absorbed: a warning is emitted and the default
/// `DarkTextOnLight` is returned, so detection never takes down the
/// pipeline.
pub fn detect_color_bias(path: &Path) -> ColorBias {
    match load_gray(path) {
        Ok(gray) => {
            let bias = classify_image(&gray);
            debug!("color bias for {}: {}", path.display(), bias);
            bias
        }
        Err(err) => {
            warn!(
                "color bias detection failed for {}: {}; assuming {}",
                path.display(),
                err,
                ColorBias::default()
            );
            ColorBias::default()
        }
    }
}
