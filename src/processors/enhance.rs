//! Pure pixel math for variant preparation.
//!
//! This module provides the resize target computation and the linear
//! contrast enhancement used on both variants. The contrast transform pivots
//! on the mean luminance of the whole image, so a factor of 1.0 is the
//! identity and larger factors spread values away from the image's own
//! average rather than from the fixed midpoint.

use image::{Pixel, Rgb, RgbImage};

/// Computes the downscale target for an image that exceeds the size bounds.
///
/// Returns `None` when both dimensions already fit. Otherwise the scale
/// factor is the smaller of the per-axis ratios and both target dimensions
/// are floored, so the result never exceeds either bound.
///
/// The caller must treat a zero target dimension (possible for extreme
/// aspect ratios or zero bounds) as a preprocessing failure.
pub fn bounded_dimensions(
    width: u32,
    height: u32,
    max_width: u32,
    max_height: u32,
) -> Option<(u32, u32)> {
    if width <= max_width && height <= max_height {
        return None;
    }

    let ratio = f64::min(
        max_width as f64 / width as f64,
        max_height as f64 / height as f64,
    );

    Some(((width as f64 * ratio) as u32, (height as f64 * ratio) as u32))
}

/// Computes the mean luminance of an image.
///
/// Returns 0.0 for an image with no pixels.
pub fn mean_luma(img: &RgbImage) -> f32 {
    let pixel_count = u64::from(img.width()) * u64::from(img.height());
    if pixel_count == 0 {
        return 0.0;
    }

    let sum: u64 = img.pixels().map(|p| u64::from(p.to_luma()[0])).sum();
    (sum as f64 / pixel_count as f64) as f32
}

/// Applies linear contrast enhancement about the mean luminance.
///
/// Each channel value `v` maps to `mean + (v - mean) * factor`, rounded and
/// clamped to the 8-bit range. A factor of 1.0 returns the image unchanged;
/// a factor of 0.0 collapses it to a solid field at the mean.
pub fn enhance_contrast(img: &RgbImage, factor: f32) -> RgbImage {
    let pivot = mean_luma(img);
    let mut out = RgbImage::new(img.width(), img.height());

    for (dst, src) in out.pixels_mut().zip(img.pixels()) {
        *dst = Rgb(src
            .0
            .map(|v| (pivot + (f32::from(v) - pivot) * factor).round().clamp(0.0, 255.0) as u8));
    }

    out
}
