//! Image processing for the dual-variant pipeline.
//!
//! This module provides the preprocessing stages that feed the arbiter:
//!
//! * `color_bias` - Grayscale histogram classification of image polarity
//! * `enhance` - Pure pixel math (resize targets, mean-pivot contrast)
//! * `variants` - Variant generation and persistence

pub mod color_bias;
pub mod enhance;
pub mod variants;

pub use color_bias::{classify_histogram, classify_image, detect_color_bias};
pub use enhance::{bounded_dimensions, enhance_contrast, mean_luma};
pub use variants::{PreparedVariants, SizeBounds, prepare_variants, variant_path};
