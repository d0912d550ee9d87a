//! Constants used throughout the pipeline.
//!
//! These are configuration defaults rather than tuned thresholds; the CLI can
//! override the size bounds and the engine command at invocation time.

/// Default maximum width bound for variant generation, in pixels.
pub const DEFAULT_MAX_WIDTH: u32 = 1600;

/// Default maximum height bound for variant generation, in pixels.
pub const DEFAULT_MAX_HEIGHT: u32 = 1600;

/// Contrast enhancement factor applied to both variants.
pub const CONTRAST_FACTOR: f32 = 2.0;

/// First grayscale bucket counted as "light" when splitting histogram mass.
///
/// Buckets below this index are dark mass, buckets at or above it are light
/// mass.
pub const LIGHT_BUCKET_START: usize = 128;

/// JPEG quality used when persisting variants of JPEG sources.
pub const JPEG_QUALITY: u8 = 95;

/// Filename suffix inserted before the extension for the enhanced variant.
pub const ENHANCED_SUFFIX: &str = "_enhanced";

/// Filename suffix inserted before the extension for the inverted variant.
pub const INVERTED_SUFFIX: &str = "_inverted";

/// External engine command used when neither the CLI flag nor the
/// environment variable provides one.
pub const DEFAULT_ENGINE_COMMAND: &str = "duo-ocr-engine";

/// Environment variable consulted for the engine command.
pub const ENGINE_ENV_VAR: &str = "DUO_OCR_ENGINE";
