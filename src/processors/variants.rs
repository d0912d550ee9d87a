//! Variant generation.
//!
//! Builds the two preprocessed images the arbiter feeds to the engine: a
//! contrast-enhanced copy and a color-inverted, contrast-enhanced copy,
//! persisted as temporary siblings of the source file. Generation never
//! fails outright; any error degrades to a degenerate result that points the
//! arbiter back at the unmodified source.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use image::RgbImage;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::{self, FilterType};
use tracing::{debug, error, info, warn};

use crate::core::{
    CONTRAST_FACTOR, DEFAULT_MAX_HEIGHT, DEFAULT_MAX_WIDTH, ENHANCED_SUFFIX, INVERTED_SUFFIX,
    JPEG_QUALITY, OcrError, OcrResult,
};
use crate::domain::ColorBias;
use crate::processors::color_bias::detect_color_bias;
use crate::processors::enhance::{bounded_dimensions, enhance_contrast};
use crate::utils::load_image;

/// Maximum dimensions a variant may have before downscaling kicks in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeBounds {
    /// Maximum width in pixels.
    pub max_width: u32,
    /// Maximum height in pixels.
    pub max_height: u32,
}

impl Default for SizeBounds {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_WIDTH,
            max_height: DEFAULT_MAX_HEIGHT,
        }
    }
}

/// Result of variant generation.
///
/// In the degenerate case (any preprocessing failure) `enhanced` is the
/// source path itself, `inverted` is `None`, and the bias falls back to its
/// default; the arbiter then runs the engine on the unmodified source.
///
/// Ownership of the persisted variant files passes to the caller, which is
/// responsible for removing them.
#[derive(Debug, Clone)]
pub struct PreparedVariants {
    /// Path of the contrast-enhanced variant, or of the source itself.
    pub enhanced: PathBuf,
    /// Path of the inverted, contrast-enhanced variant, when produced.
    pub inverted: Option<PathBuf>,
    /// Color bias detected on the original, unresized image.
    pub color_bias: ColorBias,
}

impl PreparedVariants {
    fn degenerate(source: &Path) -> Self {
        Self {
            enhanced: source.to_path_buf(),
            inverted: None,
            color_bias: ColorBias::default(),
        }
    }
}

/// Derives the sibling path for a variant.
///
/// The suffix is inserted between the file stem and the extension
/// (`scan.jpg` becomes `scan_enhanced.jpg`); extensionless sources get a
/// bare suffix.
pub fn variant_path(source: &Path, suffix: &str) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let file_name = match source.extension() {
        Some(ext) => format!("{}{}.{}", stem, suffix, ext.to_string_lossy()),
        None => format!("{}{}", stem, suffix),
    };

    source.with_file_name(file_name)
}

/// Generates both variants for `source`.
///
/// Never fails: any preprocessing error is logged and collapsed into the
/// degenerate result.
pub fn prepare_variants(source: &Path, bounds: SizeBounds) -> PreparedVariants {
    match generate(source, bounds) {
        Ok(variants) => variants,
        Err(err) => {
            error!(
                "variant generation failed for {}: {}; falling back to the unmodified source",
                source.display(),
                err
            );
            PreparedVariants::degenerate(source)
        }
    }
}

fn generate(source: &Path, bounds: SizeBounds) -> OcrResult<PreparedVariants> {
    let img = load_image(source)?;
    let (width, height) = img.dimensions();

    let img = match bounded_dimensions(width, height, bounds.max_width, bounds.max_height) {
        Some((new_width, new_height)) if new_width == 0 || new_height == 0 => {
            return Err(OcrError::invalid_input(format!(
                "resize of {}x{} to fit {}x{} yields a zero dimension",
                width, height, bounds.max_width, bounds.max_height
            )));
        }
        Some((new_width, new_height)) => {
            debug!(
                "downscaling {} from {}x{} to {}x{}",
                source.display(),
                width,
                height,
                new_width,
                new_height
            );
            imageops::resize(&img, new_width, new_height, FilterType::Lanczos3)
        }
        None => img,
    };

    // The bias is computed on the original file, not the resized buffer.
    let color_bias = detect_color_bias(source);

    let enhanced_img = enhance_contrast(&img, CONTRAST_FACTOR);

    let mut inverted_img = img;
    imageops::invert(&mut inverted_img);
    let inverted_img = enhance_contrast(&inverted_img, CONTRAST_FACTOR);

    let enhanced_path = variant_path(source, ENHANCED_SUFFIX);
    let inverted_path = variant_path(source, INVERTED_SUFFIX);

    save_variant(&enhanced_img, &enhanced_path)?;
    if let Err(err) = save_variant(&inverted_img, &inverted_path) {
        // Do not leave a half-written pair behind.
        if let Err(remove_err) = std::fs::remove_file(&enhanced_path) {
            warn!(
                "failed to remove partial variant {}: {}",
                enhanced_path.display(),
                remove_err
            );
        }
        return Err(err);
    }

    info!(
        "prepared variants for {} ({})",
        source.display(),
        color_bias
    );
    Ok(PreparedVariants {
        enhanced: enhanced_path,
        inverted: Some(inverted_path),
        color_bias,
    })
}

fn save_variant(img: &RgbImage, path: &Path) -> OcrResult<()> {
    if has_jpeg_extension(path) {
        let file = File::create(path)?;
        let writer = BufWriter::new(file);
        let encoder = JpegEncoder::new_with_quality(writer, JPEG_QUALITY);
        img.write_with_encoder(encoder)
            .map_err(|e| OcrError::encode_error(&format!("saving {}", path.display()), e))
    } else {
        img.save(path)
            .map_err(|e| OcrError::encode_error(&format!("saving {}", path.display()), e))
    }
}

fn has_jpeg_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("jpg") || ext.eq_ignore_ascii_case("jpeg"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;
    use tempfile::TempDir;

    fn save_png(dir: &TempDir, name: &str, img: &RgbImage) -> PathBuf {
        let path = dir.path().join(name);
        img.save(&path).unwrap();
        path
    }

    #[test]
    fn test_variant_path_inserts_suffix_before_extension() {
        assert_eq!(
            variant_path(Path::new("/tmp/photo.jpg"), "_enhanced"),
            PathBuf::from("/tmp/photo_enhanced.jpg")
        );
        assert_eq!(
            variant_path(Path::new("scan.tar.gz"), "_inverted"),
            PathBuf::from("scan.tar_inverted.gz")
        );
    }

    #[test]
    fn test_variant_path_without_extension() {
        assert_eq!(
            variant_path(Path::new("/tmp/receipt"), "_enhanced"),
            PathBuf::from("/tmp/receipt_enhanced")
        );
        assert_eq!(
            variant_path(Path::new(".hidden"), "_enhanced"),
            PathBuf::from(".hidden_enhanced")
        );
    }

    #[test]
    fn test_prepare_writes_both_variants() {
        let dir = TempDir::new().unwrap();
        let img = RgbImage::from_pixel(40, 30, Rgb([220, 220, 220]));
        let source = save_png(&dir, "sample.png", &img);

        let variants = prepare_variants(&source, SizeBounds::default());

        assert_eq!(variants.enhanced, dir.path().join("sample_enhanced.png"));
        assert_eq!(
            variants.inverted.as_deref(),
            Some(dir.path().join("sample_inverted.png").as_path())
        );
        assert_eq!(variants.color_bias, ColorBias::DarkTextOnLight);

        // Both variants decode and keep the source dimensions.
        let enhanced = image::open(&variants.enhanced).unwrap();
        assert_eq!((enhanced.width(), enhanced.height()), (40, 30));
        let inverted = image::open(variants.inverted.as_ref().unwrap()).unwrap();
        assert_eq!((inverted.width(), inverted.height()), (40, 30));
    }

    #[test]
    fn test_prepare_detects_dark_background() {
        let dir = TempDir::new().unwrap();
        let img = RgbImage::from_pixel(32, 32, Rgb([12, 12, 12]));
        let source = save_png(&dir, "night.png", &img);

        let variants = prepare_variants(&source, SizeBounds::default());
        assert_eq!(variants.color_bias, ColorBias::LightTextOnDark);
    }

    #[test]
    fn test_prepare_downscales_oversized_source() {
        let dir = TempDir::new().unwrap();
        let img = RgbImage::from_pixel(100, 80, Rgb([200, 200, 200]));
        let source = save_png(&dir, "big.png", &img);

        let bounds = SizeBounds {
            max_width: 50,
            max_height: 50,
        };
        let variants = prepare_variants(&source, bounds);

        let enhanced = image::open(&variants.enhanced).unwrap();
        assert_eq!((enhanced.width(), enhanced.height()), (50, 40));
    }

    #[test]
    fn test_prepare_keeps_small_source_unscaled() {
        let dir = TempDir::new().unwrap();
        let img = RgbImage::from_pixel(20, 10, Rgb([200, 200, 200]));
        let source = save_png(&dir, "small.png", &img);

        let variants = prepare_variants(&source, SizeBounds::default());

        let enhanced = image::open(&variants.enhanced).unwrap();
        assert_eq!((enhanced.width(), enhanced.height()), (20, 10));
    }

    #[test]
    fn test_missing_source_degrades() {
        let source = Path::new("/nonexistent/missing.png");
        let variants = prepare_variants(source, SizeBounds::default());

        assert_eq!(variants.enhanced, source);
        assert_eq!(variants.inverted, None);
        assert_eq!(variants.color_bias, ColorBias::DarkTextOnLight);
    }

    #[test]
    fn test_zero_bounds_degrade() {
        let dir = TempDir::new().unwrap();
        let img = RgbImage::from_pixel(100, 80, Rgb([200, 200, 200]));
        let source = save_png(&dir, "crushed.png", &img);

        let bounds = SizeBounds {
            max_width: 0,
            max_height: 0,
        };
        let variants = prepare_variants(&source, bounds);

        assert_eq!(variants.enhanced, source);
        assert_eq!(variants.inverted, None);
        assert!(!dir.path().join("crushed_enhanced.png").exists());
    }

    #[test]
    fn test_jpeg_source_produces_jpeg_variants() {
        let dir = TempDir::new().unwrap();
        let img = RgbImage::from_pixel(24, 24, Rgb([180, 180, 180]));
        let source = dir.path().join("page.jpg");
        img.save(&source).unwrap();

        let variants = prepare_variants(&source, SizeBounds::default());

        assert_eq!(variants.enhanced, dir.path().join("page_enhanced.jpg"));
        let enhanced = image::open(&variants.enhanced).unwrap();
        assert_eq!((enhanced.width(), enhanced.height()), (24, 24));
    }
}
