//! Recognition-side domain types.
//!
//! This module holds the color-bias classification produced by the detector
//! and the normalized per-variant recognition outcome consumed by batch
//! selection.

use super::detection::TextDetection;

/// Dominant polarity of an image, as decided by the color-bias detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorBias {
    /// Dark strokes on a light field. Also the fallback whenever detection
    /// fails or the histogram is perfectly balanced.
    #[default]
    DarkTextOnLight,
    /// Light strokes on a dark field; the inverted variant is expected to
    /// recognize better.
    LightTextOnDark,
}

impl ColorBias {
    /// Returns true when the inverted variant should win outright once both
    /// batches have detections.
    pub fn prefers_inverted(self) -> bool {
        matches!(self, ColorBias::LightTextOnDark)
    }
}

impl std::fmt::Display for ColorBias {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColorBias::DarkTextOnLight => write!(f, "dark text on light background"),
            ColorBias::LightTextOnDark => write!(f, "light text on dark background"),
        }
    }
}

/// Normalized result of running the engine on one variant.
///
/// `Absent` (the variant was never produced, or its engine run failed) and
/// `Empty` (the engine ran and found nothing) collapse to the same thing for
/// selection purposes, but keeping them distinct keeps diagnostics honest.
///
/// `Populated` holds at least one detection; construct outcomes through
/// [`RecognitionOutcome::from_detections`] to preserve that invariant.
#[derive(Debug, Clone, PartialEq)]
pub enum RecognitionOutcome {
    /// No usable engine result exists for this variant.
    Absent,
    /// The engine ran and reported zero detections.
    Empty,
    /// The engine ran and reported at least one detection, in engine order.
    Populated(Vec<TextDetection>),
}

impl RecognitionOutcome {
    /// Normalizes an engine result list. An empty list becomes `Empty`, so
    /// `Populated` always holds at least one detection.
    pub fn from_detections(detections: Vec<TextDetection>) -> Self {
        if detections.is_empty() {
            Self::Empty
        } else {
            Self::Populated(detections)
        }
    }

    /// Returns true when this outcome holds at least one detection.
    pub fn has_detections(&self) -> bool {
        matches!(self, Self::Populated(_))
    }

    /// Number of detections in this outcome.
    pub fn count(&self) -> usize {
        match self {
            Self::Populated(detections) => detections.len(),
            _ => 0,
        }
    }

    /// Sum of the detection confidences, 0.0 unless populated.
    pub fn confidence_sum(&self) -> f64 {
        match self {
            Self::Populated(detections) => detections.iter().map(|d| d.confidence).sum(),
            _ => 0.0,
        }
    }

    /// Consumes the outcome, yielding its detections in engine order.
    pub fn into_detections(self) -> Vec<TextDetection> {
        match self {
            Self::Populated(detections) => detections,
            _ => Vec::new(),
        }
    }
}
