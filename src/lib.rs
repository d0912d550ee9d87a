//! # duo-ocr
//!
//! A dual-variant preprocessing and arbitration front end for external OCR
//! engines. Given a single image, it prepares a contrast-enhanced variant
//! and a color-inverted, contrast-enhanced variant, runs a black-box engine
//! on both, and keeps whichever recognition batch wins a deterministic
//! selection policy informed by a color-bias heuristic.
//!
//! ## Components
//!
//! - **Color-Bias Detection**: Classify an image as dark-on-light or
//!   light-on-dark from its grayscale histogram
//! - **Variant Generation**: Bounded Lanczos downscaling, mean-pivot
//!   contrast enhancement, color inversion, temporary sibling files
//! - **Recognition Arbitration**: Run the engine per variant, normalize
//!   failures, select one batch, guarantee temp-file cleanup
//!
//! ## Modules
//!
//! * [`core`] - Constants and error handling
//! * [`domain`] - Wire-level detection types and recognition outcomes
//! * [`engine`] - The external engine capability and its command-backed
//!   implementation
//! * [`pipeline`] - The arbiter and the selection policy
//! * [`processors`] - Color-bias detection and variant generation
//! * [`utils`] - Image loading and logging setup
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use duo_ocr::prelude::*;
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let engine = CommandEngine::from_shell("paddle-worker --lang en")?;
//! let arbiter = RecognitionArbiter::new(engine, SizeBounds::default());
//!
//! let records = arbiter.run(Path::new("document.jpg"));
//! println!("{}", serde_json::to_string(&records)?);
//! # Ok(())
//! # }
//! ```
//!
//! The engine contract is deliberately small: any command that accepts an
//! image path as its final argument, prints a JSON array of
//! `{"coords": [[x, y], ...], "text": ..., "confidence": ...}` objects on
//! stdout, and exits with status 0 can serve as the engine.

pub mod core;
pub mod domain;
pub mod engine;
pub mod pipeline;
pub mod processors;
pub mod utils;

/// Prelude module for convenient imports.
///
/// Bring the essentials into scope with a single use statement:
///
/// ```rust
/// use duo_ocr::prelude::*;
/// ```
///
/// Included items focus on the most common tasks:
/// - Arbitration (`RecognitionArbiter`, `Selection`)
/// - Engines (`RecognitionEngine`, `CommandEngine`)
/// - Results (`OutputRecord`, `TextDetection`, `RecognitionOutcome`)
/// - Variant generation (`SizeBounds`, `PreparedVariants`)
/// - Essential error types (`OcrError`, `OcrResult`)
///
/// For anything deeper (histogram classification, contrast math), import
/// directly from the respective modules (e.g. `duo_ocr::processors`).
pub mod prelude {
    pub use crate::pipeline::{RecognitionArbiter, Selection};

    pub use crate::engine::{CommandEngine, EngineError, EngineInfo, RecognitionEngine};

    pub use crate::domain::{ColorBias, OutputRecord, Point, RecognitionOutcome, TextDetection};

    pub use crate::processors::{PreparedVariants, SizeBounds};

    pub use crate::core::{OcrError, OcrResult};

    pub use crate::utils::load_image;
}
