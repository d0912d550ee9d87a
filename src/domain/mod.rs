//! Domain-level structures shared across the pipeline.
//!
//! This module groups the wire-level detection types exchanged with the
//! external engine and the recognition concepts (color bias, per-variant
//! outcomes) that the arbitration policy is expressed in.

pub mod detection;
pub mod recognition;

pub use detection::{OutputRecord, Point, TextDetection};
pub use recognition::{ColorBias, RecognitionOutcome};
