//! The core module of the pipeline.
//!
//! This module contains the fundamental components shared by the rest of the
//! crate, including:
//! - Constants used throughout the pipeline
//! - Error handling
//!
//! It also provides re-exports of commonly used types for convenience.

pub mod constants;
pub mod errors;

pub use constants::*;
pub use errors::{OcrError, OcrResult};
