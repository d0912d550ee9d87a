//! Error types for the dual-variant OCR pipeline.
//!
//! This module defines the errors that can occur while preparing image
//! variants and arbitrating recognition results. Most of them are absorbed
//! close to where they arise: the variant generator degrades to a degenerate
//! result, and the arbiter treats a failed engine run as an absent batch.
//! The ones that reach the top level are rendered as a single error record
//! on stdout.

use thiserror::Error;

use crate::engine::EngineError;

/// Result alias used throughout the crate.
pub type OcrResult<T> = Result<T, OcrError>;

/// Enum representing the errors that can occur in the pipeline.
#[derive(Error, Debug)]
pub enum OcrError {
    /// Error occurred while loading an image.
    #[error("image load")]
    ImageLoad(#[source] image::ImageError),

    /// Error occurred while encoding a variant to disk.
    #[error("variant encoding failed: {context}")]
    Encode {
        /// Additional context about the error.
        context: String,
        /// The underlying error that caused this error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Error from the external recognition engine.
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// Error indicating invalid input.
    #[error("invalid input: {message}")]
    InvalidInput {
        /// A message describing the invalid input.
        message: String,
    },

    /// IO error.
    #[error("io")]
    Io(#[from] std::io::Error),
}

/// Implementation of OcrError with utility functions for creating errors.
impl OcrError {
    /// Creates an OcrError for variant encoding operations.
    ///
    /// # Arguments
    ///
    /// * `context` - Additional context about the error.
    /// * `error` - The underlying error that caused this error.
    pub fn encode_error(
        context: &str,
        error: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Encode {
            context: context.to_string(),
            source: Box::new(error),
        }
    }

    /// Creates an OcrError for invalid input.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }
}

/// Implementation of From<image::ImageError> for OcrError.
///
/// This allows image::ImageError to be automatically converted to OcrError.
impl From<image::ImageError> for OcrError {
    fn from(error: image::ImageError) -> Self {
        Self::ImageLoad(error)
    }
}
