//! The external recognition engine boundary.
//!
//! Everything the engine does internally (detection, recognition, model
//! choice) is out of scope for this crate; the engine is a black box invoked
//! once per image path. This module defines the capability trait the arbiter
//! works against and the production implementation that shells out to an
//! external command.

mod command;

pub use command::CommandEngine;

use std::fmt::Debug;
use std::path::Path;
use std::process::ExitStatus;

use thiserror::Error;

use crate::domain::TextDetection;

/// Information about a recognition engine.
#[derive(Debug, Clone)]
pub struct EngineInfo {
    /// Name of the engine (for a command engine, the program name).
    pub name: String,
    /// Description of how the engine is invoked.
    pub description: String,
}

impl EngineInfo {
    /// Creates a new engine info.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Errors raised by a recognition engine.
#[derive(Error, Debug)]
pub enum EngineError {
    /// The engine command specification contained no program token.
    #[error("engine command is empty")]
    EmptyCommand,

    /// The engine process could not be started at all.
    ///
    /// This is a configuration-level failure (missing or non-executable
    /// program), not a property of one variant; the arbiter propagates it
    /// instead of degrading.
    #[error("failed to start engine '{program}'")]
    Spawn {
        /// The program that could not be started.
        program: String,
        /// The underlying spawn error.
        #[source]
        source: std::io::Error,
    },

    /// The engine ran but exited unsuccessfully.
    #[error("engine exited with {status}: {stderr}")]
    Failed {
        /// The process exit status.
        status: ExitStatus,
        /// Captured (trimmed) stderr of the engine process.
        stderr: String,
    },

    /// The engine exited successfully but its stdout was not the expected
    /// JSON array of detections.
    #[error("engine output is not a valid detection array")]
    Parse(#[source] serde_json::Error),
}

/// Core trait for recognition engines.
///
/// An engine takes the path of a prepared image variant and returns the
/// detections it recognized there, in its own reading order. Implementations
/// must be safe to share across threads even though the pipeline itself runs
/// the two variants sequentially.
pub trait RecognitionEngine: Send + Sync + Debug {
    /// Returns information about this engine.
    fn info(&self) -> EngineInfo;

    /// Runs recognition on the image at `path`.
    fn recognize(&self, path: &Path) -> Result<Vec<TextDetection>, EngineError>;
}
