//! Wire-level recognition types.
//!
//! These types carry the contract shared by the external engine's stdout and
//! this program's own stdout payload: a JSON array of objects with `coords`,
//! `text` and `confidence` fields, where each coordinate is a two-element
//! `[x, y]` array.

use serde::{Deserialize, Serialize};

/// A single polygon vertex in image pixel coordinates.
///
/// Serialized as a two-element `[x, y]` array rather than an object, matching
/// the engine wire format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Point {
    /// The x coordinate.
    pub x: f64,
    /// The y coordinate.
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Point> for [f64; 2] {
    fn from(point: Point) -> Self {
        [point.x, point.y]
    }
}

/// One recognized text region reported by the engine.
///
/// The polygon is carried through unchanged; this program never reinterprets
/// the geometry, it only arbitrates between whole batches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextDetection {
    /// Polygon outlining the text region, usually four vertices.
    pub coords: Vec<Point>,
    /// The recognized text content.
    pub text: String,
    /// Engine confidence for the recognition, typically in [0, 1].
    pub confidence: f64,
}

/// One element of the final stdout JSON array.
///
/// The array either lists the detections of the winning batch or contains a
/// single error object; the two shapes never mix.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum OutputRecord {
    /// A recognized text region from the winning batch.
    Detection(TextDetection),
    /// A pipeline-level failure rendered as `{"error": <message>}`.
    Error {
        /// Human-readable description of the failure.
        error: String,
    },
}

impl OutputRecord {
    /// Creates an error record from any displayable message.
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            error: message.into(),
        }
    }
}
