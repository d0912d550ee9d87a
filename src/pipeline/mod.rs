//! The arbitration pipeline.
//!
//! This module combines variant generation, engine invocation, and the batch
//! selection policy into the flow the binary drives: one image in, one
//! record list out.

pub mod arbiter;
pub mod selection;

pub use arbiter::RecognitionArbiter;
pub use selection::{Selection, select_batch};
