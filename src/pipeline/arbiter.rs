//! Orchestration of the dual-variant recognition flow.
//!
//! The arbiter owns one engine and one pair of size bounds. For each image
//! it generates the variants, runs the engine on every variant that exists,
//! removes the temporary files, and arbitrates between the resulting
//! batches. Engine failures on a single variant degrade that variant's batch
//! instead of failing the run; only configuration-level failures (an engine
//! that cannot even be started, a source that does not exist) surface as an
//! error payload.

use std::path::{Path, PathBuf};

use tracing::{debug, error, info, warn};

use crate::core::{OcrError, OcrResult};
use crate::domain::{OutputRecord, RecognitionOutcome};
use crate::engine::{EngineError, RecognitionEngine};
use crate::processors::variants::{PreparedVariants, SizeBounds, prepare_variants};

use super::selection::{Selection, select_batch};

/// Removes generated variant files when dropped.
///
/// The source image itself is never registered, so the degenerate case
/// (where the "enhanced" path is the source) deletes nothing. Removal
/// failures are logged, never propagated.
struct VariantArtifacts {
    paths: Vec<PathBuf>,
}

impl VariantArtifacts {
    fn new(source: &Path, variants: &PreparedVariants) -> Self {
        let mut paths = Vec::new();
        if variants.enhanced != source {
            paths.push(variants.enhanced.clone());
        }
        if let Some(inverted) = &variants.inverted {
            paths.push(inverted.clone());
        }
        Self { paths }
    }
}

impl Drop for VariantArtifacts {
    fn drop(&mut self) {
        for path in &self.paths {
            if !path.exists() {
                continue;
            }
            if let Err(err) = std::fs::remove_file(path) {
                warn!(
                    "failed to remove temporary variant {}: {}",
                    path.display(),
                    err
                );
            }
        }
    }
}

/// Arbitrates recognition over the two preprocessed variants of one image.
#[derive(Debug)]
pub struct RecognitionArbiter<E> {
    engine: E,
    bounds: SizeBounds,
}

impl<E: RecognitionEngine> RecognitionArbiter<E> {
    /// Creates an arbiter with the given engine and size bounds.
    pub fn new(engine: E, bounds: SizeBounds) -> Self {
        Self { engine, bounds }
    }

    /// Processes one image and always yields a printable record list.
    ///
    /// Any propagated pipeline failure is logged and rendered as a
    /// single-element error payload; deciding the process exit status is the
    /// caller's business.
    pub fn run(&self, source: &Path) -> Vec<OutputRecord> {
        match self.try_run(source) {
            Ok(records) => records,
            Err(err) => {
                error!("pipeline failed for {}: {}", source.display(), err);
                vec![OutputRecord::error(err.to_string())]
            }
        }
    }

    /// Processes one image, propagating pipeline-level failures.
    pub fn try_run(&self, source: &Path) -> OcrResult<Vec<OutputRecord>> {
        if !source.exists() {
            return Err(OcrError::invalid_input(format!(
                "no such file: {}",
                source.display()
            )));
        }

        info!(
            "processing {} with engine {}",
            source.display(),
            self.engine.info().name
        );

        let variants = prepare_variants(source, self.bounds);

        let (enhanced_outcome, inverted_outcome) = {
            let _artifacts = VariantArtifacts::new(source, &variants);

            let enhanced_outcome = self.recognize_variant(&variants.enhanced, "enhanced")?;
            let inverted_outcome = match &variants.inverted {
                Some(path) => self.recognize_variant(path, "inverted")?,
                None => RecognitionOutcome::Absent,
            };

            // Variant files are removed here, before selection.
            (enhanced_outcome, inverted_outcome)
        };

        let selection = select_batch(&enhanced_outcome, &inverted_outcome, variants.color_bias);
        debug!(
            "selection for {}: {:?} (enhanced: {}, inverted: {}, bias: {})",
            source.display(),
            selection,
            enhanced_outcome.count(),
            inverted_outcome.count(),
            variants.color_bias
        );

        let detections = match selection {
            Selection::Enhanced => enhanced_outcome.into_detections(),
            Selection::Inverted => inverted_outcome.into_detections(),
            Selection::Neither => Vec::new(),
        };

        info!(
            "{} detection(s) selected for {}",
            detections.len(),
            source.display()
        );
        Ok(detections.into_iter().map(OutputRecord::Detection).collect())
    }

    /// Runs the engine on one variant, normalizing failures.
    ///
    /// A spawn failure propagates, since the engine itself is unusable and
    /// the second variant would fail identically. Any other engine error
    /// demotes this variant's batch to `Absent` so selection can proceed
    /// with whatever remains.
    fn recognize_variant(&self, path: &Path, label: &str) -> OcrResult<RecognitionOutcome> {
        match self.engine.recognize(path) {
            Ok(detections) => {
                debug!(
                    "{} variant {}: {} detection(s)",
                    label,
                    path.display(),
                    detections.len()
                );
                Ok(RecognitionOutcome::from_detections(detections))
            }
            Err(err @ EngineError::Spawn { .. }) => Err(err.into()),
            Err(err) => {
                warn!(
                    "recognition failed on {} variant {}: {}",
                    label,
                    path.display(),
                    err
                );
                Ok(RecognitionOutcome::Absent)
            }
        }
    }
}
