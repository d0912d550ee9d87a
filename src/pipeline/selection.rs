//! Batch arbitration policy.
//!
//! Pure selection between the enhanced and inverted recognition batches.
//! Keeping this free of IO makes the precedence rules directly testable.

use crate::domain::{ColorBias, RecognitionOutcome};

/// The winning side of an arbitration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// The contrast-enhanced variant's batch wins.
    Enhanced,
    /// The inverted variant's batch wins.
    Inverted,
    /// Neither batch has detections; the output is empty.
    Neither,
}

/// Selects the winning batch.
///
/// Precedence:
/// 1. If exactly one batch has detections, it wins.
/// 2. If both have detections:
///    a. a light-on-dark color bias selects the inverted batch outright,
///    b. otherwise the batch with more detections wins,
///    c. on a count tie the inverted batch wins only with a strictly higher
///       total confidence,
///    d. any remaining tie keeps the enhanced batch.
/// 3. If neither has detections, nothing is selected.
///
/// `Absent` and `Empty` outcomes are both "no detections" here.
pub fn select_batch(
    enhanced: &RecognitionOutcome,
    inverted: &RecognitionOutcome,
    bias: ColorBias,
) -> Selection {
    match (enhanced.has_detections(), inverted.has_detections()) {
        (true, false) => Selection::Enhanced,
        (false, true) => Selection::Inverted,
        (false, false) => Selection::Neither,
        (true, true) => {
            if bias.prefers_inverted() {
                return Selection::Inverted;
            }

            let count_enhanced = enhanced.count();
            let count_inverted = inverted.count();
            if count_inverted > count_enhanced {
                Selection::Inverted
            } else if count_enhanced > count_inverted {
                Selection::Enhanced
            } else if inverted.confidence_sum() > enhanced.confidence_sum() {
                Selection::Inverted
            } else {
                Selection::Enhanced
            }
        }
    }
}
