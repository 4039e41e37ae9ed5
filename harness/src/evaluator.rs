//! Phase outcome classification
//!
//! The rule is fixed and strictly binary: a phase passes only when it printed
//! something beyond whitespace and exited normally with code 0. Violating
//! either condition fails the phase regardless of the other.

use crate::types::{FailureReason, PhaseOutcome, PhaseResult, Termination};

/// Judge a captured phase result.
///
/// Pure function of its input: the same result always classifies the same
/// way. Output emptiness is checked before the exit status, so a phase that
/// is both silent and non-zero reports the missing output as its reason.
pub fn evaluate(result: &PhaseResult) -> PhaseOutcome {
    if result.trimmed_output().is_empty() {
        return PhaseOutcome::Failure(FailureReason::EmptyOutput);
    }

    match result.termination {
        Termination::Exited(0) => PhaseOutcome::Success,
        Termination::Exited(code) => PhaseOutcome::Failure(FailureReason::NonZeroExit(code)),
        Termination::Signaled | Termination::TimedOut => {
            PhaseOutcome::Failure(FailureReason::Abnormal)
        }
    }
}
