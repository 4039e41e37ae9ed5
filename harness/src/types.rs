//! Core data model for a verification run
//!
//! A run walks the client through two ordered phases. Each invocation is
//! captured as a [`PhaseResult`], judged into a [`PhaseOutcome`], and the
//! whole run collapses into a single [`RunOutcome`].

use std::fmt;

/// One step of the verification run. Populate always precedes validate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Populate,
    Validate,
}

impl Phase {
    /// Keyword handed to the client on the command line.
    pub fn keyword(&self) -> &'static str {
        match self {
            Phase::Populate => "populate",
            Phase::Validate => "validate",
        }
    }

    /// The phase that follows this one, if any.
    pub fn next(&self) -> Option<Phase> {
        match self {
            Phase::Populate => Some(Phase::Validate),
            Phase::Validate => None,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// How the client process ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// Normal exit with the given code.
    Exited(i32),
    /// Killed by a signal before it could exit.
    Signaled,
    /// Killed by the harness after exceeding the phase deadline.
    TimedOut,
}

impl Termination {
    /// A clean termination is a normal exit with code 0.
    pub fn is_clean(&self) -> bool {
        matches!(self, Termination::Exited(0))
    }
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Termination::Exited(code) => write!(f, "exit code {code}"),
            Termination::Signaled => f.write_str("killed by signal"),
            Termination::TimedOut => f.write_str("timed out"),
        }
    }
}

/// Captured result of one phase invocation. Immutable after capture.
#[derive(Debug, Clone)]
pub struct PhaseResult {
    pub phase: Phase,
    pub output: String,
    pub termination: Termination,
}

impl PhaseResult {
    /// The captured output with surrounding whitespace stripped; this is
    /// what gets judged and what gets echoed on success.
    pub fn trimmed_output(&self) -> &str {
        self.output.trim()
    }
}

/// Why a phase was judged a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureReason {
    EmptyOutput,
    NonZeroExit(i32),
    Abnormal,
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureReason::EmptyOutput => f.write_str("no output"),
            FailureReason::NonZeroExit(code) => write!(f, "exit code {code}"),
            FailureReason::Abnormal => f.write_str("abnormal termination"),
        }
    }
}

/// Binary verdict for a single phase. No warning or partial state exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseOutcome {
    Success,
    Failure(FailureReason),
}

impl PhaseOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, PhaseOutcome::Success)
    }
}

/// Terminal verdict for the whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOutcome {
    pub success: bool,
    pub failing_phase: Option<Phase>,
}

impl RunOutcome {
    pub fn passed() -> Self {
        Self {
            success: true,
            failing_phase: None,
        }
    }

    pub fn failed(phase: Phase) -> Self {
        Self {
            success: false,
            failing_phase: Some(phase),
        }
    }

    /// Process exit code the harness reports to its own caller.
    pub fn exit_code(&self) -> i32 {
        if self.success { 0 } else { 1 }
    }
}
