//! Collaborator seams with mock generation for testing
//!
//! The orchestrator only talks to the outside world through these traits,
//! which enables dependency injection and mock-driven sequencing tests.

use crate::error::HarnessResult;
use crate::types::{Phase, PhaseResult};

/// Fixture preparation abstraction
///
/// Resets the fixture's on-disk state before a run. Failures here are fatal
/// to the run; they are never folded into a phase verdict.
#[mockall::automock]
#[async_trait::async_trait]
pub trait FixturePreparer: Send + Sync {
    /// Clear whatever the previous run left behind.
    async fn prepare(&self) -> HarnessResult<()>;
}

/// Client invocation abstraction
///
/// Runs one phase of the client as an external process and captures what it
/// did. One OS process per call, no retries.
#[mockall::automock]
#[async_trait::async_trait]
pub trait ProcessInvoker: Send + Sync {
    /// Spawn the client for `phase`, wait for it to terminate, and return
    /// the captured output and termination status.
    ///
    /// A client that cannot be started at all surfaces as
    /// [`crate::error::HarnessError::Launch`], never as a result to judge.
    async fn invoke(&self, phase: Phase) -> HarnessResult<PhaseResult>;
}
