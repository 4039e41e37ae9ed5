//! Run sequencing for the verification harness
//!
//! Owns the phase state machine: reset the fixture, run populate, judge it,
//! short-circuit or continue to validate, judge that, report the overall
//! outcome. Strictly sequential; exactly one client process is alive at a
//! time and each phase is a single awaited call.

use std::io::Write;

use tracing::{debug, info, warn};

use crate::error::HarnessResult;
use crate::evaluator;
use crate::state::RunState;
use crate::traits::{FixturePreparer, ProcessInvoker};
use crate::types::{Phase, PhaseOutcome, PhaseResult, RunOutcome};

/// Drives one verification run over injected collaborators.
pub struct Orchestrator<P, I> {
    preparer: P,
    invoker: I,
}

impl<P, I> Orchestrator<P, I>
where
    P: FixturePreparer,
    I: ProcessInvoker,
{
    pub fn new(preparer: P, invoker: I) -> Self {
        Self { preparer, invoker }
    }

    /// Advance the run to a terminal state and return its outcome.
    ///
    /// Phase failures are folded into the returned [`RunOutcome`]; launch
    /// and fixture failures escalate as errors since there is nothing to
    /// judge.
    pub async fn run(&self) -> HarnessResult<RunOutcome> {
        let mut state = RunState::Init;
        loop {
            state = match state {
                RunState::Init => RunState::PreparingFixture,
                RunState::PreparingFixture => {
                    debug!("🧹 resetting fixture state");
                    self.preparer.prepare().await?;
                    RunState::Running(Phase::Populate)
                }
                RunState::Running(phase) => {
                    let result = self.invoke_phase(phase).await?;
                    RunState::Evaluating(result)
                }
                RunState::Evaluating(result) => self.judge(result),
                RunState::Done(outcome) => return Ok(outcome),
            };
        }
    }

    /// Announce the phase, then hand off to the invoker.
    async fn invoke_phase(&self, phase: Phase) -> HarnessResult<PhaseResult> {
        print!("starting {phase}... ");
        let _ = std::io::stdout().flush();

        match self.invoker.invoke(phase).await {
            Ok(result) => Ok(result),
            Err(err) => {
                // The status line is already open; close it before bailing.
                println!("failed!");
                Err(err)
            }
        }
    }

    fn judge(&self, result: PhaseResult) -> RunState {
        match evaluator::evaluate(&result) {
            PhaseOutcome::Success => {
                println!("ok");
                println!("{}", result.trimmed_output());
                info!("✅ {} passed", result.phase);

                match result.phase.next() {
                    Some(next) => RunState::Running(next),
                    None => RunState::Done(RunOutcome::passed()),
                }
            }
            PhaseOutcome::Failure(reason) => {
                println!("failed!");
                warn!("⚠️ {} failed: {}", result.phase, reason);
                RunState::Done(RunOutcome::failed(result.phase))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HarnessError;
    use crate::traits::{MockFixturePreparer, MockProcessInvoker};
    use crate::types::Termination;

    fn ready_preparer() -> MockFixturePreparer {
        let mut preparer = MockFixturePreparer::new();
        preparer.expect_prepare().times(1).returning(|| Ok(()));
        preparer
    }

    fn captured(phase: Phase, output: &str, termination: Termination) -> PhaseResult {
        PhaseResult {
            phase,
            output: output.to_string(),
            termination,
        }
    }

    #[tokio::test]
    async fn both_phases_passing_yields_success() {
        let mut invoker = MockProcessInvoker::new();
        invoker
            .expect_invoke()
            .withf(|phase| *phase == Phase::Populate)
            .times(1)
            .returning(|phase| Ok(captured(phase, "42 objects created", Termination::Exited(0))));
        invoker
            .expect_invoke()
            .withf(|phase| *phase == Phase::Validate)
            .times(1)
            .returning(|phase| Ok(captured(phase, "42 objects verified", Termination::Exited(0))));

        let outcome = Orchestrator::new(ready_preparer(), invoker).run().await.unwrap();

        assert!(outcome.success);
        assert_eq!(outcome.failing_phase, None);
        assert_eq!(outcome.exit_code(), 0);
    }

    #[tokio::test]
    async fn silent_populate_short_circuits_validate() {
        let mut invoker = MockProcessInvoker::new();
        invoker
            .expect_invoke()
            .withf(|phase| *phase == Phase::Populate)
            .times(1)
            .returning(|phase| Ok(captured(phase, "   \n", Termination::Exited(0))));
        invoker
            .expect_invoke()
            .withf(|phase| *phase == Phase::Validate)
            .times(0);

        let outcome = Orchestrator::new(ready_preparer(), invoker).run().await.unwrap();

        assert!(!outcome.success);
        assert_eq!(outcome.failing_phase, Some(Phase::Populate));
        assert_eq!(outcome.exit_code(), 1);
    }

    #[tokio::test]
    async fn failing_validate_fails_the_run() {
        let mut invoker = MockProcessInvoker::new();
        invoker
            .expect_invoke()
            .withf(|phase| *phase == Phase::Populate)
            .times(1)
            .returning(|phase| Ok(captured(phase, "42 objects created", Termination::Exited(0))));
        invoker
            .expect_invoke()
            .withf(|phase| *phase == Phase::Validate)
            .times(1)
            .returning(|phase| Ok(captured(phase, "mismatch at key 7", Termination::Exited(1))));

        let outcome = Orchestrator::new(ready_preparer(), invoker).run().await.unwrap();

        assert!(!outcome.success);
        assert_eq!(outcome.failing_phase, Some(Phase::Validate));
    }

    #[tokio::test]
    async fn launch_failure_escalates_without_judging() {
        let mut invoker = MockProcessInvoker::new();
        invoker.expect_invoke().times(1).returning(|_| {
            Err(HarnessError::Launch {
                path: "./client".into(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
            })
        });

        let err = Orchestrator::new(ready_preparer(), invoker)
            .run()
            .await
            .unwrap_err();

        assert!(matches!(err, HarnessError::Launch { .. }));
    }

    #[tokio::test]
    async fn fixture_failure_aborts_before_any_phase() {
        let mut preparer = MockFixturePreparer::new();
        preparer.expect_prepare().times(1).returning(|| {
            Err(HarnessError::Fixture {
                operation: "remove".to_string(),
                path: "./db".into(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
            })
        });
        let mut invoker = MockProcessInvoker::new();
        invoker.expect_invoke().times(0);

        let err = Orchestrator::new(preparer, invoker).run().await.unwrap_err();

        assert!(matches!(err, HarnessError::Fixture { .. }));
    }

    #[tokio::test]
    async fn signaled_populate_counts_as_failure() {
        let mut invoker = MockProcessInvoker::new();
        invoker
            .expect_invoke()
            .withf(|phase| *phase == Phase::Populate)
            .times(1)
            .returning(|phase| Ok(captured(phase, "partial write", Termination::Signaled)));
        invoker
            .expect_invoke()
            .withf(|phase| *phase == Phase::Validate)
            .times(0);

        let outcome = Orchestrator::new(ready_preparer(), invoker).run().await.unwrap();

        assert!(!outcome.success);
        assert_eq!(outcome.failing_phase, Some(Phase::Populate));
    }
}
