//! External client invocation
//!
//! Spawns the configured client binary once per phase with piped stdio,
//! waits for it to terminate, and captures its stdout and exit status. The
//! child is reaped on every exit path: `kill_on_drop` covers the case where
//! the wait is abandoned by the phase deadline.

use std::process::Stdio;

use tokio::process::Command;
use tokio::time::timeout;
use tracing::{debug, warn};

use crate::config::HarnessConfig;
use crate::error::{HarnessError, HarnessResult};
use crate::traits::ProcessInvoker;
use crate::types::{Phase, PhaseResult, Termination};

/// Invoker that runs the configured client, one OS process per phase.
pub struct CommandInvoker {
    config: HarnessConfig,
}

impl CommandInvoker {
    pub fn new(config: HarnessConfig) -> Self {
        Self { config }
    }
}

#[async_trait::async_trait]
impl ProcessInvoker for CommandInvoker {
    async fn invoke(&self, phase: Phase) -> HarnessResult<PhaseResult> {
        let mut cmd = Command::new(&self.config.client);
        cmd.args(self.config.phase_args(phase))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        debug!("🚀 spawning {} for {}", self.config.client.display(), phase);

        // Missing or non-executable clients surface here, before any
        // PhaseResult exists.
        let child = cmd.spawn().map_err(|source| HarnessError::Launch {
            path: self.config.client.clone(),
            source,
        })?;

        let output = match self.config.phase_timeout {
            Some(limit) => match timeout(limit, child.wait_with_output()).await {
                Ok(waited) => waited?,
                Err(_) => {
                    // Dropping the future drops the child, which kills it.
                    warn!("⏰ {} did not finish within {:?}", phase, limit);
                    return Ok(PhaseResult {
                        phase,
                        output: String::new(),
                        termination: Termination::TimedOut,
                    });
                }
            },
            None => child.wait_with_output().await?,
        };

        let termination = match output.status.code() {
            Some(code) => Termination::Exited(code),
            None => Termination::Signaled,
        };

        let stderr = String::from_utf8_lossy(&output.stderr);
        if !stderr.trim().is_empty() {
            debug!("{} stderr: {}", phase, stderr.trim());
        }

        Ok(PhaseResult {
            phase,
            output: String::from_utf8_lossy(&output.stdout).into_owned(),
            termination,
        })
    }
}
