//! Persistence-fixture verification harness
//!
//! Drives an external store client through a populate phase and a validate
//! phase against a freshly cleared fixture directory, then reports pass or
//! fail. A phase passes only when it prints something beyond whitespace and
//! exits cleanly; the run stops at the first failing phase.
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::time::Duration;
//! use harness::{CommandInvoker, DirFixturePreparer, HarnessConfig, Orchestrator};
//!
//! # async fn run() -> harness::HarnessResult<()> {
//! let config = HarnessConfig::builder()
//!     .client("./client")
//!     .dbdir("./db")
//!     .phase_timeout(Some(Duration::from_secs(60)))
//!     .build();
//!
//! let preparer = DirFixturePreparer::new(config.dbdir.clone());
//! let orchestrator = Orchestrator::new(preparer, CommandInvoker::new(config));
//!
//! let outcome = orchestrator.run().await?;
//! assert!(outcome.success);
//! # Ok(())
//! # }
//! ```

// Core modules
pub mod config;
pub mod error;
pub mod evaluator;
pub mod logging;
pub mod orchestrator;
pub mod services;
pub mod state;
pub mod traits;
pub mod types;

// Main interfaces - re-exported at crate root for convenience
pub use config::{HarnessConfig, HarnessConfigBuilder};
pub use error::{HarnessError, HarnessResult};
pub use orchestrator::Orchestrator;
pub use services::{CommandInvoker, DirFixturePreparer};

// Supporting types
pub use state::RunState;
pub use types::{FailureReason, Phase, PhaseOutcome, PhaseResult, RunOutcome, Termination};
