//! Harness configuration
//!
//! Carries everything a run needs up front: the client binary, the fixture
//! directory, and the optional per-phase deadline. The fixture path is taken
//! exactly as given and handed through to the client unchanged; nothing is
//! discovered by walking the filesystem.

pub mod builder;

pub use builder::HarnessConfigBuilder;

use std::ffi::OsString;
use std::path::PathBuf;
use std::time::Duration;

use crate::types::Phase;

#[derive(Debug, Clone)]
pub struct HarnessConfig {
    /// Path to the client binary implementing the populate/validate phases.
    pub client: PathBuf,
    /// Fixture directory passed to the client, cleared before each run.
    pub dbdir: PathBuf,
    /// Per-phase deadline; the run blocks indefinitely when unset.
    pub phase_timeout: Option<Duration>,
    /// Log level for the tracing subscriber.
    pub log_level: String,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            client: PathBuf::new(),
            dbdir: PathBuf::from("./db"),
            phase_timeout: None,
            log_level: "info".to_string(),
        }
    }
}

impl HarnessConfig {
    /// Create a new builder
    pub fn builder() -> HarnessConfigBuilder {
        HarnessConfigBuilder::new()
    }

    /// Render the argument vector for one phase invocation.
    pub fn phase_args(&self, phase: Phase) -> Vec<OsString> {
        vec![
            OsString::from("--dbdir"),
            self.dbdir.clone().into_os_string(),
            OsString::from(phase.keyword()),
        ]
    }

    /// Check this configuration is runnable.
    pub fn is_valid(&self) -> bool {
        !self.client.as_os_str().is_empty()
    }
}
