//! Harness configuration builder

use std::path::PathBuf;
use std::time::Duration;

use super::HarnessConfig;

pub struct HarnessConfigBuilder {
    config: HarnessConfig,
}

impl HarnessConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: HarnessConfig::default(),
        }
    }

    /// Set the client binary path
    pub fn client<P: Into<PathBuf>>(mut self, client: P) -> Self {
        self.config.client = client.into();
        self
    }

    /// Set the fixture directory handed to the client
    pub fn dbdir<P: Into<PathBuf>>(mut self, dbdir: P) -> Self {
        self.config.dbdir = dbdir.into();
        self
    }

    /// Set the per-phase deadline (None waits indefinitely)
    pub fn phase_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.config.phase_timeout = timeout;
        self
    }

    /// Set log level (trace, debug, info, warn, error)
    pub fn log_level<S: Into<String>>(mut self, level: S) -> Self {
        self.config.log_level = level.into();
        self
    }

    /// Build the configuration
    pub fn build(self) -> HarnessConfig {
        self.config
    }
}

impl Default for HarnessConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
