//! Builders for scripted clients used by the integration tests
//!
//! Each test gets a sandbox: a temp dir holding a shell-script client and
//! the fixture directory, plus an orchestrator wired with the real services.

use std::path::PathBuf;
use std::time::Duration;

use tempfile::TempDir;

use harness::{CommandInvoker, DirFixturePreparer, HarnessConfig, Orchestrator};

pub struct Sandbox {
    pub dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("tempdir"),
        }
    }

    pub fn dbdir(&self) -> PathBuf {
        self.dir.path().join("db")
    }

    /// Path for a marker file a scripted client can touch to prove it ran.
    pub fn marker(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write an executable shell script acting as the client under test.
    ///
    /// The harness invokes it as `client --dbdir <path> <keyword>`, so the
    /// script sees the fixture directory as `$2` and the phase as `$3`.
    pub fn client_script(&self, body: &str) -> PathBuf {
        let path = self.dir.path().join("client");
        std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("write client script");
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(&path).expect("stat client script").permissions();
            perms.set_mode(0o755);
            std::fs::set_permissions(&path, perms).expect("chmod client script");
        }
        path
    }

    /// Wire the real services around the given client path.
    pub fn orchestrator(&self, client: PathBuf) -> Orchestrator<DirFixturePreparer, CommandInvoker> {
        self.orchestrator_with(client, None)
    }

    pub fn orchestrator_with(
        &self,
        client: PathBuf,
        phase_timeout: Option<Duration>,
    ) -> Orchestrator<DirFixturePreparer, CommandInvoker> {
        let config = HarnessConfig::builder()
            .client(client)
            .dbdir(self.dbdir())
            .phase_timeout(phase_timeout)
            .build();

        let preparer = DirFixturePreparer::new(config.dbdir.clone());
        Orchestrator::new(preparer, CommandInvoker::new(config))
    }
}

impl Default for Sandbox {
    fn default() -> Self {
        Self::new()
    }
}
