//! Fixture directory reset
//!
//! Clears every entry under the configured fixture directory before a run,
//! creating the directory itself when missing. The directory is handed to
//! the client exactly as configured; the harness never derives sub-paths
//! from it.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{HarnessError, HarnessResult};
use crate::traits::FixturePreparer;

pub struct DirFixturePreparer {
    root: PathBuf,
}

impl DirFixturePreparer {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    fn fixture_err(operation: &str, path: &Path, source: std::io::Error) -> HarnessError {
        HarnessError::Fixture {
            operation: operation.to_string(),
            path: path.to_path_buf(),
            source,
        }
    }
}

#[async_trait::async_trait]
impl FixturePreparer for DirFixturePreparer {
    async fn prepare(&self) -> HarnessResult<()> {
        let mut entries = match tokio::fs::read_dir(&self.root).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tokio::fs::create_dir_all(&self.root)
                    .await
                    .map_err(|e| Self::fixture_err("create", &self.root, e))?;
                debug!("🧹 created fixture directory {}", self.root.display());
                return Ok(());
            }
            Err(e) => return Err(Self::fixture_err("read", &self.root, e)),
        };

        let mut cleared = 0usize;
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| Self::fixture_err("read", &self.root, e))?
        {
            let path = entry.path();
            let file_type = entry
                .file_type()
                .await
                .map_err(|e| Self::fixture_err("stat", &path, e))?;

            if file_type.is_dir() {
                tokio::fs::remove_dir_all(&path)
                    .await
                    .map_err(|e| Self::fixture_err("remove", &path, e))?;
            } else {
                tokio::fs::remove_file(&path)
                    .await
                    .map_err(|e| Self::fixture_err("remove", &path, e))?;
            }
            cleared += 1;
        }

        debug!("🧹 cleared {} entries from {}", cleared, self.root.display());
        Ok(())
    }
}
