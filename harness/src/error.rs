//! Harness-specific error types

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HarnessError {
    #[error("failed to launch client {}: {source}", .path.display())]
    Launch {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("fixture preparation failed: {operation} on {}", .path.display())]
    Fixture {
        operation: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {field}")]
    Config { field: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type HarnessResult<T> = Result<T, HarnessError>;
