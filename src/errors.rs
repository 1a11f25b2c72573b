// src/errors.rs

//! Crate-wide error types.

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RootbuildError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Manifest not found: no {manifest} in {start:?} or any parent directory")]
    NotFound { manifest: String, start: PathBuf },

    #[error(transparent)]
    Build(#[from] BuildError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Failures of the external build process.
#[derive(Error, Debug)]
pub enum BuildError {
    /// The process could not be started at all (missing binary, permissions).
    #[error("failed to launch build command '{program}': {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Reading the child's output or waiting on it failed.
    #[error("failed while waiting for build process: {source}")]
    Wait {
        #[source]
        source: std::io::Error,
    },

    /// The process ran and exited with a failure status.
    #[error("build command exited with {status}")]
    Exited {
        status: ExitStatus,
        stdout: String,
        stderr: String,
    },
}

impl BuildError {
    /// Captured diagnostic text, if the process got far enough to produce any.
    pub fn stderr(&self) -> Option<&str> {
        match self {
            BuildError::Exited { stderr, .. } => Some(stderr),
            _ => None,
        }
    }

    pub fn stdout(&self) -> Option<&str> {
        match self {
            BuildError::Exited { stdout, .. } => Some(stdout),
            _ => None,
        }
    }
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, RootbuildError>;
