// src/types.rs

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;

use crate::config::BuildSection;
use crate::errors::BuildError;

/// The external command run inside the located project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl BuildCommand {
    pub fn new(program: impl Into<String>, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<&BuildSection> for BuildCommand {
    fn from(section: &BuildSection) -> Self {
        Self::new(section.program.clone(), section.args.iter().cloned())
    }
}

impl fmt::Display for BuildCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// A located project root paired with the command to build it.
///
/// Only constructed after a successful locate; there is no way to build
/// without a root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildRequest {
    root: PathBuf,
    command: BuildCommand,
}

impl BuildRequest {
    pub fn new(root: PathBuf, command: BuildCommand) -> Self {
        Self { root, command }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn command(&self) -> &BuildCommand {
        &self.command
    }
}

/// How the build process terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildOutcome {
    Success,
    Failed(ExitStatus),
}

/// Everything the build process told us.
#[derive(Debug, Clone)]
pub struct BuildResult {
    pub stdout: String,
    pub stderr: String,
    pub outcome: BuildOutcome,
}

impl BuildResult {
    pub fn is_success(&self) -> bool {
        matches!(self.outcome, BuildOutcome::Success)
    }

    /// Turn a failed outcome into a [`BuildError::Exited`] carrying the
    /// captured text.
    pub fn into_result(self) -> Result<BuildResult, BuildError> {
        match self.outcome {
            BuildOutcome::Success => Ok(self),
            BuildOutcome::Failed(status) => Err(BuildError::Exited {
                status,
                stdout: self.stdout,
                stderr: self.stderr,
            }),
        }
    }
}
