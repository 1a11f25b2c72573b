// src/exec/backend.rs

//! Pluggable build backend abstraction.
//!
//! The orchestrator talks to a `BuildBackend` instead of spawning processes
//! directly, so tests can substitute a fake that records requests and returns
//! canned results.

use std::future::Future;
use std::pin::Pin;

use crate::errors::BuildError;
use crate::types::{BuildRequest, BuildResult};

use super::invoker::invoke;

/// Trait abstracting how a located project gets built.
pub trait BuildBackend: Send + Sync {
    /// Run the build described by `request` and wait for it to finish.
    ///
    /// A failure exit status is returned as `Ok` with
    /// [`BuildOutcome::Failed`](crate::types::BuildOutcome::Failed); `Err` is
    /// reserved for not being able to run the process at all.
    fn build<'a>(
        &'a self,
        request: &'a BuildRequest,
    ) -> Pin<Box<dyn Future<Output = Result<BuildResult, BuildError>> + Send + 'a>>;
}

/// Real backend: spawns the configured command with tokio.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessBackend;

impl BuildBackend for ProcessBackend {
    fn build<'a>(
        &'a self,
        request: &'a BuildRequest,
    ) -> Pin<Box<dyn Future<Output = Result<BuildResult, BuildError>> + Send + 'a>> {
        Box::pin(invoke(request))
    }
}
