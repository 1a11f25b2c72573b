// src/exec/mod.rs

//! Process execution layer.
//!
//! - [`invoker`] runs the build command with `tokio::process::Command` and
//!   captures its output.
//! - [`backend`] provides the `BuildBackend` trait and the concrete
//!   `ProcessBackend` used in production, which tests can replace with a
//!   fake implementation.

pub mod backend;
pub mod invoker;

pub use backend::{BuildBackend, ProcessBackend};
pub use invoker::invoke;

use crate::errors::BuildError;
use crate::types::{BuildRequest, BuildResult};

/// Build `request` and fold a failure exit status into [`BuildError`].
pub async fn build(
    backend: &dyn BuildBackend,
    request: &BuildRequest,
) -> Result<BuildResult, BuildError> {
    backend.build(request).await?.into_result()
}
