// src/locate/observer.rs

//! Diagnostic hook for the ascent.
//!
//! The locator reports every directory it examines to an [`AscentObserver`].
//! Production uses [`TracingObserver`]; tests can plug in a recorder.

use std::fmt::Debug;
use std::path::Path;

use tracing::debug;

pub trait AscentObserver: Send + Sync + Debug {
    /// Called once per examined directory, after the manifest probe.
    fn examined(&self, dir: &Path, manifest_found: bool);
}

/// Emits one `debug!` event per examined directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl AscentObserver for TracingObserver {
    fn examined(&self, dir: &Path, manifest_found: bool) {
        debug!(dir = %dir.display(), manifest_found, "examined directory");
    }
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl AscentObserver for NoopObserver {
    fn examined(&self, _dir: &Path, _manifest_found: bool) {}
}
