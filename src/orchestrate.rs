// src/orchestrate.rs

//! One locate-then-build pass.
//!
//! The orchestrator owns nothing: it borrows the config, the filesystem, the
//! build backend and the ascent observer, so tests can swap any of them.

use std::path::{Component, Path, PathBuf};

use tracing::{info, warn};

use crate::config::ConfigFile;
use crate::errors::{Result, RootbuildError};
use crate::exec::{self, BuildBackend};
use crate::fs::FileSystem;
use crate::locate::{AscentObserver, Located, Locator, TracingObserver};
use crate::types::{BuildCommand, BuildRequest, BuildResult};

pub struct Orchestrator<'a> {
    config: &'a ConfigFile,
    fs: &'a dyn FileSystem,
    backend: &'a dyn BuildBackend,
    observer: &'a dyn AscentObserver,
}

impl<'a> Orchestrator<'a> {
    pub fn new(
        config: &'a ConfigFile,
        fs: &'a dyn FileSystem,
        backend: &'a dyn BuildBackend,
    ) -> Self {
        Self {
            config,
            fs,
            backend,
            observer: &TracingObserver,
        }
    }

    pub fn with_observer(mut self, observer: &'a dyn AscentObserver) -> Self {
        self.observer = observer;
        self
    }

    /// Compute `<base>/<download_root>/<bucket>/<layout>`.
    ///
    /// Pure: no filesystem access. A missing, empty or multi-component bucket
    /// identifier is a [`RootbuildError::ConfigError`].
    pub fn start_dir(&self, base: &Path, bucket: Option<&str>) -> Result<PathBuf> {
        let env = &self.config.locate.bucket_env;
        let bucket = match bucket.map(str::trim) {
            Some(b) if !b.is_empty() => b,
            _ => {
                return Err(RootbuildError::ConfigError(format!(
                    "environment variable {env} is not set or empty"
                )));
            }
        };

        let mut components = Path::new(bucket).components();
        if !matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        ) {
            return Err(RootbuildError::ConfigError(format!(
                "{env} must be a single directory name (got {bucket:?})"
            )));
        }

        Ok(self.config.start_dir(base, bucket))
    }

    /// Resolve the start directory and locate the project root.
    ///
    /// Returns the request that [`run`](Self::run) would build.
    pub fn locate(&self, base: &Path, bucket: Option<&str>) -> Result<BuildRequest> {
        let start = self.start_dir(base, bucket)?;
        let manifest = &self.config.locate.manifest;

        if !self.fs.is_dir(&start) {
            warn!(start = %start.display(), "start directory does not exist; has the unpack step run?");
            return Err(RootbuildError::NotFound {
                manifest: manifest.clone(),
                start,
            });
        }

        let locator = Locator::new(self.fs, manifest).with_observer(self.observer);
        match locator.locate(&start) {
            Located::Found(root) => Ok(BuildRequest::new(
                root,
                BuildCommand::from(&self.config.build),
            )),
            Located::NotFound { .. } => Err(RootbuildError::NotFound {
                manifest: manifest.clone(),
                start,
            }),
        }
    }

    /// Locate the project root, then build it once.
    pub async fn run(&self, base: &Path, bucket: Option<&str>) -> Result<BuildResult> {
        let request = self.locate(base, bucket)?;
        let result = exec::build(self.backend, &request).await?;
        info!(root = %request.root().display(), "build succeeded");
        Ok(result)
    }
}
