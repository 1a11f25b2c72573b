// src/locate/mod.rs

//! Project root discovery.
//!
//! Starting from a directory, walk towards the filesystem root and return
//! the first directory that directly contains the manifest file. The walk is
//! read-only: it only probes for the manifest through [`FileSystem`].

pub mod observer;

use std::path::{Path, PathBuf};

use tracing::info;

use crate::fs::FileSystem;

pub use observer::{AscentObserver, NoopObserver, TracingObserver};

/// Cursor for one ascent.
#[derive(Debug, Clone)]
pub struct SearchState {
    candidate: PathBuf,
    examined: usize,
}

impl SearchState {
    pub fn new(start: impl Into<PathBuf>) -> Self {
        Self {
            candidate: start.into(),
            examined: 0,
        }
    }

    pub fn candidate(&self) -> &Path {
        &self.candidate
    }

    /// Number of directories probed so far.
    pub fn examined(&self) -> usize {
        self.examined
    }

    /// Move to the parent directory. Returns `false` once the candidate is
    /// its own parent (the filesystem root), leaving the state unchanged.
    fn ascend(&mut self) -> bool {
        match self.candidate.parent() {
            Some(parent) if parent != self.candidate && !parent.as_os_str().is_empty() => {
                self.candidate = parent.to_path_buf();
                true
            }
            _ => false,
        }
    }
}

/// Result of a single ascent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Located {
    /// The deepest directory containing the manifest.
    Found(PathBuf),
    /// Reached the root without a match. Carries the number of directories
    /// examined.
    NotFound { examined: usize },
}

impl Located {
    pub fn found(&self) -> Option<&Path> {
        match self {
            Located::Found(root) => Some(root),
            Located::NotFound { .. } => None,
        }
    }
}

pub struct Locator<'a> {
    fs: &'a dyn FileSystem,
    manifest: &'a str,
    observer: &'a dyn AscentObserver,
}

impl<'a> Locator<'a> {
    pub fn new(fs: &'a dyn FileSystem, manifest: &'a str) -> Self {
        Self {
            fs,
            manifest,
            observer: &TracingObserver,
        }
    }

    pub fn with_observer(mut self, observer: &'a dyn AscentObserver) -> Self {
        self.observer = observer;
        self
    }

    pub fn manifest(&self) -> &str {
        self.manifest
    }

    /// Walk up from `start` until a directory contains the manifest.
    ///
    /// `start` should be absolute; a relative path stops at its first
    /// component instead of the filesystem root.
    pub fn locate(&self, start: &Path) -> Located {
        let mut state = SearchState::new(start);

        loop {
            let found = self
                .fs
                .is_readable_file(&state.candidate().join(self.manifest));
            state.examined += 1;
            self.observer.examined(state.candidate(), found);

            if found {
                info!(
                    root = %state.candidate().display(),
                    manifest = self.manifest,
                    examined = state.examined(),
                    "located project root"
                );
                return Located::Found(state.candidate);
            }

            if !state.ascend() {
                info!(
                    start = %start.display(),
                    manifest = self.manifest,
                    examined = state.examined(),
                    "manifest not found up to filesystem root"
                );
                return Located::NotFound {
                    examined: state.examined(),
                };
            }
        }
    }
}
