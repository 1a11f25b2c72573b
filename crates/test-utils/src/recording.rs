use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use rootbuild::fs::FileSystem;
use rootbuild::locate::AscentObserver;

/// Records every directory the locator reports, in order.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    seen: Mutex<Vec<(PathBuf, bool)>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seen(&self) -> Vec<(PathBuf, bool)> {
        self.seen.lock().unwrap().clone()
    }

    pub fn dirs(&self) -> Vec<PathBuf> {
        self.seen().into_iter().map(|(dir, _)| dir).collect()
    }
}

impl AscentObserver for RecordingObserver {
    fn examined(&self, dir: &Path, manifest_found: bool) {
        self.seen
            .lock()
            .unwrap()
            .push((dir.to_path_buf(), manifest_found));
    }
}

/// Wraps another filesystem and counts calls per operation.
#[derive(Debug, Default)]
pub struct CountingFileSystem<F> {
    inner: F,
    file_probes: AtomicUsize,
    dir_probes: AtomicUsize,
    reads: AtomicUsize,
}

impl<F: FileSystem> CountingFileSystem<F> {
    pub fn new(inner: F) -> Self {
        Self {
            inner,
            file_probes: AtomicUsize::new(0),
            dir_probes: AtomicUsize::new(0),
            reads: AtomicUsize::new(0),
        }
    }

    /// Number of `is_readable_file` calls (manifest existence checks).
    pub fn file_probes(&self) -> usize {
        self.file_probes.load(Ordering::SeqCst)
    }

    /// Total number of calls of any kind.
    pub fn total(&self) -> usize {
        self.file_probes()
            + self.dir_probes.load(Ordering::SeqCst)
            + self.reads.load(Ordering::SeqCst)
    }
}

impl<F: FileSystem> FileSystem for CountingFileSystem<F> {
    fn is_readable_file(&self, path: &Path) -> bool {
        self.file_probes.fetch_add(1, Ordering::SeqCst);
        self.inner.is_readable_file(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.dir_probes.fetch_add(1, Ordering::SeqCst);
        self.inner.is_dir(path)
    }

    fn read_to_string(&self, path: &Path) -> anyhow::Result<String> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.inner.read_to_string(path)
    }
}
