// src/fs/mock.rs

use super::FileSystem;
use anyhow::{anyhow, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
pub enum MockEntry {
    File { content: Vec<u8>, readable: bool },
    Dir,
}

/// In-memory filesystem for tests. Paths are used verbatim as keys, so tests
/// should stick to absolute paths.
#[derive(Debug, Clone, Default)]
pub struct MockFileSystem {
    files: Arc<Mutex<HashMap<PathBuf, MockEntry>>>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_file(&self, path: impl AsRef<Path>, content: impl Into<Vec<u8>>) {
        self.insert_file(path.as_ref(), content.into(), true);
    }

    /// A file that exists but cannot be opened (e.g. mode 000).
    pub fn add_unreadable_file(&self, path: impl AsRef<Path>) {
        self.insert_file(path.as_ref(), Vec::new(), false);
    }

    pub fn add_dir(&self, path: impl AsRef<Path>) {
        let mut files = self.files.lock().unwrap();
        ensure_dir_entry(&mut files, path.as_ref());
    }

    fn insert_file(&self, path: &Path, content: Vec<u8>, readable: bool) {
        let mut files = self.files.lock().unwrap();
        if let Some(parent) = path.parent() {
            ensure_dir_entry(&mut files, parent);
        }
        files.insert(path.to_path_buf(), MockEntry::File { content, readable });
    }
}

fn ensure_dir_entry(files: &mut HashMap<PathBuf, MockEntry>, path: &Path) {
    let mut current = Some(path);
    while let Some(dir) = current {
        if dir.as_os_str().is_empty() || files.contains_key(dir) {
            break;
        }
        files.insert(dir.to_path_buf(), MockEntry::Dir);
        current = dir.parent();
    }
}

impl FileSystem for MockFileSystem {
    fn is_readable_file(&self, path: &Path) -> bool {
        let files = self.files.lock().unwrap();
        matches!(files.get(path), Some(MockEntry::File { readable: true, .. }))
    }

    fn is_dir(&self, path: &Path) -> bool {
        let files = self.files.lock().unwrap();
        matches!(files.get(path), Some(MockEntry::Dir))
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        let files = self.files.lock().unwrap();
        match files.get(path) {
            Some(MockEntry::File { content, readable: true }) => {
                String::from_utf8(content.clone()).map_err(|e| anyhow!("Invalid UTF-8: {}", e))
            }
            Some(MockEntry::File { readable: false, .. }) => {
                Err(anyhow!("Permission denied: {:?}", path))
            }
            Some(MockEntry::Dir) => Err(anyhow!("Is a directory: {:?}", path)),
            None => Err(anyhow!("File not found: {:?}", path)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adding_a_file_creates_its_ancestors() {
        let fs = MockFileSystem::new();
        fs.add_file("/a/b/c/Cargo.toml", "x");

        assert!(fs.is_dir(Path::new("/a/b/c")));
        assert!(fs.is_dir(Path::new("/a")));
        assert!(fs.is_dir(Path::new("/")));
        assert!(fs.is_readable_file(Path::new("/a/b/c/Cargo.toml")));
        assert!(!fs.is_readable_file(Path::new("/a/b/c")));
    }

    #[test]
    fn unreadable_files_are_not_readable() {
        let fs = MockFileSystem::new();
        fs.add_unreadable_file("/p/Cargo.toml");

        assert!(!fs.is_readable_file(Path::new("/p/Cargo.toml")));
        assert!(fs.read_to_string(Path::new("/p/Cargo.toml")).is_err());
    }
}
