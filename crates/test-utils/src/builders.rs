#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use rootbuild::config::{ConfigFile, RawConfigFile};

/// Builds a real directory tree under a temporary directory that mimics an
/// unpacked download: `<base>/Downloads/<bucket>/home/project/...`.
pub struct ProjectTreeBuilder {
    base: TempDir,
    bucket: String,
}

impl ProjectTreeBuilder {
    pub fn new(bucket: &str) -> Self {
        Self {
            base: tempfile::tempdir().expect("creating temp dir"),
            bucket: bucket.to_string(),
        }
    }

    /// The directory the bucket is unpacked into.
    pub fn bucket_dir(&self) -> PathBuf {
        self.base.path().join("Downloads").join(&self.bucket)
    }

    /// The default start directory (`.../home/project`).
    pub fn project_dir(&self) -> PathBuf {
        self.bucket_dir().join("home").join("project")
    }

    /// Create a directory relative to the project dir.
    pub fn dir(self, rel: &str) -> Self {
        fs::create_dir_all(self.project_dir().join(rel)).expect("creating dir");
        self
    }

    /// Write a file relative to the project dir, creating parents.
    pub fn file(self, rel: &str, contents: &str) -> Self {
        let path = self.project_dir().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("creating parent dir");
        }
        fs::write(&path, contents).expect("writing file");
        self
    }

    pub fn build(self) -> ProjectTree {
        ProjectTree {
            base: self.base,
            bucket: self.bucket,
        }
    }
}

/// A finished tree. Dropping it removes the temporary directory.
pub struct ProjectTree {
    base: TempDir,
    bucket: String,
}

impl ProjectTree {
    pub fn base(&self) -> &Path {
        self.base.path()
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    pub fn project_dir(&self) -> PathBuf {
        self.base
            .path()
            .join("Downloads")
            .join(&self.bucket)
            .join("home")
            .join("project")
    }
}

/// Builder for `ConfigFile` to simplify test setup.
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            config: RawConfigFile::default(),
        }
    }

    pub fn manifest(mut self, name: &str) -> Self {
        self.config.locate.manifest = name.to_string();
        self
    }

    pub fn layout(mut self, layout: &str) -> Self {
        self.config.locate.layout = PathBuf::from(layout);
        self
    }

    pub fn bucket_env(mut self, name: &str) -> Self {
        self.config.locate.bucket_env = name.to_string();
        self
    }

    pub fn command(mut self, program: &str, args: &[&str]) -> Self {
        self.config.build.program = program.to_string();
        self.config.build.args = args.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Run `script` through `sh -c` as the build command.
    pub fn shell(self, script: &str) -> Self {
        self.command("sh", &["-c", script])
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}
