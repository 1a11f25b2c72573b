// src/config/model.rs

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Configuration as read from `Rootbuild.toml`.
///
/// ```toml
/// [locate]
/// manifest = "Cargo.toml"
/// download_root = "Downloads"
/// layout = "home/project"
/// bucket_env = "BUCKET_NAME"
///
/// [build]
/// program = "cargo"
/// args = ["build"]
/// ```
///
/// Every section and key is optional; omitted values fall back to the
/// defaults shown above.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawConfigFile {
    #[serde(default)]
    pub locate: LocateSection,

    #[serde(default)]
    pub build: BuildSection,
}

/// `[locate]` section: where the unpacked tree lives and what marks a root.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocateSection {
    /// Filename looked for directly inside each examined directory.
    #[serde(default = "default_manifest")]
    pub manifest: String,

    /// Download directory, relative to the base (working) directory.
    #[serde(default = "default_download_root")]
    pub download_root: PathBuf,

    /// Expected unpack layout under `<download_root>/<bucket>/`.
    #[serde(default = "default_layout")]
    pub layout: PathBuf,

    /// Name of the environment variable holding the bucket identifier.
    #[serde(default = "default_bucket_env")]
    pub bucket_env: String,
}

fn default_manifest() -> String {
    "Cargo.toml".to_string()
}

fn default_download_root() -> PathBuf {
    PathBuf::from("Downloads")
}

fn default_layout() -> PathBuf {
    PathBuf::from("home/project")
}

fn default_bucket_env() -> String {
    "BUCKET_NAME".to_string()
}

impl Default for LocateSection {
    fn default() -> Self {
        Self {
            manifest: default_manifest(),
            download_root: default_download_root(),
            layout: default_layout(),
            bucket_env: default_bucket_env(),
        }
    }
}

/// `[build]` section: the toolchain command run in the located root.
///
/// The program is executed directly, not through a shell.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuildSection {
    #[serde(default = "default_program")]
    pub program: String,

    #[serde(default = "default_args")]
    pub args: Vec<String>,
}

fn default_program() -> String {
    "cargo".to_string()
}

fn default_args() -> Vec<String> {
    vec!["build".to_string()]
}

impl Default for BuildSection {
    fn default() -> Self {
        Self {
            program: default_program(),
            args: default_args(),
        }
    }
}

/// Validated configuration. Only obtainable through `TryFrom<RawConfigFile>`.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub locate: LocateSection,
    pub build: BuildSection,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(locate: LocateSection, build: BuildSection) -> Self {
        Self { locate, build }
    }

    /// `<base>/<download_root>/<bucket>/<layout>`.
    pub fn start_dir(&self, base: &Path, bucket: &str) -> PathBuf {
        base.join(&self.locate.download_root)
            .join(bucket)
            .join(&self.locate.layout)
    }
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self::new_unchecked(LocateSection::default(), BuildSection::default())
    }
}
