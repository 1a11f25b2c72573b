// src/config/loader.rs

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{Result, RootbuildError};
use crate::fs::FileSystem;

/// Load a configuration file from a given path and return the raw
/// `RawConfigFile`.
///
/// This only performs TOML deserialization; use [`load_and_validate`] for the
/// semantic checks.
pub fn load_from_path(fs: &dyn FileSystem, path: impl AsRef<Path>) -> Result<RawConfigFile> {
    let path = path.as_ref();
    let contents = fs.read_to_string(path)?;

    let config: RawConfigFile = toml::from_str(&contents)?;

    Ok(config)
}

/// Load a configuration file from path and validate it.
pub fn load_and_validate(fs: &dyn FileSystem, path: impl AsRef<Path>) -> Result<ConfigFile> {
    let raw_config = load_from_path(fs, &path)?;
    ConfigFile::try_from(raw_config)
}

/// Resolve the configuration the CLI should use.
///
/// - An explicitly requested file must exist.
/// - The default file is optional; when absent, built-in defaults apply.
pub fn load_or_default(fs: &dyn FileSystem, explicit: Option<&Path>) -> Result<ConfigFile> {
    match explicit {
        Some(path) => {
            if !fs.is_readable_file(path) {
                return Err(RootbuildError::ConfigError(format!(
                    "config file {:?} does not exist or is not readable",
                    path
                )));
            }
            load_and_validate(fs, path)
        }
        None => {
            let path = default_config_path();
            if fs.is_readable_file(&path) {
                load_and_validate(fs, &path)
            } else {
                debug!(path = ?path, "no config file found, using defaults");
                Ok(ConfigFile::default())
            }
        }
    }
}

/// `Rootbuild.toml` in the current working directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("Rootbuild.toml")
}
