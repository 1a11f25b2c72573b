// src/config/validate.rs

use std::path::{Component, Path};

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{Result, RootbuildError};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = RootbuildError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw.locate, raw.build))
    }
}

/// Validate an already-built config. Useful after programmatic edits.
pub fn validate_config(cfg: &ConfigFile) -> Result<()> {
    validate_raw_config(&RawConfigFile {
        locate: cfg.locate.clone(),
        build: cfg.build.clone(),
    })
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    validate_manifest(&cfg.locate.manifest)?;
    validate_relative("download_root", &cfg.locate.download_root)?;
    validate_relative("layout", &cfg.locate.layout)?;
    validate_build(cfg)?;

    if cfg.locate.bucket_env.trim().is_empty() {
        return Err(RootbuildError::ConfigError(
            "[locate].bucket_env must not be empty".to_string(),
        ));
    }

    Ok(())
}

/// The manifest must name a single entry inside a directory.
fn validate_manifest(manifest: &str) -> Result<()> {
    let mut components = Path::new(manifest).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(RootbuildError::ConfigError(format!(
            "[locate].manifest must be a plain filename (got {manifest:?})"
        ))),
    }
}

fn validate_relative(key: &str, path: &Path) -> Result<()> {
    let escapes = path
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
    if escapes {
        return Err(RootbuildError::ConfigError(format!(
            "[locate].{key} must be a relative path without '..' (got {path:?})"
        )));
    }
    Ok(())
}

fn validate_build(cfg: &RawConfigFile) -> Result<()> {
    if cfg.build.program.trim().is_empty() {
        return Err(RootbuildError::ConfigError(
            "[build].program must not be empty".to_string(),
        ));
    }
    Ok(())
}
