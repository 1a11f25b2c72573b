// src/config/mod.rs

//! Configuration loading and validation for rootbuild.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a config file through the [`FileSystem`](crate::fs::FileSystem)
//!   abstraction (`loader.rs`).
//! - Validate paths, manifest name and build command (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_from_path, load_or_default};
pub use model::{BuildSection, ConfigFile, LocateSection, RawConfigFile};
pub use validate::validate_config;
