// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod exec;
pub mod fs;
pub mod locate;
pub mod logging;
pub mod orchestrate;
pub mod types;

use std::io::Write;

use anyhow::{Context, Result};
use tracing::debug;

use crate::cli::CliArgs;
use crate::config::load_or_default;
use crate::errors::RootbuildError;
use crate::exec::ProcessBackend;
use crate::fs::RealFileSystem;
use crate::orchestrate::Orchestrator;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading
/// - bucket lookup from the environment
/// - locate, then (unless `--dry-run`) one build
/// - echoing the build's captured output
pub async fn run(args: CliArgs) -> Result<()> {
    let fs = RealFileSystem;
    let cfg = load_or_default(&fs, args.config.as_deref())?;

    let base = std::env::current_dir().context("resolving current directory")?;
    let bucket = std::env::var(&cfg.locate.bucket_env).ok();

    let backend = ProcessBackend;
    let orchestrator = Orchestrator::new(&cfg, &fs, &backend);

    if args.print_start {
        let start = orchestrator.start_dir(&base, bucket.as_deref())?;
        println!("{}", start.display());
        return Ok(());
    }

    if args.dry_run {
        let request = orchestrator.locate(&base, bucket.as_deref())?;
        println!("root: {}", request.root().display());
        println!("cmd:  {}", request.command());
        debug!("dry-run complete (no build)");
        return Ok(());
    }

    match orchestrator.run(&base, bucket.as_deref()).await {
        Ok(result) => {
            echo_output(&result.stdout, &result.stderr)?;
            Ok(())
        }
        Err(RootbuildError::Build(err)) => {
            echo_output(err.stdout().unwrap_or_default(), err.stderr().unwrap_or_default())?;
            Err(RootbuildError::Build(err).into())
        }
        Err(err) => Err(err.into()),
    }
}

fn echo_output(stdout: &str, stderr: &str) -> Result<()> {
    std::io::stdout().write_all(stdout.as_bytes())?;
    std::io::stderr().write_all(stderr.as_bytes())?;
    Ok(())
}
