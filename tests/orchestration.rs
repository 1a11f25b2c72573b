// tests/orchestration.rs
#![cfg(unix)]

mod common;
use crate::common::{init_tracing, with_timeout};

use std::error::Error;
use std::path::Path;

use rootbuild::config::ConfigFile;
use rootbuild::errors::{BuildError, RootbuildError};
use rootbuild::exec::ProcessBackend;
use rootbuild::fs::RealFileSystem;
use rootbuild::fs::mock::MockFileSystem;
use rootbuild::orchestrate::Orchestrator;
use rootbuild::types::BuildCommand;
use rootbuild_test_utils::builders::{ConfigFileBuilder, ProjectTreeBuilder};
use rootbuild_test_utils::fake_backend::FakeBackend;
use rootbuild_test_utils::recording::{CountingFileSystem, RecordingObserver};

type TestResult = Result<(), Box<dyn Error>>;

#[tokio::test]
async fn missing_bucket_fails_before_touching_the_filesystem() -> TestResult {
    with_timeout(async {
        init_tracing();
        let cfg = ConfigFile::default();
        let fs = CountingFileSystem::new(MockFileSystem::new());
        let backend = FakeBackend::succeeding("");
        let observer = RecordingObserver::new();
        let orch = Orchestrator::new(&cfg, &fs, &backend).with_observer(&observer);

        for bucket in [None, Some("")] {
            let err = orch.run(Path::new("/work"), bucket).await.unwrap_err();
            assert!(
                matches!(err, RootbuildError::ConfigError(_)),
                "expected ConfigError, got {err:?}"
            );
        }

        assert_eq!(fs.total(), 0);
        assert!(observer.seen().is_empty());
        assert!(backend.requests().is_empty());
        Ok(())
    })
    .await
}

#[tokio::test]
async fn custom_bucket_env_is_named_in_the_error() -> TestResult {
    with_timeout(async {
        init_tracing();
        let cfg = ConfigFileBuilder::new().bucket_env("PROJECT_BUCKET").build();
        let fs = MockFileSystem::new();
        let backend = FakeBackend::succeeding("");
        let orch = Orchestrator::new(&cfg, &fs, &backend);

        match orch.run(Path::new("/work"), None).await {
            Err(RootbuildError::ConfigError(msg)) => assert!(msg.contains("PROJECT_BUCKET")),
            other => panic!("expected ConfigError, got {other:?}"),
        }
        Ok(())
    })
    .await
}

#[tokio::test]
async fn not_found_never_reaches_the_backend() -> TestResult {
    with_timeout(async {
        init_tracing();
        let cfg = ConfigFile::default();
        let fs = MockFileSystem::new();
        fs.add_dir("/work/Downloads/abc123/home/project/src");
        let backend = FakeBackend::succeeding("");
        let orch = Orchestrator::new(&cfg, &fs, &backend);

        match orch.run(Path::new("/work"), Some("abc123")).await {
            Err(RootbuildError::NotFound { manifest, start }) => {
                assert_eq!(manifest, "Cargo.toml");
                assert_eq!(start, Path::new("/work/Downloads/abc123/home/project"));
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
        assert!(backend.requests().is_empty());
        Ok(())
    })
    .await
}

#[tokio::test]
async fn located_root_is_handed_to_backend_once() -> TestResult {
    with_timeout(async {
        init_tracing();
        let cfg = ConfigFileBuilder::new().layout("home/project/src/nested").build();
        let fs = MockFileSystem::new();
        fs.add_file("/work/Downloads/abc123/home/project/Cargo.toml", "");
        fs.add_dir("/work/Downloads/abc123/home/project/src/nested");
        let backend = FakeBackend::succeeding("Finished\n");
        let observer = RecordingObserver::new();
        let orch = Orchestrator::new(&cfg, &fs, &backend).with_observer(&observer);

        let result = orch.run(Path::new("/work"), Some("abc123")).await?;
        assert_eq!(result.stdout, "Finished\n");

        let requests = backend.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].root(), Path::new("/work/Downloads/abc123/home/project"));
        assert_eq!(requests[0].command(), &BuildCommand::new("cargo", ["build"]));
        // Two ascent steps after the start directory.
        assert_eq!(observer.seen().len(), 3);
        Ok(())
    })
    .await
}

#[tokio::test]
async fn failing_build_propagates_diagnostics() -> TestResult {
    with_timeout(async {
        init_tracing();
        let cfg = ConfigFile::default();
        let fs = MockFileSystem::new();
        fs.add_file("/work/Downloads/b/home/project/Cargo.toml", "");
        let backend = FakeBackend::failing(101, "error: could not compile `demo`\n");
        let orch = Orchestrator::new(&cfg, &fs, &backend);

        match orch.run(Path::new("/work"), Some("b")).await {
            Err(RootbuildError::Build(err)) => {
                assert_eq!(err.stderr(), Some("error: could not compile `demo`\n"));
                assert!(matches!(err, BuildError::Exited { status, .. } if status.code() == Some(101)));
            }
            other => panic!("expected Build error, got {other:?}"),
        }
        assert_eq!(backend.requests().len(), 1);
        Ok(())
    })
    .await
}

#[tokio::test]
async fn end_to_end_with_real_tree_and_process() -> TestResult {
    with_timeout(async {
        init_tracing();
        let tree = ProjectTreeBuilder::new("abc123")
            .file("Cargo.toml", "")
            .dir("src/nested")
            .build();
        let cfg = ConfigFileBuilder::new().shell("pwd -P; echo done >&2").build();
        let orch = Orchestrator::new(&cfg, &RealFileSystem, &ProcessBackend);

        let result = orch.run(tree.base(), Some(tree.bucket())).await?;
        let expected = tree.project_dir().canonicalize()?;
        assert_eq!(result.stdout.trim_end(), expected.to_string_lossy());
        assert_eq!(result.stderr, "done\n");
        Ok(())
    })
    .await
}

#[tokio::test]
async fn end_to_end_missing_toolchain_is_a_launch_error() -> TestResult {
    with_timeout(async {
        init_tracing();
        let tree = ProjectTreeBuilder::new("abc123").file("Cargo.toml", "").build();
        let cfg = ConfigFileBuilder::new()
            .command("rootbuild-no-such-toolchain", &[])
            .build();
        let orch = Orchestrator::new(&cfg, &RealFileSystem, &ProcessBackend);

        match orch.run(tree.base(), Some(tree.bucket())).await {
            Err(RootbuildError::Build(BuildError::Launch { program, .. })) => {
                assert_eq!(program, "rootbuild-no-such-toolchain");
            }
            other => panic!("expected launch error, got {other:?}"),
        }
        Ok(())
    })
    .await
}
