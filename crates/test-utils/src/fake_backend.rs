use std::future::Future;
use std::os::unix::process::ExitStatusExt;
use std::pin::Pin;
use std::process::ExitStatus;
use std::sync::{Arc, Mutex};

use rootbuild::errors::BuildError;
use rootbuild::exec::BuildBackend;
use rootbuild::types::{BuildOutcome, BuildRequest, BuildResult};

/// A fake build backend that:
/// - records every request it receives
/// - immediately returns a canned result without spawning anything.
#[derive(Clone)]
pub struct FakeBackend {
    requests: Arc<Mutex<Vec<BuildRequest>>>,
    stdout: String,
    stderr: String,
    exit_code: i32,
}

impl FakeBackend {
    /// Always succeeds with the given stdout.
    pub fn succeeding(stdout: &str) -> Self {
        Self {
            requests: Arc::new(Mutex::new(Vec::new())),
            stdout: stdout.to_string(),
            stderr: String::new(),
            exit_code: 0,
        }
    }

    /// Always exits with `code` and the given stderr.
    pub fn failing(code: i32, stderr: &str) -> Self {
        Self {
            requests: Arc::new(Mutex::new(Vec::new())),
            stdout: String::new(),
            stderr: stderr.to_string(),
            exit_code: code,
        }
    }

    pub fn requests(&self) -> Vec<BuildRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl BuildBackend for FakeBackend {
    fn build<'a>(
        &'a self,
        request: &'a BuildRequest,
    ) -> Pin<Box<dyn Future<Output = Result<BuildResult, BuildError>> + Send + 'a>> {
        Box::pin(async move {
            self.requests.lock().unwrap().push(request.clone());

            let outcome = if self.exit_code == 0 {
                BuildOutcome::Success
            } else {
                // Wait status encoding: exit code lives in the high byte.
                BuildOutcome::Failed(ExitStatus::from_raw(self.exit_code << 8))
            };

            Ok(BuildResult {
                stdout: self.stdout.clone(),
                stderr: self.stderr.clone(),
                outcome,
            })
        })
    }
}
