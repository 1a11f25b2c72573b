// src/exec/invoker.rs

//! Runs the build command inside the located root.

use std::process::Stdio;

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Command;
use tracing::{debug, info};

use crate::errors::BuildError;
use crate::types::{BuildOutcome, BuildRequest, BuildResult};

#[derive(Debug, Clone, Copy)]
enum Stream {
    Stdout,
    Stderr,
}

/// Launch the build process and wait for it to exit.
///
/// Both output pipes are drained concurrently while the process runs; each
/// line is traced as it arrives and appended verbatim to the captured text.
/// Launch failures are errors; a failure exit status is reported through
/// [`BuildOutcome::Failed`] so callers still get the captured output.
pub async fn invoke(request: &BuildRequest) -> Result<BuildResult, BuildError> {
    let command = request.command();
    info!(
        root = %request.root().display(),
        cmd = %command,
        "starting build process"
    );

    let mut cmd = Command::new(&command.program);
    cmd.args(&command.args)
        .current_dir(request.root())
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let mut child = cmd.spawn().map_err(|source| BuildError::Launch {
        program: command.program.clone(),
        source,
    })?;

    let stdout = child.stdout.take();
    let stderr = child.stderr.take();

    let (stdout, stderr, status) = tokio::try_join!(
        drain(stdout, Stream::Stdout),
        drain(stderr, Stream::Stderr),
        child.wait(),
    )
    .map_err(|source| BuildError::Wait { source })?;

    let outcome = if status.success() {
        BuildOutcome::Success
    } else {
        BuildOutcome::Failed(status)
    };

    info!(
        root = %request.root().display(),
        exit_code = status.code().unwrap_or(-1),
        success = status.success(),
        "build process exited"
    );

    Ok(BuildResult {
        stdout,
        stderr,
        outcome,
    })
}

/// Read a pipe to EOF, tracing each line. Invalid UTF-8 is replaced rather
/// than rejected.
async fn drain<R>(pipe: Option<R>, stream: Stream) -> std::io::Result<String>
where
    R: AsyncRead + Unpin,
{
    let Some(pipe) = pipe else {
        return Ok(String::new());
    };

    let mut reader = BufReader::new(pipe);
    let mut captured = Vec::new();
    let mut line = Vec::new();

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line).await? == 0 {
            break;
        }
        debug!(
            ?stream,
            "{}",
            String::from_utf8_lossy(&line).trim_end_matches(['\r', '\n'])
        );
        captured.extend_from_slice(&line);
    }

    Ok(String::from_utf8_lossy(&captured).into_owned())
}
