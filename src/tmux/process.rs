//! Spawning the tmux binary and shaping its output.

use std::process::Stdio;
use tokio::process::Command;

use crate::error::TmuxError;

/// Captured result of one tmux invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct TmuxOutput {
    pub(super) exit_code: i32,
    pub(super) stdout: String,
    pub(super) stderr: String,
}

/// Run `program args...` and capture its output.
pub(super) async fn run_tmux(program: &str, args: &[&str]) -> Result<TmuxOutput, TmuxError> {
    tracing::debug!(program, ?args, "running tmux");
    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .output()
        .await
        .map_err(|e| TmuxError::Spawn(format!("{program}: {e}")))?;

    Ok(TmuxOutput {
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    })
}

/// Convert a non-zero exit into a contextual error.
pub(super) fn ensure_success(output: TmuxOutput, context: &str) -> Result<String, TmuxError> {
    if output.exit_code == 0 {
        return Ok(output.stdout);
    }

    let mut details = if output.stderr.trim().is_empty() {
        output.stdout.trim().to_string()
    } else {
        output.stderr.trim().to_string()
    };
    if details.is_empty() {
        details = format!("exited with {}", output.exit_code);
    }
    Err(TmuxError::Failed(format!("{context}: {details}")))
}
