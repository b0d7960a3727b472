//! Catalogue picker driven by an external `fzf` process.

use async_trait::async_trait;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::catalogue::Catalogue;
use crate::error::SelectError;
use crate::meta::is_meta_command;
use crate::session::Selector;
use crate::template::fill_placeholders;
use crate::vars::SessionVariables;

/// fzf exit status when the user aborts with Esc or Ctrl-C.
const FZF_ABORTED: i32 = 130;
/// fzf exit status when the query matched nothing.
const FZF_NO_MATCH: i32 = 1;

/// Pipes catalogue templates into fzf and returns the filled pick.
pub struct FzfSelector {
    program: String,
    paths: Vec<PathBuf>,
    catalogue: Catalogue,
}

impl FzfSelector {
    pub fn new(program: impl Into<String>, paths: Vec<PathBuf>) -> Self {
        let catalogue = Catalogue::load(&paths);
        Self {
            program: program.into(),
            paths,
            catalogue,
        }
    }

    fn candidates(&self) -> String {
        let mut text = self.catalogue.commands().collect::<Vec<_>>().join("\n");
        text.push('\n');
        text
    }
}

#[async_trait]
impl Selector for FzfSelector {
    async fn select(&mut self, vars: &SessionVariables) -> Result<Option<String>, SelectError> {
        let mut child = Command::new(&self.program)
            .args(["--print-query", "--prompt", "quiver> ", "--no-multi"])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| SelectError::Spawn(format!("{}: {e}", self.program)))?;

        if let Some(mut stdin) = child.stdin.take() {
            // fzf may exit before reading everything.
            let written = stdin.write_all(self.candidates().as_bytes()).await;
            if let Err(err) = unexpected_write_error(written) {
                tracing::debug!(%err, "failed to feed candidates to fzf");
            }
        }
        let output = child.wait_with_output().await?;

        match output.status.code() {
            Some(0) | Some(FZF_NO_MATCH) => {}
            Some(FZF_ABORTED) => return Ok(None),
            other => {
                return Err(SelectError::Spawn(format!(
                    "{} exited with {}",
                    self.program,
                    other.map_or_else(|| "a signal".to_string(), |code| code.to_string())
                )))
            }
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(pick_from_fzf_output(&stdout).map(|picked| fill_placeholders(&picked, vars)))
    }

    fn restart(&mut self) {
        self.catalogue = Catalogue::load(&self.paths);
    }
}

/// Choose the selected row from `--print-query` output.
///
/// The first line is the typed query, the second the selected row. With no
/// selection, a query that is an internal command is used as typed.
pub fn pick_from_fzf_output(stdout: &str) -> Option<String> {
    let mut lines = stdout.lines();
    let query = lines.next().unwrap_or_default().trim();
    match lines.next().map(str::trim).filter(|row| !row.is_empty()) {
        Some(row) => Some(row.to_string()),
        None if is_meta_command(query) => Some(query.to_string()),
        None => None,
    }
}

/// Drop the broken pipe fzf causes by quitting early; keep other failures.
fn unexpected_write_error(result: std::io::Result<()>) -> std::io::Result<()> {
    match result {
        Err(err) if err.kind() == std::io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}
