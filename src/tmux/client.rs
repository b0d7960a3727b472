//! [`Multiplexer`] backed by the local `tmux` command line client.

use async_trait::async_trait;

use super::process::{ensure_success, run_tmux};
use super::Multiplexer;
use crate::error::TmuxError;

/// Talks to the default tmux server through the `tmux` binary.
#[derive(Debug, Clone)]
pub struct TmuxCli {
    program: String,
}

impl Default for TmuxCli {
    fn default() -> Self {
        Self::new("tmux")
    }
}

impl TmuxCli {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    async fn run(&self, args: &[&str], context: &str) -> Result<String, TmuxError> {
        let output = run_tmux(&self.program, args).await?;
        ensure_success(output, context)
    }
}

#[async_trait]
impl Multiplexer for TmuxCli {
    async fn is_available(&self) -> bool {
        match run_tmux(&self.program, &["-V"]).await {
            Ok(output) => output.exit_code == 0,
            Err(err) => {
                tracing::debug!(%err, "tmux not available");
                false
            }
        }
    }

    async fn list_sessions(&self) -> Result<Vec<String>, TmuxError> {
        let stdout = self
            .run(
                &["list-sessions", "-F", "#{session_created}\t#{session_id}"],
                "failed to list tmux sessions",
            )
            .await?;
        parse_sessions_by_creation(&stdout)
    }

    async fn active_window(&self, session: &str) -> Result<String, TmuxError> {
        let stdout = self
            .run(
                &["list-windows", "-t", session, "-F", "#{window_active}\t#{window_id}"],
                "failed to list tmux windows",
            )
            .await?;
        parse_active_window(&stdout)
            .ok_or_else(|| TmuxError::Unexpected(format!("no active window in session {session}")))
    }

    async fn list_panes(&self, window: &str) -> Result<Vec<String>, TmuxError> {
        let stdout = self
            .run(
                &["list-panes", "-t", window, "-F", "#{pane_id}"],
                "failed to list tmux panes",
            )
            .await?;
        Ok(parse_ids(&stdout))
    }

    async fn split_window(&self, window: &str) -> Result<String, TmuxError> {
        let stdout = self
            .run(
                &["split-window", "-d", "-P", "-F", "#{pane_id}", "-t", window],
                "failed to split tmux window",
            )
            .await?;
        parse_ids(&stdout)
            .into_iter()
            .next()
            .ok_or_else(|| TmuxError::Unexpected("split-window printed no pane id".into()))
    }

    async fn send_literal(&self, pane: &str, text: &str) -> Result<(), TmuxError> {
        self.run(
            &["send-keys", "-l", "-t", pane, "--", &escape_trailing_semicolon(text)],
            "failed to send keys to tmux pane",
        )
        .await
        .map(drop)
    }

    async fn send_enter(&self, pane: &str) -> Result<(), TmuxError> {
        self.run(
            &["send-keys", "-t", pane, "Enter"],
            "failed to send Enter to tmux pane",
        )
        .await
        .map(drop)
    }

    async fn select_pane(&self, pane: &str) -> Result<(), TmuxError> {
        self.run(&["select-pane", "-t", pane], "failed to select tmux pane")
            .await
            .map(drop)
    }
}

/// Parse `<created>\t<id>` rows into ids ordered oldest → newest.
///
/// Ties keep tmux's listing order.
pub(super) fn parse_sessions_by_creation(output: &str) -> Result<Vec<String>, TmuxError> {
    let mut rows = Vec::new();
    for line in output.lines().filter(|line| !line.trim().is_empty()) {
        let (created, id) = line
            .split_once('\t')
            .ok_or_else(|| TmuxError::Unexpected(format!("session row `{line}`")))?;
        let created = created
            .trim()
            .parse::<u64>()
            .map_err(|_| TmuxError::Unexpected(format!("session created time `{created}`")))?;
        rows.push((created, id.trim().to_string()));
    }
    rows.sort_by_key(|(created, _)| *created);
    Ok(rows.into_iter().map(|(_, id)| id).collect())
}

/// Pick the id on the row flagged `1` from `<active>\t<id>` rows.
pub(super) fn parse_active_window(output: &str) -> Option<String> {
    output.lines().find_map(|line| {
        let (active, id) = line.split_once('\t')?;
        (active.trim() == "1" && !id.trim().is_empty()).then(|| id.trim().to_string())
    })
}

/// tmux treats an argument ending in `;` as a command separator, and strips
/// one backslash from a trailing `\;`. Prefixing the final `;` with a
/// backslash makes tmux deliver the text unchanged.
pub(super) fn escape_trailing_semicolon(text: &str) -> String {
    match text.strip_suffix(';') {
        Some(head) => format!("{head}\\;"),
        None => text.to_string(),
    }
}

/// Non-empty trimmed lines.
pub(super) fn parse_ids(output: &str) -> Vec<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
