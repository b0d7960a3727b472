//! Pane targeting and delivery with prefill fallback.

use std::time::Duration;

use super::{Multiplexer, PaneTarget};
use crate::error::{InjectError, TmuxError};
use crate::tty::Prefill;

/// Pause after a split before the new pane accepts keys.
pub const DEFAULT_SPLIT_DELAY: Duration = Duration::from_millis(300);

/// How a pane delivery request was satisfied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaneDelivery {
    /// Keys reached the pane; `submitted` when Enter was also sent.
    Sent { target: PaneTarget, submitted: bool },
    /// Tmux was unusable and the current terminal was prefilled instead.
    FellBack { reason: String },
}

/// Sends a resolved command to a tmux pane, or prefills locally on failure.
pub struct PaneCoordinator<'a> {
    mux: &'a dyn Multiplexer,
    fallback: &'a dyn Prefill,
    split_delay: Duration,
}

impl<'a> PaneCoordinator<'a> {
    pub fn new(mux: &'a dyn Multiplexer, fallback: &'a dyn Prefill) -> Self {
        Self {
            mux,
            fallback,
            split_delay: DEFAULT_SPLIT_DELAY,
        }
    }

    pub fn with_split_delay(mut self, split_delay: Duration) -> Self {
        self.split_delay = split_delay;
        self
    }

    /// Deliver `cmd` to a pane, submitting it when `execute_immediately`.
    ///
    /// Multiplexer failures never surface; only a failing fallback does.
    pub async fn deliver(
        &self,
        cmd: &str,
        execute_immediately: bool,
    ) -> Result<PaneDelivery, InjectError> {
        let reason = if !self.mux.is_available().await {
            "tmux is not installed".to_string()
        } else {
            match self.send_to_pane(cmd, execute_immediately).await {
                Ok(target) => {
                    tracing::info!(%target, submitted = execute_immediately, "sent command to tmux pane");
                    return Ok(PaneDelivery::Sent {
                        target,
                        submitted: execute_immediately,
                    });
                }
                Err(err) => err.to_string(),
            }
        };

        tracing::warn!(%reason, "tmux delivery unavailable; prefilling current terminal");
        self.fallback.inject(cmd)?;
        Ok(PaneDelivery::FellBack { reason })
    }

    async fn send_to_pane(
        &self,
        cmd: &str,
        execute_immediately: bool,
    ) -> Result<PaneTarget, TmuxError> {
        let target = self.resolve_target().await?;
        self.mux.send_literal(&target.pane, cmd).await?;
        if execute_immediately {
            self.mux.send_enter(&target.pane).await?;
        } else {
            // Leave the line unsubmitted and move focus there for review.
            self.mux.select_pane(&target.pane).await?;
        }
        Ok(target)
    }

    /// Newest session, its active window, and a pane other than the user's.
    async fn resolve_target(&self) -> Result<PaneTarget, TmuxError> {
        let session = self
            .mux
            .list_sessions()
            .await?
            .pop()
            .ok_or_else(|| TmuxError::Failed("no tmux sessions".into()))?;
        let window = self.mux.active_window(&session).await?;
        let mut panes = self.mux.list_panes(&window).await?;

        let pane = if panes.len() == 1 {
            let pane = self.mux.split_window(&window).await?;
            tokio::time::sleep(self.split_delay).await;
            pane
        } else {
            panes
                .pop()
                .ok_or_else(|| TmuxError::Unexpected(format!("window {window} has no panes")))?
        };

        Ok(PaneTarget {
            session,
            window,
            pane,
        })
    }
}
