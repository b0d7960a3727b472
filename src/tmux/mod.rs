//! Tmux pane discovery and command hand-off.
//!
//! The coordinator targets the most recently created session's active window,
//! splitting it when it has a single pane, and falls back to prefilling the
//! current terminal whenever tmux is missing or errors.

mod client;
mod pane;
mod process;

pub use client::TmuxCli;
pub use pane::{PaneCoordinator, PaneDelivery, DEFAULT_SPLIT_DELAY};

use crate::error::TmuxError;
use async_trait::async_trait;
use std::fmt;

/// Session → window → pane identifiers (`$n`, `@n`, `%n`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaneTarget {
    pub session: String,
    pub window: String,
    pub pane: String,
}

impl fmt::Display for PaneTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}.{}", self.session, self.window, self.pane)
    }
}

/// Operations the coordinator needs from a running multiplexer server.
#[async_trait]
pub trait Multiplexer: Send + Sync {
    /// Whether the multiplexer is installed at all.
    async fn is_available(&self) -> bool;

    /// Session ids ordered oldest to newest by creation time.
    async fn list_sessions(&self) -> Result<Vec<String>, TmuxError>;

    /// Id of the session's currently active window.
    async fn active_window(&self, session: &str) -> Result<String, TmuxError>;

    /// Pane ids of a window in index order.
    async fn list_panes(&self, window: &str) -> Result<Vec<String>, TmuxError>;

    /// Split `window` without changing focus and return the new pane id.
    async fn split_window(&self, window: &str) -> Result<String, TmuxError>;

    /// Type `text` literally into `pane`.
    async fn send_literal(&self, pane: &str, text: &str) -> Result<(), TmuxError>;

    async fn send_enter(&self, pane: &str) -> Result<(), TmuxError>;

    async fn select_pane(&self, pane: &str) -> Result<(), TmuxError>;
}
