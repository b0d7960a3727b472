//! Delivery policy: pick exactly one sink for a resolved command.
//!
//! [`DeliveryRoute::plan`] is the priority table; [`Dispatcher`] carries out
//! the chosen route against injected capabilities.

mod route;

pub use route::{DeliveryRequest, DeliveryRoute};

use std::io::Write;
use std::path::PathBuf;

use crate::clipboard::ClipboardSink;
use crate::error::DeliveryError;
use crate::tmux::{Multiplexer, PaneCoordinator, PaneDelivery};
use crate::tty::Prefill;

/// Shell used for direct execution when none is configured.
pub const DEFAULT_EXEC_SHELL: &str = "sh";

/// What a dispatch actually did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    Copied,
    /// Copy was requested but no clipboard could be used.
    ClipboardUnavailable,
    Printed,
    Written(PathBuf),
    /// Exit code of the executed command, when it exited normally.
    Executed(Option<i32>),
    Pane(PaneDelivery),
    Prefilled,
}

/// Runs a planned route against clipboard, tmux, and terminal capabilities.
pub struct Dispatcher<'a> {
    clipboard: &'a dyn ClipboardSink,
    panes: PaneCoordinator<'a>,
    prefill: &'a dyn Prefill,
    shell: String,
}

impl<'a> Dispatcher<'a> {
    pub fn new(
        clipboard: &'a dyn ClipboardSink,
        mux: &'a dyn Multiplexer,
        prefill: &'a dyn Prefill,
    ) -> Self {
        Self {
            clipboard,
            panes: PaneCoordinator::new(mux, prefill),
            prefill,
            shell: DEFAULT_EXEC_SHELL.to_string(),
        }
    }

    /// Interpreter used for `exec` delivery (`<shell> -c <cmd>`).
    pub fn with_shell(mut self, shell: impl Into<String>) -> Self {
        self.shell = shell.into();
        self
    }

    /// Replace the pane coordinator, e.g. to tune its split delay.
    pub fn with_panes(mut self, panes: PaneCoordinator<'a>) -> Self {
        self.panes = panes;
        self
    }

    /// Deliver `cmd` through the single route selected for `request`.
    ///
    /// `out` receives the command on the print route.
    pub async fn dispatch(
        &self,
        cmd: &str,
        request: &DeliveryRequest,
        out: &mut dyn Write,
    ) -> Result<DeliveryOutcome, DeliveryError> {
        let route = DeliveryRoute::plan(request);
        tracing::debug!(?route, "dispatching resolved command");
        match route {
            DeliveryRoute::Clipboard => Ok(self.copy(cmd)),
            DeliveryRoute::Print => {
                writeln!(out, "{cmd}")?;
                out.flush()?;
                Ok(DeliveryOutcome::Printed)
            }
            DeliveryRoute::File(path) => {
                std::fs::write(&path, cmd)?;
                tracing::info!(path = %path.display(), "wrote command to file");
                Ok(DeliveryOutcome::Written(path))
            }
            DeliveryRoute::Execute => self.execute(cmd).await,
            DeliveryRoute::Pane { submit } => {
                Ok(DeliveryOutcome::Pane(self.panes.deliver(cmd, submit).await?))
            }
            DeliveryRoute::Prefill => {
                self.prefill.inject(cmd)?;
                Ok(DeliveryOutcome::Prefilled)
            }
        }
    }

    fn copy(&self, cmd: &str) -> DeliveryOutcome {
        if !self.clipboard.is_available() {
            return DeliveryOutcome::ClipboardUnavailable;
        }
        match self.clipboard.copy(cmd) {
            Ok(()) => DeliveryOutcome::Copied,
            Err(err) => {
                tracing::debug!(%err, "clipboard copy failed");
                DeliveryOutcome::ClipboardUnavailable
            }
        }
    }

    async fn execute(&self, cmd: &str) -> Result<DeliveryOutcome, DeliveryError> {
        tracing::info!(shell = %self.shell, "executing command");
        let status = tokio::process::Command::new(&self.shell)
            .arg("-c")
            .arg(cmd)
            .status()
            .await?;
        if !status.success() {
            tracing::info!(%status, "command exited unsuccessfully");
        }
        Ok(DeliveryOutcome::Executed(status.code()))
    }
}
