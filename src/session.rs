//! Selection → interpretation/delivery loop.

use async_trait::async_trait;
use std::io::Write;

use crate::delivery::{DeliveryOutcome, DeliveryRequest, Dispatcher};
use crate::error::{LauncherError, SelectError};
use crate::meta::{is_meta_command, MetaCommand};
use crate::vars::{SessionVariables, VariableStore};

/// What the session should do after an internal command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionSignal {
    /// Ask for another selection.
    Continue,
    /// Start a fresh interactive cycle.
    Restart,
    /// Stop the session.
    End,
}

/// Source of resolved command lines (the interactive picker).
#[async_trait]
pub trait Selector: Send {
    /// Next resolved command, or `None` when the user picked nothing.
    async fn select(&mut self, vars: &SessionVariables) -> Result<Option<String>, SelectError>;

    /// Called before the cycle following a [`SessionSignal::Restart`].
    fn restart(&mut self) {}
}

/// How a session finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEnd {
    NoSelection,
    /// An internal command returned [`SessionSignal::End`].
    MetaEnded,
    Delivered(DeliveryOutcome),
}

/// Drives selection cycles until one ends the session.
pub struct SessionLoop<'a> {
    store: &'a VariableStore,
    dispatcher: &'a Dispatcher<'a>,
    request: &'a DeliveryRequest,
}

impl<'a> SessionLoop<'a> {
    pub fn new(
        store: &'a VariableStore,
        dispatcher: &'a Dispatcher<'a>,
        request: &'a DeliveryRequest,
    ) -> Self {
        Self {
            store,
            dispatcher,
            request,
        }
    }

    pub async fn run(
        &self,
        selector: &mut dyn Selector,
        out: &mut dyn Write,
    ) -> Result<SessionEnd, LauncherError> {
        loop {
            let vars = self.store.load()?;
            let Some(line) = selector.select(&vars).await? else {
                return Ok(SessionEnd::NoSelection);
            };
            if line.is_empty() {
                return Ok(SessionEnd::NoSelection);
            }

            if !is_meta_command(&line) {
                let outcome = self.dispatcher.dispatch(&line, self.request, out).await?;
                return Ok(SessionEnd::Delivered(outcome));
            }

            match MetaCommand::parse(&line).execute(self.store, out)? {
                SessionSignal::Continue => {}
                SessionSignal::Restart => {
                    tracing::debug!("restarting session");
                    selector.restart();
                }
                SessionSignal::End => return Ok(SessionEnd::MetaEnded),
            }
        }
    }
}
