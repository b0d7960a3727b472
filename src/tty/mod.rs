//! Prefill the interactive shell by injecting bytes into the terminal.
//!
//! Injection temporarily turns off echo and canonical mode so queued bytes
//! are neither echoed back nor line-edited, then restores the saved
//! attributes. Restoration is tied to [`DisciplineGuard`]'s drop, so it also
//! runs when an injection fails halfway or the thread unwinds.

mod controlling;

pub use controlling::ControllingTerminal;

use crate::error::InjectError;

/// When new attributes take effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyWhen {
    /// Immediately (`TCSANOW`).
    Now,
    /// After pending output drains (`TCSADRAIN`).
    Drain,
}

/// Low-level terminal operations needed by the injector.
pub trait TerminalInput {
    /// Saved line-discipline snapshot.
    type Attrs: Clone;

    fn attributes(&self) -> Result<Self::Attrs, InjectError>;

    fn apply(&self, attrs: &Self::Attrs, when: ApplyWhen) -> Result<(), InjectError>;

    /// Copy of `attrs` with echo and canonical input both cleared.
    fn quiet(attrs: &Self::Attrs) -> Self::Attrs;

    /// Queue one byte as if it had been typed.
    fn push_byte(&self, byte: u8) -> Result<(), InjectError>;
}

/// Scoped ownership of modified terminal attributes.
pub struct DisciplineGuard<'a, T: TerminalInput> {
    term: &'a T,
    saved: T::Attrs,
}

impl<'a, T: TerminalInput> DisciplineGuard<'a, T> {
    /// Snapshot current attributes and switch to quiet, non-canonical input.
    pub fn acquire(term: &'a T) -> Result<Self, InjectError> {
        let saved = term.attributes()?;
        let quiet = T::quiet(&saved);
        let guard = Self { term, saved };
        term.apply(&quiet, ApplyWhen::Now)?;
        Ok(guard)
    }
}

impl<T: TerminalInput> Drop for DisciplineGuard<'_, T> {
    fn drop(&mut self) {
        if let Err(err) = self.term.apply(&self.saved, ApplyWhen::Drain) {
            tracing::warn!(%err, "failed to restore terminal attributes");
        }
    }
}

/// Object-safe prefill capability used by delivery and pane fallback.
pub trait Prefill {
    fn inject(&self, cmd: &str) -> Result<(), InjectError>;
}

/// Prefills a command line on a [`TerminalInput`].
#[derive(Debug, Default)]
pub struct TtyInjector<T> {
    term: T,
}

impl<T: TerminalInput> TtyInjector<T> {
    pub fn new(term: T) -> Self {
        Self { term }
    }

    pub fn terminal(&self) -> &T {
        &self.term
    }
}

impl<T: TerminalInput> Prefill for TtyInjector<T> {
    fn inject(&self, cmd: &str) -> Result<(), InjectError> {
        let _guard = DisciplineGuard::acquire(&self.term)?;
        // One push per UTF-8 byte keeps multibyte characters intact.
        for byte in cmd.bytes() {
            self.term.push_byte(byte)?;
        }
        tracing::debug!(bytes = cmd.len(), "prefilled terminal input");
        Ok(())
    }
}
