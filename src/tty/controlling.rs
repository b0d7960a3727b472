//! The process's controlling terminal, reached through stdin.

use nix::sys::termios::{self, LocalFlags, SetArg, Termios};
use std::os::fd::AsRawFd;

use super::{ApplyWhen, TerminalInput};
use crate::error::InjectError;

nix::ioctl_write_ptr_bad!(tiocsti, libc::TIOCSTI, libc::c_char);

/// Terminal attached to fd 0.
#[derive(Debug, Default, Clone, Copy)]
pub struct ControllingTerminal;

impl ControllingTerminal {
    pub fn new() -> Self {
        Self
    }
}

impl TerminalInput for ControllingTerminal {
    type Attrs = Termios;

    fn attributes(&self) -> Result<Termios, InjectError> {
        termios::tcgetattr(std::io::stdin())
            .map_err(|err| InjectError::Attributes(format!("tcgetattr: {err}")))
    }

    fn apply(&self, attrs: &Termios, when: ApplyWhen) -> Result<(), InjectError> {
        let action = match when {
            ApplyWhen::Now => SetArg::TCSANOW,
            ApplyWhen::Drain => SetArg::TCSADRAIN,
        };
        termios::tcsetattr(std::io::stdin(), action, attrs)
            .map_err(|err| InjectError::Attributes(format!("tcsetattr: {err}")))
    }

    fn quiet(attrs: &Termios) -> Termios {
        let mut quiet = attrs.clone();
        quiet.local_flags.remove(LocalFlags::ECHO | LocalFlags::ICANON);
        quiet
    }

    fn push_byte(&self, byte: u8) -> Result<(), InjectError> {
        let ch = byte as libc::c_char;
        let fd = std::io::stdin().as_raw_fd();
        // SAFETY: fd 0 stays open for the life of the process and TIOCSTI
        // reads exactly one byte through the pointer.
        unsafe { tiocsti(fd, &ch) }
            .map(drop)
            .map_err(|err| InjectError::Inject(format!("TIOCSTI: {err}")))
    }
}
