//! quiver: a terminal command launcher.
//!
//! A session picks a command template, fills its `<name>` placeholders from
//! persisted session variables, and hands the result to exactly one sink:
//! the clipboard, stdout, a file, a shell, a tmux pane, or the terminal's own
//! input line. Lines starting with `>` are internal commands that edit the
//! variables instead.
//!
//! # Quick start
//!
//! ```no_run
//! use quiver::clipboard::NoClipboard;
//! use quiver::delivery::{DeliveryRequest, Dispatcher};
//! use quiver::tmux::TmuxCli;
//! use quiver::tty::{ControllingTerminal, TtyInjector};
//!
//! # async fn example() {
//! let mux = TmuxCli::default();
//! let prefill = TtyInjector::new(ControllingTerminal::new());
//! let dispatcher = Dispatcher::new(&NoClipboard, &mux, &prefill);
//! let request = DeliveryRequest { tmux: true, ..DeliveryRequest::default() };
//! dispatcher
//!     .dispatch("nmap -sV 10.0.0.1", &request, &mut std::io::stdout())
//!     .await
//!     .unwrap();
//! # }
//! ```

pub mod build_info;
pub mod catalogue;
pub mod clipboard;
pub mod config;
pub mod delivery;
pub mod error;
pub mod meta;
pub mod select;
pub mod session;
pub mod template;
#[cfg(test)]
pub mod testsupport;
pub mod tmux;
pub mod tty;
pub mod ui;
pub mod vars;
