//! CLI argument parsing via clap.

use clap::Parser;
use std::path::PathBuf;

use quiver::delivery::DeliveryRequest;

/// Pick a command template, fill in session variables, and deliver it.
///
/// Without a delivery flag the command is prefilled on the terminal's input
/// line, ready to edit.
#[derive(Debug, Parser)]
#[command(name = "quiver", disable_version_flag = true)]
pub struct Args {
    /// Print the command to stdout.
    #[arg(short = 'p', long = "print")]
    pub print: bool,

    /// Write the command to a file.
    #[arg(short = 'o', long = "outfile", value_name = "PATH")]
    pub outfile: Option<PathBuf>,

    /// Copy the command to the clipboard.
    #[arg(short = 'x', long = "copy")]
    pub copy: bool,

    /// Run the command with the configured shell.
    #[arg(short = 'e', long = "exec")]
    pub exec: bool,

    /// Send the command to a tmux pane.
    #[arg(short = 't', long = "tmux")]
    pub tmux: bool,

    /// Validate the catalogue and exit.
    #[arg(short = 'c', long = "check")]
    pub check: bool,

    /// Print version and build metadata.
    #[arg(short = 'v', long = "version")]
    pub version: bool,

    /// Path to config file (default: ./quiver.toml or ~/.config/quiver/quiver.toml).
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Use the line prompt instead of fzf.
    #[arg(long = "prompt")]
    pub prompt: bool,
}

impl Args {
    /// The delivery flags, in the shape the dispatcher consumes.
    pub fn delivery_request(&self) -> DeliveryRequest {
        DeliveryRequest {
            print: self.print,
            copy: self.copy,
            exec: self.exec,
            tmux: self.tmux,
            outfile: self.outfile.clone(),
        }
    }
}
