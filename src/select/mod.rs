//! Interactive pickers that turn a catalogue into a resolved command line.

mod fzf;
mod prompt;

pub use fzf::{pick_from_fzf_output, FzfSelector};
pub use prompt::PromptSelector;

use serde::Deserialize;

/// Which picker the session uses.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SelectorKind {
    #[default]
    Fzf,
    Prompt,
}

/// Whether `program --version` runs successfully.
pub async fn fzf_available(program: &str) -> bool {
    tokio::process::Command::new(program)
        .arg("--version")
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .status()
        .await
        .map(|status| status.success())
        .unwrap_or(false)
}
