//! Configuration data model.
//!
//! `FileConfig` mirrors the TOML layout with every field optional; `Config`
//! is the resolved form the launcher runs with.

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use crate::delivery::DEFAULT_EXEC_SHELL;
use crate::select::SelectorKind;

use super::defaults::{
    default_catalogue_paths, default_split_delay_ms, default_variables_path, DEFAULT_FZF_COMMAND,
};

/// Top-level runtime configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// JSON file holding the persisted session variables.
    pub variables_path: PathBuf,
    /// Files or directories of command templates.
    pub catalogue_paths: Vec<PathBuf>,
    pub selector: SelectorKind,
    pub fzf_command: String,
    /// Shell used by `--exec` as `<shell> -c <command>`.
    pub exec_shell: String,
    pub tmux: TmuxConfig,
    pub display: DisplayConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            variables_path: default_variables_path(),
            catalogue_paths: default_catalogue_paths(),
            selector: SelectorKind::default(),
            fzf_command: DEFAULT_FZF_COMMAND.to_string(),
            exec_shell: DEFAULT_EXEC_SHELL.to_string(),
            tmux: TmuxConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}

/// tmux pane delivery settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TmuxConfig {
    /// Pause after creating a pane so its shell can start.
    pub split_delay_ms: u64,
}

impl TmuxConfig {
    pub fn split_delay(&self) -> Duration {
        Duration::from_millis(self.split_delay_ms)
    }
}

impl Default for TmuxConfig {
    fn default() -> Self {
        Self {
            split_delay_ms: default_split_delay_ms(),
        }
    }
}

/// Terminal output settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

/// Raw TOML layout; absent keys fall back to `Config::default()`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(super) struct FileConfig {
    pub variables_path: Option<String>,
    pub catalogue_paths: Option<Vec<String>>,
    pub selector: Option<SelectorKind>,
    pub fzf_command: Option<String>,
    pub exec_shell: Option<String>,
    pub tmux: TmuxConfig,
    pub display: DisplayConfig,
}

/// Where the loaded configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Explicit `--config` path.
    Explicit(PathBuf),
    /// `./quiver.toml`.
    Local,
    /// `<config root>/quiver/quiver.toml`.
    Global(PathBuf),
    /// No file found.
    BuiltInDefaults,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Explicit(path) | Self::Global(path) => write!(f, "{}", path.display()),
            Self::Local => write!(f, "./{}", super::defaults::CONFIG_FILE_NAME),
            Self::BuiltInDefaults => f.write_str("built-in defaults"),
        }
    }
}

/// Resolved config plus its source, for startup logging.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub source: ConfigSource,
}
