//! Default configuration constants.
//!
//! Shared with the loader and the data model so neither repeats literals.

use std::path::PathBuf;

/// Config file name looked up locally and under the config root.
pub(super) const CONFIG_FILE_NAME: &str = "quiver.toml";
/// Directory under the config root holding the global config file.
pub(super) const CONFIG_DIR_NAME: &str = "quiver";
/// Default fzf executable.
pub(super) const DEFAULT_FZF_COMMAND: &str = "fzf";

/// Default delay after splitting a fresh pane, in milliseconds.
pub(super) fn default_split_delay_ms() -> u64 {
    u64::try_from(crate::tmux::DEFAULT_SPLIT_DELAY.as_millis()).unwrap_or(300)
}

/// `~/.quiver.json`, or `./.quiver.json` without a home directory.
pub(super) fn default_variables_path() -> PathBuf {
    crate::vars::default_variables_path()
        .unwrap_or_else(|| PathBuf::from(crate::vars::DEFAULT_VARIABLES_FILE))
}

/// `~/.cheats` when it exists, otherwise nothing.
pub(super) fn default_catalogue_paths() -> Vec<PathBuf> {
    crate::catalogue::default_catalogue_path()
        .filter(|path| path.exists())
        .into_iter()
        .collect()
}
