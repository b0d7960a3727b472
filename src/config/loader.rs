//! Top-level config loading pipeline.

use std::path::{Path, PathBuf};

use crate::error::ConfigError;

use super::env::apply_runtime_env_overrides;
use super::init::config_root_dir;
use super::sources::read_config_text_with_sources;
use super::types::FileConfig;
use super::{Config, LoadedConfig};

/// Load configuration from disk and environment, reporting which file it
/// came from.
///
/// `path_override` is an explicit config file path (from `--config`).
pub fn load_config_with_source(path_override: Option<&Path>) -> Result<LoadedConfig, ConfigError> {
    load_config_from_sources(
        path_override,
        |path| std::fs::read_to_string(path),
        |name| std::env::var(name).ok(),
        config_root_dir,
    )
}

pub(super) fn load_config_from_sources<FRead, FEnv, FRoot>(
    path_override: Option<&Path>,
    read_file: FRead,
    env_lookup: FEnv,
    config_root: FRoot,
) -> Result<LoadedConfig, ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FEnv: Fn(&str) -> Option<String>,
    FRoot: Fn() -> Option<PathBuf>,
{
    let (config_text, source) =
        read_config_text_with_sources(path_override, &read_file, &config_root)?;
    let parsed: FileConfig = toml::from_str(&config_text)?;
    let mut config = resolve_file_config(parsed)?;
    apply_runtime_env_overrides(&mut config, &env_lookup)?;
    tracing::debug!(?source, "loaded config");
    Ok(LoadedConfig { config, source })
}

/// Merge parsed TOML over the built-in defaults.
pub(super) fn resolve_file_config(file: FileConfig) -> Result<Config, ConfigError> {
    let mut config = Config::default();
    if let Some(path) = file.variables_path {
        config.variables_path = expand_home(required("variables_path", &path)?);
    }
    if let Some(paths) = file.catalogue_paths {
        config.catalogue_paths = paths
            .iter()
            .map(|p| required("catalogue_paths", p).map(expand_home))
            .collect::<Result<_, _>>()?;
    }
    if let Some(selector) = file.selector {
        config.selector = selector;
    }
    if let Some(fzf) = file.fzf_command {
        config.fzf_command = required("fzf_command", &fzf)?.to_string();
    }
    if let Some(shell) = file.exec_shell {
        config.exec_shell = required("exec_shell", &shell)?.to_string();
    }
    config.tmux = file.tmux;
    config.display = file.display;
    Ok(config)
}

fn required<'a>(key: &str, value: &'a str) -> Result<&'a str, ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Invalid(format!("`{key}` must not be empty")));
    }
    Ok(trimmed)
}

/// Expand a leading `~/` against the home directory.
pub(super) fn expand_home(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ if path == "~" => dirs::home_dir().unwrap_or_else(|| PathBuf::from(path)),
        _ => PathBuf::from(path),
    }
}
