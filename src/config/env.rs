//! Environment overrides applied on top of the file config.

use std::path::PathBuf;

use crate::error::ConfigError;

use super::Config;

/// Variables file override.
pub(super) const VARIABLES_FILE_ENV: &str = "QUIVER_VARIABLES_FILE";
/// `--exec` shell override.
pub(super) const SHELL_ENV: &str = "QUIVER_SHELL";
/// Any non-empty value disables colour (<https://no-color.org>).
pub(super) const NO_COLOR_ENV: &str = "NO_COLOR";

pub(super) fn apply_runtime_env_overrides<FEnv>(
    config: &mut Config,
    env_lookup: &FEnv,
) -> Result<(), ConfigError>
where
    FEnv: Fn(&str) -> Option<String>,
{
    if let Some(path) = non_empty(env_lookup, VARIABLES_FILE_ENV) {
        config.variables_path = PathBuf::from(path);
    }
    if let Some(shell) = env_lookup(SHELL_ENV) {
        let shell = shell.trim();
        if shell.is_empty() {
            return Err(ConfigError::Invalid(format!(
                "{SHELL_ENV} is set but empty"
            )));
        }
        config.exec_shell = shell.to_string();
    }
    if non_empty(env_lookup, NO_COLOR_ENV).is_some() {
        config.display.color = false;
    }
    Ok(())
}

fn non_empty<FEnv>(env_lookup: &FEnv, name: &str) -> Option<String>
where
    FEnv: Fn(&str) -> Option<String>,
{
    env_lookup(name).filter(|value| !value.trim().is_empty())
}
