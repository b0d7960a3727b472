//! Configuration loading from TOML files and environment variables.
//!
//! Config is loaded in this order of precedence (highest wins):
//! 1. Environment variables (`QUIVER_VARIABLES_FILE`, `QUIVER_SHELL`, `NO_COLOR`)
//! 2. TOML file specified via `--config`
//! 3. `./quiver.toml` in the current directory
//! 4. `$XDG_CONFIG_HOME/quiver/quiver.toml` (or `~/.config/quiver/quiver.toml`)
//! 5. Built-in defaults

mod defaults;
mod env;
mod init;
mod loader;
mod sources;
mod types;

pub use init::{config_root_dir, default_global_config_path};
pub use loader::load_config_with_source;
pub use types::{Config, ConfigSource, DisplayConfig, LoadedConfig, TmuxConfig};
