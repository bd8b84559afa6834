//! XDG-style path utilities.
//!
//! The config location follows XDG Base Directory conventions on every
//! platform rather than the OS-specific application support folders.

use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application directory name under the config root.
const APP_DIR: &str = "t2";

/// Returns the configuration directory for t2.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/t2` if `XDG_CONFIG_HOME` is set and non-empty
/// 2. `~/.config/t2` otherwise
pub fn config_dir() -> Result<PathBuf> {
    match std::env::var_os("XDG_CONFIG_HOME") {
        Some(xdg) if !xdg.is_empty() => Ok(PathBuf::from(xdg).join(APP_DIR)),
        _ => Ok(home_dir()?.join(".config").join(APP_DIR)),
    }
}

/// Returns the default config file path.
pub fn config_file() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().context("Failed to determine home directory")
}
