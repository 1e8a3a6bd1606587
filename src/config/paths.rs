//! Platform-specific configuration paths.

use crate::constants::APP_NAME;
use crate::error::{Error, Result};
use directories::ProjectDirs;
use std::path::PathBuf;

/// Environment variable that points at an explicit config file.
pub const CONFIG_ENV_VAR: &str = "AUDIOPEAKER_CONFIG";

/// Get the configuration directory for the current platform.
///
/// - Linux: `~/.config/audiopeaker/`
/// - macOS: `~/Library/Application Support/audiopeaker/`
/// - Windows: `%APPDATA%\audiopeaker\`
pub fn config_dir() -> Result<PathBuf> {
    ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or(Error::ConfigDirNotFound)
}

/// Get the full path to the config file, honouring `AUDIOPEAKER_CONFIG`.
pub fn config_file_path() -> Result<PathBuf> {
    resolve_config_path(std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from))
}

fn resolve_config_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
    match explicit {
        Some(path) if !path.as_os_str().is_empty() => Ok(path),
        _ => Ok(config_dir()?.join("config.toml")),
    }
}
