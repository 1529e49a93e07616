//! Settings path resolution
//!
//! Uses the platform configuration directory (`~/.config` on Linux,
//! `~/Library/Application Support` on macOS, `%APPDATA%` on Windows) and
//! never a path relative to the working directory.

use std::path::PathBuf;
use tracing::{debug, warn};

/// Get the configuration directory for vidlink.
pub fn get_config_dir() -> PathBuf {
    let dir = dirs::config_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
        .unwrap_or_else(|| {
            warn!("Could not determine config directory, using /tmp");
            PathBuf::from("/tmp")
        })
        .join("vidlink");

    debug!("Config directory: {:?}", dir);
    dir
}

/// Get the settings file path.
///
/// Returns: `<config_dir>/vidlink/settings.json`
pub fn get_settings_path() -> PathBuf {
    get_config_dir().join("settings.json")
}
