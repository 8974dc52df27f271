//! Config path resolution.

use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.toml";

/// `<config_dir>/gone/config.toml`, or `None` when the platform has no
/// config directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("gone").join(CONFIG_FILE_NAME))
}
