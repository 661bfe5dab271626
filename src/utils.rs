/// Utility functions used throughout the application

use std::path::PathBuf;

use anyhow::Result;

use crate::session::CREDENTIAL_FILE;

/// Directory name under the platform config dir
pub const APP_DIR: &str = "polltui";

/// Get platform-specific debug log path
pub fn get_debug_log_path() -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push("polltui-debug.log");
    path
}

/// `<config_dir>/polltui`, if the platform has a config dir
pub fn app_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR))
}

/// Default credential location: `<config_dir>/polltui/token`
pub fn default_credential_path() -> Result<PathBuf> {
    app_config_dir()
        .map(|dir| dir.join(CREDENTIAL_FILE))
        .ok_or_else(|| anyhow::anyhow!("no platform config directory; set credential_path in the config file"))
}
