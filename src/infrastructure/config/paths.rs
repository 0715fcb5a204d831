//! Platform-appropriate configuration paths.

use std::env;
use std::path::PathBuf;

use super::provider::ConfigError;

/// Directory name under the platform configuration base.
const APP_DIR_NAME: &str = "codechat";

/// File name of the persisted configuration inside [`config_dir`].
pub const CONFIG_FILE_NAME: &str = "codechat.yaml";

/// The base configuration directory for codechat.
///
/// `XDG_CONFIG_HOME` wins when set and non-empty; otherwise the platform
/// convention from the `dirs` crate applies. The directory is not created
/// here — persistence does that on save.
///
/// # Errors
/// [`ConfigError::ConfigDirUnavailable`] when the platform reports no
/// configuration directory at all.
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    if let Ok(dir) = env::var("XDG_CONFIG_HOME") {
        if !dir.is_empty() {
            return Ok(PathBuf::from(dir).join(APP_DIR_NAME));
        }
    }

    dirs::config_dir()
        .map(|base| base.join(APP_DIR_NAME))
        .ok_or(ConfigError::ConfigDirUnavailable)
}

/// Full path of the configuration file.
///
/// # Errors
/// Propagates the [`config_dir`] resolution error.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Whether the process runs inside Windows Subsystem for Linux, where
/// platform keyring access is known to be unreliable. Callers may pick a
/// fallback secret-storage strategy based on this.
#[must_use]
pub fn is_wsl() -> bool {
    env::var_os("WSL_DISTRO_NAME").is_some()
}
