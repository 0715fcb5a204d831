//! Split persistence for provider profiles.
//!
//! Non-secret fields go to a YAML file with owner-only permissions; the
//! API key goes to the platform credential store. Saving and loading are
//! the two halves of one contract: a loaded config is always recombined
//! from both stores.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::debug;

use crate::domain::errors::ValidationError;
use crate::domain::models::Config;
use crate::domain::ports::{CredentialError, SecretStore};
use crate::infrastructure::credentials::KeyringStore;

use super::paths;
use super::validator;

/// Error type for configuration persistence.
///
/// Only [`ConfigError::Validation`] is recoverable; callers print its
/// messages and re-collect input. Every other variant is an
/// infrastructure failure, fatal to the invoking command.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("no configuration directory available on this platform")]
    ConfigDirUnavailable,

    #[error("configuration I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("no configuration found at {}", path.display())]
    NotFound { path: PathBuf },

    #[error("credential store operation failed: {0}")]
    Credential(CredentialError),

    #[error("configuration exists but no credential is stored; run login again")]
    CredentialUnavailable,
}

/// Persists and reloads [`Config`] values, splitting the secret away from
/// the plaintext file.
pub struct ConfigProvider<S: SecretStore> {
    secrets: S,
    config_path: Option<PathBuf>,
}

impl ConfigProvider<KeyringStore> {
    /// Provider wired to the platform keyring and the default config path.
    #[must_use]
    pub fn default_provider() -> Self {
        Self::new(KeyringStore::new())
    }
}

impl<S: SecretStore> ConfigProvider<S> {
    /// Provider over the given secret store, using the default config
    /// path.
    #[must_use]
    pub fn new(secrets: S) -> Self {
        Self {
            secrets,
            config_path: None,
        }
    }

    /// Use an explicit config file path instead of the platform default.
    #[must_use]
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    fn resolve_config_path(&self) -> Result<PathBuf, ConfigError> {
        match &self.config_path {
            Some(path) => Ok(path.clone()),
            None => paths::default_config_path(),
        }
    }

    /// Validate and persist a config.
    ///
    /// Validation failures propagate untouched and nothing is written.
    /// The file write is atomic (temp file + rename), so a failed write
    /// leaves any previous file intact. If the credential store write
    /// fails after the file was replaced, the file is not rolled back;
    /// the caller re-runs login to converge.
    ///
    /// # Errors
    /// [`ConfigError::Validation`] on rule violations, otherwise an
    /// infrastructure variant.
    pub fn save(&self, config: &mut Config) -> Result<(), ConfigError> {
        validator::validate(config)?;

        let path = self.resolve_config_path()?;
        let dir = path.parent().ok_or(ConfigError::ConfigDirUnavailable)?;
        fs::create_dir_all(dir)?;

        let yaml = serde_yaml::to_string(config)?;
        debug!(path = %path.display(), "writing configuration file");
        write_atomic(&path, dir, &yaml)?;

        debug!("storing api key in credential store");
        self.secrets
            .set_secret(config.api_key())
            .map_err(ConfigError::Credential)?;

        Ok(())
    }

    /// Read the config file and the stored credential, and recombine them.
    ///
    /// # Errors
    /// [`ConfigError::NotFound`] when the file is absent,
    /// [`ConfigError::CredentialUnavailable`] when the file exists but no
    /// secret is stored, otherwise an infrastructure variant.
    pub fn load(&self) -> Result<Config, ConfigError> {
        let path = self.resolve_config_path()?;
        if !path.exists() {
            return Err(ConfigError::NotFound { path });
        }

        let contents = fs::read_to_string(&path)?;
        let mut config: Config = serde_yaml::from_str(&contents)?;

        let api_key = match self.secrets.get_secret() {
            Ok(secret) => secret,
            Err(CredentialError::NotFound) => return Err(ConfigError::CredentialUnavailable),
            Err(err) => return Err(ConfigError::Credential(err)),
        };
        config.set_api_key(api_key);

        Ok(config)
    }
}

/// Write `contents` to `path` without ever exposing a partially written
/// file: the bytes land in a temp file in the same directory, permissions
/// are restricted to the owner, and the temp file is renamed over the
/// target.
fn write_atomic(path: &Path, dir: &Path, contents: &str) -> Result<(), ConfigError> {
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(contents.as_bytes())?;
    tmp.flush()?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmp.as_file()
            .set_permissions(fs::Permissions::from_mode(0o600))?;
    }

    tmp.persist(path).map_err(|err| ConfigError::Io(err.error))?;
    Ok(())
}
