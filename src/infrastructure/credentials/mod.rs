//! Credentials management infrastructure
//!
//! Secure storage for the API key through the platform keyring
//! (Secret Service / Keychain / Windows Credential Manager). The key is
//! stored under a fixed service/account pair, independent of the config
//! file path.

use keyring::Entry;

use crate::domain::ports::{CredentialError, SecretStore};

/// Canonical service name for all keyring operations.
const KEYRING_SERVICE: &str = "codechat";

/// Account under which the API key is stored.
const KEYRING_ACCOUNT: &str = "api-key";

/// [`SecretStore`] backed by the platform keyring.
///
/// Operations may block on an OS unlock prompt; no timeout is applied.
pub struct KeyringStore {
    service: String,
    account: String,
}

impl KeyringStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            service: KEYRING_SERVICE.to_string(),
            account: KEYRING_ACCOUNT.to_string(),
        }
    }

    fn entry(&self) -> Result<Entry, CredentialError> {
        Entry::new(&self.service, &self.account)
            .map_err(|err| CredentialError::Store(err.to_string()))
    }
}

impl Default for KeyringStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SecretStore for KeyringStore {
    fn set_secret(&self, value: &str) -> Result<(), CredentialError> {
        // set_password replaces any existing entry, so repeated logins
        // keep a single stored value.
        self.entry()?
            .set_password(value)
            .map_err(|err| CredentialError::Store(err.to_string()))
    }

    fn get_secret(&self) -> Result<String, CredentialError> {
        match self.entry()?.get_password() {
            Ok(secret) => Ok(secret),
            Err(keyring::Error::NoEntry) => Err(CredentialError::NotFound),
            Err(err) => Err(CredentialError::Store(err.to_string())),
        }
    }

    fn delete_secret(&self) -> Result<(), CredentialError> {
        match self.entry()?.delete_credential() {
            Ok(()) => Ok(()),
            Err(keyring::Error::NoEntry) => Err(CredentialError::NotFound),
            Err(err) => Err(CredentialError::Store(err.to_string())),
        }
    }
}
