//! Port traits the infrastructure layer implements.

use thiserror::Error;

/// Error type for credential store operations.
#[derive(Debug, Error)]
pub enum CredentialError {
    /// No secret is stored under the tool's identifier. Distinct from
    /// access failures so callers can treat "never logged in" differently
    /// from "keyring broken".
    #[error("no stored credential found")]
    NotFound,

    /// The platform credential store rejected or failed the operation.
    #[error("credential store access failed: {0}")]
    Store(String),
}

/// Protected storage for the API key, separate from the plaintext
/// configuration file.
///
/// Implementations may block on an OS-level unlock prompt; callers must
/// not impose timeouts around these operations.
pub trait SecretStore: Send + Sync {
    /// Store the secret, replacing any previously stored value.
    fn set_secret(&self, value: &str) -> Result<(), CredentialError>;

    /// Retrieve the stored secret.
    ///
    /// # Errors
    /// [`CredentialError::NotFound`] when nothing is stored.
    fn get_secret(&self) -> Result<String, CredentialError>;

    /// Remove the stored secret.
    ///
    /// # Errors
    /// [`CredentialError::NotFound`] when nothing is stored.
    fn delete_secret(&self) -> Result<(), CredentialError>;
}
