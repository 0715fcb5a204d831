//! Shared test helpers.

use std::sync::{Arc, Mutex};

use codechat::{CredentialError, SecretStore};

/// In-memory [`SecretStore`] double. Clones share the same backing slot,
/// so a test can keep a handle after moving the store into a provider.
#[derive(Clone, Default)]
pub struct InMemorySecretStore {
    value: Arc<Mutex<Option<String>>>,
}

impl InMemorySecretStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently stored secret, if any.
    pub fn stored(&self) -> Option<String> {
        self.value.lock().expect("lock poisoned").clone()
    }

    /// Drop the stored secret, simulating a missing keyring entry.
    pub fn clear(&self) {
        *self.value.lock().expect("lock poisoned") = None;
    }
}

impl SecretStore for InMemorySecretStore {
    fn set_secret(&self, value: &str) -> Result<(), CredentialError> {
        *self.value.lock().expect("lock poisoned") = Some(value.to_string());
        Ok(())
    }

    fn get_secret(&self) -> Result<String, CredentialError> {
        self.value
            .lock()
            .expect("lock poisoned")
            .clone()
            .ok_or(CredentialError::NotFound)
    }

    fn delete_secret(&self) -> Result<(), CredentialError> {
        let mut slot = self.value.lock().expect("lock poisoned");
        if slot.take().is_none() {
            return Err(CredentialError::NotFound);
        }
        Ok(())
    }
}

/// [`SecretStore`] double whose writes always fail, for exercising the
/// save-then-secret-fail path.
pub struct FailingSecretStore;

impl SecretStore for FailingSecretStore {
    fn set_secret(&self, _value: &str) -> Result<(), CredentialError> {
        Err(CredentialError::Store("keyring unavailable".to_string()))
    }

    fn get_secret(&self) -> Result<String, CredentialError> {
        Err(CredentialError::Store("keyring unavailable".to_string()))
    }

    fn delete_secret(&self) -> Result<(), CredentialError> {
        Err(CredentialError::Store("keyring unavailable".to_string()))
    }
}
