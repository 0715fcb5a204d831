//! Codechat - chat with your codebase through an AI completion provider
//!
//! Codechat manages one provider profile (Azure OpenAI or OpenAI): it
//! collects endpoint, model/deployment, and API-version settings, validates
//! them against provider-specific rules, and persists them durably. The
//! non-secret fields live in a YAML file with owner-only permissions; the
//! API key lives in the platform credential store and never touches the
//! file system.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture
//! principles:
//!
//! - **Domain Layer** (`domain`): the Config entity, validation errors,
//!   and the secret-store port
//! - **Infrastructure Layer** (`infrastructure`): validation rules, path
//!   resolution, split persistence, and the keyring adapter
//! - **CLI Layer** (`cli`): thin command-line collaborators
//!
//! # Example
//!
//! ```ignore
//! use codechat::{Config, ConfigProvider, NewConfigParams};
//!
//! let mut config = Config::new(NewConfigParams {
//!     provider: "azure".to_string(),
//!     endpoint: "https://example.openai.azure.com".to_string(),
//!     api_version: "2024-02-01".to_string(),
//!     ..NewConfigParams::default()
//! });
//! config.set_api_key("secret");
//!
//! ConfigProvider::default_provider().save(&mut config)?;
//! # Ok::<(), codechat::ConfigError>(())
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use domain::errors::ValidationError;
pub use domain::models::{Config, NewConfigParams};
pub use domain::ports::{CredentialError, SecretStore};
pub use infrastructure::config::{ConfigError, ConfigProvider};
pub use infrastructure::credentials::KeyringStore;
