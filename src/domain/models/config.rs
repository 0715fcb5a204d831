use serde::{Deserialize, Serialize};

/// Providers that codechat can talk to, in declared order.
pub const SUPPORTED_PROVIDERS: [&str; 2] = [PROVIDER_AZURE, PROVIDER_OPENAI];

/// The deployment-based provider. Profiles default to it when no provider
/// is given.
pub const PROVIDER_AZURE: &str = "azure";

/// The model-name-based provider.
pub const PROVIDER_OPENAI: &str = "openai";

/// API version the login flow pre-fills for Azure profiles.
pub const DEFAULT_API_VERSION: &str = "2024-02-01";

/// Deployment name used when an Azure profile leaves it empty.
pub const DEFAULT_MODEL_DEPLOYMENT: &str = "gpt-4-1106-preview";

/// One provider profile: everything needed to reach a completion backend.
///
/// The API key is deliberately not part of the serialized representation.
/// It lives in the platform credential store and is only reachable through
/// [`Config::set_api_key`] and [`Config::api_key`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Backend provider, one of [`SUPPORTED_PROVIDERS`]. An empty value is
    /// a valid transient state; validation defaults it to azure.
    pub provider: String,

    /// Provider API base URL.
    pub endpoint: String,

    /// Hosted model deployment name (Azure only).
    pub model_deployment: String,

    /// Model name (OpenAI only).
    pub model: String,

    /// Skip `.git` directories when scanning the codebase.
    pub exclude_git_dir: bool,

    /// Honor `.gitignore` when scanning the codebase.
    pub use_gitignore: bool,

    /// Provider API version.
    pub api_version: String,

    // Never serialized; transits only through the credential store.
    #[serde(skip)]
    api_key: String,
}

/// Parameters for [`Config::new`]. The CLI collects these from flags and
/// prompts; no process-wide flag state is involved.
#[derive(Debug, Clone, Default)]
pub struct NewConfigParams {
    pub provider: String,
    pub endpoint: String,
    pub api_version: String,
    pub model_deployment: String,
    pub model: String,
}

impl Config {
    /// Build a profile from the given parameters. Construction never fails
    /// and performs no validation; run the validator before persisting.
    #[must_use]
    pub fn new(params: NewConfigParams) -> Self {
        Self {
            provider: params.provider,
            endpoint: params.endpoint,
            model_deployment: params.model_deployment,
            model: params.model,
            exclude_git_dir: true,
            use_gitignore: true,
            api_version: params.api_version,
            api_key: String::new(),
        }
    }

    /// Set the confidential API key.
    pub fn set_api_key(&mut self, api_key: impl Into<String>) {
        self.api_key = api_key.into();
    }

    /// The confidential API key.
    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

/// Trim surrounding whitespace and newlines from interactive input.
#[must_use]
pub fn sanitize_input(input: &str) -> &str {
    input.trim()
}
