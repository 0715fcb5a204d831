//! Provider-aware configuration validation.
//!
//! All rule checks run unconditionally so the caller sees every violation
//! at once; the config is only mutated for safe defaulting, never to
//! silently satisfy a required-field rule.

use crate::domain::errors::ValidationError;
use crate::domain::models::config::{
    Config, DEFAULT_MODEL_DEPLOYMENT, PROVIDER_AZURE, PROVIDER_OPENAI, SUPPORTED_PROVIDERS,
};

/// Check a config against the provider rules, applying safe defaults in
/// place.
///
/// # Errors
/// [`ValidationError`] carrying one message per violated rule, in rule
/// order: apiKey, endpoint, provider-specific, apiVersion.
pub fn validate(config: &mut Config) -> Result<(), ValidationError> {
    let mut messages = Vec::new();

    check_api_key(config, &mut messages);
    check_endpoint(config, &mut messages);
    check_provider(config, &mut messages);
    check_api_version(config, &mut messages);

    if messages.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::new(messages))
    }
}

fn check_api_key(config: &Config, messages: &mut Vec<String>) {
    if config.api_key().is_empty() {
        messages.push("apiKey must be provided and not be empty".to_string());
    }
}

fn check_endpoint(config: &Config, messages: &mut Vec<String>) {
    if config.endpoint.is_empty() {
        messages.push("endpoint must be provided and not be empty".to_string());
    }
}

fn check_provider(config: &mut Config, messages: &mut Vec<String>) {
    if config.provider.is_empty() {
        config.provider = PROVIDER_AZURE.to_string();
    }

    match config.provider.as_str() {
        PROVIDER_AZURE => {
            if config.model_deployment.is_empty() {
                config.model_deployment = DEFAULT_MODEL_DEPLOYMENT.to_string();
            }
        }
        PROVIDER_OPENAI => {
            if config.model.is_empty() {
                messages.push("model must be provided and not be empty".to_string());
            }
        }
        _ => {
            messages.push(format!(
                "provider not supported. supported providers: {}",
                SUPPORTED_PROVIDERS.join(" ")
            ));
        }
    }
}

fn check_api_version(config: &Config, messages: &mut Vec<String>) {
    if config.api_version.is_empty() {
        messages.push("apiversion must be provided and not be empty".to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::config::NewConfigParams;

    fn empty_config() -> Config {
        Config::new(NewConfigParams::default())
    }

    #[test]
    fn test_all_empty_yields_three_messages_and_azure_defaults() {
        let mut config = empty_config();

        let err = validate(&mut config).expect_err("empty config must fail");

        assert_eq!(
            err.messages,
            vec![
                "apiKey must be provided and not be empty".to_string(),
                "endpoint must be provided and not be empty".to_string(),
                "apiversion must be provided and not be empty".to_string(),
            ]
        );
        // Defaulting happened silently alongside the failures.
        assert_eq!(config.provider, PROVIDER_AZURE);
        assert_eq!(config.model_deployment, DEFAULT_MODEL_DEPLOYMENT);
    }

    #[test]
    fn test_valid_azure_config_passes() {
        let mut config = Config::new(NewConfigParams {
            provider: PROVIDER_AZURE.to_string(),
            endpoint: "https://example.openai.azure.com".to_string(),
            api_version: "2024-02-01".to_string(),
            model_deployment: "my-deployment".to_string(),
            model: String::new(),
        });
        config.set_api_key("secret");

        validate(&mut config).expect("valid azure config");
        assert_eq!(config.model_deployment, "my-deployment");
    }

    #[test]
    fn test_azure_missing_api_version_is_sole_error_and_deployment_defaults() {
        let mut config = Config::new(NewConfigParams {
            provider: PROVIDER_AZURE.to_string(),
            endpoint: "https://x".to_string(),
            api_version: String::new(),
            model_deployment: String::new(),
            model: String::new(),
        });
        config.set_api_key("k");

        let err = validate(&mut config).expect_err("missing apiVersion must fail");

        assert_eq!(
            err.messages,
            vec!["apiversion must be provided and not be empty".to_string()]
        );
        assert_eq!(config.model_deployment, DEFAULT_MODEL_DEPLOYMENT);
    }

    #[test]
    fn test_openai_requires_model() {
        let mut config = Config::new(NewConfigParams {
            provider: PROVIDER_OPENAI.to_string(),
            endpoint: "https://api.openai.com/v1".to_string(),
            api_version: "2024-02-01".to_string(),
            model_deployment: String::new(),
            model: String::new(),
        });
        config.set_api_key("secret");

        let err = validate(&mut config).expect_err("openai without model must fail");

        assert_eq!(
            err.messages,
            vec!["model must be provided and not be empty".to_string()]
        );
    }

    #[test]
    fn test_openai_with_model_passes() {
        let mut config = Config::new(NewConfigParams {
            provider: PROVIDER_OPENAI.to_string(),
            endpoint: "https://api.openai.com/v1".to_string(),
            api_version: "2024-02-01".to_string(),
            model_deployment: String::new(),
            model: "gpt-4o".to_string(),
        });
        config.set_api_key("secret");

        validate(&mut config).expect("valid openai config");
        // No azure defaulting for the openai provider.
        assert_eq!(config.model_deployment, "");
    }

    #[test]
    fn test_unsupported_provider_lists_supported_set() {
        let mut config = Config::new(NewConfigParams {
            provider: "anthropic".to_string(),
            endpoint: "https://x".to_string(),
            api_version: "2024-02-01".to_string(),
            model_deployment: String::new(),
            model: String::new(),
        });
        config.set_api_key("secret");

        let err = validate(&mut config).expect_err("unknown provider must fail");

        assert_eq!(
            err.messages,
            vec!["provider not supported. supported providers: azure openai".to_string()]
        );
    }

    #[test]
    fn test_checks_run_unconditionally() {
        // Unsupported provider combined with other violations still
        // reports every rule.
        let mut config = Config::new(NewConfigParams {
            provider: "bedrock".to_string(),
            ..NewConfigParams::default()
        });

        let err = validate(&mut config).expect_err("must fail");
        assert_eq!(err.messages.len(), 4);
    }
}
