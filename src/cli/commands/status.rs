//! Implementation of the `codechat status` command.

use anyhow::{Context, Result};

use crate::cli::output::{output, CommandOutput};
use crate::infrastructure::config::{ConfigError, ConfigProvider};

#[derive(Debug, serde::Serialize)]
pub struct StatusOutput {
    pub configured: bool,
    pub has_credential: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_deployment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
}

impl CommandOutput for StatusOutput {
    fn to_human(&self) -> String {
        let mut lines = vec![self.message.clone()];
        if let Some(provider) = &self.provider {
            lines.push(format!("  provider:         {provider}"));
        }
        if let Some(endpoint) = &self.endpoint {
            lines.push(format!("  endpoint:         {endpoint}"));
        }
        if let Some(deployment) = &self.model_deployment {
            if !deployment.is_empty() {
                lines.push(format!("  model deployment: {deployment}"));
            }
        }
        if let Some(model) = &self.model {
            if !model.is_empty() {
                lines.push(format!("  model:            {model}"));
            }
        }
        if let Some(api_version) = &self.api_version {
            lines.push(format!("  api version:      {api_version}"));
        }
        lines.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub async fn execute(json_mode: bool) -> Result<()> {
    let provider = ConfigProvider::default_provider();

    // The API key itself is never displayed, only its presence.
    let output_data = match provider.load() {
        Ok(config) => StatusOutput {
            configured: true,
            has_credential: true,
            message: "configuration found".to_string(),
            provider: Some(config.provider),
            endpoint: Some(config.endpoint),
            model_deployment: Some(config.model_deployment),
            model: Some(config.model),
            api_version: Some(config.api_version),
        },
        Err(ConfigError::NotFound { .. }) => StatusOutput {
            configured: false,
            has_credential: false,
            message: "no configuration found; run `codechat login`".to_string(),
            provider: None,
            endpoint: None,
            model_deployment: None,
            model: None,
            api_version: None,
        },
        Err(ConfigError::CredentialUnavailable) => StatusOutput {
            configured: true,
            has_credential: false,
            message: "configuration present but no credential is stored; run `codechat login`"
                .to_string(),
            provider: None,
            endpoint: None,
            model_deployment: None,
            model: None,
            api_version: None,
        },
        Err(err) => return Err(err).context("Failed to load configuration"),
    };

    output(&output_data, json_mode);
    Ok(())
}
