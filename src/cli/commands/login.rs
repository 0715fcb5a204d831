//! Implementation of the `codechat login` command.

use anyhow::{Context, Result};
use clap::Args;
use console::style;
use tracing::warn;

use crate::cli::output::{output, CommandOutput};
use crate::cli::prompt;
use crate::domain::models::config::{
    Config, NewConfigParams, DEFAULT_API_VERSION, PROVIDER_AZURE, PROVIDER_OPENAI,
};
use crate::infrastructure::config::{paths, ConfigError, ConfigProvider};

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Provider name. Supported providers: azure openai
    #[arg(long, short = 'p')]
    pub provider: Option<String>,

    /// API key
    #[arg(long = "api-key", short = 'k')]
    pub api_key: Option<String>,

    /// API endpoint
    #[arg(long, short = 'e')]
    pub endpoint: Option<String>,

    /// OpenAI (compatible) model
    #[arg(long, short = 'm')]
    pub model: Option<String>,

    /// Azure model deployment
    #[arg(long = "model-deployment", short = 'd')]
    pub model_deployment: Option<String>,

    /// API version
    #[arg(long = "api-version", short = 'v')]
    pub api_version: Option<String>,
}

#[derive(Debug, serde::Serialize)]
pub struct LoginOutput {
    pub success: bool,
    pub messages: Vec<String>,
}

impl CommandOutput for LoginOutput {
    fn to_human(&self) -> String {
        if self.success {
            style("configuration saved successfully").green().to_string()
        } else {
            self.messages
                .iter()
                .map(|message| style(message).red().to_string())
                .collect::<Vec<_>>()
                .join("\n")
        }
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Everything the login flow needs, after flags and prompts are merged.
struct LoginInput {
    provider: String,
    api_key: String,
    endpoint: String,
    model: String,
    model_deployment: String,
    api_version: String,
}

fn collect_input(args: LoginArgs) -> Result<LoginInput> {
    let provider = match args.provider {
        Some(value) => value,
        None => prompt::read_input("Enter provider name (azure, openai): ")
            .context("Failed to read provider")?,
    };

    let api_key = match args.api_key {
        Some(value) => value,
        None => prompt::read_secret("Enter the API key: ").context("Failed to read API key")?,
    };

    let endpoint = match args.endpoint {
        Some(value) => value,
        None => {
            prompt::read_input("Enter the API endpoint: ").context("Failed to read endpoint")?
        }
    };

    let mut model = args.model.unwrap_or_default();
    let mut model_deployment = args.model_deployment.unwrap_or_default();
    let mut api_version = args.api_version.unwrap_or_default();

    if provider == PROVIDER_AZURE {
        if model_deployment.is_empty() {
            model_deployment = prompt::read_input("Enter the Azure model deployment: ")
                .context("Failed to read model deployment")?;
        }
        if api_version.is_empty() {
            api_version = DEFAULT_API_VERSION.to_string();
        }
    }

    if provider == PROVIDER_OPENAI {
        if model.is_empty() {
            model = prompt::read_input("Enter the model name: ").context("Failed to read model")?;
        }
        if api_version.is_empty() {
            api_version = prompt::read_input("Enter the API version: ")
                .context("Failed to read API version")?;
        }
    }

    Ok(LoginInput {
        provider,
        api_key,
        endpoint,
        model,
        model_deployment,
        api_version,
    })
}

pub async fn execute(args: LoginArgs, json_mode: bool) -> Result<()> {
    let input = collect_input(args)?;

    if paths::is_wsl() {
        warn!("running under WSL; platform keyring access may be unreliable");
    }

    let mut config = Config::new(NewConfigParams {
        provider: input.provider,
        endpoint: input.endpoint,
        api_version: input.api_version,
        model_deployment: input.model_deployment,
        model: input.model,
    });
    config.set_api_key(input.api_key);

    let provider = ConfigProvider::default_provider();
    match provider.save(&mut config) {
        Ok(()) => {
            let output_data = LoginOutput {
                success: true,
                messages: vec![],
            };
            output(&output_data, json_mode);
            Ok(())
        }
        // Rule violations are recoverable: report them and exit cleanly so
        // the user can re-run login with corrected values.
        Err(ConfigError::Validation(err)) => {
            let output_data = LoginOutput {
                success: false,
                messages: err.messages,
            };
            output(&output_data, json_mode);
            Ok(())
        }
        Err(err) => Err(err).context("Failed to save configuration"),
    }
}
