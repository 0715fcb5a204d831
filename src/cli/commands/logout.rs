//! Implementation of the `codechat logout` command.

use anyhow::{Context, Result};
use clap::Args;
use console::style;

use crate::cli::output::{output, CommandOutput};
use crate::domain::ports::{CredentialError, SecretStore};
use crate::infrastructure::config::paths;
use crate::infrastructure::credentials::KeyringStore;

#[derive(Args, Debug)]
pub struct LogoutArgs {
    /// Also remove the configuration file
    #[arg(long)]
    pub purge: bool,
}

#[derive(Debug, serde::Serialize)]
pub struct LogoutOutput {
    pub credential_removed: bool,
    pub config_removed: bool,
}

impl CommandOutput for LogoutOutput {
    fn to_human(&self) -> String {
        let mut lines = vec![if self.credential_removed {
            style("stored credential removed").green().to_string()
        } else {
            "no stored credential to remove".to_string()
        }];
        if self.config_removed {
            lines.push(style("configuration file removed").green().to_string());
        }
        lines.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub async fn execute(args: LogoutArgs, json_mode: bool) -> Result<()> {
    let store = KeyringStore::new();
    let credential_removed = match store.delete_secret() {
        Ok(()) => true,
        Err(CredentialError::NotFound) => false,
        Err(err) => return Err(err).context("Failed to remove stored credential"),
    };

    let mut config_removed = false;
    if args.purge {
        let path = paths::default_config_path().context("Failed to resolve config path")?;
        if path.exists() {
            std::fs::remove_file(&path)
                .with_context(|| format!("Failed to remove {}", path.display()))?;
            config_removed = true;
        }
    }

    let output_data = LogoutOutput {
        credential_removed,
        config_removed,
    };
    output(&output_data, json_mode);
    Ok(())
}
