//! Command-line interface layer.
//!
//! Thin collaborators over the configuration core: flag parsing,
//! interactive prompting, and terminal rendering. All real invariants
//! live in the domain and infrastructure layers.

pub mod commands;
pub mod output;
pub mod prompt;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "codechat",
    version,
    about = "Chat with your codebase through an AI completion provider"
)]
pub struct Cli {
    /// Emit machine-readable JSON output
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Authenticate and persist a provider profile
    ///
    /// Prompts for any value not given as a flag. The API key is stored
    /// in the platform keyring and never written to the file system.
    Login(commands::login::LoginArgs),

    /// Remove the stored credential
    Logout(commands::logout::LogoutArgs),

    /// Show the persisted configuration
    Status,
}

/// Render a fatal error and terminate with a non-zero exit code.
pub fn handle_error(err: &anyhow::Error, json_mode: bool) -> ! {
    if json_mode {
        eprintln!(
            "{}",
            serde_json::json!({ "success": false, "error": format!("{err:#}") })
        );
    } else {
        eprintln!("{} {err:#}", console::style("error:").red().bold());
    }
    std::process::exit(1);
}
