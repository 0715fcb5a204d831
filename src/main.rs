//! Codechat CLI entry point.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use codechat::cli::{Cli, Commands};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Login(args) => codechat::cli::commands::login::execute(args, cli.json).await,
        Commands::Logout(args) => codechat::cli::commands::logout::execute(args, cli.json).await,
        Commands::Status => codechat::cli::commands::status::execute(cli.json).await,
    };

    if let Err(err) = result {
        codechat::cli::handle_error(&err, cli.json);
    }
}
