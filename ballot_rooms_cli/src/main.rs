use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod snapshot;


#[derive(Parser)]
#[command(name = "ballot-rooms", about = "Check and save room assignments for a debate round")]
struct Cli {
    #[command(subcommand)]
    command: commands::Command
}

#[tokio::main]
async fn main() -> ExitCode {
    let config = config::read_config();

    let filter = EnvFilter::try_new(&config.logging_config).unwrap_or_else(|e| {
        eprintln!("Warning: Invalid logging config {}: {}", config.logging_config, e);
        EnvFilter::new("info")
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command.run(&config).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
