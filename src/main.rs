//! azwictl - Main entry point

use std::process::ExitCode;

use clap::Parser;
use log::debug;

use azwictl::{run_delete_command, Cli, Command};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    debug!("Starting azwictl v{}", env!("CARGO_PKG_VERSION"));

    let result = match &cli.command {
        Command::Delete(args) => run_delete_command(&cli, args).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
