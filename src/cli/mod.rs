//! CLI argument parsing

mod common;
mod delete;

use clap::{Parser, Subcommand};

use crate::config::defaults;

pub use common::OutputFormat;
pub use delete::DeleteArgs;

/// Workload identity federation teardown CLI
#[derive(Parser, Debug)]
#[command(name = "azwictl")]
#[command(version)]
#[command(about = "Tear down Azure OIDC issuer resources and managed identities", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Batch mode: no spinners or interactive output
    #[arg(long, global = true, default_value_t = false)]
    pub batch: bool,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Delete OIDC issuer and managed identities
    Delete(DeleteArgs),
}
