//! Delete command arguments

use clap::Parser;

use super::common::OutputFormat;
use crate::config::{arm, defaults};

/// Arguments for 'delete' command
///
/// Deletes the storage account and the user-assigned managed identities
/// within the OIDC resource group. The OIDC resource group itself is only
/// deleted when --delete-oidc-resource-group is given.
#[derive(Parser, Debug)]
pub struct DeleteArgs {
    /// User-defined name for all previously created Azure resources
    #[arg(long)]
    pub name: String,

    /// Azure region in which to delete user-assigned managed identities
    #[arg(long)]
    pub region: String,

    /// Azure subscription ID containing the resources
    #[arg(long = "subscription-id")]
    pub subscription_id: String,

    /// Delete the OIDC resource group instead of individual resources
    ///
    /// The group is identified by --oidc-resource-group-name if given,
    /// otherwise its name is derived from --name.
    #[arg(long, default_value_t = false)]
    pub delete_oidc_resource_group: bool,

    /// Name of the storage account to delete (default: --name)
    ///
    /// Must be 3 to 24 characters, numbers and lowercase letters only.
    #[arg(long)]
    pub storage_account_name: Option<String>,

    /// Resource group holding the identities and storage account (default: <name>-oidc)
    #[arg(long)]
    pub oidc_resource_group_name: Option<String>,

    /// Skip deleting objects and display actions that would have been taken
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    /// Seconds between polls while the resource group is being deleted
    #[arg(long, default_value_t = defaults::POLL_INTERVAL_SECS, value_parser = clap::value_parser!(u64).range(1..))]
    pub poll_interval: u64,

    /// Give up waiting for resource group deletion after this many seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// ARM access token (overrides AZURE_ACCESS_TOKEN and the Azure credential chain)
    #[arg(long)]
    pub access_token: Option<String>,

    /// Azure Resource Manager endpoint
    #[arg(long, env = "AZURE_RESOURCE_MANAGER_ENDPOINT", default_value = arm::DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Output format for the summary
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}
