//! azwictl - Tear down Azure workload identity federation resources
//!
//! Removes what a provisioning run created for an OIDC issuer: the
//! user-assigned managed identities tagged as owned by the run, the storage
//! account hosting the issuer documents, or the whole OIDC resource group.
//!
//! # Example
//!
//! ```bash
//! # Delete owned managed identities, then the storage account
//! azwictl delete --name cluster1 --region eastus --subscription-id <SUB>
//!
//! # Delete the whole OIDC resource group
//! azwictl delete --name cluster1 --region eastus --subscription-id <SUB> \
//!     --delete-oidc-resource-group
//!
//! # Show what would be deleted
//! azwictl delete --name cluster1 --region eastus --subscription-id <SUB> --dry-run
//! ```

pub mod azure;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod ui;

pub use azure::{
    delete_resources, run_delete_command, ArmClient, CredentialResolver, DeleteOptions,
    DeletePlan, DeletionReport, ManagementApi, Waiter,
};
pub use cli::{Cli, Command, DeleteArgs, OutputFormat};
pub use error::{ArmError, Result};
