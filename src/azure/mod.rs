//! Azure Resource Manager module
//!
//! This module provides the management API client and the teardown of
//! resources created for workload identity federation.

mod client;
mod credentials;
pub mod delete;
pub mod identities;
pub mod naming;
mod resource_groups;
mod storage_accounts;
pub mod tags;
#[cfg(test)]
pub(crate) mod testing;
pub mod traits;

pub use client::ArmClient;
pub use credentials::CredentialResolver;
pub use delete::{
    delete_resources, run_delete_command, ActionOutcome, DeleteOptions, DeletePlan, DeleteTarget,
    DeletionAction, DeletionReport, ResourceKind, Waiter,
};
pub use identities::{list_owned_managed_identities, IdentityPager, ManagedIdentity};
pub use traits::{
    ArmListResponse, ArmResource, BeginDelete, DeleteOutcome, ManagementApi, PollHandle,
    PollStatus,
};
