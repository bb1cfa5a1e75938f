//! Delete command configuration and pre-flight resolution

use log::debug;

use crate::azure::naming::{
    derive_oidc_resource_group_name, derive_storage_account_name, validate_storage_account_name,
};
use crate::azure::tags::owned_tag_key;
use crate::cli::DeleteArgs;
use crate::error::{ArmError, Result};

/// Configuration for one delete invocation, built once from parsed input
#[derive(Debug, Clone, Default)]
pub struct DeleteOptions {
    pub name: String,
    pub region: String,
    pub subscription_id: String,
    pub oidc_resource_group_name: Option<String>,
    pub storage_account_name: Option<String>,
    pub delete_oidc_resource_group: bool,
    pub dry_run: bool,
}

/// Which deletion path a plan takes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteTarget {
    /// Delete the whole OIDC resource group
    ResourceGroup,
    /// Delete owned managed identities, then the storage account
    TrackedResources,
}

/// Fully resolved, validated names for a deletion run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletePlan {
    pub name: String,
    pub region: String,
    pub subscription_id: String,
    pub resource_group: String,
    pub storage_account: String,
    pub owned_tag_key: String,
    pub target: DeleteTarget,
    pub dry_run: bool,
}

impl From<&DeleteArgs> for DeleteOptions {
    fn from(args: &DeleteArgs) -> Self {
        Self {
            name: args.name.clone(),
            region: args.region.clone(),
            subscription_id: args.subscription_id.clone(),
            oidc_resource_group_name: args.oidc_resource_group_name.clone(),
            storage_account_name: args.storage_account_name.clone(),
            delete_oidc_resource_group: args.delete_oidc_resource_group,
            dry_run: args.dry_run,
        }
    }
}

/// Reject empty values for required inputs
fn require(value: &str, flag: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ArmError::Configuration(format!("{} must not be empty", flag)));
    }
    Ok(())
}

impl DeleteOptions {
    /// Fill in default names and validate them
    ///
    /// Runs before any remote call so a bad name never reaches the provider.
    pub fn resolve(&self) -> Result<DeletePlan> {
        require(&self.name, "--name")?;
        require(&self.region, "--region")?;
        require(&self.subscription_id, "--subscription-id")?;

        let resource_group =
            derive_oidc_resource_group_name(&self.name, self.oidc_resource_group_name.as_deref());
        let storage_account =
            derive_storage_account_name(&self.name, self.storage_account_name.as_deref());
        validate_storage_account_name(&storage_account)?;

        let target = if self.delete_oidc_resource_group {
            DeleteTarget::ResourceGroup
        } else {
            DeleteTarget::TrackedResources
        };

        debug!(
            "Resolved plan: resource group={}, storage account={}, region={}, target={:?}, dry run={}",
            resource_group, storage_account, self.region, target, self.dry_run
        );

        Ok(DeletePlan {
            name: self.name.clone(),
            region: self.region.clone(),
            subscription_id: self.subscription_id.clone(),
            resource_group,
            storage_account,
            owned_tag_key: owned_tag_key(&self.name),
            target,
            dry_run: self.dry_run,
        })
    }
}
