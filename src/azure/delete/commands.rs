//! Delete command handler
//!
//! Either removes the whole OIDC resource group, or removes the managed
//! identities tagged as owned by the run and then the storage account.

use std::time::Duration;

use log::{debug, info};

use super::options::{DeleteOptions, DeletePlan, DeleteTarget};
use super::report::{ActionOutcome, DeletionReport, ResourceKind};
use super::waiter::Waiter;
use crate::azure::identities::list_owned_managed_identities;
use crate::azure::traits::{ArmResource, BeginDelete, ManagementApi};
use crate::azure::{ArmClient, CredentialResolver};
use crate::cli::DeleteArgs;
use crate::error::{ArmError, Result};
use crate::output::output_report;
use crate::ui::{create_spinner, finish_spinner};
use crate::Cli;

/// Run the delete command
///
/// The summary is printed even when a step fails, so resources removed
/// before the failure are still reported.
pub async fn run_delete_command(cli: &Cli, args: &DeleteArgs) -> Result<()> {
    let options = DeleteOptions::from(args);
    let plan = options.resolve()?;

    let token = CredentialResolver::new(&args.endpoint)
        .resolve(args.access_token.as_deref())
        .await?;
    let client = ArmClient::new(token, plan.subscription_id.clone(), &args.endpoint)?;

    let waiter = Waiter::new(
        Duration::from_secs(args.poll_interval),
        args.timeout.map(Duration::from_secs),
    );

    let mut report = DeletionReport::new(&plan.resource_group, plan.dry_run);
    let result = delete_resources(&client, &plan, &waiter, cli.batch, &mut report).await;

    if result.is_ok() || !report.actions.is_empty() {
        output_report(&report, &args.output)?;
    }
    result
}

/// Execute a resolved plan against the management API
///
/// Completed actions are recorded in `report` as they happen; on error the
/// report holds everything done before the failing step.
pub async fn delete_resources<A: ManagementApi>(
    api: &A,
    plan: &DeletePlan,
    waiter: &Waiter,
    quiet: bool,
    report: &mut DeletionReport,
) -> Result<()> {
    if plan.dry_run {
        info!("Dry run: no resources will be deleted");
    }

    match plan.target {
        // Everything provisioned lives inside the OIDC resource group, so
        // deleting the group leaves nothing else to do.
        DeleteTarget::ResourceGroup => {
            delete_resource_group(api, plan, waiter, quiet, report).await
        }
        DeleteTarget::TrackedResources => {
            delete_managed_identities(api, plan, report).await?;
            delete_storage_account(api, plan, report).await
        }
    }
}

/// Delete owned managed identities, stopping at the first failure
async fn delete_managed_identities<A: ManagementApi>(
    api: &A,
    plan: &DeletePlan,
    report: &mut DeletionReport,
) -> Result<()> {
    let identities =
        list_owned_managed_identities(api, &plan.resource_group, &plan.owned_tag_key).await?;

    debug!(
        "Found {} owned managed identities in {}",
        identities.len(),
        plan.resource_group
    );

    for identity in &identities {
        if plan.dry_run {
            info!(
                "Would delete {} {}",
                identity.resource_type,
                identity.describe()
            );
            report.record(
                ResourceKind::ManagedIdentity,
                identity.name(),
                ActionOutcome::Planned,
            );
            continue;
        }

        let outcome = api
            .delete_identity(&plan.resource_group, identity.name())
            .await
            .map_err(|e| {
                ArmError::deletion(&format!("managed identity {}", identity.name()), e)
            })?;

        let outcome = ActionOutcome::from(outcome);
        match outcome {
            ActionOutcome::AlreadyAbsent => info!(
                "{} {} already deleted",
                identity.resource_type,
                identity.describe()
            ),
            _ => info!("Deleted {} {}", identity.resource_type, identity.describe()),
        }
        report.record(ResourceKind::ManagedIdentity, identity.name(), outcome);
    }

    Ok(())
}

/// Delete the storage account hosting the OIDC documents
async fn delete_storage_account<A: ManagementApi>(
    api: &A,
    plan: &DeletePlan,
    report: &mut DeletionReport,
) -> Result<()> {
    let name = &plan.storage_account;

    if plan.dry_run {
        info!("Would delete storage account {}", name);
        report.record(ResourceKind::StorageAccount, name, ActionOutcome::Planned);
        return Ok(());
    }

    let outcome = api
        .delete_storage_account(&plan.resource_group, name)
        .await
        .map_err(|e| ArmError::deletion(&format!("storage account {}", name), e))?;

    let outcome = ActionOutcome::from(outcome);
    match outcome {
        ActionOutcome::AlreadyAbsent => info!("Storage account {} already deleted", name),
        _ => info!("Deleted storage account {}", name),
    }
    report.record(ResourceKind::StorageAccount, name, outcome);
    Ok(())
}

/// Delete the OIDC resource group and wait for the operation to finish
async fn delete_resource_group<A: ManagementApi>(
    api: &A,
    plan: &DeletePlan,
    waiter: &Waiter,
    quiet: bool,
    report: &mut DeletionReport,
) -> Result<()> {
    let name = &plan.resource_group;

    if plan.dry_run {
        info!("Would delete resource group {}", name);
        report.record(ResourceKind::ResourceGroup, name, ActionOutcome::Planned);
        return Ok(());
    }

    let begin = api
        .begin_delete_resource_group(name)
        .await
        .map_err(|e| ArmError::deletion(&format!("resource group {}", name), e))?;

    let outcome = match begin {
        BeginDelete::Done(outcome) => ActionOutcome::from(outcome),
        BeginDelete::Pending(handle) => {
            let spinner = create_spinner(&format!("Deleting resource group {}...", name), quiet);
            let result = waiter.wait(api, &handle, name).await;
            finish_spinner(spinner);
            result?;
            ActionOutcome::Deleted
        }
    };

    match outcome {
        ActionOutcome::AlreadyAbsent => info!("Resource group {} already deleted", name),
        _ => info!("Deleted resource group {}", name),
    }
    report.record(ResourceKind::ResourceGroup, name, outcome);
    Ok(())
}
