//! Default resource names derived from the logical name

use log::info;

use crate::config::naming;
use crate::error::{ArmError, Result};

/// OIDC resource group name: the override when given, else `<name>-oidc`
pub fn derive_oidc_resource_group_name(name: &str, explicit: Option<&str>) -> String {
    match explicit.filter(|s| !s.is_empty()) {
        Some(rg) => rg.to_string(),
        None => {
            let rg = format!("{}{}", name, naming::OIDC_RESOURCE_GROUP_SUFFIX);
            info!(
                "No --oidc-resource-group-name provided, defaulting OIDC resource group name to {}",
                rg
            );
            rg
        }
    }
}

/// Storage account name: the override when given, else the logical name itself
pub fn derive_storage_account_name(name: &str, explicit: Option<&str>) -> String {
    match explicit.filter(|s| !s.is_empty()) {
        Some(account) => account.to_string(),
        None => {
            info!(
                "No --storage-account-name provided, defaulting storage account name to {}",
                name
            );
            name.to_string()
        }
    }
}

/// Check a storage account name against Azure naming rules
///
/// Names must be 3 to 24 characters long and contain only lowercase
/// letters and digits.
pub fn validate_storage_account_name(candidate: &str) -> Result<()> {
    let len = candidate.chars().count();
    if !(naming::STORAGE_ACCOUNT_MIN_LEN..=naming::STORAGE_ACCOUNT_MAX_LEN).contains(&len) {
        return Err(ArmError::Configuration(format!(
            "storage account name '{}' must be between {} and {} characters in length",
            candidate,
            naming::STORAGE_ACCOUNT_MIN_LEN,
            naming::STORAGE_ACCOUNT_MAX_LEN
        )));
    }
    if !candidate
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
    {
        return Err(ArmError::Configuration(format!(
            "storage account name '{}' may contain numbers and lowercase letters only",
            candidate
        )));
    }
    Ok(())
}
