//! Storage account deletion

use crate::azure::traits::DeleteOutcome;
use crate::azure::ArmClient;
use crate::config::arm;
use crate::error::Result;

impl ArmClient {
    /// Delete a storage account by name
    pub async fn delete_storage_account_by_name(
        &self,
        resource_group: &str,
        name: &str,
    ) -> Result<DeleteOutcome> {
        let url = format!(
            "{}/{}/{}?api-version={}",
            self.resource_group_url(resource_group),
            arm::STORAGE_ACCOUNTS,
            urlencoding::encode(name),
            arm::STORAGE_API_VERSION
        );
        self.delete_resource(&url, &format!("storage account '{}'", name))
            .await
    }
}
