//! User-assigned managed identity API operations

use log::debug;

use super::models::ManagedIdentity;
use crate::azure::traits::{ArmListResponse, DeleteOutcome};
use crate::azure::ArmClient;
use crate::config::arm;
use crate::error::Result;

impl ArmClient {
    /// URL listing the user-assigned identities of a resource group
    fn identities_url(&self, resource_group: &str) -> String {
        format!(
            "{}/{}?api-version={}",
            self.resource_group_url(resource_group),
            arm::USER_ASSIGNED_IDENTITIES,
            arm::MANAGED_IDENTITY_API_VERSION
        )
    }

    /// Fetch one page of user-assigned identities
    ///
    /// The first page is addressed by resource group; later pages follow the
    /// `nextLink` returned by the previous page verbatim.
    pub async fn get_identities_page(
        &self,
        resource_group: &str,
        next_link: Option<&str>,
    ) -> Result<ArmListResponse<ManagedIdentity>> {
        let url = match next_link {
            Some(link) => link.to_string(),
            None => self.identities_url(resource_group),
        };

        debug!("Fetching managed identities page from: {}", url);

        let response = self.get(&url).send().await?;
        let page: ArmListResponse<ManagedIdentity> = Self::parse_api_response(
            response,
            &format!(
                "Failed to list managed identities in resource group '{}'",
                resource_group
            ),
        )
        .await?;

        debug!(
            "Page returned {} identities (more: {})",
            page.value.len(),
            page.next_link().is_some()
        );
        Ok(page)
    }

    /// Delete a user-assigned identity by name
    pub async fn delete_user_assigned_identity(
        &self,
        resource_group: &str,
        name: &str,
    ) -> Result<DeleteOutcome> {
        let url = format!(
            "{}/{}/{}?api-version={}",
            self.resource_group_url(resource_group),
            arm::USER_ASSIGNED_IDENTITIES,
            urlencoding::encode(name),
            arm::MANAGED_IDENTITY_API_VERSION
        );
        self.delete_resource(&url, &format!("managed identity '{}'", name))
            .await
    }
}
