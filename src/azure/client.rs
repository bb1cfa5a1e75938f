//! ARM HTTP client for management API interactions

use log::debug;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::azure::identities::ManagedIdentity;
use crate::azure::traits::{
    ArmListResponse, BeginDelete, DeleteOutcome, ManagementApi, PollHandle, PollStatus,
};
use crate::error::{ArmError, Result};

/// ARM error envelope: `{"error": {"code": "...", "message": "..."}}`
#[derive(Deserialize, Debug)]
struct ArmErrorResponse {
    error: ArmErrorDetail,
}

#[derive(Deserialize, Debug)]
pub(crate) struct ArmErrorDetail {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
}

impl ArmErrorDetail {
    /// `code: message`, or whichever part is present
    pub(crate) fn summary(&self) -> String {
        match (self.code.is_empty(), self.message.is_empty()) {
            (false, false) => format!("{}: {}", self.code, self.message),
            (false, true) => self.code.clone(),
            (true, false) => self.message.clone(),
            (true, true) => "unknown error".to_string(),
        }
    }
}

/// Azure Resource Manager client scoped to one subscription
pub struct ArmClient {
    client: Client,
    token: String,
    subscription_id: String,
    endpoint: String,
}

impl ArmClient {
    /// Create a new ARM client for a subscription
    ///
    /// Fails with an authentication error when the HTTP client cannot be built.
    pub fn new(token: String, subscription_id: String, endpoint: &str) -> Result<Self> {
        let client = Client::builder()
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(60))
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|e| {
                ArmError::Authentication(format!("Failed to create Azure client: {}", e))
            })?;

        Ok(Self {
            client,
            token,
            subscription_id,
            endpoint: endpoint.trim_end_matches('/').to_string(),
        })
    }

    /// `<endpoint>/subscriptions/<id>`
    pub(crate) fn subscription_url(&self) -> String {
        format!(
            "{}/subscriptions/{}",
            self.endpoint,
            urlencoding::encode(&self.subscription_id)
        )
    }

    /// `<endpoint>/subscriptions/<id>/resourceGroups/<rg>`
    pub(crate) fn resource_group_url(&self, resource_group: &str) -> String {
        format!(
            "{}/resourceGroups/{}",
            self.subscription_url(),
            urlencoding::encode(resource_group)
        )
    }

    /// Add standard headers to a request builder
    fn with_headers(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Accept", "application/json")
    }

    /// Create a GET request builder with standard headers
    pub(crate) fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.get(url))
    }

    /// Create a DELETE request builder with standard headers
    pub(crate) fn delete(&self, url: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.delete(url))
    }

    /// Build an API error from a non-success response, keeping the ARM error code
    pub(crate) async fn api_error(response: reqwest::Response, context: &str) -> ArmError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        let message = match serde_json::from_str::<ArmErrorResponse>(&body) {
            Ok(parsed) => format!("{} ({})", context, parsed.error.summary()),
            Err(_) => context.to_string(),
        };
        ArmError::Api { status, message }
    }

    /// Parse an API response, returning error for non-success status codes
    pub(crate) async fn parse_api_response<T>(
        response: reqwest::Response,
        error_context: &str,
    ) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        if !response.status().is_success() {
            return Err(Self::api_error(response, error_context).await);
        }
        Ok(response.json().await?)
    }

    /// Issue a DELETE against a synchronous-delete resource
    ///
    /// ARM answers 200 when the resource was removed and 204 or 404 when it
    /// did not exist.
    pub(crate) async fn delete_resource(&self, url: &str, label: &str) -> Result<DeleteOutcome> {
        debug!("Deleting {}: {}", label, url);

        let response = self.delete(url).send().await?;

        match response.status().as_u16() {
            200 | 202 => Ok(DeleteOutcome::Deleted),
            204 | 404 => {
                debug!("{} does not exist", label);
                Ok(DeleteOutcome::AlreadyAbsent)
            }
            _ => Err(Self::api_error(response, &format!("Failed to delete {}", label)).await),
        }
    }
}

#[cfg(test)]
impl ArmClient {
    /// Create a test client pointed at a mock server
    pub fn test_client(base_url: &str) -> Self {
        Self::new(
            "test-token".to_string(),
            "00000000-0000-0000-0000-000000000000".to_string(),
            base_url,
        )
        .unwrap()
    }
}

impl ManagementApi for ArmClient {
    async fn list_identities_page(
        &self,
        resource_group: &str,
        next_link: Option<&str>,
    ) -> Result<ArmListResponse<ManagedIdentity>> {
        self.get_identities_page(resource_group, next_link).await
    }

    async fn delete_identity(&self, resource_group: &str, name: &str) -> Result<DeleteOutcome> {
        self.delete_user_assigned_identity(resource_group, name)
            .await
    }

    async fn delete_storage_account(
        &self,
        resource_group: &str,
        name: &str,
    ) -> Result<DeleteOutcome> {
        self.delete_storage_account_by_name(resource_group, name)
            .await
    }

    async fn begin_delete_resource_group(&self, name: &str) -> Result<BeginDelete> {
        self.begin_delete_group(name).await
    }

    async fn poll_operation(&self, handle: &PollHandle) -> Result<PollStatus> {
        self.get_operation_status(handle).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscription_url() {
        let client = ArmClient::new(
            "token".to_string(),
            "sub-123".to_string(),
            "https://management.azure.com",
        )
        .unwrap();
        assert_eq!(
            client.subscription_url(),
            "https://management.azure.com/subscriptions/sub-123"
        );
    }

    #[test]
    fn test_endpoint_trailing_slash_trimmed() {
        let client = ArmClient::new(
            "token".to_string(),
            "sub".to_string(),
            "https://management.usgovcloudapi.net/",
        )
        .unwrap();
        assert_eq!(
            client.resource_group_url("rg1"),
            "https://management.usgovcloudapi.net/subscriptions/sub/resourceGroups/rg1"
        );
    }

    #[test]
    fn test_resource_group_url_is_encoded() {
        let client = ArmClient::test_client("http://localhost");
        let url = client.resource_group_url("my rg");
        assert!(url.ends_with("/resourceGroups/my%20rg"));
    }

    #[test]
    fn test_error_detail_summary() {
        let detail = ArmErrorDetail {
            code: "ResourceGroupNotFound".to_string(),
            message: "Resource group 'x' could not be found.".to_string(),
        };
        assert_eq!(
            detail.summary(),
            "ResourceGroupNotFound: Resource group 'x' could not be found."
        );

        let detail = ArmErrorDetail {
            code: String::new(),
            message: String::new(),
        };
        assert_eq!(detail.summary(), "unknown error");
    }
}
