//! Common traits for ARM resources and the management API seam

use serde::Deserialize;

use crate::azure::identities::ManagedIdentity;
use crate::error::Result;

/// Common trait for ARM resources addressed by name inside a resource group
pub trait ArmResource {
    /// Get the fully qualified resource ID
    fn id(&self) -> &str;

    /// Get the resource name
    fn name(&self) -> &str;
}

/// Generic ARM list response (`value` plus an optional continuation link)
#[derive(Deserialize, Debug)]
pub struct ArmListResponse<T> {
    #[serde(default = "Vec::new")]
    pub value: Vec<T>,
    #[serde(rename = "nextLink", default)]
    pub next_link: Option<String>,
}

impl<T> ArmListResponse<T> {
    /// Continuation link, ignoring empty strings some endpoints return
    pub fn next_link(&self) -> Option<&str> {
        self.next_link.as_deref().filter(|link| !link.is_empty())
    }
}

/// Result of a single delete call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The provider confirmed the resource was removed
    Deleted,
    /// The resource did not exist; counts as success
    AlreadyAbsent,
}

/// Handle for polling a long-running operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollHandle {
    /// `Azure-AsyncOperation` status monitor URL (JSON body with a `status` field)
    AsyncOperation(String),
    /// `Location` URL (202 while running, 200/204 once done)
    Location(String),
}

impl PollHandle {
    /// URL to poll
    pub fn url(&self) -> &str {
        match self {
            PollHandle::AsyncOperation(url) | PollHandle::Location(url) => url,
        }
    }
}

/// Status reported by one poll of a long-running operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollStatus {
    InProgress,
    Succeeded,
    /// Terminal failure reported by the provider
    Failed(String),
}

/// Response to a begin-delete call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BeginDelete {
    /// The operation completed synchronously
    Done(DeleteOutcome),
    /// The operation was accepted and must be polled
    Pending(PollHandle),
}

/// Management operations the teardown needs from Azure Resource Manager
///
/// Implemented by [`ArmClient`](crate::azure::ArmClient) over HTTP and by
/// in-memory fakes in tests.
#[allow(async_fn_in_trait)]
pub trait ManagementApi {
    /// Fetch one page of user-assigned identities in a resource group.
    ///
    /// `next_link` is `None` for the first page.
    async fn list_identities_page(
        &self,
        resource_group: &str,
        next_link: Option<&str>,
    ) -> Result<ArmListResponse<ManagedIdentity>>;

    /// Delete a user-assigned identity by name
    async fn delete_identity(&self, resource_group: &str, name: &str) -> Result<DeleteOutcome>;

    /// Delete a storage account by name
    async fn delete_storage_account(
        &self,
        resource_group: &str,
        name: &str,
    ) -> Result<DeleteOutcome>;

    /// Start deleting a resource group
    async fn begin_delete_resource_group(&self, name: &str) -> Result<BeginDelete>;

    /// Poll a long-running operation once
    async fn poll_operation(&self, handle: &PollHandle) -> Result<PollStatus>;
}
