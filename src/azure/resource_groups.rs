//! Resource group deletion (long-running operation)

use log::debug;
use serde::Deserialize;

use crate::azure::client::ArmErrorDetail;
use crate::azure::traits::{BeginDelete, DeleteOutcome, PollHandle, PollStatus};
use crate::azure::ArmClient;
use crate::config::arm;
use crate::error::{ArmError, Result};

/// Body returned by an `Azure-AsyncOperation` status monitor
#[derive(Deserialize, Debug)]
struct AsyncOperationStatus {
    status: String,
    error: Option<ArmErrorDetail>,
}

impl AsyncOperationStatus {
    fn into_poll_status(self) -> PollStatus {
        match self.status.as_str() {
            "Succeeded" => PollStatus::Succeeded,
            "Failed" | "Canceled" => {
                let detail = self
                    .error
                    .map(|e| e.summary())
                    .unwrap_or_else(|| "no error details".to_string());
                PollStatus::Failed(format!("operation {} ({})", self.status, detail))
            }
            _ => PollStatus::InProgress,
        }
    }
}

/// Read a header as an owned, non-empty string
fn header_value(response: &reqwest::Response, name: &str) -> Option<String> {
    response
        .headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

impl ArmClient {
    /// Start deleting a resource group
    ///
    /// Returns a poll handle when ARM accepts the request asynchronously.
    pub async fn begin_delete_group(&self, name: &str) -> Result<BeginDelete> {
        let url = format!(
            "{}?api-version={}",
            self.resource_group_url(name),
            arm::RESOURCE_GROUP_API_VERSION
        );

        debug!("Deleting resource group {}: {}", name, url);

        let response = self.delete(&url).send().await?;

        match response.status().as_u16() {
            200 | 204 => Ok(BeginDelete::Done(DeleteOutcome::Deleted)),
            404 => {
                debug!("Resource group {} does not exist", name);
                Ok(BeginDelete::Done(DeleteOutcome::AlreadyAbsent))
            }
            202 => {
                let handle = header_value(&response, "Azure-AsyncOperation")
                    .map(PollHandle::AsyncOperation)
                    .or_else(|| header_value(&response, "Location").map(PollHandle::Location))
                    .ok_or_else(|| ArmError::Api {
                        status: 202,
                        message: format!(
                            "Deletion of resource group '{}' was accepted without a status URL",
                            name
                        ),
                    })?;
                debug!("Resource group deletion accepted, polling {}", handle.url());
                Ok(BeginDelete::Pending(handle))
            }
            _ => Err(Self::api_error(
                response,
                &format!("Failed to delete resource group '{}'", name),
            )
            .await),
        }
    }

    /// Poll a long-running operation once
    pub async fn get_operation_status(&self, handle: &PollHandle) -> Result<PollStatus> {
        debug!("Polling operation: {}", handle.url());

        let response = self.get(handle.url()).send().await?;
        let status = response.status().as_u16();

        match handle {
            PollHandle::AsyncOperation(_) => {
                let body: AsyncOperationStatus =
                    Self::parse_api_response(response, "Failed to poll operation status").await?;
                Ok(body.into_poll_status())
            }
            PollHandle::Location(_) => match status {
                202 => Ok(PollStatus::InProgress),
                200 | 204 => Ok(PollStatus::Succeeded),
                _ => {
                    let err = Self::api_error(response, "Operation failed").await;
                    Ok(PollStatus::Failed(err.to_string()))
                }
            },
        }
    }
}
