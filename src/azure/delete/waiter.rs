//! Polling loop for long-running delete operations

use std::time::Duration;

use log::debug;
use tokio::time::{sleep, Instant};

use crate::azure::traits::{ManagementApi, PollHandle, PollStatus};
use crate::config::defaults;
use crate::error::{ArmError, Result};

/// Polls a long-running operation until it reaches a terminal state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Waiter {
    interval: Duration,
    deadline: Option<Duration>,
}

impl Default for Waiter {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(defaults::POLL_INTERVAL_SECS),
            deadline: None,
        }
    }
}

impl Waiter {
    /// Create a waiter; `deadline` of `None` waits until the provider finishes
    pub fn new(interval: Duration, deadline: Option<Duration>) -> Self {
        Self { interval, deadline }
    }

    /// Poll `handle` until the resource group deletion completes
    ///
    /// Provider failures and transport errors are both reported as
    /// [`ArmError::Poll`] naming the resource group.
    pub async fn wait<A: ManagementApi>(
        &self,
        api: &A,
        handle: &PollHandle,
        resource_group: &str,
    ) -> Result<()> {
        let started = Instant::now();
        let mut attempt = 0u32;

        loop {
            attempt += 1;
            let status = api
                .poll_operation(handle)
                .await
                .map_err(|e| ArmError::Poll {
                    resource_group: resource_group.to_string(),
                    message: e.to_string(),
                })?;

            match status {
                PollStatus::Succeeded => {
                    debug!(
                        "Deletion of resource group {} completed after {} poll(s)",
                        resource_group, attempt
                    );
                    return Ok(());
                }
                PollStatus::Failed(message) => {
                    return Err(ArmError::Poll {
                        resource_group: resource_group.to_string(),
                        message,
                    });
                }
                PollStatus::InProgress => {
                    debug!(
                        "Resource group {} still deleting (poll {})",
                        resource_group, attempt
                    );
                }
            }

            if let Some(deadline) = self.deadline {
                if started.elapsed() + self.interval > deadline {
                    return Err(ArmError::Poll {
                        resource_group: resource_group.to_string(),
                        message: format!("operation did not complete within {:?}", deadline),
                    });
                }
            }

            sleep(self.interval).await;
        }
    }
}
