//! In-memory `ManagementApi` fake that records every call

use std::collections::HashMap;
use std::sync::Mutex;

use crate::azure::identities::ManagedIdentity;
use crate::azure::traits::{
    ArmListResponse, BeginDelete, DeleteOutcome, ManagementApi, PollHandle, PollStatus,
};
use crate::error::{ArmError, Result};

/// A recorded call against the fake
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ListPage(String, Option<String>),
    DeleteIdentity(String, String),
    DeleteStorage(String, String),
    BeginDeleteGroup(String),
    Poll(String),
}

/// How the fake answers a resource group deletion
#[derive(Debug, Clone)]
pub enum GroupBehavior {
    Sync(DeleteOutcome),
    /// Accepted; `in_progress` polls report running, then `result`
    Poll {
        in_progress: usize,
        result: PollStatus,
    },
    BeginFails,
}

/// Build an identity, optionally tagged with `owned_key: owned`
pub fn identity(name: &str, owned_key: Option<&str>) -> ManagedIdentity {
    let tags = owned_key.map(|key| {
        let mut tags = HashMap::new();
        tags.insert(key.to_string(), "owned".to_string());
        tags
    });
    ManagedIdentity {
        id: format!(
            "/subscriptions/sub/resourceGroups/rg/providers/Microsoft.ManagedIdentity/userAssignedIdentities/{}",
            name
        ),
        name: name.to_string(),
        resource_type: "Microsoft.ManagedIdentity/userAssignedIdentities".to_string(),
        tags,
        properties: None,
    }
}

fn server_error(message: &str) -> ArmError {
    ArmError::Api {
        status: 500,
        message: message.to_string(),
    }
}

pub struct FakeArm {
    pages: Vec<Vec<ManagedIdentity>>,
    fail_page: Option<usize>,
    missing_resource_group: bool,
    fail_identity: Option<String>,
    absent_identities: Vec<String>,
    storage_outcome: Option<DeleteOutcome>,
    group: GroupBehavior,
    polls: Mutex<usize>,
    calls: Mutex<Vec<Call>>,
}

impl FakeArm {
    pub fn new() -> Self {
        Self {
            pages: vec![Vec::new()],
            fail_page: None,
            missing_resource_group: false,
            fail_identity: None,
            absent_identities: Vec::new(),
            storage_outcome: Some(DeleteOutcome::Deleted),
            group: GroupBehavior::Sync(DeleteOutcome::Deleted),
            polls: Mutex::new(0),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_pages(mut self, pages: Vec<Vec<ManagedIdentity>>) -> Self {
        self.pages = pages;
        self
    }

    /// Fail the given 1-based page
    pub fn fail_page(mut self, page: usize) -> Self {
        self.fail_page = Some(page);
        self
    }

    pub fn missing_resource_group(mut self) -> Self {
        self.missing_resource_group = true;
        self
    }

    pub fn fail_identity(mut self, name: &str) -> Self {
        self.fail_identity = Some(name.to_string());
        self
    }

    pub fn absent_identity(mut self, name: &str) -> Self {
        self.absent_identities.push(name.to_string());
        self
    }

    /// `None` makes the storage delete fail
    pub fn storage(mut self, outcome: Option<DeleteOutcome>) -> Self {
        self.storage_outcome = outcome;
        self
    }

    pub fn group(mut self, behavior: GroupBehavior) -> Self {
        self.group = behavior;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn list_calls(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, Call::ListPage(..)))
            .count()
    }

    pub fn poll_calls(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, Call::Poll(_)))
            .count()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

impl ManagementApi for FakeArm {
    async fn list_identities_page(
        &self,
        resource_group: &str,
        next_link: Option<&str>,
    ) -> Result<ArmListResponse<ManagedIdentity>> {
        self.record(Call::ListPage(
            resource_group.to_string(),
            next_link.map(str::to_string),
        ));

        if self.missing_resource_group {
            return Err(ArmError::Api {
                status: 404,
                message: "ResourceGroupNotFound".to_string(),
            });
        }

        let index = match next_link {
            None => 0,
            Some(link) => link
                .trim_start_matches("page-")
                .parse::<usize>()
                .unwrap_or(0),
        };
        if self.fail_page == Some(index + 1) {
            return Err(server_error("page fetch failed"));
        }

        let value = self.pages.get(index).cloned().unwrap_or_default();
        let next_link = (index + 1 < self.pages.len()).then(|| format!("page-{}", index + 1));
        Ok(ArmListResponse { value, next_link })
    }

    async fn delete_identity(&self, resource_group: &str, name: &str) -> Result<DeleteOutcome> {
        self.record(Call::DeleteIdentity(
            resource_group.to_string(),
            name.to_string(),
        ));
        if self.fail_identity.as_deref() == Some(name) {
            return Err(server_error("identity delete failed"));
        }
        if self.absent_identities.iter().any(|n| n == name) {
            return Ok(DeleteOutcome::AlreadyAbsent);
        }
        Ok(DeleteOutcome::Deleted)
    }

    async fn delete_storage_account(
        &self,
        resource_group: &str,
        name: &str,
    ) -> Result<DeleteOutcome> {
        self.record(Call::DeleteStorage(
            resource_group.to_string(),
            name.to_string(),
        ));
        self.storage_outcome
            .ok_or_else(|| server_error("storage delete failed"))
    }

    async fn begin_delete_resource_group(&self, name: &str) -> Result<BeginDelete> {
        self.record(Call::BeginDeleteGroup(name.to_string()));
        match &self.group {
            GroupBehavior::Sync(outcome) => Ok(BeginDelete::Done(*outcome)),
            GroupBehavior::Poll { .. } => Ok(BeginDelete::Pending(PollHandle::Location(
                format!("op/{}", name),
            ))),
            GroupBehavior::BeginFails => Err(server_error("begin delete failed")),
        }
    }

    async fn poll_operation(&self, handle: &PollHandle) -> Result<PollStatus> {
        self.record(Call::Poll(handle.url().to_string()));
        let mut polls = self.polls.lock().unwrap();
        *polls += 1;
        match &self.group {
            GroupBehavior::Poll {
                in_progress,
                result,
            } => {
                if *polls <= *in_progress {
                    Ok(PollStatus::InProgress)
                } else {
                    Ok(result.clone())
                }
            }
            _ => Ok(PollStatus::Succeeded),
        }
    }
}
