//! Record of what a deletion run did

use serde::Serialize;

use crate::azure::traits::DeleteOutcome;

/// Kind of resource acted on
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ResourceKind {
    ResourceGroup,
    ManagedIdentity,
    StorageAccount,
}

/// What happened to a resource
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ActionOutcome {
    Deleted,
    AlreadyAbsent,
    /// Dry run: the delete would have been issued
    Planned,
}

impl From<DeleteOutcome> for ActionOutcome {
    fn from(outcome: DeleteOutcome) -> Self {
        match outcome {
            DeleteOutcome::Deleted => ActionOutcome::Deleted,
            DeleteOutcome::AlreadyAbsent => ActionOutcome::AlreadyAbsent,
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceKind::ResourceGroup => write!(f, "resource group"),
            ResourceKind::ManagedIdentity => write!(f, "managed identity"),
            ResourceKind::StorageAccount => write!(f, "storage account"),
        }
    }
}

impl std::fmt::Display for ActionOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActionOutcome::Deleted => write!(f, "deleted"),
            ActionOutcome::AlreadyAbsent => write!(f, "already absent"),
            ActionOutcome::Planned => write!(f, "would delete"),
        }
    }
}

/// One resource acted on
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct DeletionAction {
    pub kind: ResourceKind,
    pub name: String,
    pub outcome: ActionOutcome,
}

/// Ordered list of actions taken by a run
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct DeletionReport {
    pub dry_run: bool,
    pub resource_group: String,
    pub actions: Vec<DeletionAction>,
}

impl DeletionReport {
    pub fn new(resource_group: &str, dry_run: bool) -> Self {
        Self {
            dry_run,
            resource_group: resource_group.to_string(),
            actions: Vec::new(),
        }
    }

    pub fn record(&mut self, kind: ResourceKind, name: &str, outcome: ActionOutcome) {
        self.actions.push(DeletionAction {
            kind,
            name: name.to_string(),
            outcome,
        });
    }

    /// Names of actions of a given kind, in order
    pub fn names(&self, kind: ResourceKind) -> Vec<&str> {
        self.actions
            .iter()
            .filter(|a| a.kind == kind)
            .map(|a| a.name.as_str())
            .collect()
    }
}
