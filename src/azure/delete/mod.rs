//! Delete command - tear down the OIDC resource group or owned resources

mod commands;
mod options;
mod report;
mod waiter;

pub use commands::{delete_resources, run_delete_command};
pub use options::{DeleteOptions, DeletePlan, DeleteTarget};
pub use report::{ActionOutcome, DeletionAction, DeletionReport, ResourceKind};
pub use waiter::Waiter;
