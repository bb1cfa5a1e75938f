//! User-assigned managed identities - list, discover and delete

mod api;
mod discovery;
mod models;

pub use discovery::{list_owned_managed_identities, IdentityPager};
pub use models::{ManagedIdentity, ManagedIdentityProperties};
