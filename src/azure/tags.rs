//! Ownership tag convention
//!
//! Resources created by a provisioning run carry the tag
//! `openshift.io_cloud-credential-operator_<name>: owned`. The tag is the
//! only record of ownership; nothing is persisted locally.

use std::collections::HashMap;

use crate::config::tags;

/// Tag key marking resources owned by the run named `name`
pub fn owned_tag_key(name: &str) -> String {
    format!("{}_{}", tags::OWNED_TAG_KEY_PREFIX, name)
}

/// True iff `tags` maps `owned_tag_key` to exactly `"owned"`
pub fn is_owned(tags: &HashMap<String, String>, owned_tag_key: &str) -> bool {
    tags.get(owned_tag_key)
        .is_some_and(|value| value == tags::OWNED_TAG_VALUE)
}
