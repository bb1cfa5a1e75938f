//! User-assigned managed identity data models

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::azure::tags::is_owned;
use crate::azure::traits::ArmResource;

/// User-assigned managed identity from the ARM API
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ManagedIdentity {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub resource_type: String,
    #[serde(default)]
    pub tags: Option<HashMap<String, String>>,
    pub properties: Option<ManagedIdentityProperties>,
}

/// Identity properties; only the client ID is reported back to the operator
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ManagedIdentityProperties {
    #[serde(rename = "clientId")]
    pub client_id: Option<String>,
}

impl ManagedIdentity {
    /// Check whether this identity carries the owned tag
    pub fn is_owned_by(&self, owned_tag_key: &str) -> bool {
        self.tags
            .as_ref()
            .is_some_and(|tags| is_owned(tags, owned_tag_key))
    }

    /// Client ID, if reported
    pub fn client_id(&self) -> Option<&str> {
        self.properties
            .as_ref()
            .and_then(|p| p.client_id.as_deref())
    }

    /// Identity ID plus client ID when known, for log lines
    pub fn describe(&self) -> String {
        match self.client_id() {
            Some(client_id) => format!("{} (client ID {})", self.id, client_id),
            None => self.id.clone(),
        }
    }
}

impl ArmResource for ManagedIdentity {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}
