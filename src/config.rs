/// Configuration constants for the Azure Resource Manager API
pub mod arm {
    /// Default ARM endpoint (public cloud)
    pub const DEFAULT_ENDPOINT: &str = "https://management.azure.com";

    /// API version for Microsoft.ManagedIdentity
    pub const MANAGED_IDENTITY_API_VERSION: &str = "2023-01-31";

    /// API version for Microsoft.Resources resource groups
    pub const RESOURCE_GROUP_API_VERSION: &str = "2021-04-01";

    /// API version for Microsoft.Storage
    pub const STORAGE_API_VERSION: &str = "2023-01-01";

    /// Provider path for user-assigned managed identities
    pub const USER_ASSIGNED_IDENTITIES: &str =
        "providers/Microsoft.ManagedIdentity/userAssignedIdentities";

    /// Provider path for storage accounts
    pub const STORAGE_ACCOUNTS: &str = "providers/Microsoft.Storage/storageAccounts";
}

/// Naming conventions for resources created by the provisioning run
pub mod naming {
    /// Suffix appended to the logical name to form the OIDC resource group name
    pub const OIDC_RESOURCE_GROUP_SUFFIX: &str = "-oidc";

    /// Minimum storage account name length
    pub const STORAGE_ACCOUNT_MIN_LEN: usize = 3;

    /// Maximum storage account name length
    pub const STORAGE_ACCOUNT_MAX_LEN: usize = 24;
}

/// Ownership tag convention shared with the provisioning run
pub mod tags {
    /// Prefix of the owned tag key, joined to the logical name with `_`
    pub const OWNED_TAG_KEY_PREFIX: &str = "openshift.io_cloud-credential-operator";

    /// Value marking a resource as owned
    pub const OWNED_TAG_VALUE: &str = "owned";
}

/// Configuration constants for credentials
pub mod credentials {
    /// Environment variable holding a pre-fetched ARM access token
    pub const TOKEN_ENV_VAR: &str = "AZURE_ACCESS_TOKEN";

    /// Appended to the ARM endpoint to form the token scope
    pub const TOKEN_SCOPE_SUFFIX: &str = "/.default";
}

/// Default values for CLI
pub mod defaults {
    /// Default log level
    pub const LOG_LEVEL: &str = "info";

    /// Default polling interval for long-running operations, in seconds
    pub const POLL_INTERVAL_SECS: u64 = 10;
}
