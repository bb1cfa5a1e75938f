//! ARM access token resolution from multiple sources

use std::sync::Arc;

use azure_core::auth::TokenCredential;
use azure_identity::{DefaultAzureCredential, TokenCredentialOptions};
use log::debug;

use crate::config::credentials;
use crate::error::{ArmError, Result};

/// Token resolution with fallback logic
pub struct CredentialResolver {
    endpoint: String,
    credential: Option<Arc<dyn TokenCredential>>,
}

impl CredentialResolver {
    /// Create a new resolver for the given ARM endpoint
    pub fn new(endpoint: &str) -> Self {
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            credential: None,
        }
    }

    /// Use `credential` instead of the default Azure credential chain
    pub fn with_credential(mut self, credential: Arc<dyn TokenCredential>) -> Self {
        self.credential = Some(credential);
        self
    }

    /// OAuth scope for the management endpoint
    pub fn scope(&self) -> String {
        format!("{}{}", self.endpoint, credentials::TOKEN_SCOPE_SUFFIX)
    }

    /// Resolve token from multiple sources with fallback:
    /// 1. CLI argument (if provided)
    /// 2. AZURE_ACCESS_TOKEN environment variable
    /// 3. Azure credential chain (service principal environment, workload
    ///    identity, managed identity, Azure CLI login)
    pub async fn resolve(&self, cli_token: Option<&str>) -> Result<String> {
        if let Some(token) = cli_token.filter(|t| !t.is_empty()) {
            debug!("Using token from CLI argument");
            return Ok(token.to_string());
        }

        if let Ok(token) = std::env::var(credentials::TOKEN_ENV_VAR) {
            if !token.is_empty() {
                debug!(
                    "Using token from {} environment variable",
                    credentials::TOKEN_ENV_VAR
                );
                return Ok(token);
            }
        }

        debug!(
            "No token in {}, using Azure credential chain",
            credentials::TOKEN_ENV_VAR
        );
        self.read_from_credential().await
    }

    /// Fetch a token from the configured credential
    async fn read_from_credential(&self) -> Result<String> {
        let credential = match &self.credential {
            Some(credential) => credential.clone(),
            None => {
                let credential = DefaultAzureCredential::create(TokenCredentialOptions::default())
                    .map_err(|e| {
                        ArmError::Authentication(self.token_not_found_message(&e.to_string()))
                    })?;
                Arc::new(credential)
            }
        };

        let scope = self.scope();
        let token = credential
            .get_token(&[scope.as_str()])
            .await
            .map_err(|e| {
                ArmError::Authentication(self.token_not_found_message(&e.to_string()))
            })?;

        let secret = token.token.secret();
        if secret.is_empty() {
            return Err(ArmError::Authentication(
                self.token_not_found_message("credential returned an empty token"),
            ));
        }

        debug!("Using token from Azure credential for scope {}", scope);
        Ok(secret.to_string())
    }

    /// Generate helpful error message when no token can be obtained
    fn token_not_found_message(&self, cause: &str) -> String {
        format!(
            "No access token found for {}. Please provide credentials using one of:\n\
             \n\
             1. CLI argument:       azwictl delete --access-token <TOKEN> ...\n\
             2. Environment var:    export {}=<TOKEN>\n\
             3. Service principal:  export AZURE_TENANT_ID, AZURE_CLIENT_ID, AZURE_CLIENT_SECRET\n\
             4. Managed or workload identity when running in Azure\n\
             5. Azure CLI login:    az login\n\
             \n\
             Cause: {}",
            self.endpoint,
            credentials::TOKEN_ENV_VAR,
            cause
        )
    }
}
