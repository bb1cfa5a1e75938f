use std::fmt;

/// Error type for ARM teardown operations
#[derive(Debug)]
pub enum ArmError {
    /// HTTP request failed
    Http(reqwest::Error),
    /// API returned an error response
    Api { status: u16, message: String },
    /// JSON parsing error
    Json(String),
    /// Missing or invalid input, reported before any remote call
    Configuration(String),
    /// Credential or client construction failed
    Authentication(String),
    /// A page fetch failed while listing owned resources
    Discovery {
        scope: String,
        source: Box<ArmError>,
    },
    /// A delete call failed
    Deletion {
        resource: String,
        source: Box<ArmError>,
    },
    /// A long-running resource group deletion failed or timed out
    Poll {
        resource_group: String,
        message: String,
    },
}

impl ArmError {
    /// Wrap an error raised while listing resources inside `scope`
    pub fn discovery(scope: &str, source: ArmError) -> Self {
        ArmError::Discovery {
            scope: scope.to_string(),
            source: Box::new(source),
        }
    }

    /// Wrap an error raised while deleting `resource`
    pub fn deletion(resource: &str, source: ArmError) -> Self {
        ArmError::Deletion {
            resource: resource.to_string(),
            source: Box::new(source),
        }
    }

    /// HTTP status carried by this error, looking through wrappers
    pub fn status(&self) -> Option<u16> {
        match self {
            ArmError::Api { status, .. } => Some(*status),
            ArmError::Http(e) => e.status().map(|s| s.as_u16()),
            ArmError::Discovery { source, .. } | ArmError::Deletion { source, .. } => {
                source.status()
            }
            _ => None,
        }
    }
}

impl fmt::Display for ArmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArmError::Http(e) => write!(f, "HTTP request failed: {}", e),
            ArmError::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            ArmError::Json(msg) => write!(f, "JSON error: {}", msg),
            ArmError::Configuration(msg) => write!(f, "Configuration error: {}", msg),
            ArmError::Authentication(msg) => write!(f, "Authentication error: {}", msg),
            ArmError::Discovery { scope, source } => {
                write!(f, "failed to list resources in {}: {}", scope, source)
            }
            ArmError::Deletion { resource, source } => {
                write!(f, "failed to delete {}: {}", resource, source)
            }
            ArmError::Poll {
                resource_group,
                message,
            } => write!(
                f,
                "failed to delete resource group {}: {}",
                resource_group, message
            ),
        }
    }
}

impl std::error::Error for ArmError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ArmError::Http(e) => Some(e),
            ArmError::Discovery { source, .. } | ArmError::Deletion { source, .. } => {
                Some(source.as_ref())
            }
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ArmError {
    fn from(err: reqwest::Error) -> Self {
        ArmError::Http(err)
    }
}

impl From<serde_json::Error> for ArmError {
    fn from(err: serde_json::Error) -> Self {
        ArmError::Json(err.to_string())
    }
}

/// Result type alias for ARM operations
pub type Result<T> = std::result::Result<T, ArmError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_api_error_display() {
        let err = ArmError::Api {
            status: 403,
            message: "AuthorizationFailed".to_string(),
        };
        assert!(err.to_string().contains("403"));
        assert!(err.to_string().contains("AuthorizationFailed"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ArmError>();
    }

    #[test]
    fn test_configuration_error_display() {
        let err = ArmError::Configuration("bad storage account name".to_string());
        assert!(err.to_string().contains("Configuration error"));
        assert!(err.to_string().contains("bad storage account name"));
    }

    #[test]
    fn test_deletion_wraps_source() {
        let err = ArmError::deletion(
            "storage account cluster1",
            ArmError::Api {
                status: 409,
                message: "Conflict".to_string(),
            },
        );
        assert!(err.to_string().contains("storage account cluster1"));
        assert!(err.to_string().contains("Conflict"));
        assert!(err.source().is_some());
        assert_eq!(err.status(), Some(409));
    }

    #[test]
    fn test_discovery_wraps_source() {
        let err = ArmError::discovery(
            "resource group rg1",
            ArmError::Api {
                status: 500,
                message: "boom".to_string(),
            },
        );
        assert!(err.to_string().contains("resource group rg1"));
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn test_poll_error_names_resource_group() {
        let err = ArmError::Poll {
            resource_group: "cluster1-oidc".to_string(),
            message: "operation Failed".to_string(),
        };
        assert!(err.to_string().contains("cluster1-oidc"));
        assert!(err.source().is_none());
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: ArmError = json_err.into();
        match err {
            ArmError::Json(msg) => assert!(!msg.is_empty()),
            _ => panic!("Expected ArmError::Json"),
        }
    }
}
