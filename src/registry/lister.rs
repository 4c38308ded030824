//! The listing capability consumed by package lookups.

use async_trait::async_trait;
use thiserror::Error;

use crate::registry::types::{ListModelPackagesRequest, ModelPackagePage};

/// Failure reported by a registry backend.
#[derive(Error, Debug, Clone)]
#[error("{message}")]
pub struct ServiceError {
    /// Machine-readable error code, when the service supplies one
    pub code: Option<String>,
    /// Human-readable description of the failure
    pub message: String,
}

impl ServiceError {
    /// Failure with a service-assigned code.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: message.into(),
        }
    }

    /// Failure with no code, e.g. a transport fault.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }
}

/// Capability to issue paginated list queries against a model registry.
#[async_trait]
pub trait ListModelPackages {
    /// Fetch one page of package summaries matching the request.
    async fn list_model_packages(
        &self,
        request: &ListModelPackagesRequest,
    ) -> Result<ModelPackagePage, ServiceError>;
}
