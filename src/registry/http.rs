//! HTTP-backed registry client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::defaults;
use crate::registry::lister::{ListModelPackages, ServiceError};
use crate::registry::types::{ListModelPackagesRequest, ModelPackagePage};

const LIST_PATH: &str = "/model-packages/list";

/// Error body returned by the registry on failed calls.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    code: Option<String>,
    message: Option<String>,
}

/// Registry client speaking the JSON list API over HTTP.
pub struct HttpRegistryClient {
    client: Client,
    endpoint: String,
}

impl HttpRegistryClient {
    /// Create a client for the registry at `endpoint`.
    pub fn new(endpoint: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(defaults::REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl ListModelPackages for HttpRegistryClient {
    async fn list_model_packages(
        &self,
        request: &ListModelPackagesRequest,
    ) -> Result<ModelPackagePage, ServiceError> {
        let url = format!("{}{}", self.endpoint, LIST_PATH);

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| ServiceError::message(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let (code, message) = match response.json::<ErrorBody>().await.ok() {
                Some(body) => (
                    body.code,
                    body.message
                        .unwrap_or_else(|| format!("Registry returned {}", status)),
                ),
                None => (None, format!("Registry returned {}", status)),
            };
            return Err(ServiceError { code, message });
        }

        response
            .json::<ModelPackagePage>()
            .await
            .map_err(|e| ServiceError::message(format!("Invalid list response: {}", e)))
    }
}
