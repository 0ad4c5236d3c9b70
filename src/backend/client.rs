//! HTTP Backend Client
//!
//! reqwest-based implementation of `ProductBackend`. The client is a plain
//! value holding its configuration; any number of them can coexist.

use crate::backend::config::BackendConfig;
use crate::backend::error::{BackendError, BackendResult};
use crate::backend::traits::ProductBackend;
use crate::backend::types::{Envelope, FullProductRecord, VerifyPayload};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Method, Url};
use serde::de::DeserializeOwned;

/// HTTP client for the product verification service
#[derive(Debug, Clone)]
pub struct BackendClient {
    config: BackendConfig,
    http: reqwest::Client,
}

impl BackendClient {
    /// Create a client for the given configuration
    pub fn new(config: BackendConfig) -> BackendResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .default_headers(headers)
            .build()
            .map_err(|e| BackendError::Transport {
                message: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(Self { config, http })
    }

    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    /// Build `{base}/seg1/seg2/...`, percent-encoding each segment
    pub fn endpoint(&self, segments: &[&str]) -> BackendResult<Url> {
        let mut url = self.config.base_url().clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| BackendError::InvalidUrl {
                    url: self.config.base_url().to_string(),
                    message: "URL cannot be used as a base".to_string(),
                })?;
            path.pop_if_empty();
            path.extend(segments);
        }
        Ok(url)
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        url: Url,
        body: Option<&FullProductRecord>,
    ) -> BackendResult<Envelope<T>> {
        log::debug!("{} {}", method, url);

        let mut builder = self.http.request(method.clone(), url.clone());
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            log::warn!("{} {} failed: {}", method, url, e);
            BackendError::Transport {
                message: e.to_string(),
            }
        })?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(|e| BackendError::Transport {
            message: format!("Failed to read response body: {}", e),
        })?;

        if !status.is_success() {
            let message = error_message_from_body(&bytes)
                .unwrap_or_else(|| format!("HTTP error: {}", status.as_u16()));
            log::warn!("{} {} returned {}: {}", method, url, status.as_u16(), message);
            return Err(BackendError::Status {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_slice::<Envelope<T>>(&bytes).map_err(|e| BackendError::Decode {
            message: e.to_string(),
        })
    }
}

// `{"message": "..."}` in an error body, if it parses and is non-empty
fn error_message_from_body(body: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;
    value
        .get("message")
        .and_then(|m| m.as_str())
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
}

#[async_trait::async_trait]
impl ProductBackend for BackendClient {
    async fn verify(&self, product_id: &str) -> BackendResult<Envelope<VerifyPayload>> {
        let url = self.endpoint(&["products", product_id, "verify"])?;
        self.request(Method::GET, url, None).await
    }

    async fn get(&self, product_id: &str) -> BackendResult<Envelope<FullProductRecord>> {
        let url = self.endpoint(&["products", product_id])?;
        self.request(Method::GET, url, None).await
    }

    async fn register(
        &self,
        product: &FullProductRecord,
    ) -> BackendResult<Envelope<FullProductRecord>> {
        let url = self.endpoint(&["products", "register"])?;
        self.request(Method::POST, url, Some(product)).await
    }
}
