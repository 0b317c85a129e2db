//! `reqwest`-backed HTTP client

use async_trait::async_trait;
use reqwest::Client;
use reqwest::Method;
use reqwest::header::CONTENT_TYPE;
use url::Url;

use super::HttpClient;
use super::SubmitRequest;
use super::TransportResponse;
use crate::error::TransportError;

/// Sends submissions with [`reqwest`].
///
/// Relative actions such as `/contact` are resolved against the base URL.
/// Without a base URL every action must be absolute.
///
/// # Example
///
/// ```ignore
/// let client = ReqwestClient::with_base_url("https://example.com")?;
/// let pigeon = Pigeon::new(config, &document, client)?;
/// ```
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    base_url: Option<Url>,
    http_client: Client,
}

impl ReqwestClient {
    /// Creates a client that only accepts absolute actions.
    pub fn new() -> Self {
        Self {
            base_url: None,
            http_client: Client::new(),
        }
    }

    /// Creates a client resolving relative actions against `base_url`.
    pub fn with_base_url(base_url: &str) -> Result<Self, TransportError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| TransportError::InvalidUrl(format!("{}: {}", base_url, e)))?;
        Ok(Self {
            base_url: Some(base_url),
            http_client: Client::new(),
        })
    }

    fn resolve(&self, action: &str) -> Result<Url, TransportError> {
        let resolved = match &self.base_url {
            Some(base) => base.join(action),
            None => Url::parse(action),
        };
        resolved.map_err(|e| TransportError::InvalidUrl(format!("{}: {}", action, e)))
    }
}

impl Default for ReqwestClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn send(&self, request: SubmitRequest) -> Result<TransportResponse, TransportError> {
        let method = Method::from_bytes(request.method.as_bytes())
            .map_err(|_| TransportError::InvalidMethod(request.method.clone()))?;
        let url = self.resolve(&request.action)?;

        if !request.asynchronous {
            log::warn!(
                "Synchronous submission requested for {}; sending without blocking instead",
                url
            );
        }

        log::debug!("{} {} ({} bytes)", method, url, request.body.len());

        let response = self
            .http_client
            .request(method, url)
            .header(CONTENT_TYPE, request.content_type)
            .body(request.body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(TransportResponse { status, body })
    }
}
