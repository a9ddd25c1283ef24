//! HTTP client for the imgix source management API
//!
//! Stateless request builder/executor bound to one base URL and bearer
//! credential. Safe for concurrent use across sources.

use std::time::Duration;

use reqwest::{Client, Method, Response, StatusCode};
use tracing::{debug, error};

use crate::config::ImgixClientConfig;
use crate::constants::api_path;
use crate::error::{ApiErrorBody, ImgixError, Result};
use crate::model::{Source, SourceEnvelope};

/// Typed client for source create/read/update/disable operations
pub struct ImgixClient {
    client: Client,
    config: ImgixClientConfig,
}

impl ImgixClient {
    /// Create a new client. Fails with [`ImgixError::MissingAccessKey`]
    /// when the configured access key is empty.
    pub fn new(config: ImgixClientConfig) -> Result<Self> {
        if config.access_key.is_empty() {
            return Err(ImgixError::MissingAccessKey);
        }

        let client = Client::builder()
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .timeout(Duration::from_millis(config.read_timeout_ms))
            .build()?;

        Ok(Self { client, config })
    }

    /// The configured API base URL
    pub fn api_base_url(&self) -> &str {
        &self.config.api_base_url
    }

    fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.config.api_base_url, path)
    }

    /// Fetch a source by id, decoding the `{"data": ...}` envelope
    pub async fn get_source_by_id(&self, id: &str) -> Result<Source> {
        debug!("fetching source {}", id);

        let response = self
            .client
            .get(self.build_url(&api_path::source(id)))
            .bearer_auth(&self.config.access_key)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(classify_error(response).await);
        }

        let body = response.text().await?;
        let envelope: SourceEnvelope = serde_json::from_str(&body)?;
        Ok(envelope.data)
    }

    /// Create a source. Succeeds only on HTTP 201; the server-assigned
    /// id in the response body is authoritative.
    pub async fn create_source(&self, source: &Source) -> Result<Source> {
        debug!("creating source {}", source.attributes.name);

        let response = self
            .send_source_request(Method::POST, api_path::SOURCES, source)
            .await?;

        if response.status() != StatusCode::CREATED {
            return Err(classify_error(response).await);
        }

        let body = response.text().await?;
        let envelope: SourceEnvelope = serde_json::from_str(&body)?;
        Ok(envelope.data)
    }

    /// Update a source in place. Succeeds only on HTTP 200. The API
    /// echoes only a subset of write fields, so on success the *input*
    /// value is returned as authoritative instead of the response body.
    pub async fn update_source(&self, source: &Source) -> Result<Source> {
        let id = source
            .id
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("cannot update a source without an id"))?;

        debug!("updating source {}", id);

        let response = self
            .send_source_request(Method::PATCH, &api_path::source(id), source)
            .await?;

        if response.status() != StatusCode::OK {
            return Err(classify_error(response).await);
        }

        Ok(source.clone())
    }

    /// Disable a source: flip `enabled` to false and update. The remote
    /// API has no physical deletion, so this is the only delete
    /// primitive; the entity remains queryable afterwards.
    pub async fn disable_source(&self, source: &mut Source) -> Result<()> {
        source.attributes.enabled = Some(false);
        self.update_source(source).await?;
        Ok(())
    }

    async fn send_source_request(
        &self,
        method: Method,
        path: &str,
        source: &Source,
    ) -> Result<Response> {
        let envelope = SourceEnvelope {
            data: source.clone(),
        };

        let response = self
            .client
            .request(method, self.build_url(path))
            .bearer_auth(&self.config.access_key)
            .json(&envelope)
            .send()
            .await?;

        Ok(response)
    }
}

/// Parse a non-2xx response body as the structured error envelope;
/// fall back to a raw status/body error when it does not parse.
async fn classify_error(response: Response) -> ImgixError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();

    match serde_json::from_str::<ApiErrorBody>(&body) {
        Ok(api_error) => {
            error!("api rejected request with status {}: {}", status, api_error);
            ImgixError::Api(api_error)
        }
        Err(_) => {
            error!("request failed with status {}: {}", status, body);
            ImgixError::UnexpectedStatus { status, body }
        }
    }
}
