//! Source resource operations: the engine facade over the API client
//!
//! Each operation validates its input, invokes the client with the
//! transient-retry wrapper where applicable, and waits for deployment
//! convergence before returning. Operations are independent per
//! resource and hold no shared mutable state; the remote API is the
//! sole source of truth.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use imgix_client::constants::INVALID_AWS_ACCESS_KEY_TITLE;
use imgix_client::{ImgixClient, Source, is_api_error_with_title};

use crate::config::ProviderConfig;
use crate::convergence::{ConvergenceOptions, wait_for_deployed};
use crate::error::Result;
use crate::retry::{RetryOptions, retry_transient};
use crate::spec::DeploymentSpec;

/// Diagnostic severity, orchestration-layer facing
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

/// Structured diagnostic returned alongside an otherwise successful
/// operation. Deleting always produces one: the remote API cannot
/// physically remove a source, so the entity persists in a disabled
/// state and callers must surface that.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Warning {
    pub severity: Severity,
    pub summary: String,
    pub detail: String,
}

impl Warning {
    fn disabled_not_deleted(id: &str) -> Self {
        Self {
            severity: Severity::Warning,
            summary: "resource disabled, not deleted".to_string(),
            detail: format!(
                "the imgix API does not support source deletion; source {} was disabled and still exists remotely",
                id
            ),
        }
    }
}

/// Create/read/update/delete operations over sources, with deployment
/// convergence and transient-error retry
pub struct SourceResource {
    client: ImgixClient,
    convergence: ConvergenceOptions,
    retry: RetryOptions,
}

impl SourceResource {
    /// Build from provider configuration with default timings
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        let client = ImgixClient::new(config.client_config())?;
        Ok(Self::with_options(
            client,
            ConvergenceOptions::default(),
            RetryOptions::default(),
        ))
    }

    /// Build from an existing client with explicit timings
    pub fn with_options(
        client: ImgixClient,
        convergence: ConvergenceOptions,
        retry: RetryOptions,
    ) -> Self {
        Self {
            client,
            convergence,
            retry,
        }
    }

    /// Create a source and wait for it to finish deploying. The
    /// server-assigned id overwrites anything client-side.
    pub async fn create(&self, spec: &DeploymentSpec) -> Result<Source> {
        spec.validate()?;
        let request = spec.to_source(None);

        let created = retry_transient(
            || self.client.create_source(&request),
            |err| is_api_error_with_title(err, INVALID_AWS_ACCESS_KEY_TITLE),
            self.retry,
        )
        .await?;

        let id = created
            .id
            .clone()
            .ok_or_else(|| anyhow::anyhow!("create response carried no source id"))?;

        info!("created source {}, waiting for deployment", id);
        self.converge(&id).await
    }

    /// Read a source. `wait_for_deployment` selects the slow path: a
    /// full convergence wait, used by callers right after a mutation.
    /// The fast path is a one-shot status fetch.
    pub async fn read(&self, id: &str, wait_for_deployment: bool) -> Result<Source> {
        if wait_for_deployment {
            self.converge(id).await
        } else {
            Ok(self.client.get_source_by_id(id).await?)
        }
    }

    /// Update a source in place and wait for the redeployment to reach
    /// a terminal status. Returns the refreshed remote state.
    pub async fn update(&self, id: &str, spec: &DeploymentSpec) -> Result<Source> {
        spec.validate()?;
        let request = spec.to_source(Some(id.to_string()));

        retry_transient(
            || self.client.update_source(&request),
            |err| is_api_error_with_title(err, INVALID_AWS_ACCESS_KEY_TITLE),
            self.retry,
        )
        .await?;

        info!("updated source {}, waiting for deployment", id);
        self.converge(id).await
    }

    /// "Delete" a source by disabling it. Always returns a warning:
    /// the resource still exists remotely, merely disabled.
    pub async fn delete(&self, source: &mut Source) -> Result<Warning> {
        self.client.disable_source(source).await?;

        let id = source.id.as_deref().unwrap_or("<unknown>");
        warn!("source {} disabled, not deleted", id);
        Ok(Warning::disabled_not_deleted(id))
    }

    async fn converge(&self, id: &str) -> Result<Source> {
        wait_for_deployed(|| self.client.get_source_by_id(id), self.convergence).await
    }
}
