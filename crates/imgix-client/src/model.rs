// Wire model for the imgix source management API

use std::collections::HashMap;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Remote-computed deployment status of a source.
///
/// `Deploying` is the only non-terminal state; everything else ends a
/// convergence wait.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeploymentStatus {
    Deploying,
    Deployed,
    Disabled,
    Deleted,
}

impl DeploymentStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, DeploymentStatus::Deploying)
    }
}

impl Display for DeploymentStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            DeploymentStatus::Deploying => "deploying",
            DeploymentStatus::Deployed => "deployed",
            DeploymentStatus::Disabled => "disabled",
            DeploymentStatus::Deleted => "deleted",
        };
        write!(f, "{}", s)
    }
}

/// Nested deployment configuration: where and how content is served.
///
/// Fields tagged `skip_serializing` are computed by the remote system
/// and must never appear in a write request, regardless of their
/// in-memory value.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct SourceDeployment {
    #[serde(skip_serializing)]
    pub allows_upload: Option<bool>,
    pub annotation: String,
    pub cache_ttl_behavior: String,
    pub cache_ttl_error: i64,
    pub cache_ttl_value: i64,
    pub crossdomain_xml_enabled: bool,
    pub custom_domains: Vec<String>,
    pub default_params: HashMap<String, String>,
    pub image_error: Option<String>,
    pub image_error_append_qs: bool,
    pub image_missing: Option<String>,
    pub image_missing_append_qs: bool,
    pub imgix_subdomains: Vec<String>,

    pub s3_access_key: Option<String>,
    pub s3_secret_key: Option<String>,
    pub s3_bucket: Option<String>,
    pub s3_prefix: Option<String>,

    pub gcs_access_key: Option<String>,
    pub gcs_secret_key: Option<String>,
    pub gcs_bucket: Option<String>,
    pub gcs_prefix: Option<String>,

    pub secure_url_enabled: Option<bool>,
    #[serde(rename = "type")]
    pub type_: String,
}

/// Attributes of a source. The `date_deployed`, `deployment_status` and
/// `secure_url_token` fields are remote-computed and suppressed on write.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct SourceAttributes {
    #[serde(skip_serializing)]
    pub date_deployed: Option<i64>,
    #[serde(skip_serializing)]
    pub deployment_status: Option<DeploymentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    pub name: String,
    #[serde(skip_serializing)]
    pub secure_url_token: Option<String>,

    pub deployment: SourceDeployment,
}

/// The managed entity: a configured media-serving origin.
///
/// `id` is set if and only if the source has been created remotely.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Source {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,

    pub attributes: SourceAttributes,
}

impl Source {
    /// Deployment status, if the remote system has reported one
    pub fn deployment_status(&self) -> Option<DeploymentStatus> {
        self.attributes.deployment_status
    }
}

/// Envelope wrapping a source on the wire, `{"data": <Source>}`.
/// Used for both request and response bodies.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SourceEnvelope {
    pub data: Source,
}
