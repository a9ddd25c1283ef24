//! Caller-facing deployment spec and its validation
//!
//! The orchestration layer collects user configuration into a
//! [`DeploymentSpec`]; the engine validates it and lowers it into the
//! wire [`Source`] representation.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use imgix_client::constants::{IMGIX_DOMAIN_SUFFIX, TYPE_SOURCE};
use imgix_client::{Source, SourceAttributes, SourceDeployment};

use crate::error::{ProviderError, Result};

/// Accepted cache TTL policies
pub const CACHE_TTL_BEHAVIORS: &[&str] = &["respect_origin", "override_origin", "enforce_minimum"];

/// Accepted origin types
pub const DEPLOYMENT_TYPES: &[&str] = &["azure", "gcs", "s3", "webfolder", "webproxy"];

/// Inclusive bounds for cache TTL values, in seconds (1s to one year)
pub const CACHE_TTL_MIN: i64 = 1;
pub const CACHE_TTL_MAX: i64 = 31536000;

/// Desired state of a source, as supplied by the caller
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct DeploymentSpec {
    pub name: String,
    pub enabled: bool,

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

impl Default for DeploymentSpec {
    fn default() -> Self {
        Self {
            name: String::new(),
            enabled: true,
            annotation: String::new(),
            cache_ttl_behavior: "respect_origin".to_string(),
            cache_ttl_error: 300,
            cache_ttl_value: CACHE_TTL_MAX,
            crossdomain_xml_enabled: false,
            custom_domains: vec![],
            default_params: HashMap::new(),
            image_error: None,
            image_error_append_qs: false,
            image_missing: None,
            image_missing_append_qs: false,
            imgix_subdomains: vec![],
            s3_access_key: None,
            s3_secret_key: None,
            s3_bucket: None,
            s3_prefix: None,
            gcs_access_key: None,
            gcs_secret_key: None,
            gcs_bucket: None,
            gcs_prefix: None,
            secure_url_enabled: None,
            type_: String::new(),
        }
    }
}

impl DeploymentSpec {
    /// Validate the spec against the schema constraints
    pub fn validate(&self) -> Result<()> {
        if self.imgix_subdomains.is_empty() {
            return Err(ProviderError::InvalidSpec(
                "at least one imgix subdomain is required".to_string(),
            ));
        }
        for subdomain in &self.imgix_subdomains {
            validate_subdomain(subdomain)?;
        }

        for (field, value) in [
            ("cache_ttl_error", self.cache_ttl_error),
            ("cache_ttl_value", self.cache_ttl_value),
        ] {
            if !(CACHE_TTL_MIN..=CACHE_TTL_MAX).contains(&value) {
                return Err(ProviderError::InvalidSpec(format!(
                    "{} must be between {} and {}, got {}",
                    field, CACHE_TTL_MIN, CACHE_TTL_MAX, value
                )));
            }
        }

        if !CACHE_TTL_BEHAVIORS.contains(&self.cache_ttl_behavior.as_str()) {
            return Err(ProviderError::InvalidSpec(format!(
                "unknown cache_ttl_behavior: {}",
                self.cache_ttl_behavior
            )));
        }

        if !DEPLOYMENT_TYPES.contains(&self.type_.as_str()) {
            return Err(ProviderError::InvalidSpec(format!(
                "unknown deployment type: {}",
                self.type_
            )));
        }

        Ok(())
    }

    /// Lower into the wire representation. `id` is `None` before
    /// creation and the remote id afterwards.
    pub fn to_source(&self, id: Option<String>) -> Source {
        Source {
            id,
            type_: Some(TYPE_SOURCE.to_string()),
            attributes: SourceAttributes {
                date_deployed: None,
                deployment_status: None,
                enabled: Some(self.enabled),
                name: self.name.clone(),
                secure_url_token: None,
                deployment: SourceDeployment {
                    allows_upload: None,
                    annotation: self.annotation.clone(),
                    cache_ttl_behavior: self.cache_ttl_behavior.clone(),
                    cache_ttl_error: self.cache_ttl_error,
                    cache_ttl_value: self.cache_ttl_value,
                    crossdomain_xml_enabled: self.crossdomain_xml_enabled,
                    custom_domains: self.custom_domains.clone(),
                    default_params: self.default_params.clone(),
                    image_error: self.image_error.clone(),
                    image_error_append_qs: self.image_error_append_qs,
                    image_missing: self.image_missing.clone(),
                    image_missing_append_qs: self.image_missing_append_qs,
                    imgix_subdomains: self.imgix_subdomains.clone(),
                    s3_access_key: self.s3_access_key.clone(),
                    s3_secret_key: self.s3_secret_key.clone(),
                    s3_bucket: self.s3_bucket.clone(),
                    s3_prefix: self.s3_prefix.clone(),
                    gcs_access_key: self.gcs_access_key.clone(),
                    gcs_secret_key: self.gcs_secret_key.clone(),
                    gcs_bucket: self.gcs_bucket.clone(),
                    gcs_prefix: self.gcs_prefix.clone(),
                    secure_url_enabled: self.secure_url_enabled,
                    type_: self.type_.clone(),
                },
            },
        }
    }
}

/// Reject subdomains ending with the provider's reserved root domain;
/// callers supply only the label, never the full hostname.
pub fn validate_subdomain(subdomain: &str) -> Result<()> {
    if subdomain.ends_with(IMGIX_DOMAIN_SUFFIX) {
        return Err(ProviderError::InvalidSpec(format!(
            "subdomain cannot contain the {} suffix, invalid record: {}",
            IMGIX_DOMAIN_SUFFIX, subdomain
        )));
    }
    Ok(())
}
