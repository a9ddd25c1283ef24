// Provider configuration

use imgix_client::ImgixClientConfig;

/// Environment variable carrying the API access key
pub const API_KEY_ENV: &str = "IMGIX_API_KEY";

/// Environment variable overriding the API base URL
pub const API_URL_ENV: &str = "IMGIX_API_URL";

/// Configuration supplied by the orchestration layer
#[derive(Clone, Debug, Default)]
pub struct ProviderConfig {
    /// API access key (required)
    pub access_key: String,
    /// Optional base-URL override; production endpoint when absent
    pub api_base_url: Option<String>,
}

impl ProviderConfig {
    pub fn new(access_key: &str) -> Self {
        Self {
            access_key: access_key.to_string(),
            api_base_url: None,
        }
    }

    /// Source the configuration from `IMGIX_API_KEY` / `IMGIX_API_URL`.
    /// A missing key yields an empty string; client construction
    /// rejects it, so the failure surfaces as `MissingAccessKey`.
    pub fn from_env() -> Self {
        Self {
            access_key: std::env::var(API_KEY_ENV).unwrap_or_default(),
            api_base_url: std::env::var(API_URL_ENV).ok(),
        }
    }

    pub fn with_api_base_url(mut self, url: &str) -> Self {
        self.api_base_url = Some(url.to_string());
        self
    }

    /// Lower into the client configuration
    pub fn client_config(&self) -> ImgixClientConfig {
        let config = ImgixClientConfig::new(&self.access_key);
        match &self.api_base_url {
            Some(url) => config.with_api_base_url(url),
            None => config,
        }
    }
}
