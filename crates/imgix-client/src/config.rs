// Configuration for ImgixClient

use crate::constants::DEFAULT_API_URL;

/// Configuration for the imgix HTTP client
#[derive(Clone, Debug)]
pub struct ImgixClientConfig {
    /// API access key, sent as a bearer token on every request
    pub access_key: String,
    /// API base URL (default: `https://api.imgix.com`)
    pub api_base_url: String,
    /// Connection timeout in milliseconds (default: 5000)
    pub connect_timeout_ms: u64,
    /// Read timeout in milliseconds (default: 30000)
    pub read_timeout_ms: u64,
}

impl Default for ImgixClientConfig {
    fn default() -> Self {
        Self {
            access_key: String::new(),
            api_base_url: DEFAULT_API_URL.to_string(),
            connect_timeout_ms: 5000,
            read_timeout_ms: 30000,
        }
    }
}

impl ImgixClientConfig {
    /// Create a new config with the given access key
    pub fn new(access_key: &str) -> Self {
        Self {
            access_key: access_key.to_string(),
            ..Default::default()
        }
    }

    /// Override the API base URL (e.g. for a mock server)
    pub fn with_api_base_url(mut self, url: &str) -> Self {
        self.api_base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Set timeouts
    pub fn with_timeouts(mut self, connect_ms: u64, read_ms: u64) -> Self {
        self.connect_timeout_ms = connect_ms;
        self.read_timeout_ms = read_ms;
        self
    }
}
