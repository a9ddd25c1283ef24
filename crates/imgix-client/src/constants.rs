// API constants following the imgix management API surface

/// Production API endpoint used when no override is configured
pub const DEFAULT_API_URL: &str = "https://api.imgix.com";

/// JSON:API resource type tag carried by every source
pub const TYPE_SOURCE: &str = "sources";

/// Error title the API returns while a freshly created AWS access key
/// is not yet visible to it
pub const INVALID_AWS_ACCESS_KEY_TITLE: &str = "aws_access_key";

/// Reserved root domain; subdomains must not end with it
pub const IMGIX_DOMAIN_SUFFIX: &str = "imgix.net";

pub mod api_path {
    pub const SOURCES: &str = "/api/v1/sources";

    /// Path for a single source, e.g. `/api/v1/sources/{id}`
    pub fn source(id: &str) -> String {
        format!("{}/{}", SOURCES, id)
    }
}
