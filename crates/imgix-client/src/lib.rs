// imgix-client: typed HTTP client for the imgix source management API

pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod model;

pub use client::ImgixClient;
pub use config::ImgixClientConfig;
pub use error::{ApiErrorBody, ApiErrorEntry, ImgixError, Result, is_api_error_with_title};
pub use model::{DeploymentStatus, Source, SourceAttributes, SourceDeployment, SourceEnvelope};
