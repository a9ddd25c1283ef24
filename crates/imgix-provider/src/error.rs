//! Error types for the convergence engine

use imgix_client::{DeploymentStatus, ImgixError};

/// Error type for provider operations
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("invalid deployment spec: {0}")]
    InvalidSpec(String),

    #[error("deployment did not reach a terminal status before the deadline, last status: {last_status}")]
    ConvergenceTimeout { last_status: DeploymentStatus },

    #[error(transparent)]
    Client(#[from] ImgixError),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ProviderError>;
