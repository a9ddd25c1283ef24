//! imgix-provider: state-convergence engine over the imgix source API
//!
//! This crate hides the API's asynchronous deployment pipeline behind
//! synchronous create/read/update/delete operations:
//! - a polling loop that waits for a freshly mutated source to leave
//!   the transient `deploying` state,
//! - a bounded retry wrapper absorbing the access-key propagation race
//!   on create/update,
//! - a spec/validation layer turning caller input into wire sources.

pub mod config;
pub mod convergence;
pub mod error;
pub mod resource;
pub mod retry;
pub mod spec;

pub use config::ProviderConfig;
pub use convergence::{ConvergenceOptions, wait_for_deployed};
pub use error::{ProviderError, Result};
pub use resource::{Severity, SourceResource, Warning};
pub use retry::{RetryOptions, retry_transient};
pub use spec::DeploymentSpec;
