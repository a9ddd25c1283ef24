//! Deployment convergence: poll until a source leaves `deploying`
//!
//! The remote system deploys asynchronously after every create/update.
//! This module converts that into a synchronous contract: a pull-based
//! loop over an injectable polling function, with a fixed delay before
//! the first poll and a monotonic deadline. There is no cancellation
//! other than the deadline; the remote system has no cancel primitive
//! for in-flight deployments.

use std::time::Duration;

use tokio::time::{Instant, sleep};
use tracing::debug;

use imgix_client::{DeploymentStatus, Source};

use crate::error::{ProviderError, Result};

/// Timing of the convergence loop
#[derive(Clone, Copy, Debug)]
pub struct ConvergenceOptions {
    /// Delay before the first poll; the remote system does not begin
    /// transitioning instantaneously (default: 5s)
    pub initial_delay: Duration,
    /// Fixed interval between polls (default: 10s)
    pub poll_interval: Duration,
    /// Overall deadline (default: 30min)
    pub timeout: Duration,
}

impl Default for ConvergenceOptions {
    fn default() -> Self {
        Self {
            initial_delay: Duration::from_secs(5),
            poll_interval: Duration::from_secs(10),
            timeout: Duration::from_secs(30 * 60),
        }
    }
}

impl ConvergenceOptions {
    /// Override the overall deadline, keeping the poll timing
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Poll `poll` until the returned source reaches a terminal deployment
/// status or the deadline elapses.
///
/// Client errors from the polling function propagate immediately; only
/// the deadline produces [`ProviderError::ConvergenceTimeout`], which
/// carries the last observed status for diagnostics.
pub async fn wait_for_deployed<F, Fut>(mut poll: F, options: ConvergenceOptions) -> Result<Source>
where
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = imgix_client::Result<Source>>,
{
    let deadline = Instant::now() + options.timeout;
    sleep(options.initial_delay).await;

    // A source fresh out of a mutating call is pending by definition.
    let mut last_status = DeploymentStatus::Deploying;

    loop {
        let source = poll().await?;

        match source.deployment_status() {
            Some(status) if status.is_terminal() => {
                debug!("source reached terminal status {}", status);
                return Ok(source);
            }
            Some(status) => {
                debug!("source still {}", status);
                last_status = status;
            }
            None => {
                // The API has not reported a status yet; keep waiting.
                debug!("source has no deployment status yet");
            }
        }

        if Instant::now() >= deadline {
            return Err(ProviderError::ConvergenceTimeout { last_status });
        }

        sleep(options.poll_interval).await;
    }
}
