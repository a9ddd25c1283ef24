//! Bounded retry for one classified transient API error
//!
//! A freshly created origin access key may not yet be visible to the
//! API, which then rejects the create/update with a recognizable error
//! title. This wrapper absorbs exactly that propagation race: it
//! re-attempts while the caller's predicate classifies the failure as
//! transient, with a fixed delay between attempts and a short overall
//! budget. It is not a general flakiness shield; any other failure
//! returns immediately.

use std::time::Duration;

use tokio::time::{Instant, sleep};
use tracing::warn;

/// Timing of the transient-retry loop
#[derive(Clone, Copy, Debug)]
pub struct RetryOptions {
    /// Fixed delay between attempts (default: 3s)
    pub delay: Duration,
    /// Overall budget, distinct from the convergence timeout
    /// (default: 10s)
    pub timeout: Duration,
}

impl Default for RetryOptions {
    fn default() -> Self {
        Self {
            delay: Duration::from_secs(3),
            timeout: Duration::from_secs(10),
        }
    }
}

/// Run `op` until it succeeds, fails non-transiently, or the budget is
/// exhausted. Exhaustion surfaces the last transient error itself, not
/// a synthetic timeout, so callers see the real cause.
pub async fn retry_transient<T, E, F, Fut, P>(
    mut op: F,
    is_transient: P,
    options: RetryOptions,
) -> std::result::Result<T, E>
where
    E: std::fmt::Display,
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = std::result::Result<T, E>>,
    P: Fn(&E) -> bool,
{
    let deadline = Instant::now() + options.timeout;

    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(err) if is_transient(&err) => {
                if Instant::now() + options.delay >= deadline {
                    warn!("transient error still present at deadline: {}", err);
                    return Err(err);
                }
                warn!(
                    "transient error, retrying in {:?}: {}",
                    options.delay, err
                );
                sleep(options.delay).await;
            }
            Err(err) => return Err(err),
        }
    }
}
