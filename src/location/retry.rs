use std::fmt::Display;
use std::future::Future;
use std::time::Duration;
use tokio_retry::Retry;
use tokio_retry::strategy::FixedInterval;
use tracing::warn;

/// Retry with a constant delay between attempts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    delay: Duration,
}

impl RetryPolicy {
    /// `max_attempts` counts the initial attempt, a value of zero still makes one attempt.
    pub fn new(max_attempts: u32, delay: Duration) -> Self {
        RetryPolicy {
            max_attempts: max_attempts.max(1),
            delay,
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    fn strategy(&self) -> impl Iterator<Item = Duration> {
        FixedInterval::new(self.delay).take(self.max_attempts as usize - 1)
    }
}

/// Runs `operation` until it succeeds or the policy runs out of attempts, returning the last error in that case.
///
/// The operation receives the 1-based attempt number.
pub async fn retry_with_fixed_delay<T, E, F, Fut>(policy: &RetryPolicy, mut operation: F) -> Result<T, E>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    let max_attempts = policy.max_attempts();
    let mut attempt = 0;

    Retry::start(policy.strategy(), || {
        attempt += 1;
        let current_attempt = attempt;
        let future = operation(current_attempt);
        async move {
            let result = future.await;
            if let Err(e) = &result {
                warn!("⚠️ Attempt {}/{} failed: {}", current_attempt, max_attempts, e);
            }
            result
        }
    })
    .await
}
