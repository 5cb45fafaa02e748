// Fixed-count, fixed-interval polling for GitHub operations that settle
// asynchronously on the server side (fork creation).

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryConfig {
    pub max_attempts: u32,
    pub interval: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            interval: Duration::from_secs(2),
        }
    }
}

impl RetryConfig {
    /// Longest time spent sleeping when every attempt fails.
    pub fn worst_case_wait(&self) -> Duration {
        self.interval * self.max_attempts.saturating_sub(1)
    }
}

#[derive(Debug, Clone, Default)]
pub struct FixedIntervalRetry {
    config: RetryConfig,
}

impl FixedIntervalRetry {
    pub fn new(config: RetryConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RetryConfig {
        &self.config
    }

    /// Run `attempt` until it succeeds or `max_attempts` is exhausted.
    ///
    /// Sleeps only between attempts, never after the last one. The attempt number
    /// (starting at 1) is passed to the closure. Returns `None` when every attempt failed.
    pub async fn poll<F, Fut, T, E>(&self, operation: &str, mut attempt: F) -> Option<T>
    where
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Display,
    {
        for n in 1..=self.config.max_attempts {
            match attempt(n).await {
                Ok(value) => {
                    debug!(operation, attempt = n, "Operation succeeded");
                    return Some(value);
                }
                Err(error) => {
                    warn!(
                        operation,
                        attempt = n,
                        max_attempts = self.config.max_attempts,
                        "Operation failed: {}",
                        error
                    );
                }
            }

            if n < self.config.max_attempts {
                tokio::time::sleep(self.config.interval).await;
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    #[tokio::test(start_paused = true)]
    async fn test_retry_success_after_failure() {
        let retry = FixedIntervalRetry::default();
        let attempt_count = Arc::new(AtomicU32::new(0));
        let started = tokio::time::Instant::now();

        let result = retry
            .poll("test", |_| {
                let attempt_count = attempt_count.clone();
                async move {
                    let count = attempt_count.fetch_add(1, Ordering::SeqCst);
                    if count < 2 {
                        Err("transient")
                    } else {
                        Ok("success")
                    }
                }
            })
            .await;

        assert_eq!(result, Some("success"));
        assert_eq!(attempt_count.load(Ordering::SeqCst), 3);
        assert_eq!(started.elapsed(), Duration::from_secs(4));
    }

    #[tokio::test(start_paused = true)]
    async fn test_exhaustion_sleeps_between_attempts_only() {
        let retry = FixedIntervalRetry::default();
        let attempt_count = AtomicU32::new(0);
        let started = tokio::time::Instant::now();

        let result: Option<()> = retry
            .poll("test", |_| {
                attempt_count.fetch_add(1, Ordering::SeqCst);
                async { Err::<(), _>("down") }
            })
            .await;

        assert_eq!(result, None);
        assert_eq!(attempt_count.load(Ordering::SeqCst), 5);
        assert_eq!(started.elapsed(), Duration::from_secs(8));
        assert_eq!(retry.config().worst_case_wait(), Duration::from_secs(8));
    }

    #[tokio::test]
    async fn test_zero_attempts_never_calls() {
        let retry = FixedIntervalRetry::new(RetryConfig {
            max_attempts: 0,
            interval: Duration::ZERO,
        });

        let calls = AtomicU32::new(0);

        let result: Option<()> = retry
            .poll("test", |_| {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Err::<(), _>("never") }
            })
            .await;

        assert_eq!(result, None);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }
}
