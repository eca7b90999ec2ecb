use std::future::Future;
use std::time::Duration;

use crate::error::TipError;

/// One try plus one retry.
pub const MAX_ATTEMPTS: u32 = 2;

pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    /// Fixed pause between attempts.
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: MAX_ATTEMPTS,
            delay: DEFAULT_RETRY_DELAY,
        }
    }
}

impl RetryPolicy {
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay,
            ..Self::default()
        }
    }
}

/// Run `op` until it succeeds or the policy's attempts are used up.
///
/// Every error is retried; the error from the final attempt is returned.
/// `op` receives the 1-based attempt number.
pub async fn with_retry<T, F, Fut>(
    policy: RetryPolicy,
    label: &str,
    mut op: F,
) -> Result<T, TipError>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, TipError>>,
{
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 1;

    loop {
        match op(attempt).await {
            Ok(value) => return Ok(value),
            Err(e) if attempt < max_attempts => {
                tracing::warn!(
                    label,
                    attempt,
                    max_attempts,
                    delay_ms = policy.delay.as_millis() as u64,
                    error = %e,
                    "attempt failed, retrying"
                );
                if !policy.delay.is_zero() {
                    tokio::time::sleep(policy.delay).await;
                }
                attempt += 1;
            }
            Err(e) => {
                tracing::warn!(label, attempt, error = %e, "final attempt failed");
                return Err(e);
            }
        }
    }
}
