//! Bounded retry with exponential backoff and an overall deadline.
//!
//! [`retry`] runs an async operation up to `max_attempts` times. Each failed
//! attempt reports whether it is worth retrying; retryable failures sleep
//! `base_delay * 2^(attempt - 1)` before the next try. The whole sequence,
//! sleeps included, is cut off once `deadline` elapses.

use std::future::Future;
use std::time::Duration;

/// Retry parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
    pub deadline: Duration,
}

impl Default for RetryPolicy {
    /// Three attempts, one second base delay, ten second deadline.
    fn default() -> Self {
        RetryPolicy {
            max_attempts: 3,
            base_delay: Duration::from_secs(1),
            deadline: Duration::from_secs(10),
        }
    }
}

impl RetryPolicy {
    /// Delay slept after the given failed attempt (1-based).
    pub fn delay_after(&self, attempt: u32) -> Duration {
        let factor = 1u32.checked_shl(attempt.saturating_sub(1)).unwrap_or(u32::MAX);
        self.base_delay.saturating_mul(factor)
    }
}

/// Outcome of a single failed attempt.
#[derive(Debug)]
pub enum Attempt<E> {
    /// Transient failure; try again if attempts remain.
    Retry(E),
    /// Permanent failure; stop immediately.
    Abort(E),
}

/// Why [`retry`] gave up.
#[derive(Debug, thiserror::Error)]
pub enum RetryError<E: std::error::Error + 'static> {
    #[error("failed after {attempts} attempt(s): {error}")]
    Exhausted { attempts: u32, error: E },

    #[error("aborted on attempt {attempt}: {error}")]
    Aborted { attempt: u32, error: E },

    #[error("deadline of {deadline:?} exceeded")]
    DeadlineExceeded { deadline: Duration },
}

impl<E: std::error::Error + 'static> RetryError<E> {
    /// The last underlying error, if an attempt produced one.
    pub fn last_error(&self) -> Option<&E> {
        match self {
            RetryError::Exhausted { error, .. } | RetryError::Aborted { error, .. } => Some(error),
            RetryError::DeadlineExceeded { .. } => None,
        }
    }
}

/// Runs `op` under `policy`. `op` receives the 1-based attempt number.
pub async fn retry<T, E, F, Fut>(policy: &RetryPolicy, mut op: F) -> Result<T, RetryError<E>>
where
    E: std::error::Error + 'static,
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, Attempt<E>>>,
{
    let max_attempts = policy.max_attempts.max(1);

    let attempts = async {
        let mut attempt = 1;
        loop {
            match op(attempt).await {
                Ok(value) => return Ok(value),
                Err(Attempt::Abort(error)) => {
                    tracing::warn!(attempt, error = %error, "attempt failed permanently");
                    return Err(RetryError::Aborted { attempt, error });
                }
                Err(Attempt::Retry(error)) => {
                    tracing::warn!(attempt, error = %error, "attempt failed");
                    if attempt >= max_attempts {
                        return Err(RetryError::Exhausted {
                            attempts: attempt,
                            error,
                        });
                    }
                    tokio::time::sleep(policy.delay_after(attempt)).await;
                    attempt += 1;
                }
            }
        }
    };

    match tokio::time::timeout(policy.deadline, attempts).await {
        Ok(result) => result,
        Err(_) => Err(RetryError::DeadlineExceeded {
            deadline: policy.deadline,
        }),
    }
}
