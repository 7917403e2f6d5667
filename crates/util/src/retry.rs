//! Retrying a fallible async operation with a fixed delay.

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::RetryError;

/// How many times [`retry`] runs an operation and how long it waits between
/// failed attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            delay: Duration::from_millis(1000),
        }
    }
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts,
            delay,
        }
    }
}

/// Runs `op` until it succeeds or `policy.max_attempts` attempts have failed.
///
/// Sleeps `policy.delay` after every failed attempt except the last. On
/// exhaustion the error of the final attempt is returned inside
/// [`RetryError::Exhausted`]. A policy with zero attempts never calls `op`.
pub async fn retry<T, E, F, Fut>(mut op: F, policy: &RetryPolicy) -> Result<T, RetryError<E>>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    if policy.max_attempts == 0 {
        return Err(RetryError::NoAttempts);
    }

    let mut attempt = 1;
    loop {
        match op().await {
            Ok(value) => {
                if attempt > 1 {
                    debug!(attempt, "operation succeeded after retrying");
                }
                return Ok(value);
            }
            Err(e) if attempt < policy.max_attempts => {
                warn!(
                    error = %e,
                    attempt,
                    max_attempts = policy.max_attempts,
                    delay_ms = policy.delay.as_millis(),
                    "attempt failed, retrying"
                );
                tokio::time::sleep(policy.delay).await;
                attempt += 1;
            }
            Err(e) => {
                warn!(error = %e, attempts = attempt, "giving up");
                return Err(RetryError::Exhausted {
                    attempts: attempt,
                    last: e,
                });
            }
        }
    }
}
