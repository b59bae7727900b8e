//! Retry policy with capped exponential backoff.

use std::time::Duration;

/// How many times to try a request and how long to wait in between.
///
/// The wait before retry `n` (0-based) is `base * 2^n`, raised to at least
/// `min` and capped at `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first.
    pub max_attempts: u32,
    /// Unscaled delay for the first retry.
    pub base: Duration,
    /// Floor for every delay.
    pub min: Duration,
    /// Ceiling for every delay.
    pub max: Duration,
}

impl RetryPolicy {
    /// Create a policy with explicit parameters.
    pub fn new(max_attempts: u32, base: Duration, min: Duration, max: Duration) -> Self {
        Self {
            max_attempts,
            base,
            min,
            max,
        }
    }

    /// A single attempt with no retries.
    pub fn none() -> Self {
        Self {
            max_attempts: 1,
            ..Self::default()
        }
    }

    /// Same attempt budget as the default but without waiting (for testing).
    pub fn immediate() -> Self {
        Self {
            base: Duration::ZERO,
            min: Duration::ZERO,
            max: Duration::ZERO,
            ..Self::default()
        }
    }

    /// Delay before the `retry`-th retry (0 = wait after the first failure).
    pub fn delay_for(&self, retry: u32) -> Duration {
        let factor = 2u32.checked_pow(retry).unwrap_or(u32::MAX);
        let exponential = self.base.saturating_mul(factor);
        exponential.max(self.min).min(self.max)
    }

    /// Whether another attempt is allowed after `attempts_made` attempts.
    pub fn should_retry(&self, attempts_made: u32) -> bool {
        attempts_made < self.max_attempts
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base: Duration::from_secs(1),
            min: Duration::from_secs(4),
            max: Duration::from_secs(10),
        }
    }
}
