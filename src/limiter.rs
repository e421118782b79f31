//! Token-bucket rate limiter.
//!
//! One bucket exists per client identity; the bucket itself does no locking
//! and no I/O. Serialization of access is the job of
//! [`crate::registry::ClientRegistry`], which owns every bucket behind a
//! single mutex.

use std::time::Instant;

/// A token bucket with a continuous refill.
///
/// Capacity ("tokens") refills at `rate` tokens per second up to `burst`,
/// and each admitted request consumes one token. A freshly created bucket
/// starts full, so a new client gets an initial burst of up to `burst`
/// requests before throttling kicks in.
///
/// Tokens are tracked as floating point so fractional refill between calls
/// is not lost at low rates.
#[derive(Debug)]
pub struct TokenBucket {
    rate: f64,
    burst: f64,
    tokens: f64,
    last_refill: Instant,
}

impl TokenBucket {
    /// Creates a full bucket refilling at `rate` tokens per second.
    pub fn new(rate: f64, burst: u32) -> Self {
        Self {
            rate,
            burst: f64::from(burst),
            tokens: f64::from(burst),
            last_refill: Instant::now(),
        }
    }

    /// Refills the bucket for the elapsed time and tries to take one token.
    ///
    /// Returns `true` when the request should be admitted. Never blocks.
    pub fn allow(&mut self) -> bool {
        self.allow_at(Instant::now())
    }

    fn allow_at(&mut self, now: Instant) -> bool {
        // saturating: a now earlier than last_refill counts as zero elapsed,
        // keeping the refill monotonic.
        let elapsed = now.saturating_duration_since(self.last_refill);
        self.tokens = (self.tokens + elapsed.as_secs_f64() * self.rate).min(self.burst);
        self.last_refill = now;

        if self.tokens >= 1.0 {
            self.tokens -= 1.0;
            true
        } else {
            false
        }
    }
}
