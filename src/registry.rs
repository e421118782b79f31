//! Per-client rate-limit registry with background eviction.
//!
//! The registry maps a client IP to its [`TokenBucket`] and last-activity
//! timestamp. It is the only mutable state shared between request-handling
//! tasks and the sweeper, and every access goes through one mutex held for
//! the duration of a map lookup plus bucket arithmetic, never across I/O.

use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;
// tokio's Instant so the sweeper honors the paused test clock.
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::limiter::TokenBucket;

/// How often the sweeper wakes to evict idle clients.
pub const SWEEP_INTERVAL: Duration = Duration::from_secs(60);

struct ClientEntry {
    limiter: TokenBucket,
    last_seen: Instant,
}

/// Tracks one token bucket per client IP.
///
/// Constructed once at startup and injected into the rate-limit middleware
/// through [`crate::state::AppState`], so its lifetime and locking are
/// explicit rather than hidden in a closure.
pub struct ClientRegistry {
    rps: f64,
    burst: u32,
    clients: Mutex<HashMap<IpAddr, ClientEntry>>,
}

impl ClientRegistry {
    pub fn new(rps: f64, burst: u32) -> Self {
        Self {
            rps,
            burst,
            clients: Mutex::new(HashMap::new()),
        }
    }

    /// Decides whether a request from `ip` is admitted right now.
    ///
    /// A first-time client gets a fresh full bucket, so the lookup-or-insert
    /// and the token consumption happen under one lock acquisition; two
    /// racing first requests from the same address share a single bucket.
    /// Also refreshes the client's `last_seen` so active clients survive
    /// the sweep.
    pub fn admit(&self, ip: IpAddr) -> bool {
        let mut clients = self.clients.lock().expect("client registry lock poisoned");

        let entry = clients.entry(ip).or_insert_with(|| ClientEntry {
            limiter: TokenBucket::new(self.rps, self.burst),
            last_seen: Instant::now(),
        });
        entry.last_seen = Instant::now();
        entry.limiter.allow()
    }

    /// Number of tracked clients. Used by the sweeper log line and tests.
    pub fn len(&self) -> usize {
        self.clients.lock().expect("client registry lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every client idle for longer than `stale_after`.
    fn sweep(&self, stale_after: Duration) -> usize {
        let mut clients = self.clients.lock().expect("client registry lock poisoned");
        let before = clients.len();
        clients.retain(|_, entry| entry.last_seen.elapsed() <= stale_after);
        before - clients.len()
    }

    /// Spawns the background eviction task.
    ///
    /// Wakes every `interval`, evicting clients idle for more than three
    /// intervals. Runs until `shutdown` is cancelled so tests and the
    /// server's drain path can stop it deterministically.
    pub fn spawn_sweeper(
        self: Arc<Self>,
        interval: Duration,
        shutdown: CancellationToken,
    ) -> JoinHandle<()> {
        tokio::spawn(async move {
            let stale_after = interval * 3;
            let mut ticker = tokio::time::interval(interval);
            // The first tick of a tokio interval fires immediately.
            ticker.tick().await;

            loop {
                tokio::select! {
                    _ = shutdown.cancelled() => {
                        tracing::debug!("client registry sweeper stopped");
                        return;
                    }
                    _ = ticker.tick() => {
                        let evicted = self.sweep(stale_after);
                        if evicted > 0 {
                            tracing::debug!(evicted, remaining = self.len(), "evicted idle clients");
                        }
                    }
                }
            }
        })
    }
}
