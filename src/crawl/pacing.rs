// src/crawl/pacing.rs
// =============================================================================
// Polite pacing between probes.
//
// The endpoint is unauthenticated and its rate limit is unknown, so every
// probe is followed by a pause. Empty answers are cheap dead ends and get a
// shorter pause.
//
// Two seams:
// - PacingPolicy: how long to wait after an outcome
// - Sleeper: how to wait (tokio timer in production, nothing in tests)
// =============================================================================

use crate::config::ExtractorConfig;
use crate::probe::ProbeOutcome;
use async_trait::async_trait;
use std::sync::Mutex;
use std::time::Duration;

pub trait PacingPolicy: Send + Sync {
    fn delay_for(&self, outcome: &ProbeOutcome) -> Duration;
}

/// `no_result_delay` after a zero count (failures included), else `request_delay`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StandardPacing {
    pub request_delay: Duration,
    pub no_result_delay: Duration,
}

impl StandardPacing {
    pub fn from_config(config: &ExtractorConfig) -> Self {
        Self {
            request_delay: config.request_delay,
            no_result_delay: config.no_result_delay,
        }
    }
}

impl PacingPolicy for StandardPacing {
    fn delay_for(&self, outcome: &ProbeOutcome) -> Duration {
        if outcome.reported_count() == 0 {
            self.no_result_delay
        } else {
            self.request_delay
        }
    }
}

#[async_trait]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Returns immediately and remembers every requested pause
#[derive(Debug, Default)]
pub struct NoopSleeper {
    requested: Mutex<Vec<Duration>>,
}

impl NoopSleeper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pauses requested so far, in order
    pub fn requested(&self) -> Vec<Duration> {
        self.requested
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl Sleeper for NoopSleeper {
    async fn sleep(&self, duration: Duration) {
        if let Ok(mut requested) = self.requested.lock() {
            requested.push(duration);
        }
    }
}

#[async_trait]
impl<S: Sleeper + ?Sized> Sleeper for std::sync::Arc<S> {
    async fn sleep(&self, duration: Duration) {
        (**self).sleep(duration).await;
    }
}
