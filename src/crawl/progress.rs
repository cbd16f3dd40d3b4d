// src/crawl/progress.rs
// =============================================================================
// Per-probe progress reporting.
//
// After each probe the driver reports the prefix, the count the service
// reported and how many unique names have been collected so far. The default
// observer turns that into one log line; tests record it instead.
// =============================================================================

use crate::crawl::Prefix;
use std::sync::{Arc, Mutex};

pub trait ProgressObserver: Send + Sync {
    fn observe(&self, prefix: &Prefix, count: u64, total: usize);
}

/// One `info!` line per probe
#[derive(Debug, Clone, Copy, Default)]
pub struct LogProgress;

impl ProgressObserver for LogProgress {
    fn observe(&self, prefix: &Prefix, count: u64, total: usize) {
        tracing::info!(prefix = %prefix, count, total, "queried");
    }
}

/// Keeps every observation, in order
#[derive(Debug, Default)]
pub struct RecordedProgress {
    entries: Mutex<Vec<(String, u64, usize)>>,
}

impl RecordedProgress {
    pub fn new() -> Self {
        Self::default()
    }

    /// `(prefix, count, total)` for every probe so far
    pub fn entries(&self) -> Vec<(String, u64, usize)> {
        self.entries
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

impl ProgressObserver for RecordedProgress {
    fn observe(&self, prefix: &Prefix, count: u64, total: usize) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push((prefix.to_string(), count, total));
        }
    }
}

impl<O: ProgressObserver + ?Sized> ProgressObserver for Arc<O> {
    fn observe(&self, prefix: &Prefix, count: u64, total: usize) {
        (**self).observe(prefix, count, total);
    }
}
