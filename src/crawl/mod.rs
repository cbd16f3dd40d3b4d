// src/crawl/mod.rs
// =============================================================================
// This module walks the tree of prefixes breadth-first.
//
// Features:
// - FIFO frontier seeded with every single-character prefix
// - Saturated prefixes are expanded by one character, up to a depth limit
// - Pluggable saturation rule ("did the service truncate this answer?")
// - Polite pacing between requests, shorter after empty answers
//
// Strictly sequential: one probe is in flight at any time.
// =============================================================================

mod frontier;
mod pacing;
mod progress;
mod saturation;
mod traversal;

pub use frontier::{Frontier, Prefix};
pub use pacing::{NoopSleeper, PacingPolicy, Sleeper, StandardPacing, TokioSleeper};
pub use progress::{LogProgress, ProgressObserver, RecordedProgress};
pub use saturation::{AtLeastCount, ExactCount, SaturationRule};
pub use traversal::Traversal;
