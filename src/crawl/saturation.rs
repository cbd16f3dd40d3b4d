// src/crawl/saturation.rs
// =============================================================================
// Deciding whether an answer was truncated.
//
// The service never says "there is more". The only hint is the reported
// count: when it hits the batch limit we assume the list was cut short and
// the prefix must be refined. Services disagree on what "hits" means, so the
// comparison is a trait.
// =============================================================================

use crate::config::SaturationMode;

pub trait SaturationRule: Send + Sync {
    fn is_saturated(&self, reported: u64, max_results: u64) -> bool;
}

/// `reported == max_results`
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactCount;

impl SaturationRule for ExactCount {
    fn is_saturated(&self, reported: u64, max_results: u64) -> bool {
        reported == max_results
    }
}

/// `reported >= max_results`, for services that report the full match count
#[derive(Debug, Clone, Copy, Default)]
pub struct AtLeastCount;

impl SaturationRule for AtLeastCount {
    fn is_saturated(&self, reported: u64, max_results: u64) -> bool {
        reported >= max_results
    }
}

impl<F> SaturationRule for F
where
    F: Fn(u64, u64) -> bool + Send + Sync,
{
    fn is_saturated(&self, reported: u64, max_results: u64) -> bool {
        self(reported, max_results)
    }
}

impl SaturationMode {
    pub fn rule(self) -> Box<dyn SaturationRule> {
        match self {
            SaturationMode::Exact => Box::new(ExactCount),
            SaturationMode::AtLeast => Box::new(AtLeastCount),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_count() {
        assert!(ExactCount.is_saturated(10, 10));
        assert!(!ExactCount.is_saturated(9, 10));
        assert!(!ExactCount.is_saturated(11, 10));
    }

    #[test]
    fn test_at_least_count() {
        assert!(AtLeastCount.is_saturated(10, 10));
        assert!(AtLeastCount.is_saturated(42, 10));
        assert!(!AtLeastCount.is_saturated(0, 10));
    }

    #[test]
    fn test_closures_are_rules() {
        let never = |_: u64, _: u64| false;
        assert!(!never.is_saturated(10, 10));
        assert!(SaturationMode::AtLeast.rule().is_saturated(12, 10));
        assert!(!SaturationMode::Exact.rule().is_saturated(12, 10));
    }
}
