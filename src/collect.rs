// src/collect.rs
// =============================================================================
// Accumulates every distinct term seen during a run, plus run counters.
//
// CollectedNames only ever grows. It is backed by a BTreeSet so the final
// sorted view is just an in-order walk: no copy, no sort step, and each name
// appears exactly once.
// =============================================================================

use serde::Serialize;
use std::collections::BTreeSet;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectedNames {
    names: BTreeSet<String>,
}

impl CollectedNames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unions `items` into the set and returns how many were new
    pub fn extend<I>(&mut self, items: I) -> usize
    where
        I: IntoIterator<Item = String>,
    {
        let before = self.names.len();
        self.names.extend(items);
        self.names.len() - before
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Names in ascending lexicographic order, produced lazily
    pub fn sorted(&self) -> impl Iterator<Item = &str> + '_ {
        self.names.iter().map(String::as_str)
    }
}

impl FromIterator<String> for CollectedNames {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}

/// Counters for one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunStatistics {
    /// Distinct prefixes probed
    pub probes: usize,
    /// HTTP requests issued, retries included
    pub requests: usize,
    /// Prefixes whose every attempt failed
    pub failed_probes: usize,
    pub unique_names: usize,
    /// Length of the longest prefix probed
    pub max_depth_reached: usize,
}

/// Everything a finished traversal hands back
#[derive(Debug, Clone, Default)]
pub struct ExtractionReport {
    pub names: CollectedNames,
    pub stats: RunStatistics,
}

impl ExtractionReport {
    pub fn summary(&self, output: &Path) -> ExtractionSummary {
        ExtractionSummary {
            total_requests: self.stats.requests,
            total_probes: self.stats.probes,
            failed_probes: self.stats.failed_probes,
            unique_names: self.stats.unique_names,
            max_depth_reached: self.stats.max_depth_reached,
            output: output.display().to_string(),
        }
    }
}

/// End-of-run summary, printable as a table or as JSON
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractionSummary {
    pub total_requests: usize,
    pub total_probes: usize,
    pub failed_probes: usize,
    pub unique_names: usize,
    pub max_depth_reached: usize,
    pub output: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_extend_counts_only_new_names() {
        let mut collected = CollectedNames::new();
        assert_eq!(collected.extend(names(&["ant", "app"])), 2);
        assert_eq!(collected.extend(names(&["app", "bee"])), 1);
        assert_eq!(collected.extend(Vec::new()), 0);
        assert_eq!(collected.len(), 3);
        assert!(collected.contains("bee"));
    }

    #[test]
    fn test_sorted_is_ascending_without_duplicates() {
        let collected: CollectedNames = names(&["bee", "ant", "abbey", "app", "ant"])
            .into_iter()
            .collect();
        let sorted: Vec<&str> = collected.sorted().collect();
        assert_eq!(sorted, vec!["abbey", "ant", "app", "bee"]);
    }

    #[test]
    fn test_summary_serializes() {
        let report = ExtractionReport {
            names: CollectedNames::new(),
            stats: RunStatistics {
                probes: 4,
                requests: 5,
                failed_probes: 1,
                unique_names: 0,
                max_depth_reached: 2,
            },
        };
        let summary = report.summary(Path::new("collected_names_v1.txt"));
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["total_requests"], 5);
        assert_eq!(json["output"], "collected_names_v1.txt");
    }
}
