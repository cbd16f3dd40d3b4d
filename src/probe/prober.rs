// src/probe/prober.rs
// =============================================================================
// The Prober issues exactly one query for one prefix and never fails.
//
// A failed query becomes ProbeOutcome::Failed so callers can tell "the
// service said zero" apart from "we never heard back". Code that only cares
// about the data calls .result(), which turns a failure into the neutral
// (empty, 0) answer. That also means a failed branch is never expanded.
// =============================================================================

use crate::error::ProbeError;
use crate::probe::QueryClient;

/// What the service answered for one prefix
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProbeResult {
    /// Returned terms, at most max results of them
    pub items: Vec<String>,
    /// The service's own match count; may exceed items.len() when saturated
    pub reported_count: u64,
}

impl ProbeResult {
    /// The neutral answer: nothing returned, nothing reported
    pub fn empty() -> Self {
        Self::default()
    }
}

#[derive(Debug)]
pub enum ProbeOutcome {
    Completed(ProbeResult),
    Failed(ProbeError),
}

impl ProbeOutcome {
    /// Reported count, 0 for a failure
    pub fn reported_count(&self) -> u64 {
        match self {
            ProbeOutcome::Completed(result) => result.reported_count,
            ProbeOutcome::Failed(_) => 0,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, ProbeOutcome::Failed(_))
    }

    /// Data view of the outcome; failures degrade to ProbeResult::empty()
    pub fn result(self) -> ProbeResult {
        match self {
            ProbeOutcome::Completed(result) => result,
            ProbeOutcome::Failed(_) => ProbeResult::empty(),
        }
    }
}

pub struct Prober<Q: QueryClient> {
    client: Q,
}

impl<Q: QueryClient> Prober<Q> {
    pub fn new(client: Q) -> Self {
        Self { client }
    }

    /// Queries one prefix. Failures are logged with the prefix and cause.
    pub async fn probe(&self, prefix: &str) -> ProbeOutcome {
        match self.client.query(prefix).await {
            Ok(result) => ProbeOutcome::Completed(result),
            Err(error) => {
                tracing::warn!(prefix, error = %error, "error querying prefix");
                ProbeOutcome::Failed(error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct FailsOn(&'static str);

    #[async_trait]
    impl QueryClient for FailsOn {
        async fn query(&self, prefix: &str) -> Result<ProbeResult, ProbeError> {
            if prefix == self.0 {
                Err(ProbeError::Status {
                    prefix: prefix.to_string(),
                    status: 500,
                })
            } else {
                Ok(ProbeResult {
                    items: vec![format!("{}x", prefix)],
                    reported_count: 1,
                })
            }
        }
    }

    #[tokio::test]
    async fn test_failure_becomes_typed_outcome() {
        let prober = Prober::new(FailsOn("xq"));

        let outcome = prober.probe("xq").await;
        assert!(outcome.is_failure());
        assert_eq!(outcome.reported_count(), 0);
        assert_eq!(outcome.result(), ProbeResult::empty());
    }

    #[tokio::test]
    async fn test_success_passes_through() {
        let prober = Prober::new(FailsOn("xq"));

        let outcome = prober.probe("ab").await;
        assert!(!outcome.is_failure());
        assert_eq!(outcome.reported_count(), 1);
        assert_eq!(outcome.result().items, vec!["abx"]);
    }
}
