// src/crawl/traversal.rs
// =============================================================================
// The traversal driver: exhaustive breadth-first prefix expansion.
//
// How it works:
// 1. Seed the frontier with every alphabet character
// 2. Pop the oldest prefix and probe it
// 3. Add the returned terms to the collected set
// 4. If the answer was saturated and the prefix is still shorter than the
//    depth limit, queue all of its one-character children
// 5. Log progress, pause, repeat until the frontier is empty
//
// Because the queue is FIFO, every prefix of length L is probed before any
// prefix of length L+1. A prefix at the depth limit is never expanded, even
// when saturated, which caps a run at sum(alphabet^k for k in 1..=depth)
// probes.
// =============================================================================

use crate::collect::{CollectedNames, ExtractionReport, RunStatistics};
use crate::config::ExtractorConfig;
use crate::crawl::{
    Frontier, LogProgress, PacingPolicy, Prefix, ProgressObserver, SaturationRule, Sleeper,
    StandardPacing, TokioSleeper,
};
use crate::probe::{ProbeOutcome, Prober, QueryClient};

pub struct Traversal<Q: QueryClient> {
    config: ExtractorConfig,
    prober: Prober<Q>,
    saturation: Box<dyn SaturationRule>,
    pacing: Box<dyn PacingPolicy>,
    sleeper: Box<dyn Sleeper>,
    progress: Box<dyn ProgressObserver>,
}

impl<Q: QueryClient> Traversal<Q> {
    /// Driver with the saturation rule and pacing named by `config`
    pub fn new(config: ExtractorConfig, client: Q) -> Self {
        Self {
            saturation: config.saturation.rule(),
            pacing: Box::new(StandardPacing::from_config(&config)),
            sleeper: Box::new(TokioSleeper),
            progress: Box::new(LogProgress),
            prober: Prober::new(client),
            config,
        }
    }

    pub fn with_saturation(mut self, rule: impl SaturationRule + 'static) -> Self {
        self.saturation = Box::new(rule);
        self
    }

    pub fn with_pacing(mut self, pacing: impl PacingPolicy + 'static) -> Self {
        self.pacing = Box::new(pacing);
        self
    }

    pub fn with_sleeper(mut self, sleeper: impl Sleeper + 'static) -> Self {
        self.sleeper = Box::new(sleeper);
        self
    }

    pub fn with_progress(mut self, progress: impl ProgressObserver + 'static) -> Self {
        self.progress = Box::new(progress);
        self
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Drains the frontier and returns everything collected
    pub async fn run(&self) -> ExtractionReport {
        let alphabet = &self.config.alphabet;
        let max_depth = self.config.max_prefix_length;

        let mut frontier = Frontier::seeded(alphabet, max_depth);
        let mut names = CollectedNames::new();
        let mut stats = RunStatistics::default();

        tracing::debug!(seeds = frontier.len(), max_depth, "starting traversal");

        while let Some(prefix) = frontier.pop() {
            // Query the service (retrying if configured)
            let outcome = self.probe_with_retries(&prefix, &mut stats).await;

            stats.probes += 1;
            stats.max_depth_reached = stats.max_depth_reached.max(prefix.len());
            if outcome.is_failure() {
                stats.failed_probes += 1;
            }

            // Pick the pause now; a failure paces like an empty answer
            let delay = self.pacing.delay_for(&outcome);
            let result = outcome.result();
            let count = result.reported_count;

            // Union the returned names into the collection
            names.extend(result.items);

            // Saturated and still below the depth limit: refine by one character
            if self.saturation.is_saturated(count, self.config.max_results)
                && prefix.len() < max_depth
            {
                frontier.expand(&prefix, alphabet);
                tracing::debug!(
                    prefix = %prefix,
                    queued = frontier.len(),
                    "saturated, expanding"
                );
            }

            self.progress.observe(&prefix, count, names.len());

            // Polite crawling: wait before the next request
            self.sleeper.sleep(delay).await;
        }

        stats.unique_names = names.len();
        ExtractionReport { names, stats }
    }

    /// One probe, re-issued up to `max_retries` times while it keeps failing.
    /// Each retry is paced like any other request.
    async fn probe_with_retries(&self, prefix: &Prefix, stats: &mut RunStatistics) -> ProbeOutcome {
        let mut outcome = self.prober.probe(prefix.as_str()).await;
        stats.requests += 1;

        let mut attempt = 0;
        while outcome.is_failure() && attempt < self.config.max_retries {
            attempt += 1;
            self.sleeper.sleep(self.pacing.delay_for(&outcome)).await;
            tracing::debug!(prefix = %prefix, attempt, "retrying failed probe");

            outcome = self.prober.probe(prefix.as_str()).await;
            stats.requests += 1;
        }

        outcome
    }
}
