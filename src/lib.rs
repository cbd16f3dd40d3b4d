// src/lib.rs
// =============================================================================
// Library root: the traversal engine and its collaborators.
//
// Modules:
// - config: the immutable ExtractorConfig
// - probe: talking to the autocomplete endpoint
// - crawl: breadth-first prefix expansion
// - collect: the collected names and run counters
// - output: persisting the sorted names
// - cli / logger: glue for the binary
// =============================================================================

pub mod cli;
pub mod collect;
pub mod config;
pub mod crawl;
pub mod error;
pub mod logger;
pub mod output;
pub mod probe;

pub use collect::{CollectedNames, ExtractionReport, ExtractionSummary, RunStatistics};
pub use config::{ExtractorConfig, SaturationMode};
pub use crawl::Traversal;
pub use error::{ConfigError, ProbeError};
pub use probe::{HttpQueryClient, ProbeOutcome, ProbeResult, Prober, QueryClient};
