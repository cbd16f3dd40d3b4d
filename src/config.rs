// src/config.rs
// =============================================================================
// The immutable configuration value handed to the traversal driver.
//
// Every knob the extractor has lives here: where to send queries, how many
// results mean "saturated", how deep to go, which characters to try and how
// long to wait between requests. Nothing is global; the driver owns a copy.
// =============================================================================

use crate::error::ConfigError;
use std::time::Duration;
use url::Url;

/// Host of the autocomplete service the tool was written against
pub const DEFAULT_HOST: &str = "http://35.200.185.69:8000";

/// API version segment used when none is given
pub const DEFAULT_VERSION: &str = "v1";

/// How many results the service returns at most per query
pub const DEFAULT_MAX_RESULTS: u64 = 10;

/// Pause after a probe that returned something
pub const DEFAULT_REQUEST_DELAY: Duration = Duration::from_millis(500);

/// Pause after a probe that returned nothing
pub const DEFAULT_NO_RESULT_DELAY: Duration = Duration::from_millis(100);

/// Prefixes never grow longer than this
pub const DEFAULT_MAX_PREFIX_LENGTH: usize = 6;

/// Per-request timeout
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Which comparison of reported count against max results means "truncated"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SaturationMode {
    /// count == max results
    #[default]
    Exact,
    /// count >= max results
    AtLeast,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractorConfig {
    /// Endpoint up to and including `query=`; the prefix is appended verbatim
    pub base_url: String,
    pub max_results: u64,
    pub request_delay: Duration,
    pub no_result_delay: Duration,
    pub max_prefix_length: usize,
    pub alphabet: Vec<char>,
    pub request_timeout: Duration,
    pub saturation: SaturationMode,
    /// Extra attempts for a prefix whose probe failed
    pub max_retries: u32,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            base_url: base_url_for(DEFAULT_HOST, DEFAULT_VERSION),
            max_results: DEFAULT_MAX_RESULTS,
            request_delay: DEFAULT_REQUEST_DELAY,
            no_result_delay: DEFAULT_NO_RESULT_DELAY,
            max_prefix_length: DEFAULT_MAX_PREFIX_LENGTH,
            alphabet: ('a'..='z').collect(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            saturation: SaturationMode::Exact,
            max_retries: 0,
        }
    }
}

impl ExtractorConfig {
    /// Default configuration pointed at a specific base URL
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Replaces the alphabet, keeping the first occurrence of each character
    pub fn with_alphabet(mut self, alphabet: impl IntoIterator<Item = char>) -> Self {
        self.alphabet = dedup_alphabet(alphabet);
        self
    }

    /// Checks the values that would make a run meaningless.
    ///
    /// An empty alphabet or a zero max prefix length is accepted: those runs
    /// simply finish without probing anything. Alphabet characters must be
    /// `a`..=`z` since prefixes are appended to the URL unescaped.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = Url::parse(&self.base_url).map_err(|e| ConfigError::InvalidBaseUrl {
            url: self.base_url.clone(),
            reason: e.to_string(),
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidBaseUrl {
                url: self.base_url.clone(),
                reason: format!("unsupported scheme '{}'", url.scheme()),
            });
        }

        if self.request_timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }

        if self.max_results == 0 {
            return Err(ConfigError::ZeroMaxResults);
        }

        // '&', '#', '+' and friends would change the query string itself
        if let Some(&ch) = self.alphabet.iter().find(|c| !c.is_ascii_lowercase()) {
            return Err(ConfigError::InvalidAlphabet { ch });
        }

        Ok(())
    }
}

/// Builds `<host>/<version>/autocomplete?query=`
pub fn base_url_for(host: &str, version: &str) -> String {
    format!(
        "{}/{}/autocomplete?query=",
        host.trim_end_matches('/'),
        version
    )
}

fn dedup_alphabet(alphabet: impl IntoIterator<Item = char>) -> Vec<char> {
    let mut seen = Vec::new();
    for c in alphabet {
        if !seen.contains(&c) {
            seen.push(c);
        }
    }
    seen
}
