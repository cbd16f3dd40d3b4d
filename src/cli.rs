// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// The only flag the tool strictly needs is --version, which picks the API
// version segment (v1, v2, ...) and names the output file. Everything else
// has a default matching the service and is there for tuning.
//
// Note: clap normally reserves --version for printing the program version.
// We switch that off so the flag keeps its meaning here.
// =============================================================================

use crate::config::{
    base_url_for, ExtractorConfig, SaturationMode, DEFAULT_HOST, DEFAULT_MAX_PREFIX_LENGTH,
    DEFAULT_MAX_RESULTS, DEFAULT_VERSION,
};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(
    name = "autocomplete-extractor",
    about = "Extract every name an autocomplete API knows about",
    long_about = "autocomplete-extractor walks the space of prefixes breadth-first, \
                  refining any prefix whose answer was truncated, and saves every \
                  distinct name it sees to a sorted text file.",
    disable_version_flag = true
)]
pub struct Cli {
    /// API version to use (e.g., v1, v2, v3)
    ///
    /// Becomes part of the base URL and of the output file name
    #[arg(long = "version", default_value = DEFAULT_VERSION)]
    pub api_version: String,

    /// Scheme, host and port of the autocomplete service
    #[arg(long, default_value = DEFAULT_HOST)]
    pub host: String,

    /// Where to write the names (default: collected_names_<version>.txt)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Batch size of the service; a count equal to it means "truncated"
    #[arg(long, default_value_t = DEFAULT_MAX_RESULTS)]
    pub max_results: u64,

    /// Longest prefix that will be queried
    #[arg(long, default_value_t = DEFAULT_MAX_PREFIX_LENGTH)]
    pub max_prefix_length: usize,

    /// Pause after a probe that returned results, in milliseconds
    #[arg(long, default_value_t = 500)]
    pub delay_ms: u64,

    /// Pause after a probe that returned nothing, in milliseconds
    #[arg(long, default_value_t = 100)]
    pub no_result_delay_ms: u64,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 5)]
    pub timeout_secs: u64,

    /// Characters used to build prefixes
    #[arg(long, default_value = "abcdefghijklmnopqrstuvwxyz")]
    pub alphabet: String,

    /// How the reported count is compared against --max-results
    #[arg(long, value_enum, default_value_t = SaturationMode::Exact)]
    pub saturation: SaturationMode,

    /// Extra attempts for a prefix whose request failed
    #[arg(long, default_value_t = 0)]
    pub retries: u32,

    /// Print the summary as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn to_config(&self) -> ExtractorConfig {
        let config = ExtractorConfig {
            base_url: base_url_for(&self.host, &self.api_version),
            max_results: self.max_results,
            request_delay: Duration::from_millis(self.delay_ms),
            no_result_delay: Duration::from_millis(self.no_result_delay_ms),
            max_prefix_length: self.max_prefix_length,
            alphabet: Vec::new(),
            request_timeout: Duration::from_secs(self.timeout_secs),
            saturation: self.saturation,
            max_retries: self.retries,
        };
        config.with_alphabet(self.alphabet.chars())
    }

    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| crate::output::default_output_path(&self.api_version))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_reproduce_default_config() {
        let cli = Cli::parse_from(["autocomplete-extractor"]);
        assert_eq!(cli.api_version, "v1");
        assert_eq!(cli.to_config(), ExtractorConfig::default());
        assert_eq!(cli.output_path(), PathBuf::from("collected_names_v1.txt"));
    }

    #[test]
    fn test_version_flag_selects_api_version() {
        let cli = Cli::parse_from(["autocomplete-extractor", "--version", "v2"]);
        let config = cli.to_config();
        assert_eq!(
            config.base_url,
            "http://35.200.185.69:8000/v2/autocomplete?query="
        );
        assert_eq!(cli.output_path(), PathBuf::from("collected_names_v2.txt"));
    }

    #[test]
    fn test_tuning_flags_map_onto_config() {
        let cli = Cli::parse_from([
            "autocomplete-extractor",
            "--host",
            "http://localhost:9000/",
            "--max-results",
            "15",
            "--max-prefix-length",
            "3",
            "--delay-ms",
            "0",
            "--alphabet",
            "abcab",
            "--saturation",
            "at-least",
            "--retries",
            "2",
            "--output",
            "out/names.txt",
        ]);
        let config = cli.to_config();
        assert_eq!(config.base_url, "http://localhost:9000/v1/autocomplete?query=");
        assert_eq!(config.max_results, 15);
        assert_eq!(config.max_prefix_length, 3);
        assert_eq!(config.request_delay, Duration::ZERO);
        assert_eq!(config.alphabet, vec!['a', 'b', 'c']);
        assert_eq!(config.saturation, SaturationMode::AtLeast);
        assert_eq!(config.max_retries, 2);
        assert_eq!(cli.output_path(), PathBuf::from("out/names.txt"));
    }

    #[test]
    fn test_alphabet_with_query_syntax_fails_validation() {
        let cli = Cli::parse_from(["autocomplete-extractor", "--alphabet", "a&#"]);
        let err = cli.to_config().validate().unwrap_err();
        assert_eq!(err, crate::error::ConfigError::InvalidAlphabet { ch: '&' });
    }
}
