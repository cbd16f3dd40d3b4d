// src/error.rs
// =============================================================================
// Typed errors for the library layer.
//
// Two families:
// - ProbeError: one query against the autocomplete endpoint went wrong.
//   These never stop a run; the traversal logs them and moves on.
// - ConfigError: the configuration cannot describe a valid run.
//
// The binary wraps everything else in anyhow::Error.
// =============================================================================

use thiserror::Error;

/// Why a single probe failed
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The request did not finish within the configured timeout
    #[error("request for prefix '{prefix}' timed out")]
    Timeout { prefix: String },

    /// Connection, DNS, TLS or any other transport problem
    #[error("request for prefix '{prefix}' failed: {source}")]
    Transport {
        prefix: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success HTTP status
    #[error("prefix '{prefix}' returned HTTP {status}")]
    Status { prefix: String, status: u16 },

    /// The body was not the JSON shape we expect
    #[error("could not decode response for prefix '{prefix}': {reason}")]
    Decode { prefix: String, reason: String },
}

impl ProbeError {
    /// The prefix this failure belongs to
    pub fn prefix(&self) -> &str {
        match self {
            ProbeError::Timeout { prefix }
            | ProbeError::Transport { prefix, .. }
            | ProbeError::Status { prefix, .. }
            | ProbeError::Decode { prefix, .. } => prefix,
        }
    }

    /// Classifies a reqwest error the same way for every probe
    pub fn from_reqwest(prefix: &str, error: reqwest::Error) -> Self {
        let prefix = prefix.to_string();
        if error.is_timeout() {
            ProbeError::Timeout { prefix }
        } else if error.is_decode() {
            ProbeError::Decode {
                prefix,
                reason: error.to_string(),
            }
        } else {
            ProbeError::Transport {
                prefix,
                source: error,
            }
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("request timeout must be greater than zero")]
    ZeroTimeout,

    #[error("max results must be greater than zero")]
    ZeroMaxResults,

    #[error("alphabet character {ch:?} is not a lowercase ASCII letter")]
    InvalidAlphabet { ch: char },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_is_reported_for_every_variant() {
        let status = ProbeError::Status {
            prefix: "xq".to_string(),
            status: 503,
        };
        assert_eq!(status.prefix(), "xq");
        assert_eq!(status.to_string(), "prefix 'xq' returned HTTP 503");

        let decode = ProbeError::Decode {
            prefix: "ab".to_string(),
            reason: "expected value".to_string(),
        };
        assert_eq!(decode.prefix(), "ab");
        assert!(decode.to_string().contains("'ab'"));
    }
}
