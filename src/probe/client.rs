// src/probe/client.rs
// =============================================================================
// The query collaborator.
//
// QueryClient is the only thing the traversal needs from the outside world:
// "give me the matches for this prefix". HttpQueryClient answers it with a
// GET against `<base_url><prefix>` and decodes a JSON body shaped like
//
//     { "count": 10, "results": ["aaron", "abby", ...] }
//
// Missing or null fields decode as empty / zero. Tests swap in in-memory
// clients.
// =============================================================================

use crate::config::ExtractorConfig;
use crate::error::ProbeError;
use crate::probe::ProbeResult;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

/// Anything that can answer an autocomplete query for a prefix
#[async_trait]
pub trait QueryClient: Send + Sync {
    async fn query(&self, prefix: &str) -> Result<ProbeResult, ProbeError>;
}

#[async_trait]
impl<Q: QueryClient + ?Sized> QueryClient for std::sync::Arc<Q> {
    async fn query(&self, prefix: &str) -> Result<ProbeResult, ProbeError> {
        (**self).query(prefix).await
    }
}

/// Wire shape of one autocomplete response
///
/// Both fields are optional so that `null` reads the same as a missing
/// field instead of failing the whole probe.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct AutocompleteResponse {
    #[serde(default)]
    pub results: Option<Vec<String>>,
    #[serde(default)]
    pub count: Option<u64>,
}

impl From<AutocompleteResponse> for ProbeResult {
    fn from(response: AutocompleteResponse) -> Self {
        ProbeResult {
            items: response.results.unwrap_or_default(),
            reported_count: response.count.unwrap_or(0),
        }
    }
}

/// Queries the real endpoint over HTTP
#[derive(Debug, Clone)]
pub struct HttpQueryClient {
    client: Client,
    base_url: String,
}

impl HttpQueryClient {
    /// Builds the client once; it is reused for every probe of the run
    pub fn new(config: &ExtractorConfig) -> reqwest::Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// The prefix is appended verbatim; lowercase letters need no escaping
    pub fn url_for(&self, prefix: &str) -> String {
        format!("{}{}", self.base_url, prefix)
    }
}

#[async_trait]
impl QueryClient for HttpQueryClient {
    async fn query(&self, prefix: &str) -> Result<ProbeResult, ProbeError> {
        // Build the full URL: base endpoint + raw prefix
        let url = self.url_for(prefix);
        tracing::debug!(%url, "sending query");

        // Send the request; timeouts and connection errors are classified here
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ProbeError::from_reqwest(prefix, e))?;

        // Anything but 2xx means we did not get a real answer
        let status = response.status();
        if !status.is_success() {
            return Err(ProbeError::Status {
                prefix: prefix.to_string(),
                status: status.as_u16(),
            });
        }

        // Read the body (a stalled body also ends in a timeout)
        let body = response
            .text()
            .await
            .map_err(|e| ProbeError::from_reqwest(prefix, e))?;

        // Decode into the wire shape; missing or null fields become empty/0
        let decoded: AutocompleteResponse =
            serde_json::from_str(&body).map_err(|e| ProbeError::Decode {
                prefix: prefix.to_string(),
                reason: e.to_string(),
            })?;

        Ok(decoded.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_decode_as_empty() {
        let decoded: AutocompleteResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(decoded, AutocompleteResponse::default());

        let result = ProbeResult::from(
            serde_json::from_str::<AutocompleteResponse>(r#"{"version": "v1", "count": 3}"#)
                .unwrap(),
        );
        assert!(result.items.is_empty());
        assert_eq!(result.reported_count, 3);
    }

    #[test]
    fn test_null_fields_keep_the_rest_of_the_answer() {
        // A null list must not hide a saturated count
        let decoded: AutocompleteResponse =
            serde_json::from_str(r#"{"count": 10, "results": null}"#).unwrap();
        let result = ProbeResult::from(decoded);
        assert!(result.items.is_empty());
        assert_eq!(result.reported_count, 10);

        let decoded: AutocompleteResponse =
            serde_json::from_str(r#"{"count": null, "results": ["ant"]}"#).unwrap();
        let result = ProbeResult::from(decoded);
        assert_eq!(result.items, vec!["ant"]);
        assert_eq!(result.reported_count, 0);
    }

    #[test]
    fn test_response_converts_to_probe_result() {
        let decoded: AutocompleteResponse =
            serde_json::from_str(r#"{"count": 2, "results": ["ant", "app"]}"#).unwrap();
        let result = ProbeResult::from(decoded);
        assert_eq!(result.items, vec!["ant", "app"]);
        assert_eq!(result.reported_count, 2);
    }

    #[test]
    fn test_url_is_plain_concatenation() {
        let config = ExtractorConfig::with_base_url("http://localhost:8000/v2/autocomplete?query=");
        let client = HttpQueryClient::new(&config).unwrap();
        assert_eq!(
            client.url_for("abc"),
            "http://localhost:8000/v2/autocomplete?query=abc"
        );
    }
}
