//! GBFS HTTP client.
//!
//! Resolves feed URLs through the discovery document and fetches individual
//! feed snapshots. Deliberately stateless: no caching and no retries, every
//! call re-fetches. Call volume is interactive, so freshness beats latency.

use serde::de::DeserializeOwned;

use super::error::GbfsError;
use super::types::Discovery;

/// Default discovery endpoint for the Bay Wheels network.
const DEFAULT_DISCOVERY_URL: &str = "https://gbfs.baywheels.com/gbfs/2.3/gbfs.json";

/// Default locale key into the discovery document.
const DEFAULT_LOCALE: &str = "en";

/// Feed name for static station metadata.
pub const STATION_INFORMATION: &str = "station_information";

/// Feed name for live station status.
pub const STATION_STATUS: &str = "station_status";

/// Feed name for free-floating bike status.
pub const FREE_BIKE_STATUS: &str = "free_bike_status";

/// Configuration for the GBFS client.
#[derive(Debug, Clone)]
pub struct GbfsConfig {
    /// Discovery document URL
    pub discovery_url: String,
    /// Locale key to read the feed list from
    pub locale: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for GbfsConfig {
    fn default() -> Self {
        Self {
            discovery_url: DEFAULT_DISCOVERY_URL.to_string(),
            locale: DEFAULT_LOCALE.to_string(),
            timeout_secs: 30,
        }
    }
}

impl GbfsConfig {
    /// Set a custom discovery URL (for testing, or another GBFS network).
    pub fn with_discovery_url(mut self, url: impl Into<String>) -> Self {
        self.discovery_url = url.into();
        self
    }

    /// Set the locale key.
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Client for the GBFS feeds.
///
/// Holds the one pooled HTTP client for the process; concurrent queries
/// share it through `Arc<GbfsClient>`.
#[derive(Debug, Clone)]
pub struct GbfsClient {
    http: reqwest::Client,
    discovery_url: String,
    locale: String,
}

impl GbfsClient {
    /// Create a new GBFS client with the given configuration.
    pub fn new(config: GbfsConfig) -> Result<Self, GbfsError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            discovery_url: config.discovery_url,
            locale: config.locale,
        })
    }

    /// Resolve a feed name to its URL via the discovery document.
    ///
    /// Scans the configured locale's feed list for an exact name match and
    /// returns the first match's URL. Re-fetches discovery on every call.
    pub async fn resolve_feed(&self, feed_name: &str) -> Result<String, GbfsError> {
        let discovery: Discovery = self.fetch_feed(&self.discovery_url).await?;

        discovery
            .data
            .get(&self.locale)
            .and_then(|lang| lang.feeds.iter().find(|f| f.name == feed_name))
            .map(|f| f.url.clone())
            .ok_or_else(|| GbfsError::FeedNotFound(feed_name.to_string()))
    }

    /// Fetch a feed document and deserialize it.
    pub async fn fetch_feed<T: DeserializeOwned>(&self, url: &str) -> Result<T, GbfsError> {
        tracing::debug!(%url, "fetching GBFS document");

        let response = self.http.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GbfsError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| GbfsError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = GbfsConfig::default();

        assert_eq!(config.discovery_url, DEFAULT_DISCOVERY_URL);
        assert_eq!(config.locale, "en");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn config_builder() {
        let config = GbfsConfig::default()
            .with_discovery_url("http://localhost:8080/gbfs.json")
            .with_locale("fr")
            .with_timeout(5);

        assert_eq!(config.discovery_url, "http://localhost:8080/gbfs.json");
        assert_eq!(config.locale, "fr");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn client_creation() {
        let client = GbfsClient::new(GbfsConfig::default());
        assert!(client.is_ok());
    }

    // Integration tests against a live discovery endpoint would make real
    // HTTP requests; they belong behind #[ignore] and are not included here.
}
