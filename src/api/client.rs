//! NHL API client implementation.
//!
//! The [`NhlApiClient`] resolves a base URL from an [`ApiFamily`], appends the
//! endpoint and query parameters, and returns the JSON body untouched.
//!
//! # Example
//!
//! ```rust,ignore
//! use nhl_api::api::{ApiFamily, NhlApiClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = NhlApiClient::new()?;
//!
//!     let roster = client
//!         .fetch_with_params(ApiFamily::Web, "roster/NYR/current", &[("lang", "en")])
//!         .await?;
//!     println!("{}", roster["forwards"]);
//!
//!     let skaters = client.fetch(ApiFamily::Stats, "skater/summary").await?;
//!     println!("{} rows", skaters["data"].as_array().map_or(0, |d| d.len()));
//!
//!     Ok(())
//! }
//! ```

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT};
use reqwest::{Client, Url};
use serde::Serialize;
use serde_json::Value;

use crate::api::error::{ApiError, ApiResult};
use crate::api::family::ApiFamily;
use crate::network::{DEFAULT_LANGUAGE, DEFAULT_VERSION, STATS_API_URL, WEB_API_URL};

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Builder for configuring [`NhlApiClient`].
#[derive(Debug, Clone)]
pub struct NhlApiClientBuilder {
    version: String,
    language: String,
    verify_tls: bool,
    timeout: Duration,
    stats_url: String,
    web_url: String,
    default_headers: Vec<(String, String)>,
}

impl Default for NhlApiClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl NhlApiClientBuilder {
    /// Create a new builder with the public NHL hosts and default settings.
    pub fn new() -> Self {
        Self {
            version: DEFAULT_VERSION.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            verify_tls: true,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            stats_url: STATS_API_URL.to_string(),
            web_url: WEB_API_URL.to_string(),
            default_headers: Vec::new(),
        }
    }

    /// Set the web API version (default `v1`).
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Set the stats API language (default `en`).
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Enable or disable TLS certificate verification (default enabled).
    ///
    /// Only affects this client's transport.
    pub fn verify_tls(mut self, verify: bool) -> Self {
        self.verify_tls = verify;
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the timeout in seconds.
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = Duration::from_secs(secs);
        self
    }

    /// Override the stats API root (language is still appended).
    pub fn stats_url(mut self, url: impl Into<String>) -> Self {
        self.stats_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Override the web API root (version is still appended).
    pub fn web_url(mut self, url: impl Into<String>) -> Self {
        self.web_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Add a default header to all requests.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.push((name.into(), value.into()));
        self
    }

    /// Build the client.
    pub fn build(self) -> ApiResult<NhlApiClient> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        for (name, value) in &self.default_headers {
            let header_name = HeaderName::try_from(name.as_str()).map_err(|e| {
                ApiError::InvalidParameter(format!("Invalid header name '{}': {}", name, e))
            })?;
            let header_value = HeaderValue::from_str(value).map_err(|e| {
                ApiError::InvalidParameter(format!("Invalid header value for '{}': {}", name, e))
            })?;
            headers.insert(header_name, header_value);
        }

        let mut builder = Client::builder()
            .timeout(self.timeout)
            .pool_max_idle_per_host(10)
            .default_headers(headers);

        if !self.verify_tls {
            tracing::warn!("TLS certificate verification is disabled for this client");
            builder = builder.danger_accept_invalid_certs(true);
        }

        let http_client = builder.build().map_err(ApiError::ClientInit)?;

        Ok(NhlApiClient {
            http_client,
            version: self.version,
            language: self.language,
            verify_tls: self.verify_tls,
            timeout: self.timeout,
            stats_url: self.stats_url,
            web_url: self.web_url,
        })
    }
}

/// NHL API client.
///
/// Configuration is fixed at construction. Clones share one connection pool.
#[derive(Debug, Clone)]
pub struct NhlApiClient {
    http_client: Client,
    version: String,
    language: String,
    verify_tls: bool,
    timeout: Duration,
    stats_url: String,
    web_url: String,
}

impl NhlApiClient {
    /// Create a client with default settings (`v1`, `en`, TLS verified, 30s timeout).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new() -> ApiResult<Self> {
        NhlApiClientBuilder::new().build()
    }

    /// Create a new client builder for custom configuration.
    pub fn builder() -> NhlApiClientBuilder {
        NhlApiClientBuilder::new()
    }

    /// Web API version.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Stats API language.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Whether TLS certificates are verified.
    pub fn verifies_tls(&self) -> bool {
        self.verify_tls
    }

    /// Request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Resolve the base URL for a family.
    pub fn base_url(&self, family: ApiFamily) -> String {
        match family {
            ApiFamily::Stats => format!("{}/{}", self.stats_url, self.language),
            ApiFamily::Web => format!("{}/{}", self.web_url, self.version),
        }
    }

    /// Full URL for an endpoint without extra query parameters.
    ///
    /// The URL is `{base_url}/{endpoint}`. One leading `/` on `endpoint` is
    /// dropped, so `"/players"` and `"players"` resolve to the same URL
    /// instead of producing a double slash.
    pub fn endpoint_url(&self, family: ApiFamily, endpoint: &str) -> ApiResult<Url> {
        let endpoint = endpoint.strip_prefix('/').unwrap_or(endpoint);
        let raw = format!("{}/{}", self.base_url(family), endpoint);
        Url::parse(&raw)
            .map_err(|e| ApiError::InvalidParameter(format!("Invalid URL '{}': {}", raw, e)))
    }

    /// Full URL for an endpoint with form-encoded query parameters.
    ///
    /// `params` must serialize as a flat sequence of key/value pairs, e.g.
    /// `&[("team", "NYR")]` or a `HashMap<String, String>`. Parameters are
    /// appended after any query already present in `endpoint`.
    pub fn request_url<P: Serialize + ?Sized>(
        &self,
        family: ApiFamily,
        endpoint: &str,
        params: &P,
    ) -> ApiResult<Url> {
        let mut url = self.endpoint_url(family, endpoint)?;
        let query = serde_urlencoded::to_string(params)
            .map_err(|e| ApiError::InvalidParameter(format!("Invalid query parameters: {}", e)))?;

        if !query.is_empty() {
            let merged = match url.query() {
                Some(existing) if !existing.is_empty() => format!("{}&{}", existing, query),
                _ => query,
            };
            url.set_query(Some(&merged));
        }

        Ok(url)
    }

    /// GET an endpoint and return the decoded JSON body.
    pub async fn fetch(&self, family: ApiFamily, endpoint: &str) -> ApiResult<Value> {
        let url = self.endpoint_url(family, endpoint)?;
        self.get(family, url).await
    }

    /// GET an endpoint with query parameters and return the decoded JSON body.
    pub async fn fetch_with_params<P: Serialize + ?Sized>(
        &self,
        family: ApiFamily,
        endpoint: &str,
        params: &P,
    ) -> ApiResult<Value> {
        let url = self.request_url(family, endpoint, params)?;
        self.get(family, url).await
    }

    // =========================================================================
    // Internal helpers
    // =========================================================================

    async fn get(&self, family: ApiFamily, url: Url) -> ApiResult<Value> {
        tracing::debug!(%family, %url, "Sending request");

        let response = self
            .http_client
            .get(url.clone())
            .send()
            .await
            .map_err(ApiError::RequestFailed)?;

        let status = response.status();
        tracing::debug!(%family, %url, status = status.as_u16(), "Received response");

        if status.is_success() {
            return response.json::<Value>().await.map_err(|e| {
                ApiError::Deserialize(format!("Failed to deserialize response: {}", e))
            });
        }

        let body = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("Failed to read error response body: {}", e);
                String::new()
            }
        };

        tracing::warn!(%family, %url, status = status.as_u16(), "Unsuccessful response");

        Err(ApiError::UnsuccessfulResponse {
            status: status.as_u16(),
            body,
        })
    }
}
